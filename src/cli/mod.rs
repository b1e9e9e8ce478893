use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::info;
use std::ffi::OsString;
use std::path::PathBuf;
use crate::error::{ExitStatus, SplitError};
use crate::splitter::{self, SplitPaths};
use crate::ui;

const OUTPUT_FLAG: &str = "-o";

#[derive(Parser, Debug)]
#[command(name = "jarsplit")]
#[command(version, about = "Split a file list into class file and non-class file lists", long_about = None)]
#[command(override_usage = "jarsplit <INPUT> -o <CLASS_LIST> <NON_CLASS_LIST>")]
pub struct Args {
    /// File list to split, one path per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Class file list and non-class file list to write
    #[arg(
        short = 'o',
        num_args = 2,
        required = true,
        allow_hyphen_values = true,
        value_names = ["CLASS_LIST", "NON_CLASS_LIST"]
    )]
    pub output: Vec<PathBuf>,
}

pub fn usage() -> String {
    format!(
        "{}\n\
         Takes a class list generated by a jar reordering tool (or any other file list)\n\
         and writes two files: the class file list and the non-class file list.\n\
         Example: jarsplit classlist -o classlist nonClasslist",
        Args::command().render_usage()
    )
}

/// The command line must be exactly `<input> -o <class list> <non-class list>`.
/// Paths are taken as given, so file names starting with `-` are fine.
pub fn parse_layout(tokens: &[OsString]) -> Result<SplitPaths, SplitError> {
    if tokens.len() != 4 {
        return Err(SplitError::Usage(format!(
            "expected 4 arguments, got {}",
            tokens.len()
        )));
    }

    if tokens[1] != OUTPUT_FLAG {
        return Err(SplitError::Usage(format!(
            "expected '{}' as the second argument, got '{}'",
            OUTPUT_FLAG,
            tokens[1].to_string_lossy()
        )));
    }

    Ok(SplitPaths::new(&tokens[0], &tokens[2], &tokens[3]))
}

fn is_info_flag(token: &OsString) -> bool {
    matches!(
        token.to_str(),
        Some("-h") | Some("--help") | Some("-V") | Some("--version")
    )
}

/// Parse `argv` (program name first), split, and report the outcome as an
/// exit status. Diagnostics go to stderr; nothing is printed on success.
pub fn run<I, T>(argv: I) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let tokens = argv.get(1..).unwrap_or_default();

    if tokens.len() == 1 && is_info_flag(&tokens[0]) {
        return match Args::try_parse_from(&argv) {
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                let _ = e.print();
                ExitStatus::Success
            }
            _ => usage_error(&SplitError::Usage("unexpected arguments".to_string())),
        };
    }

    let paths = match parse_layout(tokens) {
        Ok(paths) => paths,
        Err(e) => return usage_error(&e),
    };

    match splitter::run(&paths) {
        Ok(result) => {
            info!(
                "Split {}: {} class entries, {} other entries",
                paths.input.display(),
                result.class_entries.len(),
                result.other_entries.len()
            );
            ExitStatus::Success
        }
        Err(e) => {
            ui::print_error(&e.to_string());
            e.exit_status()
        }
    }
}

fn usage_error(err: &SplitError) -> ExitStatus {
    ui::print_error(&err.to_string());
    eprintln!("{}", usage());
    err.exit_status()
}
