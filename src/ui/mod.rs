use colored::*;
use std::io::{self, Write};

/// Print a diagnostic to stderr with a red `error:` prefix.
pub fn print_error(message: &str) {
    let _ = write_error(&mut io::stderr(), message);
}

pub fn write_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "error:".red().bold(), message)
}
