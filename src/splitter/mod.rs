pub mod classifier;
pub mod list_file;

pub use classifier::{EntryClassifier, EntryKind, LineClass, SplitRules};
pub use list_file::{classify_lines, read_entries, write_list};

use std::path::PathBuf;
use log::debug;
use crate::error::Result;

/// Class and non-class entries in input order, plus the number of
/// blank/comment lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub class_entries: Vec<String>,
    pub other_entries: Vec<String>,
    pub skipped: usize,
}

impl ClassificationResult {
    pub fn push(&mut self, kind: EntryKind, entry: String) {
        match kind {
            EntryKind::Class => self.class_entries.push(entry),
            EntryKind::Other => self.other_entries.push(entry),
        }
    }

    pub fn total_lines(&self) -> usize {
        self.class_entries.len() + self.other_entries.len() + self.skipped
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPaths {
    pub input: PathBuf,
    pub class_output: PathBuf,
    pub other_output: PathBuf,
}

impl SplitPaths {
    pub fn new(input: impl Into<PathBuf>, class_output: impl Into<PathBuf>, other_output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            class_output: class_output.into(),
            other_output: other_output.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Splitter {
    classifier: EntryClassifier,
}

impl Splitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: SplitRules) -> Self {
        Self {
            classifier: EntryClassifier::with_rules(rules),
        }
    }

    /// Read the input list, then write the class list followed by the
    /// non-class list.
    ///
    /// Nothing is written if reading fails. If the second write fails the
    /// first output is left in place.
    pub fn run(&self, paths: &SplitPaths) -> Result<ClassificationResult> {
        debug!("Splitting {}", paths.input.display());

        let result = read_entries(&paths.input, &self.classifier)?;

        write_list(&paths.class_output, &result.class_entries)?;
        write_list(&paths.other_output, &result.other_entries)?;

        Ok(result)
    }
}

/// Split with the default `.class` / `#` rules.
pub fn run(paths: &SplitPaths) -> Result<ClassificationResult> {
    Splitter::new().run(paths)
}
