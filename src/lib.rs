//! Split a build file list into a class file list and a non-class file list.
//!
//! ```
//! use jarsplit::splitter::{EntryClassifier, EntryKind, LineClass};
//!
//! let classifier = EntryClassifier::new();
//! assert_eq!(classifier.classify_line("# comment"), LineClass::Skip);
//! assert_eq!(
//!     classifier.classify_line("  java/lang/Object.class "),
//!     LineClass::Entry(EntryKind::Class, "java/lang/Object.class".to_string())
//! );
//! ```

pub mod cli;
pub mod error;
pub mod splitter;
pub mod ui;

pub use error::{ExitStatus, Result, SplitError};
pub use splitter::{run, ClassificationResult, SplitPaths, Splitter};
