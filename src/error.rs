use std::path::PathBuf;
use thiserror::Error;

/// Process exit statuses reported by the splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Malformed command line
    Usage,
    /// I/O failure while reading the input list
    ReadError,
    /// I/O failure while creating or writing an output list
    WriteError,
    /// Input list missing or unreadable
    InputNotFound,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Usage => 1,
            ExitStatus::ReadError => 2,
            ExitStatus::WriteError => 3,
            ExitStatus::InputNotFound => 4,
        }
    }
}

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("{0}")]
    Usage(String),

    #[error("Can't find file \"{}\".", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SplitError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            SplitError::Usage(_) => ExitStatus::Usage,
            SplitError::InputNotFound { .. } => ExitStatus::InputNotFound,
            SplitError::Read { .. } => ExitStatus::ReadError,
            SplitError::Write { .. } => ExitStatus::WriteError,
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
