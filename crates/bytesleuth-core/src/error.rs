/// Error types for input resolution and report output.
///
/// The analysis engine itself never fails; only the I/O at either end can.
use std::path::PathBuf;
use thiserror::Error;

/// A requested path could not be turned into analysable bytes.
///
/// Reported per path; other paths in the same batch are still processed.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("'{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a valid file", .0.display())]
    NotAFile(PathBuf),

    #[error("'{}' is not a valid directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("directory '{}' does not contain any files", .0.display())]
    EmptyDirectory(PathBuf),

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no files selected")]
    NoneSelected,
}

impl InputError {
    /// The path this error concerns, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotFound(p)
            | Self::NotAFile(p)
            | Self::NotADirectory(p)
            | Self::EmptyDirectory(p)
            | Self::Read { path: p, .. } => Some(p),
            Self::NoneSelected => None,
        }
    }
}

/// The CSV export could not be written (or read back).
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot create '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error writing report: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
