//! Error handling for KerfKit
//!
//! Pattern layout and motif rendering are total functions and never fail.
//! Errors only arise at the edges: writing exported files and driver glue.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Export error type
///
/// Represents failures while serializing a pattern to a vector file.
#[derive(Error, Debug, Clone)]
pub enum ExportError {
    /// The output directory does not exist or is not a directory
    #[error("Output directory not found: {path}")]
    DirectoryNotFound {
        /// The directory that was requested.
        path: String,
    },
}

/// Main error type for KerfKit
///
/// A unified error type used by the public APIs that touch the filesystem.
#[derive(Error, Debug)]
pub enum Error {
    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an export error
    pub fn is_export_error(&self) -> bool {
        matches!(self, Error::Export(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_export_error_display() {
        let err = ExportError::DirectoryNotFound {
            path: "/nowhere".to_string(),
        };
        assert_eq!(err.to_string(), "Output directory not found: /nowhere");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = ExportError::DirectoryNotFound {
            path: "out".to_string(),
        }
        .into();
        assert!(err.is_export_error());

        let err: Error = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_export_error());
    }

    #[test]
    fn test_other_error() {
        let err = Error::other("something broke");
        assert_eq!(err.to_string(), "something broke");
    }
}
