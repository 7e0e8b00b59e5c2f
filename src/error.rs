//! Error types for linestore
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// All error types that can occur in linestore
#[derive(Debug, Error)]
pub enum LineStoreError {
    /// Read path does not resolve to an existing file
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Open/read/write/close failure on a specific file
    #[error("IO error on {}: {source}", path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be parsed by a decoder
    #[error("Decode error: {0}")]
    Decode(String),

    /// Saving would overwrite lines the last load could not parse
    #[error("Refusing to overwrite {}: {count} unparsed line(s) would be lost", path.display())]
    WouldDropLines { path: PathBuf, count: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LineStoreError {
    /// Classify an I/O error raised while touching `path`.
    ///
    /// `NotFound` maps to [`LineStoreError::FileNotFound`], everything else to
    /// [`LineStoreError::FileIo`].
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            LineStoreError::FileNotFound(path)
        } else {
            LineStoreError::FileIo { path, source }
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        LineStoreError::Decode(message.into())
    }
}

/// Result type alias for linestore operations
pub type Result<T> = std::result::Result<T, LineStoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_file_not_found_error() {
        let err = LineStoreError::FileNotFound(PathBuf::from("/tmp/missing.txt"));
        assert_eq!(err.to_string(), "File not found: /tmp/missing.txt");
    }

    #[test]
    fn test_decode_error() {
        let err = LineStoreError::decode("invalid digit");
        assert_eq!(err.to_string(), "Decode error: invalid digit");
    }

    #[test]
    fn test_would_drop_lines_error() {
        let err = LineStoreError::WouldDropLines {
            path: PathBuf::from("records.txt"),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "Refusing to overwrite records.txt: 2 unparsed line(s) would be lost"
        );
    }

    #[test]
    fn test_from_io_not_found() {
        let err = LineStoreError::from_io("a.txt", Error::new(ErrorKind::NotFound, "gone"));
        assert!(matches!(err, LineStoreError::FileNotFound(p) if p == PathBuf::from("a.txt")));
    }

    #[test]
    fn test_from_io_other() {
        let err = LineStoreError::from_io("a.txt", Error::new(ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(err, LineStoreError::FileIo { .. }));
        assert!(err.to_string().contains("a.txt"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = Error::new(ErrorKind::Other, "disk on fire");
        let err: LineStoreError = io_err.into();
        assert!(matches!(err, LineStoreError::Io(_)));
        assert!(err.to_string().contains("disk on fire"));
    }
}
