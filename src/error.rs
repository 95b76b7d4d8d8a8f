// file: src/error.rs
// version: 1.0.0
// guid: 4689b31f-e7f5-400f-8b0e-48e28e37df24

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, UpdateError>;

/// Error types for the buildbot update step
#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("{0}")]
    Argument(#[from] clap::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot enter source directory {}: {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl UpdateError {
    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new path error for the given directory
    pub fn path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Path {
            path: path.into(),
            source,
        }
    }

    /// Create a new spawn error for the given program
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Create a new logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    /// Exit code the process should terminate with for this error.
    ///
    /// Help and version requests surface as clap errors too and map to 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Argument(e) => e.exit_code(),
            Self::InvalidArgument(_) => 2,
            Self::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound => 127,
            Self::Spawn { .. } => 126,
            Self::Path { .. } | Self::Io(_) | Self::Logging(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_path_error_is_fatal() {
        let err = UpdateError::path("/missing", Error::from(ErrorKind::NotFound));

        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("/missing"));
    }

    #[test]
    fn test_spawn_error_exit_codes() {
        let not_found = UpdateError::spawn("python3", Error::from(ErrorKind::NotFound));
        let denied = UpdateError::spawn("python3", Error::from(ErrorKind::PermissionDenied));

        assert_eq!(not_found.exit_code(), 127);
        assert_eq!(denied.exit_code(), 126);
    }

    #[test]
    fn test_invalid_argument_is_usage_error() {
        let err = UpdateError::invalid_argument("Unknown platform for builder foo");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Invalid argument: Unknown platform for builder foo");
    }
}
