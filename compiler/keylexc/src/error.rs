//! CLI errors.

use std::path::PathBuf;

use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot find file '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("permission denied reading '{}'", .0.display())]
    PermissionDenied(PathBuf),
    #[error("'{}' contains invalid UTF-8 data", .0.display())]
    InvalidUtf8(PathBuf),
    #[error("'{}' is too large to highlight ({len} bytes)", .path.display())]
    TooLarge { path: PathBuf, len: usize },
    #[error("error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Classify an I/O failure for `path`.
    pub fn from_io(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CliError::NotFound(path),
            std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied(path),
            std::io::ErrorKind::InvalidData => CliError::InvalidUtf8(path),
            _ => CliError::Io { path, source: err },
        }
    }

    /// Whether the error is a usage mistake rather than a failed file.
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::Usage(_))
    }
}
