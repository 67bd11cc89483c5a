//! Shared error types for wheel inspection.
//!
//! Only two conditions are fatal: a malformed compatibility tag or wheel
//! filename, and an archive that cannot be opened or read. Everything else
//! the classifier meets (stray files, unparseable `__init__.py` sources) is
//! absorbed where it happens and never surfaces here.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wheeldex operations
#[derive(Debug, Error)]
pub enum Error {
    /// A tag or wheel filename did not split into the expected fields
    #[error("Format error: {message}: {value:?}")]
    Format { message: String, value: String },

    /// The archive could not be opened, or one of its members could not be read
    #[error("Archive read error: {message} ({})", .path.display())]
    ArchiveRead {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a format error naming the offending value
    pub fn format(message: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
            value: value.into(),
        }
    }

    /// Create an archive read error without an underlying cause
    pub fn archive_read(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::ArchiveRead {
            message: message.into(),
            path: path.into(),
            source: None,
        }
    }

    /// Create an archive read error wrapping the underlying cause
    pub fn archive_read_with_source(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ArchiveRead {
            message: message.into(),
            path: path.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error came from tag or filename parsing
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
