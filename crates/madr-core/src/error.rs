//! Error types for MADR extraction.
//!
//! Extraction is permissive: a missing title is the only way a
//! parse can fail. Every other gap in a document degrades to an empty string
//! or an absent field. The remaining variants cover configuration loading.

use std::path::{Path, PathBuf};

/// Result type alias for MADR operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the MADR crates.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The document has no level-1 heading.
    #[error("MADR title (level-1 heading) not found")]
    MissingTitle,

    /// Label table or configuration file is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Structured content (e.g. frontmatter) could not be deserialized.
    #[error("Parse error: {message}")]
    Parse {
        /// What failed to parse
        message: String,
    },

    /// I/O error while reading a file.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns whether this error means the document has no title.
    pub fn is_missing_title(&self) -> bool {
        matches!(self, Error::MissingTitle)
    }
}
