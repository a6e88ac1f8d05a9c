//! Error type shared by the FAQ Desk crates.
//!
//! Only loading can fail: configuration, the FAQ data file, the options
//! file and content files read by the CLI. Rendering never returns an
//! [`AppError`]; it logs and degrades to empty output instead.

use std::fmt;
use std::io;
use std::path::Path;

use thiserror::Error;

/// What went wrong, independent of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A file named by the caller does not exist.
    NotFound,
    /// A value was rejected (unknown filter point, malformed options document).
    Validation,
    /// The configuration sources could not be merged or deserialized.
    Configuration,
    /// JSON could not be parsed into the expected shape.
    Serialization,
    /// A file exists but could not be read, or a store is unavailable.
    Storage,
}

impl ErrorKind {
    /// Returns the upper-case label used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "VALIDATION",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
            Self::Storage => "STORAGE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the loaders and the CLI commands.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// Category.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
    /// Underlying cause, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Builds an error without a cause.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Builds an error wrapping `source`.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Wraps a failed read of `path`; `what` names the file's role
    /// ("FAQ data", "options", "content").
    ///
    /// A missing file maps to [`ErrorKind::NotFound`], anything else to
    /// [`ErrorKind::Storage`].
    pub fn read_failed(what: &str, path: &Path, err: io::Error) -> Self {
        let kind = io_kind(&err);
        Self::with_source(
            kind,
            format!("Failed to read {what} '{}'", path.display()),
            err,
        )
    }
}

fn io_kind(err: &io::Error) -> ErrorKind {
    match err.kind() {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        _ => ErrorKind::Storage,
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("Invalid JSON: {err}"),
            err,
        )
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        let kind = io_kind(&err);
        Self::with_source(kind, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
