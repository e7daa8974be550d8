//! Unified error types for pnov-bridge.
//!
//! The parse → pivot → format core never fails; these errors belong to the
//! layers around it (loading input, writing reports, configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pnov-bridge operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PnovError {
    /// Errors while loading raw CSV text
    #[error("Failed to load PNOV data: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Input not found: {0}")]
    NotFound(String),

    #[error("Input is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("Input is {size_mb} MB, exceeding the {limit_mb} MB in-memory limit")]
    TooLarge { size_mb: u64, limit_mb: u64 },

    #[error("Read failed: {0}")]
    Unreadable(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

/// Convenient Result type for pnov-bridge operations
pub type Result<T> = std::result::Result<T, PnovError>;

impl PnovError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create a load error for a missing input file
    pub fn not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::load(format!("at {path}"), LoadErrorKind::NotFound(path))
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for PnovError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PnovError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(
            "JSON serialization",
            ReportErrorKind::JsonSerializationError(err.to_string()),
        )
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings chain outward, so an error raised deep in the loader and
/// annotated twice reads `"outer: middle: base"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<PnovError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: PnovError, new_ctx: &str) -> PnovError {
    match err {
        PnovError::Load {
            context: existing,
            source,
        } => PnovError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PnovError::Report {
            context: existing,
            source,
        } => PnovError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PnovError::Io {
            path,
            message,
            source,
        } => PnovError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        PnovError::Config(msg) => PnovError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Returns `"new: existing"`, or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
