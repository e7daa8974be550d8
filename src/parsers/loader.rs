//! Loading raw PNOV text from disk or stdin.
//!
//! Loading is the only fallible step before the pure core. Failures never
//! escape as errors; they turn into [`LoadOutcome::Fallback`] with an empty
//! dataset so the report still renders (with a total of zero).

use super::parse_pnov_str;
use crate::error::{ErrorContext, LoadErrorKind, PnovError, Result};
use crate::model::Dataset;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Maximum input size (64 MB). The whole export is held in memory.
pub const MAX_INPUT_SIZE: u64 = 64 * 1024 * 1024;

/// Where raw PNOV text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// A CSV file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl LoadSource {
    /// Interpret a CLI argument: `-` means stdin.
    #[must_use]
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }
}

impl fmt::Display for LoadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Result of loading a PNOV export.
///
/// Both variants carry a dataset; `Fallback` always carries an empty one and
/// the reason the source could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The source was read and parsed (possibly into zero records)
    Loaded(Dataset),
    /// The source could not be read; the dataset is empty
    Fallback { dataset: Dataset, reason: String },
}

impl LoadOutcome {
    /// Build a fallback outcome with an empty dataset.
    #[must_use]
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self::Fallback {
            dataset: Dataset::empty(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        match self {
            Self::Loaded(dataset) | Self::Fallback { dataset, .. } => dataset,
        }
    }

    #[must_use]
    pub fn into_dataset(self) -> Dataset {
        match self {
            Self::Loaded(dataset) | Self::Fallback { dataset, .. } => dataset,
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Reason for the fallback, if any.
    #[must_use]
    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }

    /// Short status label used in report metadata.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "loaded",
            Self::Fallback { .. } => "fallback",
        }
    }
}

/// Load and parse a PNOV export, degrading to an empty dataset on failure.
#[must_use]
pub fn load_pnov(source: &LoadSource) -> LoadOutcome {
    match read_source(source) {
        Ok(text) => LoadOutcome::Loaded(parse_pnov_str(&text)),
        Err(e) => {
            let reason = describe_error(&e);
            tracing::warn!("Falling back to an empty dataset for {}: {}", source, reason);
            LoadOutcome::fallback(reason)
        }
    }
}

/// Flatten an error and its sources into one line.
fn describe_error(err: &PnovError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

/// Read the raw text of a source, enforcing [`MAX_INPUT_SIZE`].
pub fn read_source(source: &LoadSource) -> Result<String> {
    match source {
        LoadSource::File(path) => read_file(path),
        LoadSource::Stdin => {
            read_limited(std::io::stdin().lock()).context("reading PNOV data from stdin")
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PnovError::not_found(path.display().to_string())
        } else {
            PnovError::io(path, e)
        }
    })?;

    if metadata.len() > MAX_INPUT_SIZE {
        return Err(PnovError::load(
            format!("at {}", path.display()),
            LoadErrorKind::TooLarge {
                size_mb: metadata.len() / (1024 * 1024),
                limit_mb: MAX_INPUT_SIZE / (1024 * 1024),
            },
        ));
    }

    let file = std::fs::File::open(path).map_err(|e| PnovError::io(path, e))?;
    read_limited(file).with_context(|| format!("reading {}", path.display()))
}

fn read_limited(reader: impl Read) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .take(MAX_INPUT_SIZE + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| PnovError::load("read", LoadErrorKind::Unreadable(e.to_string())))?;

    if bytes.len() as u64 > MAX_INPUT_SIZE {
        return Err(PnovError::load(
            "read",
            LoadErrorKind::TooLarge {
                size_mb: bytes.len() as u64 / (1024 * 1024),
                limit_mb: MAX_INPUT_SIZE / (1024 * 1024),
            },
        ));
    }

    String::from_utf8(bytes)
        .map_err(|e| PnovError::load("decode", LoadErrorKind::InvalidEncoding(e.to_string())))
}
