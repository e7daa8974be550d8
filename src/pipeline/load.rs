//! Input loading stage.

use crate::parsers::{load_pnov, LoadOutcome, LoadSource};

/// Load a PNOV export, logging progress unless `quiet`.
///
/// Failures are carried in the returned [`LoadOutcome`], never as errors.
#[must_use]
pub fn load_dataset(source: &LoadSource, quiet: bool) -> LoadOutcome {
    if !quiet {
        tracing::info!("Loading PNOV data: {}", source);
    }

    let outcome = load_pnov(source);

    if !quiet {
        match &outcome {
            LoadOutcome::Loaded(dataset) => {
                tracing::info!("Parsed {} records", dataset.len());
            }
            LoadOutcome::Fallback { .. } => {
                tracing::info!("Continuing with an empty dataset");
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_dataset_from_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "h\nT1,Missing,R,Bob,DSP1,A-1,x,5\n").unwrap();

        let outcome = load_dataset(&LoadSource::File(tmp.path().to_path_buf()), true);
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.dataset().len(), 1);
    }

    #[test]
    fn test_load_dataset_missing_file_falls_back() {
        let source = LoadSource::File(PathBuf::from("/nonexistent/pnov.csv"));
        let outcome = load_dataset(&source, true);
        assert!(outcome.is_fallback());
        assert!(outcome.dataset().is_empty());
    }
}
