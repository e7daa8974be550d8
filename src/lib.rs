//! **Bridge reports for PNOV (missing package) exports.**
//!
//! `pnov-bridge` reads the CSV export of packages flagged missing, pivots it
//! into the tables a station reviews in its daily bridge, and renders them as
//! plain text ready to paste, as a templated root-cause report, or as JSON.
//!
//! ## Core Concepts & Modules
//!
//! - **[`parsers`]**: splits CSV lines and maps rows onto [`PnovRecord`]s.
//!   Loading a file never fails upward; an unreadable input becomes an empty
//!   [`Dataset`] wrapped in [`LoadOutcome::Fallback`].
//! - **[`pivot`]**: pure aggregators producing [`PivotTables`]: counts per
//!   DSP, repeat DAs, high-value packages and the copy/paste lists.
//! - **[`reports`]**: the [`ReportGenerator`] implementations (bridge text,
//!   full template, JSON) and a reader that splits bridge text back into
//!   sections.
//! - **[`pipeline`]**: load → pivot → report orchestration shared by the CLI.
//! - **[`config`]**: YAML configuration with discovery, merging and validation.
//!
//! ## Getting Started
//!
//! ```
//! use pnov_bridge::{generate_bridge_output, PivotConfig};
//!
//! let csv = "Tracking ID,Status,Reason,DA,DSP,Route,Attempt,Cost\n\
//!            TBA1,Missing,Lost,Dana,FastCo,R1,2024-01-01,75.50\n\
//!            TBA2,Missing,Lost,Dana,FastCo,R2,2024-01-01,10\n";
//!
//! let text = generate_bridge_output(csv, &PivotConfig::default());
//! assert!(text.contains("| FastCo | 2 |"));
//! assert!(text.contains("| Dana | TBA1 | $75.50 |"));
//! assert!(text.contains("Current PNOV Total: 2"));
//! ```
//!
//! Loading from disk with the degraded-result contract:
//!
//! ```no_run
//! use pnov_bridge::{load_pnov, LoadSource, PivotConfig, PivotTables};
//!
//! let outcome = load_pnov(&LoadSource::File("pnov.csv".into()));
//! if let Some(reason) = outcome.fallback_reason() {
//!     eprintln!("using an empty dataset: {reason}");
//! }
//! let tables = PivotTables::compute(outcome.dataset(), &PivotConfig::default());
//! println!("{} records", tables.total);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Record counts are far below f64 precision limits
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod pivot;
pub mod reports;
pub mod template;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigOverrides, PivotConfig, ReportRunConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, PnovError, Result};
pub use model::{Dataset, PnovRecord};
pub use parsers::{load_pnov, parse_pnov_str, split_csv_line, LoadOutcome, LoadSource};
pub use pipeline::generate_bridge_output;
pub use pivot::PivotTables;
pub use reports::{create_reporter, read_sections, ReportFormat, ReportGenerator};
pub use template::{FormSubmission, Template};
