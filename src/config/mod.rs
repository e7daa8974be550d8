//! Configuration for pnov-bridge.
//!
//! This module provides:
//! - Typed configuration structures with defaults
//! - Validation for configuration values
//! - YAML config file loading and discovery
//! - CLI argument overrides
//!
//! # Configuration File
//!
//! Place a `.pnov-bridge.yaml` file in your working directory or
//! `~/.config/pnov-bridge/`:
//!
//! ```yaml
//! pivot:
//!   sentinel: SNOWPlatform
//!   high_value_threshold: 50
//! template:
//!   station: DMD6
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_HIGH_VALUE_THRESHOLD, DEFAULT_SENTINEL, DEFAULT_STATION};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, ConfigOverrides, OutputConfig, PivotConfig,
    ReportRunConfig, TemplateConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, user_config_path, ConfigFileError, CONFIG_DIR_NAME, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.pnov-bridge.yaml`.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
