//! Configuration validation for pnov-bridge.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, BehaviorConfig, OutputConfig, PivotConfig, TemplateConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.pivot.validate());
        errors.extend(self.output.validate());
        errors.extend(self.template.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for PivotConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // An empty substring is contained in every driver name.
        if self.sentinel.is_empty() {
            errors.push(ConfigError::new(
                "pivot.sentinel",
                "Sentinel must not be empty",
            ));
        }

        if !self.high_value_threshold.is_finite() || self.high_value_threshold < 0.0 {
            errors.push(ConfigError::new(
                "pivot.high_value_threshold",
                format!(
                    "Threshold must be a finite, non-negative amount, got {}",
                    self.high_value_threshold
                ),
            ));
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }

        errors
    }
}

impl Validatable for TemplateConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.station.trim().is_empty() {
            vec![ConfigError::new("template.station", "Station must not be empty")]
        } else {
            Vec::new()
        }
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}
