//! # Parse Options
//!
//! Knobs that govern how schemas decode and encode. Options can be built
//! in code, deserialized from a YAML or JSON document, or read from the
//! environment.
//!
//! Variables:
//! - `FORMWISE_ERRORS`: `first` | `all` (default: `all`)
//! - `FORMWISE_EXCESS_PROPERTY`: `ignore` | `error` | `preserve` (default: `ignore`)

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FormwiseError};

/// How many issues a failing decode reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorReporting {
    /// Stop at the first failing property.
    First,
    /// Visit every property and report all failures.
    #[default]
    All,
}

/// What a struct schema does with keys it does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcessProperty {
    /// Drop undeclared keys silently.
    #[default]
    Ignore,
    /// Report each undeclared key as an `Unexpected` issue.
    Error,
    /// Carry undeclared keys through to the output unchanged.
    Preserve,
}

/// Options passed to every decode and encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Issue reporting mode.
    pub errors: ErrorReporting,
    /// Handling of undeclared struct keys.
    pub on_excess_property: ExcessProperty,
}

impl ParseOptions {
    /// Report only the first failure.
    pub fn first_error(mut self) -> Self {
        self.errors = ErrorReporting::First;
        self
    }

    /// Report every failure.
    pub fn all_errors(mut self) -> Self {
        self.errors = ErrorReporting::All;
        self
    }

    /// Set the excess property policy.
    pub fn on_excess_property(mut self, policy: ExcessProperty) -> Self {
        self.on_excess_property = policy;
        self
    }

    /// Returns true when decoding should stop at the first failure.
    pub fn stop_at_first(&self) -> bool {
        self.errors == ErrorReporting::First
    }

    /// Parse options from a YAML document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FormwiseError::Config`] wrapping the `serde_yaml` error.
    pub fn from_yaml(text: &str) -> Result<Self, FormwiseError> {
        let options = serde_yaml::from_str(text).map_err(ConfigError::Yaml)?;
        Ok(options)
    }

    /// Parse options from a JSON document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FormwiseError::Serialization`] carrying the `serde_json`
    /// error.
    pub fn from_json(text: &str) -> Result<Self, FormwiseError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load options from environment variables, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`FormwiseError::Config`] naming the first variable that
    /// holds an unknown value.
    pub fn from_env() -> Result<Self, FormwiseError> {
        Ok(Self::from_lookup(|var| std::env::var(var).ok())?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut options = Self::default();
        if let Some(raw) = lookup("FORMWISE_ERRORS") {
            options.errors = match raw.trim().to_ascii_lowercase().as_str() {
                "first" => ErrorReporting::First,
                "all" => ErrorReporting::All,
                _ => return Err(invalid("FORMWISE_ERRORS", raw)),
            };
        }
        if let Some(raw) = lookup("FORMWISE_EXCESS_PROPERTY") {
            options.on_excess_property = match raw.trim().to_ascii_lowercase().as_str() {
                "ignore" => ExcessProperty::Ignore,
                "error" => ExcessProperty::Error,
                "preserve" => ExcessProperty::Preserve,
                _ => return Err(invalid("FORMWISE_EXCESS_PROPERTY", raw)),
            };
        }
        Ok(options)
    }
}

fn invalid(var: &str, value: String) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        value,
    }
}
