//! Casebook configuration, loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Tunable limits and policies for a [`Casebook`](crate::Casebook).
///
/// Every field has a default, so a TOML document only needs to name the
/// values it overrides:
///
/// ```toml
/// cold_case_after_days = 180
/// max_age = 120
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CasebookConfig {
    /// An unsolved case whose incident is older than this many days counts
    /// as a cold case.
    pub cold_case_after_days: i64,

    pub max_title_length: usize,
    pub max_name_length: usize,
    pub max_description_length: usize,

    /// Oldest accepted suspect age, inclusive.
    pub max_age: i32,
}

impl Default for CasebookConfig {
    fn default() -> Self {
        Self {
            cold_case_after_days: 365,
            max_title_length: 100,
            max_name_length: 50,
            max_description_length: 1000,
            max_age: 150,
        }
    }
}

impl CasebookConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded casebook config");
        Ok(config)
    }

    /// Reject limits that would make every write fail.
    pub fn validate(&self) -> Result<()> {
        if self.cold_case_after_days < 0 {
            return Err(Error::invalid("cold_case_after_days must not be negative"));
        }
        if self.max_title_length == 0
            || self.max_name_length == 0
            || self.max_description_length == 0
        {
            return Err(Error::invalid("text length limits must be positive"));
        }
        if self.max_age < 0 {
            return Err(Error::invalid("max_age must not be negative"));
        }
        Ok(())
    }
}
