//! core::config
//!
//! Simulator configuration.
//!
//! # Format
//!
//! TOML, every field optional with a default:
//!
//! ```toml
//! program = "git"
//! default_branch = "main"
//!
//! [author]
//! name = "Practice User"
//! email = "practice@example.com"
//! ```
//!
//! # Validation
//!
//! Values are validated after parsing: the program name must be
//! non-empty and the default branch must be a valid branch name
//! (enforced by deserializing into [`BranchName`]).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::BranchName;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Author identity used for simulated commits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AuthorConfig {
    pub name: String,
    pub email: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: "Practice User".to_string(),
            email: "practice@example.com".to_string(),
        }
    }
}

/// Simulator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Program name the tokenizer expects as the first token.
    pub program: String,

    /// Branch created and checked out by `init`.
    pub default_branch: BranchName,

    /// Identity stamped on simulated commits.
    pub author: AuthorConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            default_branch: BranchName::new("main").expect("default branch name is valid"),
            author: AuthorConfig::default(),
        }
    }
}

impl SimulatorConfig {
    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or invalid field
    /// values, `ConfigError::InvalidValue` for values that parse but
    /// fail validation.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "program name cannot be empty".to_string(),
            ));
        }
        if self.program.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(
                "program name cannot contain whitespace".to_string(),
            ));
        }
        Ok(())
    }
}
