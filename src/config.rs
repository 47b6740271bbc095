//! Configuration handling for the intake form

use crate::state::{Catalog, FormValidationEngine, ReservedValues};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// User configuration for the intake form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntakeConfig {
    /// Names refused for the applicant and the company
    pub reserved_names: Option<Vec<String>>,
    /// Email addresses refused for the applicant
    pub reserved_emails: Option<Vec<String>>,
    /// Company designation options (placeholder is added automatically)
    pub designations: Option<Vec<String>>,
    /// Country of operation options (placeholder is added automatically)
    pub countries: Option<Vec<String>>,
    /// Target jurisdiction options
    pub jurisdictions: Option<Vec<String>>,
}

impl IntakeConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "korporatio", "incorporation-intake")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn reserved_values(&self) -> ReservedValues {
        let defaults = ReservedValues::default();
        ReservedValues {
            names: self.reserved_names.clone().unwrap_or(defaults.names),
            emails: self.reserved_emails.clone().unwrap_or(defaults.emails),
        }
    }

    pub fn catalog(&self) -> Catalog {
        let defaults = Catalog::default();
        let bare = |options: &[String]| options[1..].to_vec();
        let countries = self
            .countries
            .clone()
            .unwrap_or_else(|| bare(defaults.countries()));
        Catalog::new(
            self.designations
                .clone()
                .unwrap_or_else(|| bare(defaults.designations())),
            countries.clone(),
            self.jurisdictions.clone().unwrap_or(countries),
        )
    }

    /// Build the validation engine described by this config
    pub fn engine(&self) -> FormValidationEngine {
        FormValidationEngine::new(self.reserved_values(), self.catalog())
    }
}
