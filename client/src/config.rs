//! Client configuration, read from a YAML file.
//!
//! ```yaml
//! sort_order: descending
//! allowed_extensions: [jpg, jpeg, png, gif]
//! seed_fixtures: true
//! demo_user_email: employee@test.tld
//! ```
//!
//! Every key is optional. The file path comes from `BILLED_CONFIG`; without
//! it the defaults apply.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::domain::file_validation::DEFAULT_ALLOWED_EXTENSIONS;
use crate::domain::{FileValidator, SortOrder};
use crate::error::ConfigError;

pub const CONFIG_ENV_VAR: &str = "BILLED_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub sort_order: SortOrder,
    pub allowed_extensions: Vec<String>,
    /// Seed the in-memory store with the sample bills
    pub seed_fixtures: bool,
    pub demo_user_email: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::Descending,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            seed_fixtures: true,
            demo_user_email: "employee@test.tld".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        info!("Loaded client config from {:?}", path);
        Ok(config)
    }

    /// Load from `BILLED_CONFIG` when it is set, defaults otherwise
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                debug!("{} not set, using default config", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn file_validator(&self) -> FileValidator {
        FileValidator::with_extensions(&self.allowed_extensions)
    }
}
