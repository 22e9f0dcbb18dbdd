//! Error types shared by the controllers, the stores and the configuration loader.

use thiserror::Error;

/// A date string that does not describe a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Failure reported by a bills store.
///
/// `Display` yields the message shown in the page error banner, e.g. `Erreur 404`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Erreur {status}")]
    Http { status: u16 },
    #[error("Bill not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Rejected(String),
}

impl StoreError {
    pub fn http(status: u16) -> Self {
        StoreError::Http { status }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
