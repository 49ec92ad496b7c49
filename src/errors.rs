use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading layered settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file format in {path}: {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("invalid setting {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("invalid environment override: {0}")]
    Environment(#[from] config::ConfigError),

    #[error("failed to render settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
