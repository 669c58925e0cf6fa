use thiserror::Error;
use std::path::PathBuf;

#[derive(Error, Debug)]
pub enum ExtensionError {
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("No configuration file found. Pass --config or set TERRALESS_CONFIG")]
    NoConfigFile,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtensionError>;
