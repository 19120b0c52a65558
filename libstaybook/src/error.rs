//! Error types for Staybook

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StaybookError>;

#[derive(Error, Debug)]
pub enum StaybookError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown hotel: {0}")]
    UnknownHotel(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StaybookError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            StaybookError::InvalidInput(_) => 3,
            StaybookError::UnknownHotel(_) => 3,
            StaybookError::Config(_) => 1,
            StaybookError::Serialization(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
