/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid song number: {0}")]
    InvalidSongNumber(usize),

    #[error("Catalog error: {0}")]
    Catalog(#[from] tunebox_core::CatalogError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<::config::ConfigError> for CliError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
