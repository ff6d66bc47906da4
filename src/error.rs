//! Application error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Duplicate recipe id in catalog: {id}")]
    DuplicateRecordId { id: String },

    #[error("Could not determine the {kind} directory")]
    NoDirectory { kind: &'static str },

    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}
