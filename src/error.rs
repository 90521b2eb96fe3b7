// src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TickerError>;

/// Everything that can go wrong outside the pure state updates.
#[derive(Error, Debug)]
pub enum TickerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unsupported icon file: {0}")]
    UnsupportedIcon(String),

    #[error("Icon decode error: {0}")]
    IconDecode(#[from] image::ImageError),
}
