//! Error types for the masonry engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MasonryError {
    #[error("Invalid layout options: {0}")]
    InvalidOptions(String),

    #[error("Layout config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MasonryError>;
