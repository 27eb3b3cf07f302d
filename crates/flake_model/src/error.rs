//! Error types for flake model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlakeModelError {
    #[error("Invalid flake id: {0}")]
    InvalidId(String),

    #[error("Invalid height {height} for flake {id}")]
    InvalidHeight { id: String, height: f32 },
}

pub type Result<T> = std::result::Result<T, FlakeModelError>;
