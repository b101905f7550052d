//! Crate-level error type

use crate::config::ValidationError;
use crate::tokenizer::TokenizerError;

/// Errors produced by dataset generation, evaluation, and configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    #[error("Index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;
