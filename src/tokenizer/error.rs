//! Tokenizer error types.

use thiserror::Error;

/// Tokenizer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    #[error("Unknown token: {0:?}")]
    UnknownToken(char),

    #[error("Invalid token ID: {0}")]
    InvalidTokenId(u32),
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizerError>;
