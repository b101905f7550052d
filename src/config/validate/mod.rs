//! Configuration validation
//!
//! Validates experiment configs before any data is generated.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::{validate_config, MAX_DIGITS_LIMIT};
