//! Declarative experiment configuration
//!
//! # Example config
//!
//! ```yaml
//! seq_len: 512
//! max_digits: 4
//! batch_size: 16
//! n_tests: 32
//! train_sequences_per_epoch: 4096
//! inner_iterations: 4
//! device: cpu
//! digit_draw: legacy
//! seed: 42
//! ```

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, GenerateArgs, InfoArgs, OutputFormat,
    ProblemsArgs, SampleArgs, ValidateArgs,
};
pub use loader::load_config;
pub use schema::{ArithmeticConfig, Device};
pub use validate::{validate_config, ValidationError, MAX_DIGITS_LIMIT};
