//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! sumar generate --seq-len 256 --max-digits 8
//! sumar problems --count 5 --qa
//! sumar sample config.yaml --explain
//! sumar validate config.yaml
//! sumar info config.yaml --format yaml
//! ```

mod core;
mod types;

pub use core::{
    apply_overrides, parse_args, Cli, Command, GenerateArgs, InfoArgs, ProblemsArgs, SampleArgs,
    ValidateArgs,
};
pub use types::OutputFormat;
