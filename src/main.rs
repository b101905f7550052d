//! Sumar CLI
//!
//! # Usage
//!
//! ```bash
//! # Print one decoded packed training sequence
//! sumar generate --seq-len 256 --max-digits 8
//!
//! # Print individual problems
//! sumar problems --count 5
//!
//! # Run the greedy evaluator against the reference oracle
//! sumar sample config.yaml --explain
//!
//! # Validate / inspect a config
//! sumar validate config.yaml
//! sumar info config.yaml --format json
//! ```

use clap::Parser;
use std::process::ExitCode;
use sumar::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
