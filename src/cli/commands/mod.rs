//! CLI command implementations

mod generate;
mod info;
mod problems;
mod sample;
mod validate;


use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Generate(args) => generate::run_generate(args, log_level),
        Command::Problems(args) => problems::run_problems(args, log_level),
        Command::Sample(args) => sample::run_sample(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
    }
}

/// Seeded RNG, or a fresh random seed when none was given
fn seeded_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(|| rand::rng().random()))
}
