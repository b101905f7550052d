//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::ArithmeticConfig;
use crate::dataset::DigitDraw;

/// Sumar: synthetic addition data and greedy evaluation
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "sumar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(
    about = "Synthetic addition-reasoning datasets and greedy-decoding evaluation for autoregressive models"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print one decoded packed training sequence
    Generate(GenerateArgs),

    /// Print individual addition problems
    Problems(ProblemsArgs),

    /// Run the greedy evaluator against the reference oracle model
    Sample(SampleArgs),

    /// Validate a configuration file
    Validate(ValidateArgs),

    /// Display information about a configuration
    Info(InfoArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Packed sequence width
    #[arg(long, default_value_t = 256)]
    pub seq_len: usize,

    /// Largest operand digit count
    #[arg(long, default_value_t = 8)]
    pub max_digits: usize,

    /// Digit distribution (legacy, decimal)
    #[arg(long, default_value = "legacy")]
    pub digit_draw: DigitDraw,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the problems command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ProblemsArgs {
    /// Number of problems to print
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Largest operand digit count
    #[arg(long, default_value_t = 4)]
    pub max_digits: usize,

    /// Digit distribution (legacy, decimal)
    #[arg(long, default_value = "legacy")]
    pub digit_draw: DigitDraw,

    /// Print held-out question/answer pairs instead of training text
    #[arg(long)]
    pub qa: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the sample command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SampleArgs {
    /// Optional YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Have the oracle write the carry explanation before answering
    #[arg(long)]
    pub explain: bool,

    /// Override sequence length
    #[arg(long)]
    pub seq_len: Option<usize>,

    /// Override number of held-out problems
    #[arg(short = 'n', long)]
    pub n_tests: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a config
pub fn apply_overrides(config: &mut ArithmeticConfig, args: &SampleArgs) {
    if let Some(seq_len) = args.seq_len {
        config.seq_len = seq_len;
    }
    if let Some(n_tests) = args.n_tests {
        config.n_tests = n_tests;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
}
