//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, ArithmeticConfig, ValidateArgs};

/// Format the dataset settings as a string
pub fn format_dataset_info(config: &ArithmeticConfig) -> String {
    [
        format!("  Sequence length: {}", config.seq_len),
        format!("  Max digits: {} ({} draw)", config.max_digits, config.digit_draw),
        format!("  Batch size: {}", config.batch_size),
        format!("  Sequences per epoch: {}", config.train_sequences_per_epoch),
    ]
    .join("\n")
}

/// Format the evaluation settings as a string
pub fn format_eval_info(config: &ArithmeticConfig) -> String {
    let mut lines = vec![
        format!("  Held-out problems: {}", config.n_tests),
        format!("  Sampling passes per epoch: {}", config.inner_iterations),
        format!("  Device: {}", config.device),
    ];
    if let Some(seed) = config.seed {
        lines.push(format!("  Seed: {seed}"));
    }
    lines.join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");
    log(level, LogLevel::Verbose, &format_dataset_info(&config));
    log(level, LogLevel::Verbose, &format_eval_info(&config));

    Ok(())
}
