//! Generate command implementation

use rand::Rng;

use super::seeded_rng;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{validate_config, ArithmeticConfig, GenerateArgs};
use crate::dataset::ArithmeticDataset;

/// Decode one freshly packed sequence back to text
pub fn packed_text<R: Rng + ?Sized>(
    dataset: &ArithmeticDataset,
    rng: &mut R,
) -> Result<String, String> {
    let ids = dataset
        .get_packed_math_input(rng)
        .map_err(|e| format!("Generation error: {e}"))?;
    dataset.decode(&ids).map_err(|e| format!("Decode error: {e}"))
}

pub fn run_generate(args: GenerateArgs, level: LogLevel) -> Result<(), String> {
    let config = ArithmeticConfig {
        seq_len: args.seq_len,
        max_digits: args.max_digits,
        digit_draw: args.digit_draw,
        seed: args.seed,
        ..Default::default()
    };
    validate_config(&config).map_err(|e| format!("Invalid arguments: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Packing problems past {} tokens (max digits {}, {} draw)",
            config.seq_len, config.max_digits, config.digit_draw
        ),
    );

    let generator = config
        .generator()
        .map_err(|e| format!("Invalid arguments: {e}"))?;
    let dataset = ArithmeticDataset::with_generator(config.seq_len, generator, 1);
    let mut rng = seeded_rng(config.seed);
    let text = packed_text(&dataset, &mut rng)?;

    log(
        level,
        LogLevel::Verbose,
        &format!("{} tokens", text.chars().count()),
    );
    println!("{text}");

    Ok(())
}
