//! Problems command implementation

use rand::Rng;

use super::seeded_rng;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{validate_config, ArithmeticConfig, ProblemsArgs};
use crate::dataset::ProblemGenerator;

/// One printable line per problem
///
/// Training text keeps its trailing newline stripped; held-out pairs are shown
/// as `prompt` and `answer` separated by a tab.
pub fn problem_lines<R: Rng + ?Sized>(
    generator: &ProblemGenerator,
    count: usize,
    qa: bool,
    rng: &mut R,
) -> Vec<String> {
    (0..count)
        .map(|_| {
            if qa {
                let (prompt, answer) = generator.get_qa(rng);
                format!("{prompt}\t{answer}")
            } else {
                generator.make_add_problem(rng).trim_end().to_string()
            }
        })
        .collect()
}

pub fn run_problems(args: ProblemsArgs, level: LogLevel) -> Result<(), String> {
    let config = ArithmeticConfig {
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
            "{} problems, max digits {}, {} draw",
            args.count, config.max_digits, config.digit_draw
        ),
    );

    let generator = config
        .generator()
        .map_err(|e| format!("Invalid arguments: {e}"))?;
    let mut rng = seeded_rng(config.seed);
    for line in problem_lines(&generator, args.count, args.qa, &mut rng) {
        println!("{line}");
    }

    Ok(())
}
