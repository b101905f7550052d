//! Sample command implementation

use super::seeded_rng;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{
    apply_overrides, load_config, validate_config, ArithmeticConfig, OutputFormat, SampleArgs,
};
use crate::eval::{AdditionOracle, SampleReport};
use crate::monitor::{Segment, StyledSink, TerminalSink, TextStyle};
use crate::tracking::MetricLog;

/// Config from the optional file with command-line overrides applied
pub fn resolve_config(args: &SampleArgs) -> Result<ArithmeticConfig, String> {
    let mut config = match &args.config {
        Some(path) => load_config(path).map_err(|e| format!("Config error: {e}"))?,
        None => ArithmeticConfig::default(),
    };
    apply_overrides(&mut config, args);
    validate_config(&config).map_err(|e| format!("Validation failed: {e}"))?;
    Ok(config)
}

/// Decode held-out problems with the reference oracle
pub fn sample_oracle(config: &ArithmeticConfig, explain: bool) -> Result<SampleReport, String> {
    let mut rng = seeded_rng(config.seed);
    let mut oracle = AdditionOracle::new().with_explanation(explain);
    let sampler = config
        .sampler()
        .map_err(|e| format!("Validation failed: {e}"))?;
    sampler
        .sample(&mut oracle, &mut rng)
        .map_err(|e| format!("Sampling failed: {e}"))
}

/// Styled `score` summary line
pub fn score_segments(report: &SampleReport) -> Vec<Segment> {
    vec![
        ("score".to_string(), TextStyle::Key),
        (" ".to_string(), TextStyle::None),
        (format!("{:.3}", report.accuracy), TextStyle::Value),
        (
            format!(
                " ({}/{} correct, {} finished)",
                report.correct(),
                report.total(),
                report.finished
            ),
            TextStyle::Subtle,
        ),
    ]
}

/// Styled text output: the first sample, the rest when verbose, then the score
pub fn write_text_report(report: &SampleReport, level: LogLevel, sink: &mut dyn StyledSink) {
    if !level.permits(LogLevel::Normal) {
        return;
    }
    let mut metrics = MetricLog::new();
    report.publish(0, sink, &mut metrics);
    if level.permits(LogLevel::Verbose) {
        for item in report.items.iter().skip(1) {
            sink.log(&[(item.completion.clone(), TextStyle::None)]);
        }
    }
    sink.log(&score_segments(report));
}

pub fn run_sample(args: SampleArgs, level: LogLevel) -> Result<(), String> {
    let config = resolve_config(&args)?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Sampling {} problems, seq_len {}, max digits {}",
            config.n_tests, config.seq_len, config.max_digits
        ),
    );

    let report = sample_oracle(&config, args.explain)?;

    match args.format {
        OutputFormat::Text => write_text_report(&report, level, &mut TerminalSink::default()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&report)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
