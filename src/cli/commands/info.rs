//! Info command implementation

use super::validate::{format_dataset_info, format_eval_info};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, InfoArgs, OutputFormat};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Dataset:");
            println!("{}", format_dataset_info(&config));
            println!("Evaluation:");
            println!("{}", format_eval_info(&config));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
