//! Config file loading

use std::fs;
use std::path::Path;

use super::schema::ArithmeticConfig;
use super::validate::validate_config;
use crate::error::{Error, Result};

/// Load and validate a YAML config
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ArithmeticConfig> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    let config: ArithmeticConfig = serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?;

    validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_yaml(
            r"
seq_len: 256
max_digits: 8
batch_size: 4
n_tests: 16
seed: 42
",
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.seq_len, 256);
        assert_eq!(config.max_digits, 8);
        assert_eq!(config.batch_size, 4);
        assert_eq!(config.n_tests, 16);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/sumar.yaml");
        match result {
            Err(Error::ConfigError(msg)) => assert!(msg.contains("Failed to read")),
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_malformed_yaml() {
        let file = write_yaml("seq_len: [unclosed");
        assert!(matches!(load_config(file.path()), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_load_invalid_values() {
        let file = write_yaml("max_digits: 0\n");
        assert!(matches!(
            load_config(file.path()),
            Err(Error::Validation(ValidationError::InvalidMaxDigits(0)))
        ));
    }
}
