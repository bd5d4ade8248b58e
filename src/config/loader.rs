//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::BridgeConfig;
use crate::config::validation::ValidationError;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML document without semantic validation.
pub fn parse_config(content: &str) -> Result<BridgeConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse a TOML file without semantic validation.
///
/// Use this when overrides still need to be applied before validating.
pub fn read_config(path: &Path) -> Result<BridgeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), BridgeConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = parse_config(
            r#"
            [listener]
            port = 9000

            [frontend]
            host = "emulator.lan"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.port, 9000);
        assert_eq!(config.listener.host, "0.0.0.0");
        assert_eq!(config.frontend.host, "emulator.lan");
        assert_eq!(config.frontend.port, 8082);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.play.redirect_delay_ms, 1000);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[listener]\nport = \"eighty\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_read_defers_validation() {
        let path = std::env::temp_dir().join(format!(
            "retroarch-bridge-{}.toml",
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, "[frontend]\nport = 0\n").unwrap();

        let config = read_config(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.frontend.port, 0);

        let err = crate::config::validate_config(&config)
            .map_err(ConfigError::Validation)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
        assert_eq!(
            err.to_string(),
            "Validation failed: frontend.port must not be 0"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = read_config(Path::new("/nonexistent/retroarch-bridge.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
