use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::filter;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the membership API.
    pub api_url: Option<String>,
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use iced debug feature if true.
    pub debug: Option<bool>,
}

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        tracing::info!("Done writing gui configuration file");
        Ok(())
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
    WritingFile(String),
    Unexpected(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
            Self::Unexpected(e) => write!(f, "Unexpected error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_toml() {
        let config: Config = toml::from_str(
            r#"
            api_url = "https://api.example.com/api/v1"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.api_url.as_deref(),
            Some("https://api.example.com/api/v1")
        );
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
    }

    #[test]
    fn empty_config_defaults_to_info() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.api_url.is_none());
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::INFO);
    }

    #[test]
    fn debug_flag_raises_log_level() {
        let config: Config = toml::from_str("debug = true").unwrap();
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let config: Config = toml::from_str(r#"log_level = "verbose""#).unwrap();
        assert_eq!(
            config.log_level(),
            Err(ConfigError::InvalidField(
                "log_level",
                "Unknown value 'verbose'".to_string()
            ))
        );
    }

    #[test]
    fn config_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let config = Config {
            api_url: Some("https://api.example.com/api/v1".to_string()),
            log_level: Some("debug".to_string()),
            debug: None,
        };
        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);

        // None fields are skipped on write, so a default configuration
        // writes an empty file and reads back as itself.
        Config::default().to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }
}
