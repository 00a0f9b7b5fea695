//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that overrides `secret_key` from the file.
pub const SECRET_KEY_ENV_VAR: &str = "ONEWALLET_SECRET_KEY";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Parse TOML, apply a secret override and validate.
pub fn parse_config(content: &str, secret_override: Option<String>) -> Result<ClientConfig, ConfigError> {
    let mut config: ClientConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    if let Some(secret) = secret_override.filter(|s| !s.is_empty()) {
        config.secret_key = secret;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
///
/// `ONEWALLET_SECRET_KEY`, when set, replaces the file's `secret_key`.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&content, std::env::var(SECRET_KEY_ENV_VAR).ok())?;

    tracing::debug!(
        path = %path.display(),
        base_url = %config.base_url,
        access_id = %config.access_id,
        "Configuration loaded"
    );

    Ok(config)
}
