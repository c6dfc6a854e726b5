use thiserror::Error;

use crate::cors::{CorsConfig, CorsConfigError, Environment};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_UPLOAD_MB: usize = 20;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid CORS configuration: {0}")]
    Cors(#[from] CorsConfigError),
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid MAX_UPLOAD_MB: {0}")]
    InvalidUploadLimit(String),
}

/// Server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    pub cors: CorsConfig,
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .map(|e| Environment::from_name(&e))
            .unwrap_or_default();
        let cors = CorsConfig::from_env_values(environment, lookup("ALLOWED_ORIGINS").as_deref())?;

        let host = lookup("HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let max_upload_mb = match lookup("MAX_UPLOAD_MB") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(mb) if mb > 0 => mb,
                _ => return Err(ConfigError::InvalidUploadLimit(raw)),
            },
            None => DEFAULT_MAX_UPLOAD_MB,
        };

        Ok(Self {
            environment,
            cors,
            host,
            port,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.max_upload_bytes, 20 * 1024 * 1024);
        assert_eq!(config.cors.origins().len(), 3);
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("ENVIRONMENT", "production"),
            ("ALLOWED_ORIGINS", "https://app.example.com"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("MAX_UPLOAD_MB", "5"),
        ])
        .unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.cors.origins(), &["https://app.example.com".to_string()]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_production_without_origins_fails() {
        let err = from_pairs(&[("ENVIRONMENT", "production")]).unwrap_err();
        assert!(matches!(err, ConfigError::Cors(CorsConfigError::Localhost(_))));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(matches!(
            from_pairs(&[("PORT", "http")]).unwrap_err(),
            ConfigError::InvalidPort(_)
        ));
        assert!(matches!(
            from_pairs(&[("MAX_UPLOAD_MB", "0")]).unwrap_err(),
            ConfigError::InvalidUploadLimit(_)
        ));
    }
}
