use axum::http::{HeaderValue, Method, header};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origins used when `ALLOWED_ORIGINS` is unset or empty.
pub const DEV_FALLBACK_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8080",
];

/// Deployment mode; only `production` turns on strict origin checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn from_name(name: &str) -> Self {
        if name == "production" {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CorsConfigError {
    #[error("wildcard CORS origin (*) is not allowed in production")]
    Wildcard,
    #[error("localhost origin is not allowed in production: {0}")]
    Localhost(String),
    #[error("only HTTPS origins are allowed in production, got: {0}")]
    NotHttps(String),
    #[error("at least one allowed origin must be configured in production")]
    NoOrigins,
    #[error("origin is not a valid header value: {0}")]
    InvalidOrigin(String),
}

/// Validated CORS policy: POST only, `Content-Type` only, no credentials.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    origins: Vec<String>,
    allow_any: bool,
}

impl CorsConfig {
    /// Build the policy from the raw `ALLOWED_ORIGINS` value.
    ///
    /// The value is split on commas, entries trimmed and blanks dropped. An
    /// unset or empty value falls back to [`DEV_FALLBACK_ORIGINS`].
    pub fn from_env_values(
        environment: Environment,
        allowed_origins: Option<&str>,
    ) -> Result<Self, CorsConfigError> {
        let origins: Vec<String> = match allowed_origins {
            Some(raw) if !raw.is_empty() => raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            _ => DEV_FALLBACK_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        if environment == Environment::Production {
            for origin in &origins {
                validate_production_origin(origin)?;
            }
            if origins.is_empty() {
                return Err(CorsConfigError::NoOrigins);
            }
        }

        let allow_any = origins.iter().any(|o| o == "*");
        if !allow_any {
            if let Some(bad) = origins.iter().find(|o| HeaderValue::from_str(o).is_err()) {
                return Err(CorsConfigError::InvalidOrigin(bad.clone()));
            }
        }

        Ok(Self { origins, allow_any })
    }

    pub fn origins(&self) -> &[String] {
        &self.origins
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allow_any
    }

    pub fn layer(&self) -> CorsLayer {
        let allow_origin = if self.allow_any {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(
                self.origins
                    .iter()
                    .filter_map(|o| HeaderValue::from_str(o).ok()),
            )
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::POST])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(false)
    }
}

fn validate_production_origin(origin: &str) -> Result<(), CorsConfigError> {
    if origin == "*" {
        return Err(CorsConfigError::Wildcard);
    }
    if origin.contains("localhost") || origin.contains("127.0.0.1") {
        return Err(CorsConfigError::Localhost(origin.to_string()));
    }
    if !origin.starts_with("https://") {
        return Err(CorsConfigError::NotHttps(origin.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prod(origins: &str) -> Result<CorsConfig, CorsConfigError> {
        CorsConfig::from_env_values(Environment::Production, Some(origins))
    }

    fn dev(origins: Option<&str>) -> Result<CorsConfig, CorsConfigError> {
        CorsConfig::from_env_values(Environment::Development, origins)
    }

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("Production"), Environment::Development);
        assert_eq!(Environment::from_name("staging"), Environment::Development);
        assert_eq!(Environment::from_name(""), Environment::Development);
    }

    #[test]
    fn test_dev_fallback_when_unset() {
        let config = dev(None).unwrap();
        assert_eq!(config.origins(), DEV_FALLBACK_ORIGINS);
        let config = dev(Some("")).unwrap();
        assert_eq!(config.origins().len(), 3);
    }

    #[test]
    fn test_list_is_trimmed_and_blanks_dropped() {
        let config = dev(Some(" https://a.example.com , ,http://b.example.com,")).unwrap();
        assert_eq!(
            config.origins(),
            &["https://a.example.com".to_string(), "http://b.example.com".to_string()]
        );
    }

    #[test]
    fn test_production_accepts_https() {
        let config = prod("https://app.example.com,https://www.example.com").unwrap();
        assert_eq!(config.origins().len(), 2);
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_production_rejects_wildcard() {
        assert_eq!(prod("https://app.example.com,*").unwrap_err(), CorsConfigError::Wildcard);
    }

    #[test]
    fn test_production_rejects_localhost() {
        assert_eq!(
            prod("https://localhost:3000").unwrap_err(),
            CorsConfigError::Localhost("https://localhost:3000".into())
        );
        assert!(matches!(
            prod("https://127.0.0.1").unwrap_err(),
            CorsConfigError::Localhost(_)
        ));
    }

    #[test]
    fn test_production_rejects_plain_http() {
        assert_eq!(
            prod("http://app.example.com").unwrap_err(),
            CorsConfigError::NotHttps("http://app.example.com".into())
        );
    }

    #[test]
    fn test_production_rejects_fallback_and_empty() {
        // Unset falls back to the localhost dev list, which production refuses.
        assert!(matches!(
            CorsConfig::from_env_values(Environment::Production, None).unwrap_err(),
            CorsConfigError::Localhost(_)
        ));
        assert_eq!(prod(" , ").unwrap_err(), CorsConfigError::NoOrigins);
    }

    #[test]
    fn test_dev_allows_wildcard_and_http() {
        let config = dev(Some("*")).unwrap();
        assert!(config.allows_any_origin());
        let config = dev(Some("http://localhost:5173")).unwrap();
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_invalid_header_value() {
        assert!(matches!(
            dev(Some("https://bad\u{7f}origin")).unwrap_err(),
            CorsConfigError::InvalidOrigin(_)
        ));
    }
}
