//! Server configuration read from the environment

use std::net::{IpAddr, SocketAddr};

use hypertension_cdss_data::repository::DEFAULT_MODEL_PATH;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Origins a local static file server uses for the frontend
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://127.0.0.1:5500", "http://localhost:5500"];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Application configuration
#[derive(Debug, Clone, Validate)]
pub struct AppConfig {
    /// Interface to bind
    pub host: IpAddr,

    #[validate(range(min = 1))]
    pub port: u16,

    /// Path to the classifier model document
    #[validate(length(min = 1))]
    pub model_path: String,

    /// Exposes internal error details in responses
    pub debug: bool,

    /// Origins allowed to call the API from a browser
    #[validate(length(min = 1))]
    pub cors_origins: Vec<String>,

    /// Deployment environment name, reported by the health check
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            model_path: DEFAULT_MODEL_PATH.to_string(),
            debug: false,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            environment: "development".to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let debug = lookup("CDSS_DEBUG")
            .or_else(|| lookup("DEBUG"))
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        let host = match lookup("HOST") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidValue { name: "HOST", value })?,
            None if debug => IpAddr::from([127, 0, 0, 1]),
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value })?,
            None => defaults.port,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.cors_origins,
        };

        let config = Self {
            host,
            port,
            model_path: lookup("MODEL_PATH").unwrap_or(defaults.model_path),
            debug,
            cors_origins,
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
        };

        config.validate()?;
        Ok(config)
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.model_path, "model/cdss_model.json");
        assert!(!config.debug);
        assert_eq!(
            config.cors_origins,
            vec!["http://127.0.0.1:5500", "http://localhost:5500"]
        );
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_debug_binds_loopback() {
        let config = config_from(&[("CDSS_DEBUG", "True")]).unwrap();
        assert!(config.debug);
        assert_eq!(config.host, IpAddr::from([127, 0, 0, 1]));

        let config = config_from(&[("DEBUG", "yes"), ("HOST", "0.0.0.0")]).unwrap();
        assert!(config.debug);
        assert_eq!(config.host, IpAddr::from([0, 0, 0, 0]));
    }

    #[test]
    fn test_debug_flag_values() {
        for value in ["1", "true", "YES"] {
            assert!(config_from(&[("CDSS_DEBUG", value)]).unwrap().debug);
        }
        for value in ["0", "false", "on", ""] {
            assert!(!config_from(&[("CDSS_DEBUG", value)]).unwrap().debug);
        }
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("MODEL_PATH", "/srv/model.json"),
            ("CORS_ORIGINS", "https://a.example, https://b.example,"),
            ("APP_ENV", "production"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.model_path, "/srv/model.json");
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_invalid_port() {
        assert!(matches!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::InvalidValue { name: "PORT", .. })
        ));
        assert!(matches!(
            config_from(&[("PORT", "0")]),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_invalid_host() {
        assert!(matches!(
            config_from(&[("HOST", "not-an-ip")]),
            Err(ConfigError::InvalidValue { name: "HOST", .. })
        ));
    }

    #[test]
    fn test_empty_values_fail_validation() {
        assert!(matches!(
            config_from(&[("MODEL_PATH", "")]),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            config_from(&[("CORS_ORIGINS", " , ")]),
            Err(ConfigError::Validation(_))
        ));
    }
}
