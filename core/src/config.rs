//! Client configuration.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("base_url must be an absolute http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),
}

/// Where the todo endpoint lives. All paths are relative to `base_url`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            base_url: base_url.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document such as `base_url = "https://example.com/api/todos"`.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidBaseUrl(self.base_url.clone());
        let url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(invalid());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_default() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn base_url_is_read_from_toml() {
        let config =
            ClientConfig::from_toml_str(r#"base_url = "https://todo.example.com/api/todos""#)
                .unwrap();
        assert_eq!(config.base_url, "https://todo.example.com/api/todos");
    }

    #[test]
    fn relative_base_url_is_rejected() {
        assert!(matches!(
            ClientConfig::new("/api/todos"),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ClientConfig::new("http://"),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn malformed_host_is_rejected() {
        for bad in [
            "http://not a host",
            "http://?x",
            "https://exa mple.com:notaport/api",
            "ftp://example.com/api",
        ] {
            assert!(
                matches!(ClientConfig::new(bad), Err(ConfigError::InvalidBaseUrl(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn base_url_with_port_and_path_is_accepted() {
        let config = ClientConfig::new("http://127.0.0.1:5000/api/todos").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:5000/api/todos");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            ClientConfig::from_toml_str("base_url = "),
            Err(ConfigError::Parse(_))
        ));
    }
}
