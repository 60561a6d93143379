use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Connection settings for the recommendation service
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ClientConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_load_without_file() {
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("RECIPES__"))
            .map(|(k, _)| k)
            .collect();
        for key in keys_to_clear {
            env::remove_var(&key);
        }

        let config = ClientConfig::load().unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, 30);
    }
}
