use std::env;
use std::fmt;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub jwt: JwtConfig,
    pub hashing: HashingConfig,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

// The signing secret must never reach logs; Debug redacts it.
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HashingConfig {
    /// Work factor for secret hashing, fixed for the process lifetime.
    pub cost: u32,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, HASHING__COST, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// Loaded once before any request is served; never reloaded.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(secret: &str, cost: u32) -> Config {
        ConfigBuilder::builder()
            .set_override("jwt.secret", secret)
            .unwrap()
            .set_override("hashing.cost", cost as i64)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .expect("Failed to deserialize config")
    }

    #[test]
    fn test_deserializes_sections() {
        let config = build("a_signing_secret_of_32_bytes_min!", 3);

        assert_eq!(config.jwt.secret, "a_signing_secret_of_32_bytes_min!");
        assert_eq!(config.hashing.cost, 3);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = build("a_signing_secret_of_32_bytes_min!", 3);

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("a_signing_secret_of_32_bytes_min!"));
        assert!(rendered.contains("<redacted>"));
    }
}
