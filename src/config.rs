use adesao_contact::{DEFAULT_ADDRESS, DEFAULT_SUBJECT, Mailto};
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Recipient of the `mailto:` fallback link
    #[serde(default = "default_mailto")]
    pub mailto: String,
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            mailto: default_mailto(),
            subject: default_subject(),
        }
    }
}

impl ContactConfig {
    pub fn mailto(&self) -> Mailto {
        Mailto::new(&self.mailto, &self.subject)
    }
}

fn default_mailto() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ADESAO__SERVER__PORT, etc.)
    /// 2. Config file given by `config_path` or `CONFIG_PATH`, which must
    ///    exist, else `config/default.toml` when present
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        // An explicit path must exist, the default file is optional
        builder = match config_path.or_else(|| env::var("CONFIG_PATH").ok()) {
            Some(path) => builder.add_source(File::with_name(&path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_PATH).required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("ADESAO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.contact.mailto.contains('@') {
            return Err(format!(
                "Contact mailto address '{}' is not an e-mail address",
                self.contact.mailto
            ));
        }
        Ok(())
    }
}
