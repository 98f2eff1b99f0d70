use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Backend the client talks to when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://resumerag-22xx.onrender.com";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,
    /// Request timeout; requests never time out when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RESUME_RAG)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RESUME_RAG__API__BASE_URL -> api.base_url
            .add_source(env_source())
            .build()?;

        let settings = apply_url_override(settings, std::env::var("RESUME_RAG_URL").ok())?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        let settings = apply_url_override(settings, std::env::var("RESUME_RAG_URL").ok())?;

        Self::finish(settings)
    }

    /// Replace the backend base URL (e.g. from a command-line flag)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        self.api.base_url = base_url.into();
        self.check()?;
        Ok(self)
    }

    /// Render the effective settings as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn finish(settings: Config) -> Result<Self, ConfigError> {
        let settings: Self = settings.try_deserialize()?;
        settings.check()?;
        Ok(settings)
    }

    fn check(&self) -> Result<(), ConfigError> {
        self.api
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid api settings: {}", e)))
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("RESUME_RAG")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// `RESUME_RAG_URL` is honoured as a shorthand for `RESUME_RAG__API__BASE_URL`
fn apply_url_override(settings: Config, url: Option<String>) -> Result<Config, ConfigError> {
    match url {
        Some(url) => Config::builder()
            .add_source(settings)
            .set_override("api.base_url", url)?
            .build(),
        None => Ok(settings),
    }
}
