//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `roomdup.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

const CONFIG_FILE: &str = "roomdup.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration database settings.
    pub database: DatabaseConfig,
    /// UI configuration files.
    pub ui: UiConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Configuration database connection settings.
///
/// Either a full `url`, or the parts of a `MySQL` URL.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection URL, taking precedence over the parts below.
    pub url: Option<String>,
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    /// Database (schema) name.
    pub name: String,
}

/// Location of the UI configuration files.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Directory holding one `<Building-Room>/config.json` per room.
    pub directory: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `roomdup.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("CONFIGURATION_DATABASE_USERNAME") {
            self.database.username = val;
        }
        if let Some(val) = var("CONFIGURATION_DATABASE_PASSWORD") {
            self.database.password = val;
        }
        if let Some(val) = var("CONFIGURATION_DATABASE_HOST") {
            self.database.host = val;
        }
        if let Some(val) = var("CONFIGURATION_DATABASE_PORT")
            && let Ok(port) = val.parse()
        {
            self.database.port = port;
        }
        if let Some(val) = var("CONFIGURATION_DATABASE_NAME") {
            self.database.name = val;
        }
        if let Some(val) = var("CONFIGURATION_DATABASE_URL") {
            self.database.url = Some(val);
        }
        if let Some(val) = var("UI_CONFIGURATION_DIRECTORY")
            && !val.is_empty()
        {
            self.ui.directory = PathBuf::from(val);
        }
        if let Some(val) = var("ROOMDUP_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.is_none() && self.database.port == 0 {
            return Err(ConfigError::Validation(
                "database port must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database.url {
            return url.clone();
        }
        let db = &self.database;
        format!(
            "mysql://{}:{}@{}:{}/{}",
            db.username, db.password, db.host, db.port, db.name
        )
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            username: String::new(),
            password: String::new(),
            host: "localhost".to_string(),
            port: 3306,
            name: "configuration".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "roomdup=info,roomdup_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
