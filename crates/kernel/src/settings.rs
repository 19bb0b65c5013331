use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "CAMPUS_ENV";
const CONFIG_DIR_ENV: &str = "CAMPUS_CONFIG_DIR";
const ENV_PREFIX: &str = "CAMPUS";
/// Connection target override, honoured above every other source.
const DATABASE_URL_ENV: &str = "MONGODB_URL";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    fn parse(name: &str) -> anyhow::Result<Self> {
        match name {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub browser: BrowserSettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, environment overlay, and env vars.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .with_context(|| "unable to resolve current directory")?
                .join("config"),
        };

        let mut settings = Self::load_from(&config_dir, &environment)?;

        if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
            settings.database.url = url;
        }

        Ok(settings)
    }

    /// Load `base.toml` and `{environment}.toml` from `config_dir`, then `CAMPUS_*` variables.
    pub fn load_from(config_dir: &Path, environment: &str) -> anyhow::Result<Self> {
        let parsed_environment = Environment::parse(environment)?;

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings = Self::from_config(cfg)?;
        settings.environment = parsed_environment;
        Ok(settings)
    }

    /// Deserialize settings out of an already assembled configuration.
    pub fn from_config(cfg: config::Config) -> anyhow::Result<Self> {
        cfg.try_deserialize()
            .with_context(|| "failed to deserialize configuration")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "ServerSettings::default_host")]
    pub host: String,
    #[serde(default = "ServerSettings::default_port")]
    pub port: u16,
    /// Directory served under `/static`.
    #[serde(default = "ServerSettings::default_static_dir")]
    pub static_dir: PathBuf,
    /// Page served at `/`.
    #[serde(default = "ServerSettings::default_index_file")]
    pub index_file: PathBuf,
}

impl ServerSettings {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8000
    }

    fn default_static_dir() -> PathBuf {
        PathBuf::from("static")
    }

    fn default_index_file() -> PathBuf {
        PathBuf::from("templates/index.html")
    }

    /// Address handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            static_dir: Self::default_static_dir(),
            index_file: Self::default_index_file(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    #[default]
    Mongo,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub backend: DatabaseBackend,
    #[serde(default = "DatabaseSettings::default_url")]
    pub url: String,
    #[serde(default = "DatabaseSettings::default_name")]
    pub name: String,
}

impl DatabaseSettings {
    fn default_url() -> String {
        "mongodb://localhost:27017".to_string()
    }

    fn default_name() -> String {
        "crud_database".to_string()
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            backend: DatabaseBackend::default(),
            url: Self::default_url(),
            name: Self::default_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "TelemetrySettings::default_log_level")]
    pub log_level: String,
}

impl TelemetrySettings {
    fn default_log_level() -> String {
        "info".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            log_level: Self::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Post-start hook that opens the index page in a local browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSettings {
    #[serde(default = "BrowserSettings::default_enabled")]
    pub enabled: bool,
    #[serde(default = "BrowserSettings::default_delay_ms")]
    pub delay_ms: u64,
}

impl BrowserSettings {
    fn default_enabled() -> bool {
        true
    }

    fn default_delay_ms() -> u64 {
        2000
    }
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            delay_ms: Self::default_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Settings {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap();
        Settings::from_config(cfg).unwrap()
    }

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_database_targets_local_mongo() {
        let settings = Settings::default();
        assert_eq!(settings.database.backend, DatabaseBackend::Mongo);
        assert_eq!(settings.database.url, "mongodb://localhost:27017");
        assert_eq!(settings.database.name, "crud_database");
    }

    #[test]
    fn empty_config_matches_defaults() {
        let settings = from_toml("");
        assert_eq!(settings.server.bind_address(), "0.0.0.0:8000");
        assert_eq!(settings.server.static_dir, PathBuf::from("static"));
        assert!(settings.browser.enabled);
        assert_eq!(settings.browser.delay_ms, 2000);
        assert_eq!(settings.telemetry.log_format, LogFormat::Pretty);
    }

    #[test]
    fn file_values_override_defaults() {
        let settings = from_toml(
            r#"
            [server]
            port = 9100

            [database]
            backend = "memory"
            name = "campus_test"

            [telemetry]
            log_format = "json"

            [browser]
            enabled = false
            "#,
        );
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.database.backend, DatabaseBackend::Memory);
        assert_eq!(settings.database.name, "campus_test");
        assert_eq!(settings.database.url, "mongodb://localhost:27017");
        assert_eq!(settings.telemetry.log_format, LogFormat::Json);
        assert!(!settings.browser.enabled);
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = Settings::load_from(Path::new("does-not-exist"), "moon").unwrap_err();
        assert!(err.to_string().contains("unsupported environment 'moon'"));
    }

    #[test]
    fn missing_config_dir_is_not_an_error() {
        let settings = Settings::load_from(Path::new("does-not-exist"), "staging").unwrap();
        assert_eq!(settings.environment, Environment::Staging);
    }
}
