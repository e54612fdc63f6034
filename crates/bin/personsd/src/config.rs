//! Daemon configuration.
//!
//! Values are layered: built-in defaults, then `persons.toml` from the
//! working directory (optional), then `PERSONS_*` environment variables.
//! An environment variable that is set but malformed aborts startup rather
//! than falling back to the lower layer.

use serde::Deserialize;

const CONFIG_FILE: &str = "persons.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite:persons.db?mode=rwc";
const DEFAULT_LOG_FILTER: &str = "personsd=info,persons=info,tower_http=debug";

/// Resolved daemon configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Where the HTTP listener binds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// `SQLite` connection URL, passed through to the storage adapter.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
}

/// `tracing-subscriber` filter directive (`RUST_LOG` syntax).
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Config {
    /// Resolve configuration from the file and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is unreadable or malformed, an
    /// override is malformed, or the final port is zero.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Layer `PERSONS_*` (and `RUST_LOG`) values read through `var` on top of
    /// the current settings.
    ///
    /// `PERSONS_BIND` is applied after `PERSONS_HOST`/`PERSONS_PORT` and wins
    /// over both. `RUST_LOG` wins over `PERSONS_LOG`.
    fn apply_env_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = var("PERSONS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("PERSONS_PORT") {
            self.server.port = parse_port("PERSONS_PORT", &port)?;
        }
        if let Some(bind) = var("PERSONS_BIND") {
            let (host, port) = bind.rsplit_once(':').ok_or(ConfigError::InvalidOverride {
                key: "PERSONS_BIND",
                expected: "host:port",
            })?;
            self.server.port = parse_port("PERSONS_BIND", port)?;
            self.server.host = host.to_string();
        }
        if let Some(url) = var("PERSONS_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(filter) = var("RUST_LOG").or_else(|| var("PERSONS_LOG")) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        Ok(())
    }

    /// `host:port` for [`tokio::net::TcpListener::bind`].
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

fn parse_port(key: &'static str, value: &str) -> Result<u16, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidOverride {
        key,
        expected: "a port number between 1 and 65535",
    })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse persons.toml")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read persons.toml")]
    Io(#[from] std::io::Error),
    #[error("{key} must be {expected}")]
    InvalidOverride {
        key: &'static str,
        expected: &'static str,
    },
    #[error("server port must be non-zero")]
    ZeroPort,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn with_env(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides(env(pairs))?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn should_use_defaults_when_nothing_is_configured() {
        let config = with_env(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.database_url(), DEFAULT_DATABASE_URL);
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn should_fill_missing_sections_with_defaults_when_toml_is_partial() {
        let config: Config = toml::from_str("[server]\nport = 3000").unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.database_url(), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn should_read_every_section_from_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.database_url(), "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_fall_back_to_defaults_when_file_is_absent() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn should_apply_host_port_and_database_overrides() {
        let config = with_env(&[
            ("PERSONS_HOST", "127.0.0.1"),
            ("PERSONS_PORT", "9000"),
            ("PERSONS_DATABASE_URL", "sqlite::memory:"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.database_url(), "sqlite::memory:");
    }

    #[test]
    fn should_let_bind_win_over_host_and_port() {
        let config = with_env(&[
            ("PERSONS_HOST", "10.0.0.1"),
            ("PERSONS_PORT", "9000"),
            ("PERSONS_BIND", "localhost:4000"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "localhost:4000");
    }

    #[test]
    fn should_prefer_rust_log_over_persons_log() {
        let config = with_env(&[("PERSONS_LOG", "warn"), ("RUST_LOG", "trace")]).unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_reject_port_override_when_not_numeric() {
        let result = with_env(&[("PERSONS_PORT", "not-a-port")]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidOverride {
                key: "PERSONS_PORT",
                ..
            })
        ));
    }

    #[test]
    fn should_reject_bind_override_when_port_out_of_range() {
        let result = with_env(&[("PERSONS_BIND", "127.0.0.1:99999")]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidOverride {
                key: "PERSONS_BIND",
                ..
            })
        ));
    }

    #[test]
    fn should_reject_bind_override_when_colon_missing() {
        let result = with_env(&[("PERSONS_BIND", "127.0.0.1")]);
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "PERSONS_BIND must be host:port");
    }

    #[test]
    fn should_reject_zero_port_when_overridden() {
        let result = with_env(&[("PERSONS_PORT", "0")]);
        assert!(matches!(result, Err(ConfigError::ZeroPort)));
    }

    #[test]
    fn should_report_parse_error_when_toml_is_malformed() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
