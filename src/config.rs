use std::time::Duration;

use fixture_teams_sportsdb::{DEFAULT_SEARCH_URL, DEFAULT_TIMEOUT};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("{0} must be set together with {1}")]
    Incomplete(&'static str, &'static str),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub team_directory_url: String,
    pub team_lookup_timeout: Duration,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub file: Option<LogFileConfig>,
}

#[derive(Debug, Clone)]
pub struct LogFileConfig {
    pub path: String,
    pub archive_pattern: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_var(&lookup, "FIXTURE_PORT", 8000u16)?;
        let timeout_ms = parse_var(
            &lookup,
            "TEAM_LOOKUP_TIMEOUT_MS",
            DEFAULT_TIMEOUT.as_millis() as u64,
        )?;

        let file = match (lookup("LOG_FILE_PATH"), lookup("LOG_ARCHIVE_PATTERN")) {
            (Some(path), Some(archive_pattern)) => Some(LogFileConfig {
                path,
                archive_pattern,
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::Incomplete("LOG_FILE_PATH", "LOG_ARCHIVE_PATTERN"));
            }
            (None, Some(_)) => {
                return Err(ConfigError::Incomplete("LOG_ARCHIVE_PATTERN", "LOG_FILE_PATH"));
            }
        };

        Ok(Self {
            host: lookup("FIXTURE_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database: lookup("FIXTURE_DB").unwrap_or_else(|| "events.db".to_string()),
            team_directory_url: lookup("TEAM_DIRECTORY_URL")
                .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
            team_lookup_timeout: Duration::from_millis(timeout_ms),
            log: LogConfig { file },
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.database, "events.db");
        assert_eq!(config.team_directory_url, DEFAULT_SEARCH_URL);
        assert_eq!(config.team_lookup_timeout, DEFAULT_TIMEOUT);
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("FIXTURE_HOST", "127.0.0.1"),
            ("FIXTURE_PORT", "9090"),
            ("FIXTURE_DB", "/var/lib/fixtures/events.db"),
            ("TEAM_LOOKUP_TIMEOUT_MS", "2500"),
            ("LOG_FILE_PATH", "logs/server.log"),
            ("LOG_ARCHIVE_PATTERN", "logs/server.{}.log"),
        ])
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.database, "/var/lib/fixtures/events.db");
        assert_eq!(config.team_lookup_timeout, Duration::from_millis(2500));
        assert_eq!(config.log.file.unwrap().archive_pattern, "logs/server.{}.log");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("FIXTURE_PORT", "eighty")]),
            Err(ConfigError::Invalid {
                name: "FIXTURE_PORT",
                ..
            })
        ));
        assert!(matches!(
            config_from(&[("LOG_FILE_PATH", "server.log")]),
            Err(ConfigError::Incomplete(..))
        ));
    }
}
