// src/config.rs
use crate::domain::project::StatsPeriod;
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    fixtures_path: Option<PathBuf>,
    default_stats_period: StatsPeriod,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        let fixtures_path = env::var("FIXTURES_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let default_stats_period = match env::var("DEFAULT_STATS_PERIOD") {
            Ok(raw) => raw.parse::<StatsPeriod>().map_err(|err| {
                ConfigError::Invalid(format!("DEFAULT_STATS_PERIOD: {err}"))
            })?,
            Err(_) => StatsPeriod::default(),
        };

        let rate_limit_enabled = env::var("RATE_LIMIT_ENABLED")
            .ok()
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            allowed_origins,
            fixtures_path,
            default_stats_period,
            rate_limit_enabled,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn fixtures_path(&self) -> Option<&PathBuf> {
        self.fixtures_path.as_ref()
    }

    pub fn default_stats_period(&self) -> StatsPeriod {
        self.default_stats_period
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            allowed_origins: default_allowed_origins(),
            fixtures_path: None,
            default_stats_period: StatsPeriod::default(),
            rate_limit_enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_one_and_true() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("0"));
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn defaults_are_sensible() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.default_stats_period().hours(), 24);
        assert!(config.fixtures_path().is_none());
        assert!(!config.rate_limit_enabled());
    }
}
