use anyhow::{Context, Result};
use std::str::FromStr;

use crate::config::SearchMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}', expected pretty or json")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub run_migrations: bool,
    pub seed_database: bool,
    pub search_match: SearchMatch,
    pub db_max_connections: u32,
    pub log_format: LogFormat,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://trivia.db?mode=rwc".to_string());

        let port = parse_or(&lookup, "PORT", 5000u16)?;
        let run_migrations = parse_bool_or(&lookup, "RUN_MIGRATIONS", true)?;
        let seed_database = parse_bool_or(&lookup, "SEED_DATABASE", false)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 5u32)?;

        let search_match = match lookup("SEARCH_MATCH") {
            Some(v) => v
                .parse::<SearchMatch>()
                .map_err(anyhow::Error::msg)
                .context("Invalid SEARCH_MATCH")?,
            None => SearchMatch::default(),
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => v
                .parse::<LogFormat>()
                .map_err(anyhow::Error::msg)
                .context("Invalid LOG_FORMAT")?,
            None => LogFormat::default(),
        };

        Ok(Self {
            database_url,
            port,
            run_migrations,
            seed_database,
            search_match,
            db_max_connections,
            log_format,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid {key}: {v}")),
        None => Ok(default),
    }
}

fn parse_bool_or<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no") => Ok(false),
        Some(v) => anyhow::bail!("Invalid {key}: {v}, expected true or false"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, "sqlite://trivia.db?mode=rwc");
        assert_eq!(config.port, 5000);
        assert!(config.run_migrations);
        assert!(!config.seed_database);
        assert_eq!(config.search_match, SearchMatch::Bounded);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "8080"),
            ("SEED_DATABASE", "true"),
            ("SEARCH_MATCH", "substring"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.port, 8080);
        assert!(config.seed_database);
        assert_eq!(config.search_match, SearchMatch::Substring);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_garbage() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("SEED_DATABASE", "maybe")]).is_err());
        assert!(config_from(&[("SEARCH_MATCH", "fuzzy")]).is_err());
    }
}
