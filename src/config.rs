use std::time::Duration;

use crate::error::{Error, Result};

/// Settings for a [`Db`](crate::Db) handle.
#[derive(Debug, Default, Clone)]
pub struct Config {
    pub log: LogConfig,
}

impl Config {
    pub fn log(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }
}

/// What the executor logs through `tracing`.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Every executed query at `debug`.
    pub queries: bool,
    /// Failed queries at `error`.
    pub errors: bool,
    /// Queries slower than this at `warn`.
    pub slow_query_threshold: Option<Duration>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            queries: true,
            errors: true,
            slow_query_threshold: None,
        }
    }
}

impl LogConfig {
    pub fn disabled() -> Self {
        Self {
            queries: false,
            errors: false,
            slow_query_threshold: None,
        }
    }

    pub fn slow_query_threshold(mut self, threshold: Duration) -> Self {
        self.slow_query_threshold = Some(threshold);
        self
    }
}

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const MAX_CONNECTIONS: &str = "STRATA_MAX_CONNECTIONS";
pub const MIN_CONNECTIONS: &str = "STRATA_MIN_CONNECTIONS";
pub const ACQUIRE_TIMEOUT_SECS: &str = "STRATA_ACQUIRE_TIMEOUT_SECS";

/// Pool settings used by the sqlx driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
}

impl ConnectionConfig {
    pub fn new<T: Into<String>>(url: T) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 0,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the settings through `lookup`, missing optional keys keep
    /// their defaults.
    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let url = lookup(DATABASE_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{DATABASE_URL} is not set")))?;
        let mut config = Self::new(url);
        if let Some(max) = parse(&lookup, MAX_CONNECTIONS)? {
            config.max_connections = max;
        }
        if let Some(min) = parse(&lookup, MIN_CONNECTIONS)? {
            config.min_connections = min;
        }
        if let Some(secs) = parse(&lookup, ACQUIRE_TIMEOUT_SECS)? {
            config.acquire_timeout = Duration::from_secs(secs);
        }
        if config.min_connections > config.max_connections {
            return Err(Error::Config(format!(
                "{MIN_CONNECTIONS} ({}) is greater than {MAX_CONNECTIONS} ({})",
                config.min_connections, config.max_connections
            )));
        }
        Ok(config)
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

fn parse<L, T>(lookup: &L, key: &str) -> Result<Option<T>>
where
    L: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{key} has an invalid value `{raw}`"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ConnectionConfig::from_lookup(lookup(&[(DATABASE_URL, "sqlite::memory:")])).unwrap();
        assert_eq!(ConnectionConfig::new("sqlite::memory:"), config);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ConnectionConfig::from_lookup(lookup(&[
            (DATABASE_URL, "postgres://localhost/app"),
            (MAX_CONNECTIONS, "4"),
            (MIN_CONNECTIONS, " 1 "),
            (ACQUIRE_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();
        assert_eq!(4, config.max_connections);
        assert_eq!(1, config.min_connections);
        assert_eq!(Duration::from_secs(5), config.acquire_timeout);
    }

    #[test]
    fn test_from_lookup_errors() {
        assert!(matches!(
            ConnectionConfig::from_lookup(lookup(&[])),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ConnectionConfig::from_lookup(lookup(&[(DATABASE_URL, "sqlite::memory:"), (MAX_CONNECTIONS, "many")])),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ConnectionConfig::from_lookup(lookup(&[
                (DATABASE_URL, "sqlite::memory:"),
                (MAX_CONNECTIONS, "1"),
                (MIN_CONNECTIONS, "2"),
            ])),
            Err(Error::Config(_))
        ));
    }
}
