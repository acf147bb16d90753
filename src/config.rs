use crate::domain::error::DomainError;
use std::time::Duration;

pub const DEFAULT_DB_PATH: &str = "./quotes.db";
pub const DEFAULT_REMOTE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_REMOTE_LIMIT: usize = 10;
pub const DEFAULT_REMOTE_CATEGORY: &str = "Remote";
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 30;

/// Runtime settings, read from `QUOTESYNC_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub remote_url: String,
    pub remote_limit: usize,
    pub remote_category: String,
    pub sync_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.into(),
            remote_url: DEFAULT_REMOTE_URL.into(),
            remote_limit: DEFAULT_REMOTE_LIMIT,
            remote_category: DEFAULT_REMOTE_CATEGORY.into(),
            sync_interval: Duration::from_secs(DEFAULT_SYNC_INTERVAL_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let interval_secs = match lookup("QUOTESYNC_SYNC_INTERVAL_SECS") {
            Some(v) => parse_number::<u64>("QUOTESYNC_SYNC_INTERVAL_SECS", &v)?,
            None => DEFAULT_SYNC_INTERVAL_SECS,
        };
        if interval_secs == 0 {
            return Err(DomainError::InvalidInput(
                "QUOTESYNC_SYNC_INTERVAL_SECS must be at least 1".into(),
            ));
        }

        Ok(Self {
            db_path: lookup("QUOTESYNC_DB").unwrap_or(defaults.db_path),
            remote_url: lookup("QUOTESYNC_REMOTE_URL").unwrap_or(defaults.remote_url),
            remote_limit: match lookup("QUOTESYNC_REMOTE_LIMIT") {
                Some(v) => parse_number("QUOTESYNC_REMOTE_LIMIT", &v)?,
                None => defaults.remote_limit,
            },
            remote_category: lookup("QUOTESYNC_REMOTE_CATEGORY")
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or(defaults.remote_category),
            sync_interval: Duration::from_secs(interval_secs),
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, DomainError> {
    value
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidInput(format!("{name} must be a number, got '{value}'")))
}
