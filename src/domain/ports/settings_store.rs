use crate::domain::error::DomainError;

pub const LAST_FILTER: &str = "last_filter";
pub const LAST_SYNC_AT: &str = "last_sync_at";

/// Small key/value store for user preferences and bookkeeping.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
