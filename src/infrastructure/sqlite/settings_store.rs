use crate::domain::error::DomainError;
use crate::domain::ports::settings_store::SettingsStore;
use super::SharedConnection;
use rusqlite::{params, OptionalExtension};

pub struct SqliteSettingsStore {
    conn: SharedConnection,
}

impl SqliteSettingsStore {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

impl SettingsStore for SqliteSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let value = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map_err(|e| DomainError::Database(format!("Failed to save setting {key}: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sqlite::open;

    #[test]
    fn test_get_set_overwrite() {
        let conn = open(":memory:").unwrap();
        let s = SqliteSettingsStore::new(conn);
        assert_eq!(s.get("missing").unwrap(), None);
        s.set("k", "v1").unwrap();
        s.set("k", "v2").unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("v2"));
    }
}
