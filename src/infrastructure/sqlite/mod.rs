pub mod migrations;
pub mod quote_store;
pub mod settings_store;

use crate::domain::error::DomainError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// One connection shared by every store, so `:memory:` databases see a single schema.
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Open (or create) the database at `path` and bring its schema up to date.
pub fn open(path: &str) -> Result<SharedConnection, DomainError> {
    let conn = Connection::open(path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
    if path != ":memory:" {
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
    }
    migrations::run_migrations(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}
