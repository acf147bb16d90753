use crate::domain::entities::quote::Quote;
use crate::domain::error::DomainError;
use crate::domain::ports::quote_store::QuoteStore;
use super::SharedConnection;
use rusqlite::params;

pub struct SqliteQuoteStore {
    conn: SharedConnection,
}

impl SqliteQuoteStore {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

impl QuoteStore for SqliteQuoteStore {
    fn read(&self) -> Result<Vec<Quote>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn.prepare("SELECT text, category FROM quotes ORDER BY position")?;
        let quotes = stmt
            .query_map([], |row| {
                Ok(Quote {
                    text: row.get(0)?,
                    category: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(quotes)
    }

    fn write(&self, quotes: &[Quote]) -> Result<(), DomainError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM quotes", [])?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO quotes (position, text, category) VALUES (?1, ?2, ?3)")?;
            for (position, quote) in quotes.iter().enumerate() {
                stmt.execute(params![position as i64, quote.text, quote.category])
                    .map_err(|e| DomainError::Database(format!("Failed to write quote: {e}")))?;
            }
        }
        tx.commit()?;
        tracing::debug!(count = quotes.len(), "quote collection written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sqlite::open;

    fn store() -> SqliteQuoteStore {
        let conn = open(":memory:").unwrap();
        SqliteQuoteStore::new(conn)
    }

    #[test]
    fn test_empty_store_reads_empty() {
        assert!(store().read().unwrap().is_empty());
    }

    #[test]
    fn test_write_replaces_and_keeps_order() {
        let s = store();
        let first = vec![
            Quote::new("z last alphabetically", "A").unwrap(),
            Quote::new("a first alphabetically", "B").unwrap(),
        ];
        s.write(&first).unwrap();
        assert_eq!(s.read().unwrap(), first);

        let second = vec![Quote::new("only", "C").unwrap()];
        s.write(&second).unwrap();
        assert_eq!(s.read().unwrap(), second);
    }
}
