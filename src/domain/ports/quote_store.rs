use crate::domain::entities::quote::Quote;
use crate::domain::error::DomainError;

/// Persistent home of the quote collection. Writes replace the whole
/// collection; order is preserved between `write` and `read`.
pub trait QuoteStore: Send + Sync {
    fn read(&self) -> Result<Vec<Quote>, DomainError>;
    fn write(&self, quotes: &[Quote]) -> Result<(), DomainError>;
}
