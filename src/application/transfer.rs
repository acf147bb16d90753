use crate::domain::error::DomainError;
use crate::domain::ports::quote_store::QuoteStore;
use crate::domain::values::merge::resolve;
use crate::infrastructure::transfer::json_file;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    /// Records in the file that had the `{text, category}` shape.
    pub read: usize,
    pub added: usize,
    pub updated: usize,
    /// Wrong-shaped or blank records left out.
    pub skipped: usize,
    pub total: usize,
}

pub struct TransferUseCase {
    store: Arc<dyn QuoteStore>,
}

impl TransferUseCase {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    /// Imported records take precedence over stored ones with the same text.
    pub fn import(&self, path: &Path) -> Result<ImportReport, DomainError> {
        let file = json_file::read_quotes(path)?;
        let local = self.store.read()?;
        let outcome = resolve(&local, &file.quotes);
        self.store.write(&outcome.quotes)?;

        let report = ImportReport {
            read: file.quotes.len(),
            added: outcome.added,
            updated: outcome.updated,
            skipped: file.skipped + outcome.dropped,
            total: outcome.quotes.len(),
        };
        tracing::info!(path = %path.display(), added = report.added, updated = report.updated, "quotes imported");
        Ok(report)
    }

    pub fn export(&self, path: &Path) -> Result<usize, DomainError> {
        let quotes = self.store.read()?;
        json_file::write_quotes(path, &quotes)?;
        tracing::info!(path = %path.display(), count = quotes.len(), "quotes exported");
        Ok(quotes.len())
    }

    pub fn export_string(&self) -> Result<String, DomainError> {
        json_file::render_quotes(&self.store.read()?)
    }
}
