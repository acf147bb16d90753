use crate::domain::entities::quote::Quote;
use crate::domain::error::DomainError;
use crate::domain::ports::quote_store::QuoteStore;
use crate::domain::ports::remote_source::RemoteSource;
use crate::domain::values::merge::resolve;
use std::sync::Arc;

pub struct AddQuoteUseCase {
    store: Arc<dyn QuoteStore>,
    remote: Arc<dyn RemoteSource>,
}

impl AddQuoteUseCase {
    pub fn new(store: Arc<dyn QuoteStore>, remote: Arc<dyn RemoteSource>) -> Self {
        Self { store, remote }
    }

    /// Adding a quote whose text already exists replaces the stored record.
    pub async fn execute(
        &self,
        text: String,
        category: String,
        publish: bool,
    ) -> Result<Quote, DomainError> {
        let quote = Quote::new(text, category)?;
        let local = self.store.read()?;
        let outcome = resolve(&local, std::slice::from_ref(&quote));
        self.store.write(&outcome.quotes)?;
        let replaced = outcome.added == 0;
        tracing::info!(category = %quote.category, replaced, "quote added");

        // The quote is already stored; a failed upload is only reported.
        if publish {
            if let Err(e) = self.remote.publish(&quote).await {
                tracing::warn!(source = self.remote.name(), error = %e, "failed to publish quote");
            }
        }

        Ok(quote)
    }
}
