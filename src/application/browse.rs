use crate::domain::entities::quote::Quote;
use crate::domain::error::DomainError;
use crate::domain::ports::quote_store::QuoteStore;
use crate::domain::ports::settings_store::{SettingsStore, LAST_FILTER};
use crate::domain::values::category::{distinct_categories, CategoryFilter};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Read-side operations: random pick, filtered listing, category list.
pub struct BrowseUseCase {
    store: Arc<dyn QuoteStore>,
    settings: Arc<dyn SettingsStore>,
}

impl BrowseUseCase {
    pub fn new(store: Arc<dyn QuoteStore>, settings: Arc<dyn SettingsStore>) -> Self {
        Self { store, settings }
    }

    /// An explicit filter is remembered; without one the last remembered
    /// filter applies, falling back to all categories.
    pub fn effective_filter(
        &self,
        filter: Option<CategoryFilter>,
    ) -> Result<CategoryFilter, DomainError> {
        match filter {
            Some(f) => {
                self.settings.set(LAST_FILTER, &f.to_string())?;
                Ok(f)
            }
            None => Ok(self
                .settings
                .get(LAST_FILTER)?
                .and_then(|s| s.parse().ok())
                .unwrap_or_default()),
        }
    }

    pub fn list(&self, filter: Option<CategoryFilter>) -> Result<Vec<Quote>, DomainError> {
        let filter = self.effective_filter(filter)?;
        Ok(self
            .store
            .read()?
            .into_iter()
            .filter(|q| filter.matches(q))
            .collect())
    }

    /// Uniform pick among matching quotes; `None` when nothing matches.
    pub fn random<R: Rng + ?Sized>(
        &self,
        filter: Option<CategoryFilter>,
        rng: &mut R,
    ) -> Result<Option<Quote>, DomainError> {
        let candidates = self.list(filter)?;
        Ok(candidates.choose(rng).cloned())
    }

    pub fn categories(&self) -> Result<Vec<String>, DomainError> {
        Ok(distinct_categories(&self.store.read()?))
    }
}
