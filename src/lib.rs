pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::add_quote::AddQuoteUseCase;
use crate::application::browse::BrowseUseCase;
use crate::application::sync::{SyncReport, SyncUseCase, WatchSummary};
use crate::application::transfer::{ImportReport, TransferUseCase};
use crate::config::Config;
use crate::domain::entities::quote::Quote;
use crate::domain::error::DomainError;
use crate::domain::ports::quote_store::QuoteStore;
use crate::domain::ports::remote_source::RemoteSource;
use crate::domain::ports::settings_store::SettingsStore;
use crate::domain::values::category::CategoryFilter;
use crate::infrastructure::remote::placeholder::PlaceholderSource;
use crate::infrastructure::sqlite::quote_store::SqliteQuoteStore;
use crate::infrastructure::sqlite::settings_store::SqliteSettingsStore;
use chrono::{DateTime, Utc};
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub struct QuoteSync {
    add_uc: AddQuoteUseCase,
    browse_uc: BrowseUseCase,
    transfer_uc: TransferUseCase,
    sync_uc: SyncUseCase,
}

impl QuoteSync {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let remote: Arc<dyn RemoteSource> = Arc::new(PlaceholderSource::new(
            config.remote_url.clone(),
            config.remote_limit,
            config.remote_category.clone(),
        ));
        Self::with_remote(&config.db_path, remote)
    }

    pub fn with_remote(db_path: &str, remote: Arc<dyn RemoteSource>) -> Result<Self, DomainError> {
        let conn = infrastructure::sqlite::open(db_path)?;
        let store: Arc<dyn QuoteStore> = Arc::new(SqliteQuoteStore::new(conn.clone()));
        let settings: Arc<dyn SettingsStore> = Arc::new(SqliteSettingsStore::new(conn));
        Ok(Self::with_stores(store, settings, remote))
    }

    pub fn with_stores(
        store: Arc<dyn QuoteStore>,
        settings: Arc<dyn SettingsStore>,
        remote: Arc<dyn RemoteSource>,
    ) -> Self {
        Self {
            add_uc: AddQuoteUseCase::new(store.clone(), remote.clone()),
            browse_uc: BrowseUseCase::new(store.clone(), settings.clone()),
            transfer_uc: TransferUseCase::new(store.clone()),
            sync_uc: SyncUseCase::new(store, settings, remote),
        }
    }

    // Delegating methods
    pub async fn add_quote(
        &self,
        text: String,
        category: String,
        publish: bool,
    ) -> Result<Quote, DomainError> {
        self.add_uc.execute(text, category, publish).await
    }

    pub fn random_quote(
        &self,
        filter: Option<CategoryFilter>,
    ) -> Result<Option<Quote>, DomainError> {
        self.browse_uc.random(filter, &mut rand::thread_rng())
    }

    pub fn random_quote_with<R: rand::Rng + ?Sized>(
        &self,
        filter: Option<CategoryFilter>,
        rng: &mut R,
    ) -> Result<Option<Quote>, DomainError> {
        self.browse_uc.random(filter, rng)
    }

    pub fn list(&self, filter: Option<CategoryFilter>) -> Result<Vec<Quote>, DomainError> {
        self.browse_uc.list(filter)
    }

    pub fn categories(&self) -> Result<Vec<String>, DomainError> {
        self.browse_uc.categories()
    }

    pub fn import(&self, path: &Path) -> Result<ImportReport, DomainError> {
        self.transfer_uc.import(path)
    }

    pub fn export(&self, path: &Path) -> Result<usize, DomainError> {
        self.transfer_uc.export(path)
    }

    pub fn export_json(&self) -> Result<String, DomainError> {
        self.transfer_uc.export_string()
    }

    pub async fn sync(&self) -> Result<SyncReport, DomainError> {
        self.sync_uc.execute().await
    }

    pub fn last_synced_at(&self) -> Result<Option<DateTime<Utc>>, DomainError> {
        self.sync_uc.last_synced_at()
    }

    pub async fn watch<F>(
        &self,
        interval: Duration,
        max_rounds: Option<u32>,
        shutdown: F,
    ) -> WatchSummary
    where
        F: Future<Output = ()>,
    {
        self.sync_uc.watch(interval, max_rounds, shutdown).await
    }
}
