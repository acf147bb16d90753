use crate::domain::error::DomainError;
use crate::domain::ports::quote_store::QuoteStore;
use crate::domain::ports::remote_source::RemoteSource;
use crate::domain::ports::settings_store::{SettingsStore, LAST_SYNC_AT};
use crate::domain::values::merge::resolve;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Result of one sync round.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub source: String,
    pub fetched: usize,
    pub added: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub dropped: usize,
    pub total: usize,
    pub synced_at: DateTime<Utc>,
}

impl SyncReport {
    pub fn has_conflicts(&self) -> bool {
        self.updated > 0
    }
}

/// How a watch loop ended.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WatchSummary {
    pub rounds: u32,
    pub failures: u32,
}

pub struct SyncUseCase {
    store: Arc<dyn QuoteStore>,
    settings: Arc<dyn SettingsStore>,
    remote: Arc<dyn RemoteSource>,
}

impl SyncUseCase {
    pub fn new(
        store: Arc<dyn QuoteStore>,
        settings: Arc<dyn SettingsStore>,
        remote: Arc<dyn RemoteSource>,
    ) -> Self {
        Self {
            store,
            settings,
            remote,
        }
    }

    /// Fetch, merge with remote precedence, write back. Nothing is written
    /// when the fetch fails.
    pub async fn execute(&self) -> Result<SyncReport, DomainError> {
        let remote = self.remote.fetch().await?;
        let local = self.store.read()?;
        let outcome = resolve(&local, &remote);
        self.store.write(&outcome.quotes)?;

        let synced_at = Utc::now();
        self.settings.set(LAST_SYNC_AT, &synced_at.to_rfc3339())?;

        let conflicts = outcome.has_conflicts();
        let report = SyncReport {
            source: self.remote.name().to_string(),
            fetched: remote.len(),
            added: outcome.added,
            updated: outcome.updated,
            unchanged: outcome.unchanged,
            dropped: outcome.dropped,
            total: outcome.quotes.len(),
            synced_at,
        };
        if conflicts {
            tracing::info!(updated = report.updated, "conflicts resolved in favour of remote");
        }
        tracing::info!(
            source = %report.source,
            fetched = report.fetched,
            added = report.added,
            total = report.total,
            "sync complete"
        );
        Ok(report)
    }

    pub fn last_synced_at(&self) -> Result<Option<DateTime<Utc>>, DomainError> {
        Ok(self
            .settings
            .get(LAST_SYNC_AT)?
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc)))
    }

    /// Sync every `interval` until `shutdown` resolves or `max_rounds` rounds
    /// have run. The first round starts immediately; failed rounds are logged
    /// and the loop carries on.
    pub async fn watch<F>(
        &self,
        interval: Duration,
        max_rounds: Option<u32>,
        shutdown: F,
    ) -> WatchSummary
    where
        F: Future<Output = ()>,
    {
        let mut summary = WatchSummary::default();
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            if max_rounds.is_some_and(|max| summary.rounds >= max) {
                break;
            }
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!(rounds = summary.rounds, "watch stopped");
                    break;
                }
                _ = ticker.tick() => {
                    summary.rounds += 1;
                    if let Err(e) = self.execute().await {
                        summary.failures += 1;
                        tracing::warn!(round = summary.rounds, error = %e, "sync round failed");
                    }
                }
            }
        }
        summary
    }
}
