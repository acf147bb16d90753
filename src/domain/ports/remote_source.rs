use crate::domain::entities::quote::Quote;
use crate::domain::error::RemoteError;
use async_trait::async_trait;

/// External source of quotes that the local collection is synced against.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Fetch the current remote set. Records are not validated.
    async fn fetch(&self) -> Result<Vec<Quote>, RemoteError>;

    /// Send a locally created quote upstream.
    async fn publish(&self, quote: &Quote) -> Result<(), RemoteError>;
}
