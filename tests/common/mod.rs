//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use quotesync::domain::entities::quote::Quote;
use quotesync::domain::error::RemoteError;
use quotesync::domain::ports::remote_source::RemoteSource;
use quotesync::QuoteSync;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Remote source serving a fixed set of quotes.
#[derive(Default)]
pub struct FixtureRemote {
    pub quotes: Mutex<Vec<Quote>>,
    pub published: Mutex<Vec<Quote>>,
    pub fail: AtomicBool,
    pub fetches: AtomicUsize,
}

impl FixtureRemote {
    pub fn serving(quotes: Vec<Quote>) -> Arc<Self> {
        Arc::new(Self {
            quotes: Mutex::new(quotes),
            ..Default::default()
        })
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl RemoteSource for FixtureRemote {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch(&self) -> Result<Vec<Quote>, RemoteError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(RemoteError::Status(503));
        }
        Ok(self.quotes.lock().unwrap().clone())
    }

    async fn publish(&self, quote: &Quote) -> Result<(), RemoteError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RemoteError::Network("connection refused".into()));
        }
        self.published.lock().unwrap().push(quote.clone());
        Ok(())
    }
}

pub fn setup_with(remote: Arc<FixtureRemote>) -> QuoteSync {
    QuoteSync::with_remote(":memory:", remote).unwrap()
}

pub fn setup() -> QuoteSync {
    setup_with(FixtureRemote::serving(vec![]))
}

pub fn q(text: &str, category: &str) -> Quote {
    Quote::new(text, category).unwrap()
}
