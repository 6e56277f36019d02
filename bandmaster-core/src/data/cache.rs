//! Time-boxed memo cache over a price-history provider.
//!
//! Repeated analysis of the same symbol inside a short window should not
//! hammer the upstream feed. Entries expire after a TTL; `force_refresh`
//! bypasses the cache for one call and stores the fresh result.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::data::provider::{DataError, PriceHistoryProvider};
use crate::domain::PriceBar;

struct Entry {
    // None is cached too: an unknown symbol stays unknown for the TTL.
    bars: Option<Vec<PriceBar>>,
    fetched_at: Instant,
}

/// TTL cache wrapping a [`PriceHistoryProvider`].
pub struct CachedHistory<P> {
    inner: P,
    ttl: Duration,
    entries: Mutex<HashMap<(String, u32), Entry>>,
}

impl<P: PriceHistoryProvider> CachedHistory<P> {
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch through the cache. `force_refresh` skips the lookup but
    /// still updates the stored entry.
    pub fn fetch_history(
        &self,
        symbol: &str,
        days: u32,
        force_refresh: bool,
    ) -> Result<Option<Vec<PriceBar>>, DataError> {
        let key = (symbol.to_string(), days);

        if !force_refresh {
            let entries = self.entries.lock().unwrap();
            if let Some(entry) = entries.get(&key) {
                if entry.fetched_at.elapsed() < self.ttl {
                    tracing::debug!(symbol, days, "price history cache hit");
                    return Ok(entry.bars.clone());
                }
                tracing::debug!(symbol, days, "price history cache expired");
            }
        }

        tracing::debug!(symbol, days, force_refresh, "price history cache miss");
        let bars = self.inner.fetch_history(symbol, days)?;

        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key,
            Entry {
                bars: bars.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(bars)
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
