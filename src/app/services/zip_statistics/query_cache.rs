//! Memoization of average market value per ZIP code
//!
//! Each ZIP code owns a slot guarded by its own async mutex. The first caller
//! for a ZIP code holds the slot while it computes, so concurrent callers for
//! the same ZIP code wait and then read the stored value instead of computing
//! it again. Callers for different ZIP codes never block each other.
//!
//! Entries are never invalidated: once a ZIP code has a value it is served for
//! the lifetime of the cache, even if the underlying file changes.

use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

use crate::Result;

type Slot = Arc<Mutex<Option<i64>>>;

/// Counters describing cache activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

#[derive(Debug, Default)]
pub struct MarketValueCache {
    slots: Mutex<HashMap<String, Slot>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
    entries: AtomicUsize,
}

impl MarketValueCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `zip_code`, computing it at most once
    ///
    /// A failed computation stores nothing and the error is returned to the
    /// caller; the next request for that ZIP code computes again.
    pub async fn get_or_compute<F, Fut>(&self, zip_code: &str, compute: F) -> Result<i64>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<i64>>,
    {
        let slot = self.slot(zip_code).await;
        let mut value = slot.lock().await;

        if let Some(cached) = *value {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Market value cache hit for ZIP {}", zip_code);
            return Ok(cached);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Market value cache miss for ZIP {}", zip_code);

        let computed = compute().await?;
        *value = Some(computed);
        self.entries.fetch_add(1, Ordering::Relaxed);
        Ok(computed)
    }

    /// Look up a stored value without computing
    ///
    /// Returns `None` while another caller is still computing the entry.
    pub async fn get(&self, zip_code: &str) -> Option<i64> {
        let slot = self.slots.lock().await.get(zip_code).cloned()?;
        let value = slot.try_lock().ok()?;
        *value
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.load(Ordering::Relaxed),
        }
    }

    async fn slot(&self, zip_code: &str) -> Slot {
        let mut slots = self.slots.lock().await;
        Arc::clone(slots.entry(zip_code.to_string()).or_default())
    }
}
