use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde_json::Value;

use super::error::Result;
use super::query::Query;
use super::RecordSource;

struct CacheEntry {
    stored_at: Instant,
    rows: Vec<Value>,
}

/// Memoizes query results for a fixed time-to-live.
///
/// Entries are keyed by [`Query::cache_key`], so two pages asking for the
/// same collection with the same parameters share one backend round trip.
/// A zero TTL disables caching entirely. Failed queries and single-row
/// misses are never stored.
#[derive(Clone)]
pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
}

impl<S> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Fresh rows for `key`, dropping the entry if it has expired.
    fn lookup(&self, key: &str) -> Option<Vec<Value>> {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match map.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.rows.clone()),
            Some(_) => {
                map.remove(key);
                None
            }
            None => None,
        }
    }

    /// Insert `rows` and drop every expired entry, so the map never holds
    /// more than one TTL's worth of distinct queries.
    fn store(&self, key: String, rows: Vec<Value>) {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let ttl = self.ttl;
        map.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        map.insert(key, CacheEntry { stored_at: Instant::now(), rows });
    }
}

impl<S: RecordSource> RecordSource for CachedSource<S> {
    async fn fetch(&self, query: &Query) -> Result<Vec<Value>> {
        if !self.is_enabled() {
            return self.inner.fetch(query).await;
        }

        let key = query.cache_key();
        if let Some(rows) = self.lookup(&key) {
            log::debug!("cache hit for {key}");
            return Ok(rows);
        }

        let rows = self.inner.fetch(query).await?;
        // a missing single row is not worth remembering
        if !(query.expects_single() && rows.is_empty()) {
            self.store(key, rows.clone());
        }
        Ok(rows)
    }
}
