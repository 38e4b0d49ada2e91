//! Rate Limit Store
//!
//! Storage for fixed-window request counters, keyed by client identifier.
//!
//! The `RateLimitStore` trait keeps the limiter independent of where the
//! counters live. `InMemoryRateLimitStore` is the process-local backend: a
//! sharded `DashMap` whose expired entries are removed by a periodic sweep
//! (see [`spawn_sweeper`]), so memory stays bounded by the number of
//! clients seen within one window.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::task::JoinHandle;

/// Counter state for one client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitEntry {
    /// Requests seen in the current window, including rejected ones
    pub count: u32,
    /// End of the current window
    pub reset_at: DateTime<Utc>,
}

impl RateLimitEntry {
    fn fresh(now: DateTime<Utc>, window: chrono::Duration) -> Self {
        Self {
            count: 1,
            reset_at: now + window,
        }
    }

    /// A window is over once `now` is strictly past its reset time.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.reset_at
    }
}

/// Backend for fixed-window counters.
///
/// `record_hit` must apply the whole read-modify-write for a key atomically.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Count one request for `key` and return the updated entry.
    ///
    /// Starts a new window with a count of 1 when the key is unknown or its
    /// window has expired; otherwise increments the count.
    async fn record_hit(&self, key: &str, now: DateTime<Utc>, window: Duration) -> RateLimitEntry;

    /// Current entry for `key`, without counting a request.
    async fn get(&self, key: &str) -> Option<RateLimitEntry>;

    /// Forget `key` entirely.
    async fn remove(&self, key: &str);

    /// Drop every entry whose window ended before `now`. Returns the number removed.
    async fn purge_expired(&self, now: DateTime<Utc>) -> usize;

    /// Number of tracked keys.
    async fn len(&self) -> usize;
}

/// Process-local [`RateLimitStore`].
#[derive(Debug, Default)]
pub struct InMemoryRateLimitStore {
    entries: DashMap<String, RateLimitEntry>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateLimitStore for InMemoryRateLimitStore {
    async fn record_hit(&self, key: &str, now: DateTime<Utc>, window: Duration) -> RateLimitEntry {
        let window = chrono::Duration::milliseconds(window.as_millis() as i64);

        // The shard lock is held for the whole update.
        let mut entry = self
            .entries
            .entry(key.to_owned())
            .or_insert_with(|| RateLimitEntry {
                count: 0,
                reset_at: now + window,
            });

        if entry.is_expired(now) {
            *entry = RateLimitEntry::fresh(now, window);
        } else {
            entry.count = entry.count.saturating_add(1);
        }

        *entry
    }

    async fn get(&self, key: &str) -> Option<RateLimitEntry> {
        self.entries.get(key).map(|entry| *entry)
    }

    async fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.entries.len())
    }

    async fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Periodically purge expired entries from `store`.
///
/// The returned handle is aborted during shutdown.
pub fn spawn_sweeper(store: Arc<dyn RateLimitStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let removed = store.purge_expired(Utc::now()).await;
            if removed > 0 {
                tracing::debug!(removed, "Evicted expired rate limit entries");
            }
        }
    })
}
