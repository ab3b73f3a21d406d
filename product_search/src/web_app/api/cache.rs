// web_app/api/cache.rs - In-memory query cache over a ProductSource
//
// Keyed by (search text, page). Policy:
// - a page is fresh for `stale_time`; stale pages are still served while
//   a refetch runs
// - at most one fetch per key is in flight
// - failed fetches are retried `retry` times with exponential backoff
//   before the entry is marked failed
// - there is no focus listener, so nothing refetches on window focus
//
// Time and sleeping come from a Runtime so tests can drive the clock.
// The entry map sits behind a mutex only to make the cache shareable
// through Leptos context; the lock is never held across an await.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::web_app::api::client::ProductSource;
use crate::web_app::config::SearchConfig;
use crate::web_app::error::Result;
use crate::web_app::model::{Product, QueryKey};

/// Clock and timer used by the cache
pub trait Runtime {
    fn now(&self) -> DateTime<Utc>;

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<R: Runtime + ?Sized> Runtime for &R {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachePolicy {
    pub stale_time: chrono::Duration,
    /// Additional attempts after the first failure
    pub retry: u32,
    pub retry_base_delay: Duration,
    pub max_retry_delay: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            stale_time: chrono::Duration::minutes(3),
            retry: 2,
            retry_base_delay: Duration::from_millis(1_000),
            max_retry_delay: Duration::from_millis(30_000),
        }
    }
}

impl From<&SearchConfig> for CachePolicy {
    fn from(config: &SearchConfig) -> Self {
        let defaults = Self::default();
        Self {
            // Only reachable with an unvalidated config
            stale_time: chrono::Duration::try_seconds(config.stale_time_secs)
                .unwrap_or(defaults.stale_time),
            retry: config.retry,
            retry_base_delay: Duration::from_millis(config.retry_base_delay_ms),
            max_retry_delay: Duration::from_millis(config.max_retry_delay_ms),
        }
    }
}

impl CachePolicy {
    /// Delay before retry number `retry_index` (0-based): base * 2^n, capped
    pub fn retry_delay(&self, retry_index: u32) -> Duration {
        let factor = 2_u32.saturating_pow(retry_index);
        self.retry_base_delay
            .saturating_mul(factor)
            .min(self.max_retry_delay)
    }
}

/// What the UI can know about one key at a point in time
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuerySnapshot {
    pub data: Option<Arc<Vec<Product>>>,
    pub is_fetching: bool,
    /// The last fetch failed after all retries
    pub is_error: bool,
    pub is_stale: bool,
}

impl QuerySnapshot {
    /// In flight with nothing to show for this key yet
    pub fn is_loading(&self) -> bool {
        self.is_fetching && self.data.is_none()
    }
}

#[derive(Clone, Debug, Default)]
struct CacheEntry {
    data: Option<Arc<Vec<Product>>>,
    updated_at: Option<DateTime<Utc>>,
    fetching: bool,
    failed: bool,
}

impl CacheEntry {
    fn is_stale(&self, now: DateTime<Utc>, stale_time: chrono::Duration) -> bool {
        match self.updated_at {
            Some(updated_at) => now - updated_at >= stale_time,
            None => true,
        }
    }

    fn snapshot(&self, now: DateTime<Utc>, stale_time: chrono::Duration) -> QuerySnapshot {
        QuerySnapshot {
            data: self.data.clone(),
            is_fetching: self.fetching,
            is_error: self.failed && !self.fetching,
            is_stale: self.is_stale(now, stale_time),
        }
    }
}

pub struct QueryCache<S, R> {
    source: S,
    runtime: R,
    policy: CachePolicy,
    entries: Mutex<HashMap<QueryKey, CacheEntry>>,
}

impl<S: ProductSource, R: Runtime> QueryCache<S, R> {
    pub fn new(source: S, runtime: R, policy: CachePolicy) -> Self {
        Self {
            source,
            runtime,
            policy,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn snapshot(&self, key: &QueryKey) -> QuerySnapshot {
        let now = self.runtime.now();
        self.entries
            .lock()
            .get(key)
            .map(|entry| entry.snapshot(now, self.policy.stale_time))
            .unwrap_or_default()
    }

    /// Missing or stale, and nobody is fetching it already
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        let now = self.runtime.now();
        match self.entries.lock().get(key) {
            Some(entry) => !entry.fetching && (entry.data.is_none() || entry.is_stale(now, self.policy.stale_time)),
            None => true,
        }
    }

    /// Serve from cache when fresh, otherwise fetch
    pub async fn ensure(&self, key: &QueryKey) -> QuerySnapshot {
        if self.needs_fetch(key) {
            self.fetch(key).await
        } else {
            tracing::debug!("Cache hit for {}", key);
            self.snapshot(key)
        }
    }

    /// Fetch `key` (with retries) and store the outcome.
    ///
    /// If a fetch for the same key is already running this returns the
    /// current snapshot without issuing another request.
    pub async fn fetch(&self, key: &QueryKey) -> QuerySnapshot {
        {
            let now = self.runtime.now();
            let mut entries = self.entries.lock();
            let entry = entries.entry(key.clone()).or_default();
            if entry.fetching {
                return entry.snapshot(now, self.policy.stale_time);
            }
            entry.fetching = true;
            entry.failed = false;
        }

        let result = self.fetch_with_retry(key).await;

        let now = self.runtime.now();
        let mut entries = self.entries.lock();
        let entry = entries.entry(key.clone()).or_default();
        entry.fetching = false;
        match result {
            Ok(products) => {
                tracing::info!("Cached {} products for {}", products.len(), key);
                entry.data = Some(Arc::new(products));
                entry.updated_at = Some(now);
                entry.failed = false;
            }
            // Previous data for the key, if any, is kept
            Err(_) => entry.failed = true,
        }
        entry.snapshot(now, self.policy.stale_time)
    }

    async fn fetch_with_retry(&self, key: &QueryKey) -> Result<Vec<Product>> {
        let mut retries = 0;
        loop {
            match self.source.fetch_page(key).await {
                Ok(products) => return Ok(products),
                Err(e) if retries < self.policy.retry => {
                    let delay = self.policy.retry_delay(retries);
                    retries += 1;
                    tracing::warn!(
                        "{} failed ({}), retry {}/{} in {:?}",
                        key,
                        e,
                        retries,
                        self.policy.retry,
                        delay
                    );
                    self.runtime.sleep(delay).await;
                }
                Err(e) => {
                    tracing::error!("{} failed after {} attempts: {}", key, retries + 1, e);
                    return Err(e);
                }
            }
        }
    }
}
