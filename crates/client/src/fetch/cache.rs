//! In-memory response cache with LRU eviction and event-driven expiry.

use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use lru::LruCache;
use serde_json::Value;

/// A cached response with optional expiration.
#[derive(Debug, Clone)]
struct CachedResponse {
    value: Value,
    expires_at: Option<Instant>,
}

impl CachedResponse {
    fn new(value: Value, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    /// Returns true if this response has outlived its TTL.
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() > exp)
    }
}

/// Thread-safe response store keyed by URL.
///
/// Each stored response is registered under the expire events named by the
/// request's cache options; raising any of those events drops the response
/// so the next read refetches. Expired responses are cleaned up lazily on
/// access.
///
/// Uses a `std::sync::Mutex` rather than an async lock because
/// `raise_expire_events` must stay synchronous. The lock is never held
/// across an await point.
#[derive(Debug)]
pub(crate) struct ResponseCache {
    inner: Mutex<CacheInner>,
    ttl: Option<Duration>,
}

#[derive(Debug)]
struct CacheInner {
    store: LruCache<String, CachedResponse>,
    /// Maps event id -> URLs registered under it.
    ///
    /// Registrations are not rebalanced on overwrite or LRU eviction; a
    /// stale registration only costs an extra refetch when its event fires.
    events: HashMap<String, HashSet<String>>,
}

impl ResponseCache {
    /// Creates a cache holding at most `capacity` responses, each living at
    /// most `ttl` when one is given.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub(crate) fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        let capacity = NonZeroUsize::new(capacity).expect("capacity must be > 0");
        Self {
            inner: Mutex::new(CacheInner {
                store: LruCache::new(capacity),
                events: HashMap::new(),
            }),
            ttl,
        }
    }

    /// Returns the fresh response cached for `url`, if any.
    pub(crate) fn get(&self, url: &str) -> Option<Value> {
        let mut inner = self.inner.lock().expect("response cache lock poisoned");
        match inner.store.get(url) {
            // Expired entries are cleaned up lazily: LRU eviction or an
            // expire event reclaims them eventually.
            Some(response) if response.is_expired() => None,
            Some(response) => Some(response.value.clone()),
            None => None,
        }
    }

    /// Stores a response for `url`, registered under `events`.
    pub(crate) fn put(&self, url: &str, value: Value, events: &[String]) {
        let mut inner = self.inner.lock().expect("response cache lock poisoned");
        let response = CachedResponse::new(value, self.ttl);
        inner.store.put(url.to_string(), response);
        for event in events {
            inner
                .events
                .entry(event.clone())
                .or_default()
                .insert(url.to_string());
        }
    }

    /// Drops every response registered under any of the given event ids.
    pub(crate) fn expire(&self, events: &[String]) {
        let mut inner = self.inner.lock().expect("response cache lock poisoned");
        for event in events {
            let Some(urls) = inner.events.remove(event) else {
                continue;
            };
            for url in urls {
                inner.store.pop(&url);
            }
        }
    }
}
