use async_trait::async_trait;
use serde_json::Value;

use super::{CacheOptions, Result};

/// Contract for the caching HTTP client the REST repositories delegate to.
///
/// Implementations own transport and response caching wholesale.
/// Repositories only describe which expire events a cached read should be
/// registered under, and raise those events after successful writes.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Performs a cached GET for a JSON document.
    ///
    /// When `cache.allow_cache_read` holds and a fresh response is cached
    /// for `url`, it is returned without network I/O. When
    /// `cache.allow_cache_write` holds, the fetched response is stored
    /// under `url`, registered under `cache.expire_on_events`.
    async fn get(&self, url: &str, cache: CacheOptions) -> Result<Value>;

    /// Performs a POST with a JSON body. Returns the response body, if any.
    /// Never cached.
    async fn post(&self, url: &str, body: &Value) -> Result<Option<Value>>;

    /// Performs a PUT with a JSON body. Returns the response body, if any.
    /// Never cached.
    async fn put(&self, url: &str, body: &Value) -> Result<Option<Value>>;

    /// Performs a DELETE.
    async fn delete(&self, url: &str) -> Result<()>;

    /// Synchronously marks every cached response registered under any of
    /// the given event ids as stale. The next `get` for an affected URL
    /// fetches fresh data.
    fn raise_expire_events(&self, events: &[String]);
}
