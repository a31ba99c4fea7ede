/// Per-request cache directives for [`ApiClient::get`](super::ApiClient::get).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOptions {
    /// Event ids this response is registered under. Raising any of them
    /// expires the cached response.
    pub expire_on_events: Vec<String>,
    /// Whether the request may be served from cache.
    pub allow_cache_read: bool,
    /// Whether the response may be stored in cache.
    pub allow_cache_write: bool,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            expire_on_events: Vec::new(),
            allow_cache_read: true,
            allow_cache_write: true,
        }
    }
}

impl CacheOptions {
    /// Cache options registered under a single expire event.
    pub fn expire_on(event: impl Into<String>) -> Self {
        Self {
            expire_on_events: vec![event.into()],
            ..Self::default()
        }
    }

    /// Cache options that bypass the cache entirely, for responses the
    /// server must always compute fresh.
    pub fn uncached() -> Self {
        Self {
            expire_on_events: Vec::new(),
            allow_cache_read: false,
            allow_cache_write: false,
        }
    }
}
