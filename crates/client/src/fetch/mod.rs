//! Caching JSON-over-HTTP client.

mod cache;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use restrepo_core::api::{ApiClient, ApiError, CacheOptions, Result};

use self::cache::ResponseCache;

/// Default maximum number of cached responses.
const DEFAULT_CAPACITY: usize = 1024;

/// Caching HTTP client for JSON REST APIs.
///
/// Successful GET responses are cached per URL and registered under the
/// expire events named in the request's [`CacheOptions`]; raising any of
/// those events via [`raise_expire_events`](ApiClient::raise_expire_events)
/// drops the affected responses so the next read fetches fresh data.
/// Writes (POST/PUT/DELETE) are never cached.
///
/// Cloning is cheap; clones share the underlying connection pool and cache.
#[derive(Debug, Clone)]
pub struct ApiFetch {
    client: reqwest::Client,
    cache: Arc<ResponseCache>,
}

impl Default for ApiFetch {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiFetch {
    /// Creates a client with the default cache capacity and no TTL.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for configuring cache capacity, TTL, and the
    /// underlying `reqwest::Client`.
    pub fn builder() -> ApiFetchBuilder {
        ApiFetchBuilder::default()
    }

    /// Handle GET responses.
    async fn handle_response(&self, url: &str, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))
        } else if status.as_u16() == 404 {
            Err(ApiError::NotFound {
                url: url.to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Handle write responses, where an empty body is valid.
    async fn handle_write_response(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> Result<Option<Value>> {
        let status = response.status();
        if status.is_success() {
            let bytes = response
                .bytes()
                .await
                .map_err(|err| ApiError::Request(err.to_string()))?;
            if bytes.is_empty() {
                Ok(None)
            } else {
                serde_json::from_slice(&bytes)
                    .map(Some)
                    .map_err(|err| ApiError::Decode(err.to_string()))
            }
        } else if status.as_u16() == 404 {
            Err(ApiError::NotFound {
                url: url.to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ApiClient for ApiFetch {
    async fn get(&self, url: &str, cache: CacheOptions) -> Result<Value> {
        if cache.allow_cache_read {
            if let Some(value) = self.cache.get(url) {
                tracing::trace!(%url, "cache hit");
                return Ok(value);
            }
            tracing::trace!(%url, "cache miss");
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| ApiError::Request(err.to_string()))?;
        let value = self.handle_response(url, response).await?;

        if cache.allow_cache_write {
            self.cache.put(url, value.clone(), &cache.expire_on_events);
        }

        Ok(value)
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Option<Value>> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::Request(err.to_string()))?;
        self.handle_write_response(url, response).await
    }

    async fn put(&self, url: &str, body: &Value) -> Result<Option<Value>> {
        let response = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::Request(err.to_string()))?;
        self.handle_write_response(url, response).await
    }

    async fn delete(&self, url: &str) -> Result<()> {
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|err| ApiError::Request(err.to_string()))?;
        self.handle_write_response(url, response).await?;
        Ok(())
    }

    fn raise_expire_events(&self, events: &[String]) {
        tracing::debug!(?events, "expiring cached responses");
        self.cache.expire(events);
    }
}

/// Builder for [`ApiFetch`].
#[derive(Debug, Default)]
pub struct ApiFetchBuilder {
    client: Option<reqwest::Client>,
    capacity: Option<usize>,
    ttl: Option<Duration>,
}

impl ApiFetchBuilder {
    /// Uses a caller-supplied `reqwest::Client` instead of a fresh one.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the maximum number of cached responses.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets a time-to-live after which cached responses expire even without
    /// an expire event.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Builds the client.
    pub fn build(self) -> ApiFetch {
        ApiFetch {
            client: self.client.unwrap_or_default(),
            cache: Arc::new(ResponseCache::new(
                self.capacity.unwrap_or(DEFAULT_CAPACITY),
                self.ttl,
            )),
        }
    }
}
