//! Read-only repository over a REST endpoint.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use restrepo_core::api::{item_url, ApiClient, ApiError, CacheOptions, Result};
use restrepo_core::repository::ReadRepository;

use crate::fetch::ApiFetch;

use super::{decode_model, decode_models};

/// Repository for read-only access to a REST endpoint over HTTP(S).
///
/// Reads are cached by the collaborating [`ApiClient`] and registered so
/// they expire only when the matching URL is signalled as changed: per-item
/// reads on the item URL, collection reads on the base URL.
#[derive(Debug)]
pub struct HttpRestReadRepository<T, A = ApiFetch> {
    url: String,
    api: Arc<A>,
    _model: PhantomData<fn() -> T>,
}

impl<T> HttpRestReadRepository<T, ApiFetch> {
    /// Creates a repository over `url` with a default [`ApiFetch`] client.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, Arc::new(ApiFetch::new()))
    }
}

impl<T, A: ApiClient> HttpRestReadRepository<T, A> {
    /// Creates a repository over `url` sharing an existing client.
    pub fn with_client(url: impl Into<String>, api: Arc<A>) -> Self {
        Self {
            url: url.into(),
            api,
            _model: PhantomData,
        }
    }

    /// The collection endpoint this repository reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl<T, A> ReadRepository<T> for HttpRestReadRepository<T, A>
where
    T: DeserializeOwned + Send + Sync,
    A: ApiClient + 'static,
{
    async fn find(&self, key: &str) -> Result<Option<T>> {
        let url = item_url(&self.url, key);
        // Expire only when this specific key is signalled as changed.
        match self.api.get(&url, CacheOptions::expire_on(url.clone())).await {
            Ok(value) => decode_model(value),
            Err(ApiError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        // Expire whenever any model behind this endpoint changes.
        let value = self
            .api
            .get(&self.url, CacheOptions::expire_on(self.url.clone()))
            .await?;
        decode_models(value)
    }
}
