use async_trait::async_trait;

use crate::api::Result;

/// Cut-down repository contract for read-only stores.
///
/// Application code that only reads should depend on this trait so it can
/// be handed either a read-only or a full repository.
#[async_trait]
pub trait ReadRepository<T>: Send + Sync {
    /// Finds a model in the store by its key.
    ///
    /// A missing model is `Ok(None)`, not an error.
    async fn find(&self, key: &str) -> Result<Option<T>>;

    /// Returns all models in the store. An empty collection is a valid
    /// result.
    async fn find_all(&self) -> Result<Vec<T>>;
}

/// Repository contract for CRUD access to a store of models.
#[async_trait]
pub trait Repository<T>: ReadRepository<T> {
    /// Creates a new model with default values.
    ///
    /// The model is not added to the store; that only happens when it is
    /// passed to [`save`](Repository::save) with `is_create` set.
    async fn create(&self) -> Result<T>;

    /// Persists a model back to its store.
    ///
    /// With `is_create` set this is an insert against the collection;
    /// otherwise a full-replace update of the item named by `key`.
    async fn save(&self, key: &str, model: &T, is_create: bool) -> Result<()>;

    /// Removes a model from the store.
    async fn remove(&self, key: &str) -> Result<()>;
}
