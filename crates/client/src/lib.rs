//! restrepo_client - HTTP implementations of the restrepo contracts.
//!
//! [`HttpRestReadRepository`] and [`HttpRestRepository`] map the repository
//! traits from `restrepo_core` onto REST conventions (GET/POST/PUT/DELETE)
//! against a collection base URL. Network access and response caching are
//! delegated to an [`ApiClient`](restrepo_core::api::ApiClient); [`ApiFetch`]
//! is the default implementation, backed by `reqwest` and an in-process
//! response cache with event-driven invalidation.

pub mod fetch;
pub mod rest;

pub use fetch::{ApiFetch, ApiFetchBuilder};
pub use rest::{HttpRestReadRepository, HttpRestRepository};
