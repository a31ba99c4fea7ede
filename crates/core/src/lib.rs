//! restrepo_core - Core contracts for the restrepo project.
//!
//! This crate defines the transport-free surface of the repository layer:
//! the [`repository`] traits application code depends on, and the [`api`]
//! contract fulfilled by the caching HTTP client that backs them.

pub mod api;
pub mod repository;
