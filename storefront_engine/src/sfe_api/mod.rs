//! The storefront engine public API.
//!
//! These thin wrappers sit between the HTTP layer and a backend implementing the [`crate::traits`] contracts.
//! They hold the validation logic that must run regardless of which backend is in use, so that the backends
//! themselves only ever see well-formed requests.
pub mod catalog_api;
pub mod orders_api;
