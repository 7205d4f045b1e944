//! # Backend interface contracts.
//!
//! This module defines the behaviour a storage backend must expose in order to act as the datastore for the
//! storefront server. The shipped backend is the in-memory [`crate::MemoryStore`], but the server code only ever
//! talks to these traits, which keeps the ledger transport-agnostic and lets the endpoint tests substitute mocks.
//!
//! ## Traits
//! * [`OrderManagement`] owns the authoritative order sequence and its identifier counter.
//! * [`CatalogManagement`] exposes the fixed product list.
mod catalog_management;
mod order_management;

pub use catalog_management::{CatalogApiError, CatalogManagement};
pub use order_management::{OrderApiError, OrderManagement};
