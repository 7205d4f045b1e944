//! Storefront Engine
//!
//! The storefront engine holds the core logic for the demo storefront: the fixed product catalog and the in-memory
//! order ledger. It is transport-agnostic; the HTTP server is a thin adapter over the APIs exposed here.
//!
//! The library is divided into three main sections:
//! 1. The backend contracts ([`mod@traits`]). These define what a datastore must provide. The only shipped
//!    implementation is the in-memory [`MemoryStore`], whose lifecycle is process start (empty ledger) to process
//!    termination (discarded). The endpoint tests in the server crate mock these traits directly.
//! 2. The engine public API ([`OrderApi`] and [`CatalogApi`]). These wrap a backend and carry the validation rules
//!    that apply regardless of backend, most importantly the validate-then-commit split for order creation.
//! 3. The data types ([`mod@store_types`]), shared between the engine, the cart and the server.
mod memory;
mod sfe_api;

pub mod store_types;
pub mod traits;

pub use memory::{seed_products, MemoryStore};
pub use sfe_api::{catalog_api::CatalogApi, orders_api::OrderApi};
