//! The in-memory storage backend.
//!
//! This is the only backend shipped with the storefront. State lives for exactly as long as the process does:
//! the ledger starts empty and is discarded on termination. The catalog is fixed at construction time.
mod seed;
mod store;

pub use seed::seed_products;
pub use store::MemoryStore;
