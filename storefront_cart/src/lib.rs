//! Storefront Cart
//!
//! The cart is owned by a single client session and never shared: the server only ever sees its contents as the
//! `items` payload of an order submission at checkout time. Every mutation is written straight through to a local
//! storage backend keyed by a fixed name, and the cart is rehydrated from that storage on startup — corrupt or
//! missing data simply yields an empty cart.
mod cart;
mod storage;

pub use cart::{Cart, CartLine};
pub use storage::{CartStorage, CartStorageError, FileCartStorage, MemoryCartStorage, CART_STORAGE_KEY};
