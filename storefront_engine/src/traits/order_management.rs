use thiserror::Error;

use crate::store_types::{NewOrder, Order, OrderStatus};

#[derive(Debug, Clone, Error)]
pub enum OrderApiError {
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
    #[error("No order exists with id {0}")]
    OrderNotFound(i64),
}

/// The `OrderManagement` trait defines behaviour for the order ledger.
///
/// The ledger owns the authoritative, creation-ordered sequence of submitted orders together with the
/// next-identifier counter. Identifiers are unique and strictly increasing, starting at 1; the ledger never
/// reorders or compacts the sequence, and orders are never deleted.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    /// Append a new order to the ledger.
    ///
    /// The submission has already been validated by [`crate::OrderApi::place_order`] at this point. The backend
    /// assigns the next identifier, stamps the creation time, sets the status to `pending` and returns a copy of
    /// the stored order.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderApiError>;

    /// Fetch all orders in creation order. The returned orders are owned copies; mutating them does not write
    /// through to the ledger.
    async fn fetch_orders(&self) -> Result<Vec<Order>, OrderApiError>;

    /// Overwrite the status of the order with the given id and return the updated order.
    ///
    /// Returns [`OrderApiError::OrderNotFound`] if no such order exists, in which case the ledger is untouched.
    async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<Order, OrderApiError>;
}
