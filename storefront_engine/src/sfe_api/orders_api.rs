//! Unified API for placing and managing orders.

use std::fmt::Debug;

use log::debug;

use crate::{
    store_types::{NewOrder, Order, OrderStatus},
    traits::{OrderApiError, OrderManagement},
};

/// The `OrderApi` provides a unified API for the order ledger.
///
/// Order creation is structured as validate-then-commit: submissions are checked here, and only valid ones reach
/// the backend. Note what is deliberately *not* validated (matching the storefront's observed behaviour): the
/// `total` is not checked for being numeric or non-negative, items are not cross-checked against the catalog, and
/// stock is never decremented.
pub struct OrderApi<B> {
    db: B,
}

impl<B: Debug> Debug for OrderApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderApi ({:?})", self.db)
    }
}

impl<B> OrderApi<B>
where B: OrderManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Validates the submission and appends it to the ledger.
    ///
    /// Rejects with [`OrderApiError::InvalidOrder`] if the customer is absent/null or the item list is empty.
    /// On success, the stored order is returned with its assigned identifier, creation timestamp and `pending`
    /// status.
    pub async fn place_order(&self, order: NewOrder) -> Result<Order, OrderApiError> {
        validate_submission(&order)?;
        let order = self.db.insert_order(order).await?;
        debug!("🛍️ Order #{} accepted into the ledger", order.id);
        Ok(order)
    }

    /// Fetches all orders in creation order, as a read-only snapshot.
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, OrderApiError> {
        self.db.fetch_orders().await
    }

    /// Overwrites the status of the given order and returns the updated order.
    ///
    /// The status is stored verbatim; there is no closed state set and no transition enforcement, so moving a
    /// `completed` order back to `pending` is allowed.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> Result<Order, OrderApiError> {
        if !status.is_known() {
            debug!("🛍️ Order #{id} is being given the non-canonical status '{status}'. Storing it anyway.");
        }
        self.db.update_order_status(id, status).await
    }
}

fn validate_submission(order: &NewOrder) -> Result<(), OrderApiError> {
    if order.customer.is_null() {
        return Err(OrderApiError::InvalidOrder("no customer was supplied".to_string()));
    }
    if order.items.is_empty() {
        return Err(OrderApiError::InvalidOrder("the item list is empty".to_string()));
    }
    Ok(())
}
