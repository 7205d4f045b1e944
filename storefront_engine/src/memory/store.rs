use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use log::trace;

use crate::{
    memory::seed_products,
    store_types::{NewOrder, Order, OrderStatus, Product},
    traits::{CatalogApiError, CatalogManagement, OrderApiError, OrderManagement},
};

/// The in-memory datastore backing the storefront server.
///
/// `MemoryStore` is a cheap-to-clone handle; all clones share the same ledger. The actix server hands one clone to
/// each worker, so the ledger state is guarded by a mutex even though each individual request runs to completion on
/// its own. Handlers never hold the lock across an await point.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    ledger: Arc<Mutex<Ledger>>,
    // The catalog is read-only after construction, so it can sit outside the lock.
    catalog: Arc<Vec<Product>>,
}

#[derive(Debug)]
struct Ledger {
    orders: Vec<Order>,
    next_id: i64,
}

impl MemoryStore {
    /// Creates a store with the given catalog and an empty ledger.
    pub fn new(catalog: Vec<Product>) -> Self {
        Self { ledger: Arc::new(Mutex::new(Ledger { orders: Vec::new(), next_id: 1 })), catalog: Arc::new(catalog) }
    }

    /// Creates a store seeded with the storefront's fixed product list.
    pub fn with_default_catalog() -> Self {
        Self::new(seed_products())
    }

    // A poisoned mutex means a panic inside one of the short critical sections below, which leaves the ledger in a
    // consistent state. Carry on with the inner value rather than propagating the poison to every handler.
    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OrderManagement for MemoryStore {
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderApiError> {
        let NewOrder { customer, items, total } = order;
        let mut ledger = self.ledger();
        let id = ledger.next_id;
        ledger.next_id += 1;
        let order = Order { id, customer, items, total, created_at: Utc::now(), status: OrderStatus::pending() };
        ledger.orders.push(order.clone());
        trace!("🗃️ Ledger now holds {} order(s)", ledger.orders.len());
        Ok(order)
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, OrderApiError> {
        Ok(self.ledger().orders.clone())
    }

    async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<Order, OrderApiError> {
        let mut ledger = self.ledger();
        match ledger.orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.status = status;
                Ok(order.clone())
            },
            None => Err(OrderApiError::OrderNotFound(id)),
        }
    }
}

impl CatalogManagement for MemoryStore {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogApiError> {
        Ok(self.catalog.as_ref().clone())
    }

    async fn fetch_product(&self, id: i64) -> Result<Option<Product>, CatalogApiError> {
        Ok(self.catalog.iter().find(|p| p.id == id).cloned())
    }
}
