use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use storefront_common::Price;
use storefront_engine::store_types::{NewOrder, Product};

use crate::storage::{CartStorage, CartStorageError, CART_STORAGE_KEY};

//--------------------------------------      CartLine      ----------------------------------------------------------
/// A quantity-adjusted product reference in the cart.
///
/// Name and price are denormalized copies of the catalog fields taken at the time the product was added, so the
/// cart can be rendered without a catalog round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: i64,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

//--------------------------------------        Cart        ----------------------------------------------------------
/// The client-side shopping cart.
///
/// The cart has two observable states, empty and non-empty. Every mutation is serialized immediately to the
/// backing storage under [`CART_STORAGE_KEY`], so an interrupted session resumes where it left off.
#[derive(Debug)]
pub struct Cart<S> {
    lines: Vec<CartLine>,
    storage: S,
}

impl<S> Cart<S>
where S: CartStorage
{
    /// Rehydrates the cart from storage, or starts empty if nothing usable is there.
    ///
    /// A corrupt payload is treated the same as an absent one: the cart resets to empty and the corruption is
    /// never surfaced to the caller beyond a log line.
    pub fn load(storage: S) -> Result<Self, CartStorageError> {
        let lines = match storage.load(CART_STORAGE_KEY)? {
            Some(payload) => serde_json::from_str(&payload).unwrap_or_else(|e| {
                warn!("🛒️ The persisted cart could not be read ({e}). Starting with an empty cart.");
                Vec::new()
            }),
            None => Vec::new(),
        };
        Ok(Self { lines, storage })
    }

    /// Adds one unit of the given product: an existing line is incremented, otherwise a new line with quantity 1
    /// is inserted.
    pub fn add(&mut self, product: &Product) -> Result<(), CartStorageError> {
        match self.lines.iter_mut().find(|line| line.product_id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                price: product.price,
                quantity: 1,
            }),
        }
        self.persist()
    }

    /// Removes the line for the given product entirely, regardless of its quantity.
    ///
    /// Removing a product that is not in the cart is a no-op, not an error.
    pub fn remove(&mut self, product_id: i64) -> Result<(), CartStorageError> {
        self.lines.retain(|line| line.product_id != product_id);
        self.persist()
    }

    /// Turns the cart contents into an order submission and clears the cart.
    ///
    /// Returns `None` if the cart is empty. Note the ordering: the cart is cleared and persisted *before* the
    /// caller gets a chance to submit the returned order, mirroring the storefront's optimistic checkout. If the
    /// submission subsequently fails, the cart contents are gone.
    pub fn checkout(&mut self, customer: JsonValue) -> Result<Option<NewOrder>, CartStorageError> {
        if self.lines.is_empty() {
            return Ok(None);
        }
        let total = serde_json::json!(self.total().value());
        let items = self
            .lines
            .drain(..)
            .map(|line| serde_json::to_value(line).unwrap_or(JsonValue::Null))
            .collect::<Vec<JsonValue>>();
        self.persist()?;
        Ok(Some(NewOrder::new(customer, items, total)))
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The number of units in the cart, counting quantities.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// The cart total, computed from the denormalized line prices.
    pub fn total(&self) -> Price {
        self.lines.iter().map(|line| line.price * line.quantity).sum()
    }

    fn persist(&mut self) -> Result<(), CartStorageError> {
        // The lines always serialize; an in-memory Vec of plain data has no failure mode here.
        let payload = serde_json::to_string(&self.lines).unwrap_or_else(|_| "[]".to_string());
        self.storage.save(CART_STORAGE_KEY, &payload)
    }
}
