use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use storefront_common::Price;

//--------------------------------------      Product       ----------------------------------------------------------
/// A single entry in the product catalog.
///
/// Products are created from the seed list at process start and are immutable thereafter. In particular, `stock` is
/// informational only: order placement never decrements it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub description: String,
    pub stock: i64,
}

//--------------------------------------    OrderStatus     ----------------------------------------------------------
/// The fulfilment status of an order.
///
/// The dashboard works with the four well-known states (`pending`, `processing`, `shipped`, `completed`), but the
/// ledger stores whatever string the caller supplies. There is no transition enforcement; a `completed` order can be
/// moved back to `pending`. Use [`OrderStatus::is_known`] if a consumer wants to distinguish the canonical states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

pub const KNOWN_ORDER_STATUSES: [&str; 4] = ["pending", "processing", "shipped", "completed"];

impl OrderStatus {
    /// The status assigned to every newly created order.
    pub fn pending() -> Self {
        Self("pending".to_string())
    }

    pub fn processing() -> Self {
        Self("processing".to_string())
    }

    pub fn shipped() -> Self {
        Self("shipped".to_string())
    }

    pub fn completed() -> Self {
        Self("completed".to_string())
    }

    /// Whether this status is one of the canonical dashboard states.
    pub fn is_known(&self) -> bool {
        KNOWN_ORDER_STATUSES.contains(&self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::pending()
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S: Into<String>> From<S> for OrderStatus {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

//--------------------------------------      NewOrder      ----------------------------------------------------------
/// An order submission as it arrives from the client at checkout.
///
/// The trust boundary sits here: `customer` and `items` are opaque JSON carried through verbatim, and `total` is
/// whatever the client claims it to be. The ledger checks only that a customer is present and that there is at least
/// one item; it does not cross-check items against the catalog, nor recompute the total from catalog prices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewOrder {
    /// Name/contact details for the person placing the order. Opaque, but must be present.
    #[serde(default)]
    pub customer: JsonValue,
    /// The cart lines being purchased. Opaque, but must be non-empty.
    #[serde(default)]
    pub items: Vec<JsonValue>,
    /// The client-computed order total. Stored verbatim.
    #[serde(default)]
    pub total: JsonValue,
}

impl NewOrder {
    pub fn new(customer: JsonValue, items: Vec<JsonValue>, total: JsonValue) -> Self {
        Self { customer, items, total }
    }
}

impl Display for NewOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order submission ({} item(s), total {})", self.items.len(), self.total)
    }
}

//--------------------------------------        Order       ----------------------------------------------------------
/// A submitted order, as recorded in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Ledger-assigned identifier. Unique and strictly increasing in creation order, starting at 1.
    pub id: i64,
    pub customer: JsonValue,
    pub items: Vec<JsonValue>,
    pub total: JsonValue,
    /// The time the order was accepted by the ledger.
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order #{} [{}] placed {}", self.id, self.status, self.created_at.to_rfc3339())
    }
}
