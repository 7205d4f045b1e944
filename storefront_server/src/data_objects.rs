use serde::{Deserialize, Serialize};
use storefront_engine::store_types::{Order, OrderStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusParams {
    /// The new status. Stored verbatim; no enum validation happens anywhere on this path.
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub message: String,
    pub order: Order,
}

impl OrderResponse {
    pub fn created(order: Order) -> Self {
        Self { message: "Order created successfully".to_string(), order }
    }

    pub fn updated(order: Order) -> Self {
        Self { message: "Order updated successfully".to_string(), order }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }
}

/// A contact-form submission. All three fields are required; an empty string counts as missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactMessage {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message].into_iter().all(|f| f.as_deref().is_some_and(|s| !s.is_empty()))
    }
}
