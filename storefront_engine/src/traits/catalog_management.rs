use thiserror::Error;

use crate::store_types::Product;

#[derive(Debug, Clone, Error)]
pub enum CatalogApiError {
    #[error("No product exists with id {0}")]
    ProductNotFound(i64),
}

/// The `CatalogManagement` trait defines read access to the product catalog.
///
/// The catalog is fixed at process start; there are no mutation operations.
#[allow(async_fn_in_trait)]
pub trait CatalogManagement {
    /// Fetch the full product list, in seed order.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogApiError>;

    /// Fetch a single product by id. If no product has that id, `None` is returned.
    async fn fetch_product(&self, id: i64) -> Result<Option<Product>, CatalogApiError>;
}
