//! Unified API for reading the product catalog.

use std::fmt::Debug;

use crate::{
    store_types::Product,
    traits::{CatalogApiError, CatalogManagement},
};

/// The `CatalogApi` provides read access to the fixed product catalog.
pub struct CatalogApi<B> {
    db: B,
}

impl<B: Debug> Debug for CatalogApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CatalogApi ({:?})", self.db)
    }
}

impl<B> CatalogApi<B>
where B: CatalogManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Fetches the full product list, in seed order.
    pub async fn products(&self) -> Result<Vec<Product>, CatalogApiError> {
        self.db.fetch_products().await
    }

    /// Fetches a single product, failing with [`CatalogApiError::ProductNotFound`] for unknown ids.
    pub async fn product_by_id(&self, id: i64) -> Result<Product, CatalogApiError> {
        match self.db.fetch_product(id).await? {
            Some(product) => Ok(product),
            None => Err(CatalogApiError::ProductNotFound(id)),
        }
    }
}
