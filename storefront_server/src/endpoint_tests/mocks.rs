use mockall::mock;
use storefront_engine::{
    store_types::{NewOrder, Order, OrderStatus, Product},
    traits::{CatalogApiError, CatalogManagement, OrderApiError, OrderManagement},
};

mock! {
    pub OrderManager {}
    impl OrderManagement for OrderManager {
        async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderApiError>;
        async fn fetch_orders(&self) -> Result<Vec<Order>, OrderApiError>;
        async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<Order, OrderApiError>;
    }
}

mock! {
    pub CatalogManager {}
    impl CatalogManagement for CatalogManager {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogApiError>;
        async fn fetch_product(&self, id: i64) -> Result<Option<Product>, CatalogApiError>;
    }
}
