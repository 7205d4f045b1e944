use actix_web::{http::StatusCode, web, web::ServiceConfig};
use storefront_engine::{seed_products, CatalogApi};

use super::helpers::get_request;
use crate::{
    endpoint_tests::mocks::MockCatalogManager,
    routes::{ProductByIdRoute, ProductsRoute},
};

#[actix_web::test]
async fn fetch_all_products() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/products", configure).await;
    assert_eq!(status, StatusCode::OK);
    let products: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(products, serde_json::to_value(seed_products()).unwrap());
}

#[actix_web::test]
async fn fetch_single_product() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/products/2", configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"id":2,"name":"Premium Hoodie","price":59.99,"category":"Outerwear","description":"Warm and stylish hoodie","stock":30}"#
    );
}

#[actix_web::test]
async fn unknown_product_is_a_404() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/products/99", configure).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"Product not found"}"#);
}

fn configure(cfg: &mut ServiceConfig) {
    let mut catalog = MockCatalogManager::new();
    catalog.expect_fetch_products().returning(|| Ok(seed_products()));
    catalog.expect_fetch_product().returning(|id| Ok(seed_products().into_iter().find(|p| p.id == id)));
    let catalog_api = CatalogApi::new(catalog);
    cfg.service(ProductsRoute::<MockCatalogManager>::new())
        .service(ProductByIdRoute::<MockCatalogManager>::new())
        .app_data(web::Data::new(catalog_api));
}
