use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use storefront_engine::{CatalogApi, MemoryStore, OrderApi};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{
        health,
        ContactRoute,
        CreateOrderRoute,
        OrdersRoute,
        ProductByIdRoute,
        ProductsRoute,
        UpdateOrderRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    // One store per process: the ledger starts empty here and is discarded when the server exits.
    let store = MemoryStore::with_default_catalog();
    let srv = create_server_instance(config, store)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, store: MemoryStore) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        // The APIs share the one store; cloning the handle is cheap and keeps every worker on the same ledger.
        let orders_api = OrderApi::new(store.clone());
        let catalog_api = CatalogApi::new(store.clone());
        let api_scope = web::scope("/api")
            .service(ProductsRoute::<MemoryStore>::new())
            .service(ProductByIdRoute::<MemoryStore>::new())
            .service(CreateOrderRoute::<MemoryStore>::new())
            .service(OrdersRoute::<MemoryStore>::new())
            .service(UpdateOrderRoute::<MemoryStore>::new())
            .service(ContactRoute::new());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("sfs::access_log"))
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(catalog_api))
            .service(health)
            .service(api_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
