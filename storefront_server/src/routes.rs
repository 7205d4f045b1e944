//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause
//! the current worker to stop processing new requests. None of the handlers below do blocking I/O — the ledger and
//! catalog live in process memory and their locks are only ever held for a few instructions.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use storefront_engine::{
    store_types::NewOrder,
    traits::{CatalogManagement, OrderManagement},
    CatalogApi,
    OrderApi,
};

use crate::{
    data_objects::{ContactMessage, MessageResponse, OrderResponse, UpdateStatusParams},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal) => {
        paste::paste! { pub struct [<$name:camel Route>];}
        paste::paste! {
                impl [<$name:camel Route>] {
                #[allow(clippy::new_without_default)]
                pub fn new() -> Self { Self }
            }
        }
        paste::paste! {
            impl actix_web::dev::HttpServiceFactory for [<$name:camel Route>] {
                fn register(self, config: &mut actix_web::dev::AppService) {
                    let res = actix_web::Resource::new($path)
                        .name(stringify!($name))
                        .guard(actix_web::guard::$method())
                        .to($name);
                    actix_web::dev::HttpServiceFactory::register(res, config);
                }
            }
        }
    };

    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Catalog  ----------------------------------------------------
route!(products => Get "/products" impl CatalogManagement);
/// Route handler for the products endpoint
///
/// Returns the full, fixed product catalog in seed order. There is no pagination; the catalog is six items.
pub async fn products<B: CatalogManagement>(api: web::Data<CatalogApi<B>>) -> Result<HttpResponse, ServerError> {
    debug!("💻️ GET products");
    let products = api.products().await.map_err(|e| {
        debug!("💻️ Could not fetch products. {e}");
        ServerError::BackendError(e.to_string())
    })?;
    Ok(HttpResponse::Ok().json(products))
}

route!(product_by_id => Get "/products/{id}" impl CatalogManagement);
/// Route handler for the products/{id} endpoint
///
/// Responds 404 with `{"error": "Product not found"}` for ids that are not in the catalog.
pub async fn product_by_id<B: CatalogManagement>(
    path: web::Path<i64>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("💻️ GET product_by_id({id})");
    let product = api.product_by_id(id).await.map_err(|e| {
        debug!("💻️ Could not fetch product. {e}");
        e
    })?;
    Ok(HttpResponse::Ok().json(product))
}

//----------------------------------------------   Orders  ----------------------------------------------------
route!(create_order => Post "/orders" impl OrderManagement);
/// Route handler for order submissions.
///
/// The body is taken verbatim as a [`NewOrder`]: the customer and items are opaque JSON and the total is whatever
/// the client claims. The ledger applies its presence checks and everything else passes straight through. The
/// created order is echoed back so the client sees its assigned id and timestamp.
pub async fn create_order<B: OrderManagement>(
    body: web::Json<NewOrder>,
    api: web::Data<OrderApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let submission = body.into_inner();
    info!("💻️ Received {submission}");
    let order = api.place_order(submission).await.map_err(|e| {
        debug!("💻️ Order submission was rejected. {e}");
        e
    })?;
    Ok(HttpResponse::Created().json(OrderResponse::created(order)))
}

route!(orders => Get "/orders" impl OrderManagement);
/// Route handler for the orders endpoint
///
/// Returns every order in the ledger, in creation order, with no filtering or pagination. That is acceptable at
/// demonstration scale but is a known gap if this ever grows beyond one process and a handful of orders.
pub async fn orders<B: OrderManagement>(api: web::Data<OrderApi<B>>) -> Result<HttpResponse, ServerError> {
    debug!("💻️ GET orders");
    let orders = api.fetch_orders().await.map_err(|e| {
        debug!("💻️ Could not fetch orders. {e}");
        ServerError::BackendError(e.to_string())
    })?;
    Ok(HttpResponse::Ok().json(orders))
}

route!(update_order => Put "/orders/{id}" impl OrderManagement);
/// Route handler for order status updates.
///
/// The status string from the body is stored verbatim — there is no enum validation and no transition rules, so
/// any string is accepted. Responds 404 with `{"error": "Order not found"}` for unknown ids.
pub async fn update_order<B: OrderManagement>(
    path: web::Path<i64>,
    body: web::Json<UpdateStatusParams>,
    api: web::Data<OrderApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let UpdateStatusParams { status } = body.into_inner();
    info!("💻️ Update order status request for #{id} to '{status}'");
    let order = api.update_status(id, status).await.map_err(|e| {
        debug!("💻️ Could not update order. {e}");
        e
    })?;
    Ok(HttpResponse::Ok().json(OrderResponse::updated(order)))
}

//----------------------------------------------   Contact  ----------------------------------------------------
route!(contact => Post "/contact");
/// Route handler for contact-form submissions.
///
/// The submission is logged and acknowledged; nothing is stored and no mail is sent.
pub async fn contact(body: web::Json<ContactMessage>) -> Result<HttpResponse, ServerError> {
    let submission = body.into_inner();
    if !submission.is_complete() {
        debug!("💻️ Incomplete contact form submission rejected");
        return Err(ServerError::InvalidRequestBody("All fields are required".to_string()));
    }
    let (name, email) = (submission.name.unwrap_or_default(), submission.email.unwrap_or_default());
    info!("💻️ Contact form submission from {name} <{email}>: {}", submission.message.unwrap_or_default());
    Ok(HttpResponse::Ok().json(MessageResponse::new("Message received successfully")))
}
