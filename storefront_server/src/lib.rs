//! # Storefront server
//! This crate hosts the HTTP boundary of the storefront. It is responsible for:
//! * Serving the product catalog to the storefront client.
//! * Accepting order submissions from the client's cart at checkout.
//! * Serving the order list to the admin dashboard and applying its status updates.
//! * Acknowledging contact-form submissions.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/api/products`, `/api/products/{id}`: catalog reads.
//! * `/api/orders` (GET/POST), `/api/orders/{id}` (PUT): the order lifecycle.
//! * `/api/contact`: contact-form submissions.
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
