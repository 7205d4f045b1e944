use actix_web::{http::StatusCode, web::ServiceConfig};
use serde_json::json;

use super::helpers::post_request;
use crate::routes::ContactRoute;

#[actix_web::test]
async fn complete_submission_is_acknowledged() {
    let _ = env_logger::try_init().ok();
    let body = json!({"name": "Jane", "email": "jane@example.com", "message": "Do you ship internationally?"});
    let (status, body) = post_request("/contact", &body, configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"Message received successfully"}"#);
}

#[actix_web::test]
async fn missing_field_is_rejected() {
    let _ = env_logger::try_init().ok();
    let body = json!({"name": "Jane", "email": "jane@example.com"});
    let (status, body) = post_request("/contact", &body, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"All fields are required"}"#);
}

#[actix_web::test]
async fn empty_field_counts_as_missing() {
    let _ = env_logger::try_init().ok();
    let body = json!({"name": "Jane", "email": "", "message": "Hello"});
    let (status, body) = post_request("/contact", &body, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"All fields are required"}"#);
}

fn configure(cfg: &mut ServiceConfig) {
    cfg.service(ContactRoute::new());
}
