use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use homefix_backend::config::NotificationConfig;
use homefix_backend::model::testimonial::{Testimonial, TestimonialSource};
use homefix_backend::repository::testimonial_repo::InMemoryTestimonialRepository;
use homefix_backend::router::testimonial_router::testimonial_router;
use homefix_backend::service::testimonial_service::TestimonialServiceImpl;

fn stored_entry(id: &str, approved: bool) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        quote: "They repaired our fence in a single afternoon".to_string(),
        name: "Priya N.".to_string(),
        location: "Medford, MA".to_string(),
        source: TestimonialSource::Website,
        rating: None,
        submitted: Some(Utc.with_ymd_and_hms(2024, 5, 20, 14, 30, 0).unwrap()),
        approved,
    }
}

fn test_app(repo: InMemoryTestimonialRepository) -> Router {
    let service = Arc::new(TestimonialServiceImpl::new(
        Arc::new(repo),
        None,
        None,
        NotificationConfig::from_test_env(),
    ));
    Router::new().merge(testimonial_router(service))
}

fn get_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/testimonials")
        .body(Body::empty())
        .unwrap()
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/testimonials")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_feed_serves_curated_entries_from_empty_store() {
    let app = test_app(InMemoryTestimonialRepository::new());
    let response = app.oneshot(get_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["testimonials"].as_array().unwrap().len(), 3);
    assert_eq!(body["stats"]["total"], 3);
    assert_eq!(body["stats"]["external"], 0);
    assert_eq!(body["stats"]["website"], 3);
}

#[tokio::test]
async fn test_feed_merges_approved_store_entries_newest_first() {
    let repo = InMemoryTestimonialRepository::with_entries(vec![
        stored_entry("web_100", true),
        stored_entry("web_101", false),
    ]);
    let app = test_app(repo);

    let response = app.oneshot(get_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body["testimonials"].as_array().unwrap();
    let ids: Vec<&str> = items.iter().map(|t| t["id"].as_str().unwrap()).collect();

    // The dated store entry leads; the unapproved one never appears; the
    // undated curated entries keep their compiled order at the end.
    assert_eq!(ids, vec!["web_100", "static_1", "static_2", "static_3"]);
    assert_eq!(body["stats"]["total"], 4);
    assert_eq!(body["stats"]["external"], 0);
}

#[tokio::test]
async fn test_submit_testimonial_succeeds() {
    let app = test_app(InMemoryTestimonialRepository::new());
    let response = app
        .oneshot(post_json(json!({
            "quote": "  Fast, friendly, and fairly priced.  ",
            "name": "Elena V.",
            "location": "Arlington, MA"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        "Thank you for your testimonial! It will be reviewed and published soon."
    );
    let entry = &body["testimonial"];
    assert!(entry["id"].as_str().unwrap().starts_with("web_"));
    assert_eq!(entry["quote"], "Fast, friendly, and fairly priced.");
    assert_eq!(entry["name"], "Elena V.");
    assert_eq!(entry["approved"], json!(false));
    assert!(entry["submitted"].is_string());
}

#[tokio::test]
async fn test_submitted_entry_stays_out_of_feed_until_approved() {
    let repo = Arc::new(InMemoryTestimonialRepository::new());
    let service = Arc::new(TestimonialServiceImpl::new(
        repo,
        None,
        None,
        NotificationConfig::from_test_env(),
    ));
    let app = Router::new().merge(testimonial_router(service));

    let response = app
        .clone()
        .oneshot(post_json(json!({ "quote": "Excellent gutter work", "name": "Tom B." })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request()).await.unwrap();
    let body = body_json(response).await;
    // Still just the curated three: the new entry awaits approval.
    assert_eq!(body["stats"]["total"], 3);
}

#[tokio::test]
async fn test_submit_without_location_defaults_to_empty() {
    let app = test_app(InMemoryTestimonialRepository::new());
    let response = app
        .oneshot(post_json(json!({ "quote": "Solid bathroom refit", "name": "Ken O." })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["testimonial"]["location"], "");
}

#[tokio::test]
async fn test_submit_missing_quote_rejected() {
    let app = test_app(InMemoryTestimonialRepository::new());
    let response = app
        .oneshot(post_json(json!({ "name": "Elena V." })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], "Quote and name are required");
}

#[tokio::test]
async fn test_submit_blank_name_rejected() {
    let app = test_app(InMemoryTestimonialRepository::new());
    let response = app
        .oneshot(post_json(json!({ "quote": "Great experience overall", "name": "   " })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_oversized_quote_rejected() {
    let app = test_app(InMemoryTestimonialRepository::new());
    let response = app
        .oneshot(post_json(json!({
            "quote": "x".repeat(2001),
            "name": "Elena V."
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Validation error"));
}
