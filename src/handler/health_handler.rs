use axum::{response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub website: &'static str,
    pub timestamp: DateTime<Utc>,
    pub message: &'static str,
}

pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        success: true,
        status: "healthy",
        website: "3 Boys Handyman LLC",
        timestamp: Utc::now(),
        message: "Website functions are operational",
    })
}
