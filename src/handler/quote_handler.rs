use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::dto::quote_dto::{QuoteFormRequest, QuoteFormResponse};
use crate::service::quote_service::{QuoteService, QuoteServiceImpl};
use crate::util::error::HandlerError;

pub async fn request_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Json(payload): Json<QuoteFormRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let record = service
        .submit_quote(payload)
        .await
        .map_err(HandlerError::from)?;

    Ok(Json(QuoteFormResponse {
        success: true,
        message: "Quote request submitted successfully".to_string(),
        project_id: record.project_id,
        estimated_response: "24-48 hours".to_string(),
        next_steps: vec![
            "Our team will review your project requirements".to_string(),
            "We will schedule an on-site consultation".to_string(),
            "You will receive a detailed quote within 48 hours".to_string(),
        ],
        timestamp: record.received_at,
    }))
}
