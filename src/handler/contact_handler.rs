use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::dto::contact_dto::{ContactFormRequest, ContactFormResponse};
use crate::service::contact_service::{ContactService, ContactServiceImpl};
use crate::util::error::HandlerError;

pub async fn contact_form_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Json(payload): Json<ContactFormRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let record = service
        .submit_message(payload)
        .await
        .map_err(HandlerError::from)?;

    Ok(Json(ContactFormResponse {
        success: true,
        message: "Thank you! Your message has been received. We will contact you within 24 hours."
            .to_string(),
        submission_id: record.submission_id,
        timestamp: record.received_at,
    }))
}
