use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

use crate::dto::testimonial_dto::{
    SubmitTestimonialRequest, SubmitTestimonialResponse, TestimonialListResponse,
};
use crate::service::testimonial_service::{TestimonialService, TestimonialServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_testimonials_handler(
    State(service): State<Arc<TestimonialServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let (testimonials, stats) = service
        .list_testimonials()
        .await
        .map_err(HandlerError::from)?;

    Ok(Json(TestimonialListResponse {
        success: true,
        testimonials,
        stats,
    }))
}

pub async fn submit_testimonial_handler(
    State(service): State<Arc<TestimonialServiceImpl>>,
    Json(payload): Json<SubmitTestimonialRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::bad_request(format!("Validation error: {}", e)))?;

    let testimonial = service
        .submit_testimonial(payload)
        .await
        .map_err(HandlerError::from)?;

    Ok(Json(SubmitTestimonialResponse {
        success: true,
        message: "Thank you for your testimonial! It will be reviewed and published soon."
            .to_string(),
        testimonial,
    }))
}
