use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::dto::testimonial_dto::{FacebookPostRequest, FacebookPostResponse, SyncResponse};
use crate::service::facebook_sync::{SyncOutcome, SyncService};
use crate::service::testimonial_service::{TestimonialService, TestimonialServiceImpl};
use crate::util::error::HandlerError;

/// Manual sync trigger used by the admin panel. Runs the same pass as the
/// background timer and returns the qualifying reviews.
pub async fn sync_facebook_reviews_handler(
    State(sync): State<Arc<SyncService>>,
) -> Result<impl IntoResponse, HandlerError> {
    let (report, testimonials) = sync.sync_once().await;

    match report.outcome {
        SyncOutcome::Synced => Ok(Json(SyncResponse {
            success: true,
            message: format!("Synced {} Facebook reviews", report.reviews_synced),
            testimonials,
        })),
        SyncOutcome::CredentialsMissing => Err(HandlerError::configuration_missing(
            "Facebook credentials not configured",
        )),
        SyncOutcome::FetchFailed => Err(HandlerError::upstream_unavailable(
            "Failed to fetch Facebook reviews",
        )),
    }
}

pub async fn post_testimonial_handler(
    State(service): State<Arc<TestimonialServiceImpl>>,
    Json(payload): Json<FacebookPostRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let testimonial = payload.testimonial;
    let post_id = service
        .post_to_facebook(&testimonial.name, &testimonial.quote, &testimonial.location)
        .await
        .map_err(HandlerError::from)?;

    Ok(Json(FacebookPostResponse {
        success: true,
        message: "Testimonial posted to Facebook successfully".to_string(),
        post_id,
    }))
}
