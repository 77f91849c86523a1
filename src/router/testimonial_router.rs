use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handler::testimonial_handler::{list_testimonials_handler, submit_testimonial_handler};
use crate::service::testimonial_service::TestimonialServiceImpl;

pub fn testimonial_router(service: Arc<TestimonialServiceImpl>) -> Router {
    Router::new()
        .route(
            "/api/testimonials",
            get(list_testimonials_handler).post(submit_testimonial_handler),
        )
        .with_state(service)
}
