use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::facebook_handler::{post_testimonial_handler, sync_facebook_reviews_handler};
use crate::service::facebook_sync::SyncService;
use crate::service::testimonial_service::TestimonialServiceImpl;

/// Admin-panel routes. The sync endpoint answers GET and POST because the
/// panel has used both verbs across versions.
pub fn facebook_router(
    sync: Arc<SyncService>,
    testimonials: Arc<TestimonialServiceImpl>,
) -> Router {
    let sync_routes = Router::new()
        .route(
            "/api/sync-facebook-reviews",
            get(sync_facebook_reviews_handler).post(sync_facebook_reviews_handler),
        )
        .with_state(sync);

    let post_routes = Router::new()
        .route(
            "/api/post-testimonial-to-facebook",
            post(post_testimonial_handler),
        )
        .with_state(testimonials);

    sync_routes.merge(post_routes)
}
