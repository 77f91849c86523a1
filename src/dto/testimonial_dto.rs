use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::testimonial::{Testimonial, TestimonialStats};

/// Visitor-submitted testimonial. Quote and name are required after
/// trimming; the length caps only guard against abuse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SubmitTestimonialRequest {
    #[validate(length(max = 2000, message = "Quote is too long"))]
    pub quote: Option<String>,

    #[validate(length(max = 100, message = "Name is too long"))]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "Location is too long"))]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialListResponse {
    pub success: bool,
    pub testimonials: Vec<Testimonial>,
    pub stats: TestimonialStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitTestimonialResponse {
    pub success: bool,
    pub message: String,
    pub testimonial: Testimonial,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncResponse {
    pub success: bool,
    pub message: String,
    pub testimonials: Vec<Testimonial>,
}

/// Body of the admin "post to Facebook" call: an arbitrary testimonial
/// object. Only name, quote and location matter here, anything else the
/// admin UI sends along is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacebookPostRequest {
    #[serde(default)]
    pub testimonial: FacebookPostTestimonial,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacebookPostTestimonial {
    pub name: String,
    pub quote: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacebookPostResponse {
    pub success: bool,
    pub message: String,
    pub post_id: String,
}
