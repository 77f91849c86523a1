pub mod contact_router;
pub mod facebook_router;
pub mod quote_router;
pub mod testimonial_router;
