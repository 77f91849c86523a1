pub mod contact_service;
pub mod facebook_sync;
pub mod quote_service;
pub mod testimonial_service;
