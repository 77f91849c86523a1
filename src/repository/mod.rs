pub mod repository_error;
pub mod testimonial_repo;
