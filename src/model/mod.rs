pub mod submission;
pub mod testimonial;
