pub mod contact_dto;
pub mod quote_dto;
pub mod testimonial_dto;
