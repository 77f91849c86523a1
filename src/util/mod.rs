pub mod email;
pub mod error;
pub mod facebook;
pub mod logger;
pub mod validation;
