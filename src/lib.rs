//! Backend service for the 3 Boys Handyman LLC website.
//!
//! Serves the quote/contact intake endpoints, the aggregated testimonial
//! feed and the Facebook review sync used by homefixandbuild.org.

pub mod app;
pub mod config;
pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod router;
pub mod service;
pub mod util;
