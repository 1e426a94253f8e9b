//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router with the course and media endpoints
//! - Course scan handlers (query string and JSON body)
//! - Byte-range video streaming
//! - Subtitle delivery as WebVTT
//! - CORS middleware

pub mod courses;
pub mod handlers;
pub mod media;
pub mod range;
pub mod routes;

pub use routes::create_router;
