//! HTTP adapter for posts, navigation and health.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::content_routes;
