//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with `dto`, `handlers` and `routes`;
//! `router` merges them and applies the middleware stack.

pub mod comments;
pub mod content;
pub mod error;
pub mod router;
pub mod state;

pub use error::ErrorResponse;
pub use router::{api_router, app_router};
pub use state::AppState;
