//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, error codes)
//! - `comment` - Reader comments and submission validation
//! - `content` - Posts parsed from markdown files, listing order, navigation
//! - `notification` - New-comment alert payloads and per-channel outcomes

pub mod comment;
pub mod content;
pub mod foundation;
pub mod notification;
