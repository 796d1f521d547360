//! BlogToo - Content-driven blog backend
//!
//! Serves markdown posts and a moderated comment API. New comments are
//! stored unapproved and announced to the site owner over SMS and/or a
//! webhook; notification never affects whether a submission succeeds.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
