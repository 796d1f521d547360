//! Notification module - payloads, message formatting and delivery outcomes
//! for new-comment alerts.

mod message;
mod outcome;
mod payload;

pub use message::{format_sms_message, truncate_body, ELLIPSIS, SMS_BODY_LIMIT, SMS_TRUNCATED_LENGTH};
pub use outcome::{ChannelKind, ChannelOutcome, ChannelReport, DispatchReport};
pub use payload::NotificationPayload;
