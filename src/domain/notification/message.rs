//! Message formatting for length-constrained channels.

use super::payload::NotificationPayload;

/// Comment bodies longer than this are truncated in SMS messages.
pub const SMS_BODY_LIMIT: usize = 80;

/// Characters kept from a truncated body, leaving room for the marker.
pub const SMS_TRUNCATED_LENGTH: usize = 77;

pub const ELLIPSIS: &str = "...";

/// Truncate a comment body to the SMS budget, counting characters rather than bytes.
pub fn truncate_body(content: &str) -> String {
    if content.chars().count() <= SMS_BODY_LIMIT {
        return content.to_string();
    }
    let mut truncated: String = content.chars().take(SMS_TRUNCATED_LENGTH).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Format the SMS text. Title (or slug) and author are never truncated.
pub fn format_sms_message(payload: &NotificationPayload) -> String {
    format!(
        "📝 New comment on \"{}\"\n\nFrom: {}\n\n{}",
        payload.display_title(),
        payload.author,
        truncate_body(&payload.content)
    )
}
