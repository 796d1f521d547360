//! Comment module - reader comments and their validation rules.

mod aggregate;
mod errors;
mod validation;

pub use aggregate::Comment;
pub use errors::CommentError;
pub use validation::{is_valid_email, validate, CommentField, CommentValidationError, ValidInput};
