//! Content adapters - markdown files on disk.

mod filesystem_content_source;
mod markdown;

pub use filesystem_content_source::FilesystemContentSource;
pub use markdown::render_markdown;
