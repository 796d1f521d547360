//! Markdown to HTML rendering.

use pulldown_cmark::{html, Options, Parser};

/// Render a markdown body to HTML.
///
/// Tables, footnotes and strikethrough are enabled. Raw HTML in the
/// source passes through; content is authored by the site owner.
pub fn render_markdown(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(body, options);
    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
