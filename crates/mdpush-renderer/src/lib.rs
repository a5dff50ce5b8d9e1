//! Markdown to HTML conversion for mdpush.
//!
//! Content preparation happens in two steps:
//!
//! 1. [`escape_markdown`] turns `&`, `<` and `>` into HTML entities so that
//!    literal angle brackets in the source survive as text instead of being
//!    treated as inline HTML.
//! 2. [`MarkdownRenderer`] converts the escaped text into an HTML fragment
//!    using GitHub-flavored extensions (tables, strikethrough, task lists,
//!    alerts) plus bare-URL autolinking.
//!
//! [`convert_markdown`] runs both steps with default settings.
//!
//! # Example
//!
//! ```
//! use mdpush_renderer::convert_markdown;
//!
//! let html = convert_markdown("# Title\n<tag>");
//! assert_eq!(html, "<h1>Title</h1>\n<p>&lt;tag&gt;</p>\n");
//! ```

mod autolink;
mod escape;
mod renderer;

pub use autolink::Autolinks;
pub use escape::escape_markdown;
pub use renderer::MarkdownRenderer;

/// Escape and render markdown with the default GitHub-flavored renderer.
#[must_use]
pub fn convert_markdown(markdown: &str) -> String {
    MarkdownRenderer::new().render(&escape_markdown(markdown))
}
