//! Markdown to HTML rendering for frxdocs.
//!
//! [`HtmlRenderer`] walks `pulldown-cmark` events and produces HTML with:
//! - `id` attributes on every heading, derived with [`slugify`]
//! - `<pre><code class="language-*">` fenced code blocks, ready for a
//!   client-side highlighter
//! - `<br>` for soft line breaks
//! - GitHub-flavored tables, strikethrough, task lists and bare URL autolinks
//!
//! # Example
//!
//! ```
//! use frxdocs_renderer::HtmlRenderer;
//!
//! let result = HtmlRenderer::new().render_markdown("## Quick Start\n\nGo!");
//! assert_eq!(
//!     result.html,
//!     r#"<h2 id="quick-start">Quick Start</h2><p>Go!</p>"#
//! );
//! ```

mod autolink;
mod renderer;
mod slug;
mod state;

pub use renderer::{HtmlRenderer, RenderResult, heading_id};
pub use slug::slugify;
pub use state::{HeadingEntry, escape_html};
