//! Documentation builder for frxdocs.
//!
//! Turns one Markdown file per configured version into the `docs.json`
//! artifact served by the site:
//!
//! 1. Strip optional YAML front-matter (only `title` is used).
//! 2. Split the body at `## ` headings into sections. `# ` lines and text
//!    before the first `## ` heading are dropped. A body without `## `
//!    headings becomes a single `main` section.
//! 3. Render each section to HTML and collect its `### `/`#### ` headings as a
//!    table of contents.
//! 4. Write all documents as one pretty-printed JSON object keyed by version.
//!
//! ```ignore
//! use frxdocs_builder::DocsBuilder;
//! use frxdocs_config::Config;
//!
//! let config = Config::load(None, None)?;
//! let summary = DocsBuilder::from_config(&config)?.build_and_write()?;
//! println!("{} documents", summary.documents);
//! ```

mod builder;
mod front_matter;
mod split;

pub use builder::{BuildConfig, BuildError, BuildSummary, DocsBuilder, build_document, to_json};
pub use front_matter::{FrontMatter, FrontMatterError, split_front_matter};
