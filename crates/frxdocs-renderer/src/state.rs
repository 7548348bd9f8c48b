//! Buffers for constructs whose HTML depends on events seen later.

use std::fmt::Write;

use pulldown_cmark::Alignment;

use crate::slug::slugify;

/// Fenced or indented code collected until the block ends.
pub(crate) struct CodeCapture {
    pub(crate) language: Option<String>,
    pub(crate) body: String,
}

impl CodeCapture {
    pub(crate) fn new(language: Option<String>) -> Self {
        Self {
            language,
            body: String::new(),
        }
    }

    pub(crate) fn into_html(self) -> String {
        let mut html = String::from("<pre><code");
        if let Some(language) = &self.language {
            let _ = write!(html, r#" class="language-{}""#, escape_html(language));
        }
        let _ = write!(html, ">{}</code></pre>", escape_html(&self.body));
        html
    }
}

/// An image whose alt text is still being read.
pub(crate) struct ImageCapture {
    src: String,
    title: String,
    pub(crate) alt: String,
}

impl ImageCapture {
    pub(crate) fn new(src: &str, title: &str) -> Self {
        Self {
            src: src.to_owned(),
            title: title.to_owned(),
            alt: String::new(),
        }
    }

    pub(crate) fn into_html(self) -> String {
        let mut html = format!(r#"<img src="{}""#, escape_html(&self.src));
        if !self.title.is_empty() {
            let _ = write!(html, r#" title="{}""#, escape_html(&self.title));
        }
        let _ = write!(html, r#" alt="{}">"#, escape_html(&self.alt));
        html
    }
}

/// Column alignments and position within the current table.
#[derive(Default)]
pub(crate) struct TableLayout {
    alignments: Vec<Alignment>,
    column: usize,
    head: bool,
}

impl TableLayout {
    pub(crate) fn begin(&mut self, alignments: Vec<Alignment>) {
        *self = Self {
            alignments,
            ..Self::default()
        };
    }

    pub(crate) fn begin_head(&mut self) {
        self.head = true;
        self.column = 0;
    }

    pub(crate) fn finish_head(&mut self) {
        self.head = false;
    }

    pub(crate) fn begin_row(&mut self) {
        self.column = 0;
    }

    pub(crate) fn advance(&mut self) {
        self.column += 1;
    }

    pub(crate) fn cell_tag(&self) -> &'static str {
        if self.head { "th" } else { "td" }
    }

    pub(crate) fn align_attr(&self) -> &'static str {
        match self.alignments.get(self.column) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// A heading seen while rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingEntry {
    /// 1 through 6.
    pub level: u8,
    /// Plain text with inline markup removed.
    pub title: String,
    /// Value of the tag's `id` attribute.
    pub id: String,
}

/// The open heading plus every heading closed so far.
///
/// Ids are the bare slug of the plain text, so two headings with the same
/// text share an id. [`heading_id`](crate::heading_id) reproduces them from
/// source text.
#[derive(Default)]
pub(crate) struct HeadingCapture {
    level: Option<u8>,
    plain: String,
    html: String,
    seen: Vec<HeadingEntry>,
}

impl HeadingCapture {
    pub(crate) fn is_open(&self) -> bool {
        self.level.is_some()
    }

    pub(crate) fn open(&mut self, level: u8) {
        self.level = Some(level);
        self.plain.clear();
        self.html.clear();
    }

    pub(crate) fn push(&mut self, plain: &str, html: &str) {
        self.plain.push_str(plain);
        self.html.push_str(html);
    }

    /// Finish the open heading, returning `(level, id, inner_html)`.
    pub(crate) fn close(&mut self) -> Option<(u8, String, String)> {
        let level = self.level.take()?;
        let id = slugify(&self.plain);
        self.seen.push(HeadingEntry {
            level,
            title: self.plain.trim().to_owned(),
            id: id.clone(),
        });
        Some((level, id, std::mem::take(&mut self.html)))
    }

    pub(crate) fn drain(&mut self) -> Vec<HeadingEntry> {
        std::mem::take(&mut self.seen)
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for c in s.chars() {
        let entity = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#x27;",
            _ => {
                out.push(c);
                continue;
            }
        };
        out.push_str(entity);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_code_capture_html() {
        let mut code = CodeCapture::new(Some("go".to_owned()));
        code.body.push_str("if a < b {}\n");
        assert_eq!(
            code.into_html(),
            "<pre><code class=\"language-go\">if a &lt; b {}\n</code></pre>"
        );
        assert_eq!(
            CodeCapture::new(None).into_html(),
            "<pre><code></code></pre>"
        );
    }

    #[test]
    fn test_image_capture_title() {
        let mut image = ImageCapture::new("arch.png", "Layers");
        image.alt.push_str("Architecture");
        assert_eq!(
            image.into_html(),
            r#"<img src="arch.png" title="Layers" alt="Architecture">"#
        );
    }

    #[test]
    fn test_table_layout_alignment() {
        let mut table = TableLayout::default();
        table.begin(vec![Alignment::Left, Alignment::None, Alignment::Right]);
        assert_eq!(table.align_attr(), r#" style="text-align:left""#);
        table.advance();
        assert_eq!(table.align_attr(), "");
        table.advance();
        assert_eq!(table.align_attr(), r#" style="text-align:right""#);
        table.advance();
        assert_eq!(table.align_attr(), "");
    }

    #[test]
    fn test_table_layout_head_cells() {
        let mut table = TableLayout::default();
        table.begin(Vec::new());
        table.begin_head();
        assert_eq!(table.cell_tag(), "th");
        table.finish_head();
        assert_eq!(table.cell_tag(), "td");
    }

    #[test]
    fn test_repeated_headings_share_id() {
        let mut headings = HeadingCapture::default();
        for _ in 0..2 {
            headings.open(3);
            headings.push("Usage", "Usage");
            headings.close();
        }
        let seen = headings.drain();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].id, "usage");
        assert_eq!(seen[1].id, "usage");
    }

    #[test]
    fn test_close_without_open() {
        assert!(HeadingCapture::default().close().is_none());
    }
}
