//! Event-driven HTML writer.

use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, LinkType, Options, Parser, Tag, TagEnd};

use crate::autolink::push_linked_text;
use crate::slug::slugify;
use crate::state::{CodeCapture, HeadingCapture, HeadingEntry, ImageCapture, TableLayout, escape_html};

/// HTML for one Markdown source.
#[derive(Clone, Debug)]
pub struct RenderResult {
    pub html: String,
    /// Headings in document order, carrying the ids written to their tags.
    pub headings: Vec<HeadingEntry>,
}

/// Converts Markdown to HTML.
///
/// GitHub-flavored extensions and `<br>` soft breaks are on unless turned off
/// with [`with_gfm`](Self::with_gfm) or [`with_breaks`](Self::with_breaks).
pub struct HtmlRenderer {
    out: String,
    headings: HeadingCapture,
    table: TableLayout,
    code: Option<CodeCapture>,
    image: Option<ImageCapture>,
    /// Adjacent text events, joined so a URL split across them still links.
    text_run: String,
    open_links: usize,
    gfm: bool,
    breaks: bool,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: String::new(),
            headings: HeadingCapture::default(),
            table: TableLayout::default(),
            code: None,
            image: None,
            text_run: String::new(),
            open_links: 0,
            gfm: true,
            breaks: true,
        }
    }

    /// Toggle tables, strikethrough, task lists and bare URL links.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Toggle `<br>` for soft line breaks.
    #[must_use]
    pub fn with_breaks(mut self, enabled: bool) -> Self {
        self.breaks = enabled;
        self
    }

    #[must_use]
    pub fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.gfm {
            options.insert(Options::ENABLE_TABLES);
            options.insert(Options::ENABLE_STRIKETHROUGH);
            options.insert(Options::ENABLE_TASKLISTS);
            options.insert(Options::ENABLE_GFM);
        }
        options
    }

    pub fn render_markdown(&mut self, markdown: &str) -> RenderResult {
        let options = self.parser_options();
        self.render(Parser::new_ext(markdown, options))
    }

    /// Render an event stream. The renderer is reusable afterwards.
    pub fn render<'a>(&mut self, events: impl IntoIterator<Item = Event<'a>>) -> RenderResult {
        for event in events {
            match event {
                Event::Text(text) => self.text(&text),
                other => {
                    self.flush_text();
                    self.event(other);
                }
            }
        }
        self.flush_text();

        RenderResult {
            html: std::mem::take(&mut self.out),
            headings: self.headings.drain(),
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.inline(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.inline("<br>"),
            Event::Rule => self.out.push_str("<hr>"),
            Event::TaskListMarker(true) => {
                self.out.push_str(r#"<input type="checkbox" checked disabled> "#);
            }
            Event::TaskListMarker(false) => {
                self.out.push_str(r#"<input type="checkbox" disabled> "#);
            }
            Event::Text(_)
            | Event::FootnoteReference(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_) => {}
        }
    }

    /// Inline markup goes to the open heading if there is one. Inside image
    /// alt text it is dropped.
    fn inline(&mut self, html: &str) {
        if self.image.is_some() {
            return;
        }
        if self.headings.is_open() {
            self.headings.push("", html);
        } else {
            self.out.push_str(html);
        }
    }

    fn element(&mut self, markup: &str, inline: bool) {
        if inline {
            self.inline(markup);
        } else {
            self.out.push_str(markup);
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        if let Some((name, inline)) = plain_start(&tag) {
            self.element(&format!("<{name}>"), inline);
            return;
        }
        match tag {
            // The opening tag is written on close, once the id is known.
            Tag::Heading { level, .. } => self.headings.open(level as u8),
            Tag::CodeBlock(CodeBlockKind::Fenced(info)) => {
                self.code = Some(CodeCapture::new(fence_language(&info)));
            }
            Tag::CodeBlock(CodeBlockKind::Indented) => self.code = Some(CodeCapture::new(None)),
            Tag::List(None) => self.out.push_str("<ul>"),
            Tag::List(Some(1)) => self.out.push_str("<ol>"),
            Tag::List(Some(start)) => {
                let _ = write!(self.out, r#"<ol start="{start}">"#);
            }
            Tag::Table(alignments) => {
                self.table.begin(alignments);
                self.out.push_str("<table>");
            }
            Tag::TableHead => {
                self.table.begin_head();
                self.out.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.begin_row();
                self.out.push_str("<tr>");
            }
            Tag::TableCell => {
                let _ = write!(
                    self.out,
                    "<{}{}>",
                    self.table.cell_tag(),
                    self.table.align_attr()
                );
            }
            Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            } => {
                self.open_links += 1;
                let scheme = if matches!(link_type, LinkType::Email) {
                    "mailto:"
                } else {
                    ""
                };
                let mut anchor = format!(r#"<a href="{scheme}{}""#, escape_html(&dest_url));
                if !title.is_empty() {
                    let _ = write!(anchor, r#" title="{}""#, escape_html(&title));
                }
                anchor.push('>');
                self.inline(&anchor);
            }
            Tag::Image {
                dest_url, title, ..
            } => self.image = Some(ImageCapture::new(&dest_url, &title)),
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        if let Some((name, inline)) = plain_end(tag) {
            self.element(&format!("</{name}>"), inline);
            return;
        }
        match tag {
            TagEnd::Heading(_) => {
                if let Some((level, id, html)) = self.headings.close() {
                    let _ = write!(
                        self.out,
                        r#"<h{level} id="{id}">{}</h{level}>"#,
                        html.trim()
                    );
                }
            }
            TagEnd::CodeBlock => {
                if let Some(code) = self.code.take() {
                    self.out.push_str(&code.into_html());
                }
            }
            TagEnd::List(true) => self.out.push_str("</ol>"),
            TagEnd::List(false) => self.out.push_str("</ul>"),
            TagEnd::Table => self.out.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.table.finish_head();
                self.out.push_str("</tr></thead><tbody>");
            }
            TagEnd::TableRow => self.out.push_str("</tr>"),
            TagEnd::TableCell => {
                let _ = write!(self.out, "</{}>", self.table.cell_tag());
                self.table.advance();
            }
            TagEnd::Link => {
                self.open_links = self.open_links.saturating_sub(1);
                self.inline("</a>");
            }
            TagEnd::Image => {
                if let Some(image) = self.image.take() {
                    self.inline(&image.into_html());
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(code) = &mut self.code {
            code.body.push_str(text);
        } else if let Some(image) = &mut self.image {
            image.alt.push_str(text);
        } else if self.headings.is_open() {
            self.headings.push(text, &escape_html(text));
        } else {
            self.text_run.push_str(text);
        }
    }

    /// Write the pending text run, linking bare URLs outside of links.
    fn flush_text(&mut self) {
        if self.text_run.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text_run);
        if self.gfm && self.open_links == 0 {
            push_linked_text(&text, &mut self.out);
        } else {
            self.out.push_str(&escape_html(&text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if let Some(image) = &mut self.image {
            image.alt.push_str(code);
            return;
        }
        let html = format!("<code>{}</code>", escape_html(code));
        if self.headings.is_open() {
            self.headings.push(code, &html);
        } else {
            self.out.push_str(&html);
        }
    }

    fn soft_break(&mut self) {
        if let Some(image) = &mut self.image {
            image.alt.push(' ');
        } else if self.headings.is_open() {
            self.headings.push(" ", " ");
        } else if self.breaks {
            self.out.push_str("<br>\n");
        } else {
            self.out.push('\n');
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Anchor id the renderer writes for a heading with this source text.
///
/// Inline markup is resolved before slugging, so `[errorx](https://x.io)`
/// gives `errorx` and `Foo &amp; Bar` gives `foo-bar`.
#[must_use]
pub fn heading_id(text: &str) -> String {
    HtmlRenderer::new()
        .render_markdown(&format!("### {text}"))
        .headings
        .into_iter()
        .next()
        .map_or_else(|| slugify(text), |heading| heading.id)
}

/// Tags that map to one fixed element: `(name, is_inline)`.
fn plain_start(tag: &Tag<'_>) -> Option<(&'static str, bool)> {
    let element = match tag {
        Tag::Paragraph => ("p", false),
        Tag::BlockQuote(_) => ("blockquote", false),
        Tag::Item => ("li", false),
        Tag::DefinitionList => ("dl", false),
        Tag::DefinitionListTitle => ("dt", false),
        Tag::DefinitionListDefinition => ("dd", false),
        Tag::Emphasis => ("em", true),
        Tag::Strong => ("strong", true),
        Tag::Strikethrough => ("del", true),
        Tag::Superscript => ("sup", true),
        Tag::Subscript => ("sub", true),
        _ => return None,
    };
    Some(element)
}

fn plain_end(tag: TagEnd) -> Option<(&'static str, bool)> {
    let element = match tag {
        TagEnd::Paragraph => ("p", false),
        TagEnd::BlockQuote(_) => ("blockquote", false),
        TagEnd::Item => ("li", false),
        TagEnd::DefinitionList => ("dl", false),
        TagEnd::DefinitionListTitle => ("dt", false),
        TagEnd::DefinitionListDefinition => ("dd", false),
        TagEnd::Emphasis => ("em", true),
        TagEnd::Strong => ("strong", true),
        TagEnd::Strikethrough => ("del", true),
        TagEnd::Superscript => ("sup", true),
        TagEnd::Subscript => ("sub", true),
        _ => return None,
    };
    Some(element)
}

/// First word of a fence info string (`go title=main.go` is `go`).
fn fence_language(info: &str) -> Option<String> {
    info.split_whitespace().next().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(markdown: &str) -> RenderResult {
        HtmlRenderer::new().render_markdown(markdown)
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(render("Hello, world!").html, "<p>Hello, world!</p>");
    }

    #[test]
    fn test_heading_gets_slug_id() {
        let result = render("## Section Title");
        assert_eq!(result.html, r#"<h2 id="section-title">Section Title</h2>"#);
        assert_eq!(
            result.headings,
            vec![HeadingEntry {
                level: 2,
                title: "Section Title".to_owned(),
                id: "section-title".to_owned(),
            }]
        );
    }

    #[test]
    fn test_heading_id_uses_plain_text() {
        let result = render("### The `Logger` **type**");
        assert_eq!(
            result.html,
            r#"<h3 id="the-logger-type">The <code>Logger</code> <strong>type</strong></h3>"#
        );
    }

    #[test]
    fn test_heading_id_matches_slug_of_source() {
        let result = render("## HTTP Middleware (httpx)");
        assert_eq!(result.headings[0].id, "http-middleware-httpx");
    }

    #[test]
    fn test_repeated_headings_share_id() {
        let result = render("### Usage\n\n### Usage");
        assert_eq!(
            result.html,
            r#"<h3 id="usage">Usage</h3><h3 id="usage">Usage</h3>"#
        );
    }

    #[test]
    fn test_soft_break_becomes_br() {
        assert_eq!(render("line one\nline two").html, "<p>line one<br>\nline two</p>");
    }

    #[test]
    fn test_soft_break_disabled() {
        let result = HtmlRenderer::new()
            .with_breaks(false)
            .render_markdown("line one\nline two");
        assert_eq!(result.html, "<p>line one\nline two</p>");
    }

    #[test]
    fn test_hard_break() {
        assert_eq!(render("one  \ntwo").html, "<p>one<br>two</p>");
    }

    #[test]
    fn test_fenced_code_gets_language_class() {
        let result = render("```go\nfunc main() {}\n```");
        assert_eq!(
            result.html,
            "<pre><code class=\"language-go\">func main() {}\n</code></pre>"
        );
    }

    #[test]
    fn test_fence_info_attributes_ignored() {
        let result = render("```bash title=install.sh\ngo get x\n```");
        assert!(result.html.contains(r#"class="language-bash""#));
    }

    #[test]
    fn test_code_without_language() {
        assert_eq!(
            render("```\nplain\n```").html,
            "<pre><code>plain\n</code></pre>"
        );
    }

    #[test]
    fn test_code_content_escaped_and_not_highlighted() {
        let result = render("```html\n<div class=\"x\">\n```");
        assert_eq!(
            result.html,
            "<pre><code class=\"language-html\">&lt;div class=&quot;x&quot;&gt;\n</code></pre>"
        );
    }

    #[test]
    fn test_headings_inside_code_are_not_headings() {
        let result = render("```bash\n# install\n## not a heading\n```");
        assert!(result.headings.is_empty());
        assert!(result.html.contains("# install"));
    }

    #[test]
    fn test_table() {
        let result = render("| Name | Value |\n|:-----|------:|\n| a | 1 |");
        assert_eq!(
            result.html,
            concat!(
                r#"<table><thead><tr><th style="text-align:left">Name</th>"#,
                r#"<th style="text-align:right">Value</th></tr></thead><tbody>"#,
                r#"<tr><td style="text-align:left">a</td><td style="text-align:right">1</td></tr>"#,
                "</tbody></table>"
            )
        );
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(render("~~old~~").html, "<p><del>old</del></p>");
    }

    #[test]
    fn test_task_list() {
        let result = render("- [x] done\n- [ ] todo");
        assert!(result.html.contains(r#"<input type="checkbox" checked disabled> done"#));
        assert!(result.html.contains(r#"<input type="checkbox" disabled> todo"#));
    }

    #[test]
    fn test_bare_url_autolinked() {
        assert_eq!(
            render("Source: https://github.com/crazyfrankie/frx").html,
            r#"<p>Source: <a href="https://github.com/crazyfrankie/frx">https://github.com/crazyfrankie/frx</a></p>"#
        );
    }

    #[test]
    fn test_url_inside_link_not_relinked() {
        assert_eq!(
            render("[https://go.dev](https://go.dev)").html,
            r#"<p><a href="https://go.dev">https://go.dev</a></p>"#
        );
    }

    #[test]
    fn test_angle_autolink() {
        assert_eq!(
            render("<https://go.dev>").html,
            r#"<p><a href="https://go.dev">https://go.dev</a></p>"#
        );
    }

    #[test]
    fn test_autolink_disabled_without_gfm() {
        let result = HtmlRenderer::new()
            .with_gfm(false)
            .render_markdown("https://go.dev");
        assert_eq!(result.html, "<p>https://go.dev</p>");
    }

    #[test]
    fn test_email_autolink_gets_mailto() {
        assert_eq!(
            render("Mail <dev@example.com>").html,
            r#"<p>Mail <a href="mailto:dev@example.com">dev@example.com</a></p>"#
        );
    }

    #[test]
    fn test_heading_id_resolves_inline_markup() {
        assert_eq!(heading_id("[errorx](https://x.io/errorx)"), "errorx");
        assert_eq!(heading_id("Foo &amp; Bar"), "foo-bar");
        assert_eq!(heading_id("Use <small>x</small>"), "use-x");
        assert_eq!(heading_id("The `Logger` type"), "the-logger-type");
        assert_eq!(heading_id("Quick Start"), "quick-start");
    }

    #[test]
    fn test_heading_id_matches_rendered_anchor() {
        let source = "Options *(v2)* & <b>more</b>";
        let rendered = render(&format!("#### {source}"));
        assert_eq!(rendered.headings[0].id, heading_id(source));
    }

    #[test]
    fn test_link_with_title() {
        assert_eq!(
            render(r#"[frx](https://github.com "repo")"#).html,
            r#"<p><a href="https://github.com" title="repo">frx</a></p>"#
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(
            render("![Logo *alt*](logo.png)").html,
            r#"<p><img src="logo.png" alt="Logo alt"></p>"#
        );
    }

    #[test]
    fn test_text_escaped() {
        assert_eq!(render("a < b && c").html, "<p>a &lt; b &amp;&amp; c</p>");
    }

    #[test]
    fn test_html_block_kept() {
        let result = render("<div class=\"note\">hi</div>");
        assert!(result.html.starts_with("<div class=\"note\">hi</div>"));
    }

    #[test]
    fn test_ordered_list_start() {
        assert_eq!(
            render("3. three\n4. four").html,
            r#"<ol start="3"><li>three</li><li>four</li></ol>"#
        );
    }

    #[test]
    fn test_renderer_reusable() {
        let mut renderer = HtmlRenderer::new();
        let first = renderer.render_markdown("## One");
        let second = renderer.render_markdown("## Two");
        assert_eq!(first.html, r#"<h2 id="one">One</h2>"#);
        assert_eq!(second.html, r#"<h2 id="two">Two</h2>"#);
        assert_eq!(second.headings.len(), 1);
    }
}
