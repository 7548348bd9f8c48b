//! Line-based splitting of a Markdown body into sections.
//!
//! Headings are recognized by their ATX prefix at the start of a line:
//! `# ` drops the line, `## ` opens a section, `### ` and `#### ` become
//! table-of-contents entries. Lines inside fenced code blocks are never
//! headings.

use frxdocs_document::TocItem;
use frxdocs_renderer::heading_id;

/// Classification of a single body line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Line<'a> {
    /// `# text`
    Title,
    /// `## text`
    Section(&'a str),
    /// `### text` or `#### text`
    SubHeading(u8, &'a str),
    /// Anything else, including every line of a fenced code block.
    Text,
}

/// Tracks whether the scan is inside a fenced code block.
#[derive(Default)]
struct FenceTracker {
    /// Fence character and length of the open fence.
    open: Option<(char, usize)>,
}

impl FenceTracker {
    /// Feed a line; returns `true` if the line is fence or code content.
    fn observe(&mut self, line: &str) -> bool {
        let Some((ch, len, rest)) = fence_marker(line) else {
            return self.open.is_some();
        };

        match self.open {
            None => {
                // Backtick fences cannot have backticks in their info string.
                if ch == '`' && rest.contains('`') {
                    return false;
                }
                self.open = Some((ch, len));
            }
            Some((open_ch, open_len)) => {
                if ch == open_ch && len >= open_len && rest.trim().is_empty() {
                    self.open = None;
                }
            }
        }
        true
    }
}

/// Parse a fence marker: up to three spaces, then three or more of the same
/// backtick or tilde. Returns (char, run length, remainder).
fn fence_marker(line: &str) -> Option<(char, usize, &str)> {
    let trimmed = line.trim_start_matches(' ');
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let ch = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == ch).count();
    (len >= 3).then(|| (ch, len, &trimmed[len..]))
}

fn classify<'a>(line: &'a str, fence: &mut FenceTracker) -> Line<'a> {
    if fence.observe(line) {
        return Line::Text;
    }

    let heading = |prefix: &str| line.strip_prefix(prefix).filter(|text| !text.is_empty());

    if heading("# ").is_some() {
        Line::Title
    } else if let Some(text) = heading("## ") {
        Line::Section(text)
    } else if let Some(text) = heading("### ") {
        Line::SubHeading(3, text)
    } else if let Some(text) = heading("#### ") {
        Line::SubHeading(4, text)
    } else {
        Line::Text
    }
}

/// A section as cut from the source, before rendering.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RawSection<'a> {
    /// Slug of the heading text.
    pub(crate) id: String,
    /// Literal heading text.
    pub(crate) title: &'a str,
    /// Source lines, starting with the `## ` heading line.
    pub(crate) lines: Vec<&'a str>,
}

impl RawSection<'_> {
    /// Markdown source of the section.
    pub(crate) fn markdown(&self) -> String {
        self.lines.join("\n")
    }
}

/// Split a body into level-2 sections.
///
/// Lines before the first `## ` heading and `# ` lines are dropped. Returns an
/// empty list when the body has no `## ` heading.
pub(crate) fn split_sections(body: &str) -> Vec<RawSection<'_>> {
    let mut sections = Vec::new();
    let mut current: Option<RawSection<'_>> = None;
    let mut fence = FenceTracker::default();

    for line in body.lines() {
        match classify(line, &mut fence) {
            Line::Title => {}
            Line::Section(title) => {
                if let Some(done) = current.take() {
                    sections.push(done);
                }
                current = Some(RawSection {
                    id: heading_id(title),
                    title,
                    lines: vec![line],
                });
            }
            Line::SubHeading(..) | Line::Text => {
                if let Some(section) = current.as_mut() {
                    section.lines.push(line);
                }
            }
        }
    }

    sections.extend(current);
    sections
}

/// Table of contents for a section: its `### ` and `#### ` lines in order.
pub(crate) fn extract_toc(lines: &[&str]) -> Vec<TocItem> {
    let mut fence = FenceTracker::default();
    lines
        .iter()
        .filter_map(|line| match classify(line, &mut fence) {
            Line::SubHeading(level, title) => Some(TocItem {
                id: heading_id(title),
                title: title.to_owned(),
                level,
            }),
            _ => None,
        })
        .collect()
}
