//! Bare URL autolinking for text runs.
//!
//! `pulldown-cmark` only links `<https://...>` autolinks. This module adds the
//! GitHub-flavored extension that links bare `http://`, `https://` and `www.`
//! URLs found in ordinary text.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::state::escape_html;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)[^\s<>]+").unwrap());

/// Characters stripped from the end of a candidate URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?', '"', '\'', '*', '_', '~'];

/// Escape `text` and wrap bare URLs in anchors, appending to `out`.
pub(crate) fn push_linked_text(text: &str, out: &mut String) {
    let mut last = 0;

    for found in URL_RE.find_iter(text) {
        // GFM only links URLs that start a word.
        let preceded_by_word = text[..found.start()]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '/' || c == '.');
        if preceded_by_word {
            continue;
        }

        let url = trim_url(found.as_str());
        if url.len() <= "www.".len() || url.ends_with("://") {
            continue;
        }

        let start = found.start();
        let end = start + url.len();
        out.push_str(&escape_html(&text[last..start]));

        let href = if url.starts_with("www.") {
            format!("http://{url}")
        } else {
            url.to_owned()
        };
        let _ = write!(
            out,
            r#"<a href="{}">{}</a>"#,
            escape_html(&href),
            escape_html(url)
        );
        last = end;
    }

    out.push_str(&escape_html(&text[last..]));
}

/// Drop trailing punctuation and unbalanced closing parentheses.
fn trim_url(url: &str) -> &str {
    let mut url = url;
    loop {
        let trimmed = url.trim_end_matches(TRAILING_PUNCTUATION);
        let trimmed = match trimmed.strip_suffix(')') {
            Some(rest) if trimmed.matches('(').count() < trimmed.matches(')').count() => rest,
            _ => trimmed,
        };
        if trimmed.len() == url.len() {
            return url;
        }
        url = trimmed;
    }
}
