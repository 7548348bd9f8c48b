//! YAML front-matter at the top of a Markdown file.
//!
//! ```text
//! ---
//! title: frx Documentation
//! ---
//! # frx
//! ...
//! ```
//!
//! Only `title` is read. Other keys are accepted and ignored.

use serde_yaml::Value;

/// Delimiter line opening and closing the front-matter block.
const DELIMITER: &str = "---";

/// Metadata parsed from front-matter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontMatter {
    /// Document title. Empty titles are treated as absent.
    pub title: Option<String>,
}

/// Error raised for malformed front-matter YAML.
#[derive(Debug, thiserror::Error)]
#[error("invalid front-matter: {0}")]
pub struct FrontMatterError(#[from] serde_yaml::Error);

/// Split a Markdown file into its front-matter and body.
///
/// A file has front-matter only when its first line is `---` and a later line
/// is `---`. Without a closing delimiter the whole input is body.
pub fn split_front_matter(source: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let Some((first, rest)) = split_first_line(source) else {
        return Ok((FrontMatter::default(), source));
    };
    if first.trim_end() != DELIMITER {
        return Ok((FrontMatter::default(), source));
    }

    let mut offset = 0;
    let mut remaining = rest;
    while let Some((line, after)) = split_first_line(remaining) {
        if line.trim_end() == DELIMITER {
            let yaml = &rest[..offset];
            return Ok((parse_yaml(yaml)?, after));
        }
        offset += remaining.len() - after.len();
        remaining = after;
    }

    Ok((FrontMatter::default(), source))
}

/// Split off the first line, dropping its line terminator.
///
/// Returns `None` for empty input.
fn split_first_line(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }
    Some(match text.find('\n') {
        Some(pos) => (text[..pos].trim_end_matches('\r'), &text[pos + 1..]),
        None => (text, ""),
    })
}

fn parse_yaml(yaml: &str) -> Result<FrontMatter, FrontMatterError> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    let value: Value = serde_yaml::from_str(yaml)?;
    let title = match value.get("title") {
        Some(Value::String(s)) => Some(s.trim().to_owned()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
    .filter(|t| !t.is_empty());

    Ok(FrontMatter { title })
}
