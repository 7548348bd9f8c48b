//! Heading slugs.

/// Convert heading text to a URL-safe slug.
///
/// Lower-cases the text, replaces every run of characters outside `[a-z0-9]`
/// with a single `-`, and drops leading and trailing dashes. The output only
/// contains `[a-z0-9-]`, so slugifying a slug returns it unchanged.
///
/// # Examples
///
/// ```
/// use frxdocs_renderer::slugify;
///
/// assert_eq!(slugify("HTTP Middleware (httpx)"), "http-middleware-httpx");
/// assert_eq!(slugify("--Quick  Start--"), "quick-start");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}
