//! Escaping of reserved HTML characters in markdown source.

/// Replace `&`, `<` and `>` with their HTML entities.
///
/// Works in a single pass, so entities produced for `<` and `>` are never
/// re-escaped. Applying it twice is not a no-op: `&` becomes `&amp;` and
/// then `&amp;amp;`.
///
/// # Examples
///
/// ```
/// use mdpush_renderer::escape_markdown;
///
/// assert_eq!(escape_markdown("a < b & c > d"), "a &lt; b &amp; c &gt; d");
/// ```
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}
