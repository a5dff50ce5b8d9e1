//! Bare URL autolinking for the markdown event stream.
//!
//! GitHub-flavored markdown links `http://`, `https://` and `www.` URLs that
//! appear in plain text. pulldown-cmark does not, so [`Autolinks`] rewrites
//! text events into link events before they reach the HTML writer.

use std::collections::VecDeque;
use std::sync::LazyLock;

use pulldown_cmark::{CowStr, Event, LinkType, Tag, TagEnd};
use regex::Regex;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://|www\.)[^\s<>]+").expect("invalid autolink regex")
});

/// Characters that end a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?', '\'', '"', '*', '_', '~'];

/// Event filter that turns bare URLs in text into links.
///
/// Text inside links, images and code blocks is passed through untouched.
/// Inline code arrives as [`Event::Code`] and is never rewritten. Adjacent
/// text events should be merged beforehand (see
/// [`TextMergeStream`](pulldown_cmark::TextMergeStream)) so that URLs split
/// by entity references are seen whole.
pub struct Autolinks<'a, I> {
    inner: I,
    pending: VecDeque<Event<'a>>,
    link_depth: usize,
    in_code_block: bool,
}

impl<'a, I> Autolinks<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    /// Wrap an event iterator.
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
            link_depth: 0,
            in_code_block: false,
        }
    }
}

impl<'a, I> Iterator for Autolinks<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }

        let event = self.inner.next()?;
        match &event {
            Event::Start(Tag::Link { .. } | Tag::Image { .. }) => self.link_depth += 1,
            Event::End(TagEnd::Link | TagEnd::Image) => {
                self.link_depth = self.link_depth.saturating_sub(1);
            }
            Event::Start(Tag::CodeBlock(_)) => self.in_code_block = true,
            Event::End(TagEnd::CodeBlock) => self.in_code_block = false,
            Event::Text(text) if self.link_depth == 0 && !self.in_code_block => {
                if let Some(events) = linkify(text) {
                    self.pending.extend(events);
                    return self.pending.pop_front();
                }
            }
            _ => {}
        }
        Some(event)
    }
}

/// Split text around bare URLs.
///
/// Returns `None` when the text contains nothing to link.
fn linkify<'a>(text: &str) -> Option<Vec<Event<'a>>> {
    let mut events = Vec::new();
    let mut last = 0;

    for found in URL_PATTERN.find_iter(text) {
        if !starts_at_boundary(text, found.start()) {
            continue;
        }

        let url = trim_url(found.as_str());
        if !has_host(url) {
            continue;
        }

        if found.start() > last {
            events.push(Event::Text(CowStr::from(text[last..found.start()].to_owned())));
        }

        let href = if url.starts_with("www.") {
            format!("http://{url}")
        } else {
            url.to_owned()
        };
        events.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: CowStr::from(href),
            title: CowStr::Borrowed(""),
            id: CowStr::Borrowed(""),
        }));
        events.push(Event::Text(CowStr::from(url.to_owned())));
        events.push(Event::End(TagEnd::Link));

        last = found.start() + url.len();
    }

    if events.is_empty() {
        return None;
    }
    if last < text.len() {
        events.push(Event::Text(CowStr::from(text[last..].to_owned())));
    }
    Some(events)
}

/// URLs only start after whitespace, an opening delimiter, or at the start of text.
fn starts_at_boundary(text: &str, start: usize) -> bool {
    text[..start].chars().next_back().is_none_or(|c| {
        c.is_whitespace() || matches!(c, '*' | '_' | '~' | '(' | '<' | '"' | '\'')
    })
}

/// Strip trailing punctuation and unbalanced closing parentheses.
fn trim_url(candidate: &str) -> &str {
    let mut url = candidate;
    loop {
        let trimmed = url.trim_end_matches(TRAILING_PUNCTUATION);
        let trimmed = match trimmed.strip_suffix(')') {
            Some(rest) if trimmed.matches(')').count() > trimmed.matches('(').count() => rest,
            _ => trimmed,
        };
        if trimmed.len() == url.len() {
            return url;
        }
        url = trimmed;
    }
}

fn has_host(url: &str) -> bool {
    let rest = url
        .strip_prefix("www.")
        .or_else(|| url.split_once("://").map(|(_, rest)| rest))
        .unwrap_or_default();
    !rest.is_empty()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{MarkdownRenderer, convert_markdown};

    fn render(markdown: &str) -> String {
        MarkdownRenderer::new().render(markdown)
    }

    #[test]
    fn test_links_bare_url() {
        assert_eq!(
            render("Visit https://example.com today"),
            "<p>Visit <a href=\"https://example.com\">https://example.com</a> today</p>\n"
        );
    }

    #[test]
    fn test_trailing_period_is_not_part_of_link() {
        assert_eq!(
            render("See https://example.com/docs."),
            "<p>See <a href=\"https://example.com/docs\">https://example.com/docs</a>.</p>\n"
        );
    }

    #[test]
    fn test_www_link_gets_http_scheme() {
        let html = render("Go to www.example.com/start");
        assert!(html.contains(r#"<a href="http://www.example.com/start">www.example.com/start</a>"#));
    }

    #[test]
    fn test_unbalanced_paren_is_excluded() {
        let html = render("(https://example.com)");
        assert_eq!(
            html,
            "<p>(<a href=\"https://example.com\">https://example.com</a>)</p>\n"
        );
    }

    #[test]
    fn test_balanced_paren_is_kept() {
        assert_eq!(trim_url("https://example.com/a_(b)"), "https://example.com/a_(b)");
        assert_eq!(trim_url("https://example.com/a_(b))."), "https://example.com/a_(b)");
    }

    #[test]
    fn test_no_link_inside_inline_code() {
        let html = render("Run `curl https://example.com` now");
        assert!(!html.contains("<a "));
        assert!(html.contains("<code>curl https://example.com</code>"));
    }

    #[test]
    fn test_no_link_inside_code_block() {
        let html = render("```\nhttps://example.com\n```");
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_no_link_inside_existing_link() {
        let html = render("[https://example.com](https://example.com)");
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn test_requires_boundary_before_url() {
        assert!(!render("xhttps://example.com").contains("<a "));
    }

    #[test]
    fn test_scheme_without_host_is_text() {
        assert!(!render("just www. and nothing").contains("<a "));
    }

    #[test]
    fn test_multiple_urls_in_one_paragraph() {
        let html = render("https://a.example and https://b.example");
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains("</a> and <a"));
    }

    #[test]
    fn test_escaped_query_string_stays_whole() {
        let html = convert_markdown("https://example.com/?a=1&b=2");
        assert!(html.contains(r#"href="https://example.com/?a=1&amp;b=2""#));
    }

    #[test]
    fn test_escaped_angle_brackets_around_url() {
        let html = convert_markdown("<https://example.com>");
        assert_eq!(
            html,
            "<p>&lt;<a href=\"https://example.com\">https://example.com</a>&gt;</p>\n"
        );
    }
}
