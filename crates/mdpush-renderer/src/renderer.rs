//! GitHub-flavored markdown renderer.

use pulldown_cmark::{Options, Parser, TextMergeStream, html};

use crate::autolink::Autolinks;

/// Markdown to HTML renderer.
///
/// GFM and autolinking are enabled by default. Rendering never fails:
/// malformed tables and fences degrade to paragraphs or implicitly closed
/// blocks, as CommonMark prescribes.
#[derive(Clone, Copy, Debug)]
pub struct MarkdownRenderer {
    gfm: bool,
    autolinks: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a new renderer with GFM and autolinking enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gfm: true,
            autolinks: true,
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    /// - Alerts (`> [!NOTE]`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Enable or disable linking of bare URLs in text.
    #[must_use]
    pub fn with_autolinks(mut self, enabled: bool) -> Self {
        self.autolinks = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Create a configured parser for the given markdown text.
    #[must_use]
    pub fn create_parser<'a>(&self, markdown: &'a str) -> Parser<'a> {
        Parser::new_ext(markdown, self.parser_options())
    }

    /// Render markdown text to an HTML fragment.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let events = TextMergeStream::new(self.create_parser(markdown));
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        if self.autolinks {
            html::push_html(&mut output, Autolinks::new(events));
        } else {
            html::push_html(&mut output, events);
        }
        output
    }
}
