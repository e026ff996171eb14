//! HTML generation from parsed replies
//!
//! All reply text is escaped before it is placed in markup, so the output can
//! be injected into a page as-is even when the reply echoes untrusted input.

use crate::parser::ast::{Block, Document, Inline, ListMarker};
use crate::theme::Theme;

use super::HtmlConfig;

/// Build HTML elements line by line
pub struct HtmlBuilder<'a> {
    config: &'a HtmlConfig,
    theme: &'a Theme,
    lines: Vec<(usize, String)>,
    depth: usize,
}

impl<'a> HtmlBuilder<'a> {
    /// Create a new HTML builder
    pub fn new(config: &'a HtmlConfig, theme: &'a Theme) -> Self {
        Self {
            config,
            theme,
            lines: vec![],
            depth: 0,
        }
    }

    /// ` class="..."` for a theme token, or nothing
    pub fn class_attr(&self, token: &str) -> String {
        if !self.config.classes {
            return String::new();
        }
        self.theme
            .resolve_or_default(token)
            .map(|classes| format!(r#" class="{}""#, escape_html(&classes)))
            .unwrap_or_default()
    }

    fn push_line(&mut self, line: String) {
        self.lines.push((self.depth, line));
    }

    /// Open an element that holds block children
    pub fn open(&mut self, tag: &str, attrs: &str) {
        self.push_line(format!("<{}{}>", tag, attrs));
        self.depth += 1;
    }

    /// Close the innermost element opened with `open`
    pub fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.push_line(format!("</{}>", tag));
    }

    /// Add a pre-rendered line of markup
    pub fn add_raw(&mut self, markup: String) {
        self.push_line(markup);
    }

    pub fn add_block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, content } => {
                let tag = level.tag();
                let class = self.class_attr(&format!("heading-{}", level.level()));
                let inner = self.inlines(content);
                self.push_line(format!("<{tag}{class}>{inner}</{tag}>"));
            }
            Block::List { items } => {
                let class = self.class_attr("list");
                self.open("ul", &class);
                let item_class = self.class_attr("list-item");
                for item in items {
                    let glyph = match (item.node.marker, &self.config.bullet_glyph) {
                        (ListMarker::Bullet, Some(glyph)) => escape_html(glyph),
                        _ => String::new(),
                    };
                    let inner = self.inlines(&item.node.content);
                    self.push_line(format!("<li{item_class}>{glyph}{inner}</li>"));
                }
                self.close("ul");
            }
            Block::Paragraph { lines } => {
                let class = self.class_attr("paragraph");
                let inner = lines
                    .iter()
                    .map(|line| self.inlines(line))
                    .collect::<Vec<_>>()
                    .join("<br/>");
                self.push_line(format!("<p{class}>{inner}</p>"));
            }
        }
    }

    fn inlines(&self, content: &[Inline]) -> String {
        let mut out = String::new();
        for inline in content {
            match inline {
                Inline::Text(s) => out.push_str(&escape_html(s)),
                Inline::Strong(children) => {
                    out.push_str(&format!(
                        "<strong{}>{}</strong>",
                        self.class_attr("strong"),
                        self.inlines(children)
                    ));
                }
                Inline::Emphasis(children) => {
                    out.push_str(&format!(
                        "<em{}>{}</em>",
                        self.class_attr("emphasis"),
                        self.inlines(children)
                    ));
                }
            }
        }
        out
    }

    /// Produce the final markup
    pub fn finish(self) -> String {
        if self.config.pretty_print {
            self.lines
                .into_iter()
                .map(|(depth, line)| format!("{}{}", "  ".repeat(depth), line))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            self.lines.into_iter().map(|(_, line)| line).collect()
        }
    }
}

/// Render a document to HTML
pub fn render_html(doc: &Document, config: &HtmlConfig, theme: &Theme) -> String {
    let mut builder = HtmlBuilder::new(config, theme);
    if config.container {
        let class = builder.class_attr("container");
        builder.open("div", &class);
    }
    for block in doc.iter() {
        builder.add_block(block);
    }
    if config.container {
        builder.close("div");
    }
    builder.finish()
}

/// Escape special HTML characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
