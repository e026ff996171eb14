//! Document tree produced from an advice reply

use serde::Serialize;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Tree node with source location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Root node - one formatted reply
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub blocks: Vec<Spanned<Block>>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over blocks without their spans
    pub fn iter(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter().map(|b| &b.node)
    }
}

/// Block-level element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// `# Title`, `## Title`, `### Title`
    Heading {
        level: HeadingLevel,
        content: Vec<Inline>,
    },
    /// Run of adjacent `- `, `• ` or `1. ` lines
    List { items: Vec<Spanned<ListItem>> },
    /// Text lines joined by soft line breaks
    Paragraph { lines: Vec<Vec<Inline>> },
}

/// Heading size; level 1 is the largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn level(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// HTML tag name for this level
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.level()
    }
}

/// Marker a list item was written with. Numbers are not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMarker {
    Bullet,
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub marker: ListMarker,
    pub content: Vec<Inline>,
}

/// Inline content within a block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    /// `**bold**`
    Strong(Vec<Inline>),
    /// `*italic*`
    Emphasis(Vec<Inline>),
}

impl Inline {
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text(s.into())
    }
}

/// Concatenate the visible text of inline content, dropping emphasis
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    collect_text(inlines, &mut out);
    out
}

fn collect_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(s) => out.push_str(s),
            Inline::Strong(children) | Inline::Emphasis(children) => collect_text(children, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_flattens_emphasis() {
        let content = vec![
            Inline::text("save "),
            Inline::Strong(vec![Inline::text("20%")]),
            Inline::text(" of "),
            Inline::Emphasis(vec![Inline::text("every")]),
            Inline::text(" paycheck"),
        ];
        assert_eq!(plain_text(&content), "save 20% of every paycheck");
    }

    #[test]
    fn test_heading_level_numbers() {
        assert_eq!(HeadingLevel::H1.level(), 1);
        assert_eq!(HeadingLevel::H3.level(), 3);
        assert_eq!(HeadingLevel::H2.tag(), "h2");
    }

    #[test]
    fn test_block_serializes_with_type_tag() {
        let block = Block::Heading {
            level: HeadingLevel::H2,
            content: vec![Inline::text("Plan")],
        };
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(
            json,
            r#"{"type":"heading","level":2,"content":[{"text":"Plan"}]}"#
        );
    }
}
