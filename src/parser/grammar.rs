//! Block grouping over classified lines

use tracing::debug;

use crate::parser::ast::*;
use crate::parser::inline::parse_inline;
use crate::parser::lexer::{lex_lines, Line, LineKind};

/// Parse an advice reply into a document
///
/// Never fails: text without any recognized marker becomes paragraphs, and
/// malformed markers are kept as literal text.
pub fn parse(input: &str) -> Document {
    let mut builder = BlockBuilder::default();

    for line in lex_lines(input) {
        match line.kind {
            LineKind::Blank => {
                builder.flush_list();
                builder.flush_paragraph();
            }
            LineKind::Heading(level) => {
                builder.flush_list();
                builder.flush_paragraph();
                builder.push_heading(level, &line);
            }
            LineKind::ListItem(_) => {
                builder.flush_paragraph();
                builder.list.push(line);
            }
            LineKind::Text => {
                builder.flush_list();
                builder.paragraph.push(line);
            }
        }
    }
    builder.flush_list();
    builder.flush_paragraph();

    debug!(
        bytes = input.len(),
        blocks = builder.blocks.len(),
        "parsed reply"
    );
    Document {
        blocks: builder.blocks,
    }
}

/// Accumulates pending list and paragraph lines until a boundary
#[derive(Default)]
struct BlockBuilder<'a> {
    blocks: Vec<Spanned<Block>>,
    list: Vec<Line<'a>>,
    paragraph: Vec<Line<'a>>,
}

impl<'a> BlockBuilder<'a> {
    fn push_heading(&mut self, level: HeadingLevel, line: &Line<'a>) {
        self.blocks.push(Spanned::new(
            Block::Heading {
                level,
                content: parse_inline(line.content),
            },
            line.span.clone(),
        ));
    }

    fn flush_list(&mut self) {
        let Some(span) = covering_span(&self.list) else {
            return;
        };
        let items = self
            .list
            .drain(..)
            .map(|line| {
                let marker = match line.kind {
                    LineKind::ListItem(marker) => marker,
                    _ => ListMarker::Bullet,
                };
                Spanned::new(
                    ListItem {
                        marker,
                        content: parse_inline(line.content),
                    },
                    line.span,
                )
            })
            .collect();
        self.blocks.push(Spanned::new(Block::List { items }, span));
    }

    fn flush_paragraph(&mut self) {
        let Some(span) = covering_span(&self.paragraph) else {
            return;
        };
        let lines = self
            .paragraph
            .drain(..)
            .map(|line| parse_inline(line.content))
            .collect();
        self.blocks.push(Spanned::new(Block::Paragraph { lines }, span));
    }
}

fn covering_span(lines: &[Line<'_>]) -> Option<Span> {
    let first = lines.first()?;
    let last = lines.last()?;
    Some(first.span.start..last.span.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn t(s: &str) -> Inline {
        Inline::text(s)
    }

    fn blocks(input: &str) -> Vec<Block> {
        parse(input).iter().cloned().collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("  \n\n \t").is_empty());
    }

    #[test]
    fn test_single_paragraph() {
        assert_eq!(
            blocks("Pay yourself first."),
            vec![Block::Paragraph {
                lines: vec![vec![t("Pay yourself first.")]]
            }]
        );
    }

    #[test]
    fn test_soft_breaks_and_paragraph_split() {
        assert_eq!(
            blocks("one\ntwo\n\nthree"),
            vec![
                Block::Paragraph {
                    lines: vec![vec![t("one")], vec![t("two")]]
                },
                Block::Paragraph {
                    lines: vec![vec![t("three")]]
                },
            ]
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            blocks("# Big\n## Medium\n### Small"),
            vec![
                Block::Heading {
                    level: HeadingLevel::H1,
                    content: vec![t("Big")]
                },
                Block::Heading {
                    level: HeadingLevel::H2,
                    content: vec![t("Medium")]
                },
                Block::Heading {
                    level: HeadingLevel::H3,
                    content: vec![t("Small")]
                },
            ]
        );
    }

    #[test]
    fn test_mixed_markers_share_one_list() {
        let doc = blocks("- rent\n• food\n3. savings");
        assert_eq!(doc.len(), 1);
        let Block::List { items } = &doc[0] else {
            panic!("expected list, got {:?}", doc[0]);
        };
        let markers: Vec<_> = items.iter().map(|i| i.node.marker).collect();
        assert_eq!(
            markers,
            vec![ListMarker::Bullet, ListMarker::Bullet, ListMarker::Numbered]
        );
    }

    #[test]
    fn test_blank_line_splits_lists() {
        let doc = blocks("- a\n- b\n\n- c");
        assert_eq!(doc.len(), 2);
        assert!(doc.iter().all(|b| matches!(b, Block::List { .. })));
    }

    #[test]
    fn test_text_around_list_stays_separate() {
        let doc = blocks("Try this:\n- automate savings\nThat's it.");
        assert_eq!(doc.len(), 3);
        assert!(matches!(doc[0], Block::Paragraph { .. }));
        assert!(matches!(doc[1], Block::List { .. }));
        assert!(matches!(doc[2], Block::Paragraph { .. }));
    }

    #[test]
    fn test_heading_inside_chunk_is_not_wrapped() {
        let doc = blocks("## Plan\nStart small.");
        assert_eq!(
            doc,
            vec![
                Block::Heading {
                    level: HeadingLevel::H2,
                    content: vec![t("Plan")]
                },
                Block::Paragraph {
                    lines: vec![vec![t("Start small.")]]
                },
            ]
        );
    }

    #[test]
    fn test_emphasis_in_heading_and_items() {
        let doc = blocks("# **Goals**\n- *save* more");
        assert_eq!(
            doc[0],
            Block::Heading {
                level: HeadingLevel::H1,
                content: vec![Inline::Strong(vec![t("Goals")])]
            }
        );
        let Block::List { items } = &doc[1] else {
            panic!("expected list");
        };
        assert_eq!(
            items[0].node.content,
            vec![Inline::Emphasis(vec![t("save")]), t(" more")]
        );
    }

    #[test]
    fn test_block_spans() {
        let doc = parse("intro\n\n- a\n- b");
        assert_eq!(doc.blocks[0].span, 0..5);
        assert_eq!(doc.blocks[1].span, 7..14);
    }
}
