//! Plain-text rendering with markers stripped

use crate::parser::ast::{plain_text, Block, Document, ListMarker};

/// Render a document as plain text
///
/// Blocks are separated by a blank line. Bullet items get `• `; numbered items
/// are numbered again from 1 within their list.
pub fn render_text(doc: &Document) -> String {
    doc.iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { content, .. } => plain_text(content),
        Block::Paragraph { lines } => lines
            .iter()
            .map(|line| plain_text(line))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::List { items } => {
            let mut number = 0;
            items
                .iter()
                .map(|item| {
                    let text = plain_text(&item.node.content);
                    match item.node.marker {
                        ListMarker::Bullet => format!("• {}", text),
                        ListMarker::Numbered => {
                            number += 1;
                            format!("{}. {}", number, text)
                        }
                    }
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}
