//! Line lexer for advice replies using logos
//!
//! Each line is classified on its own by the marker it starts with. Only the
//! first token of a line is ever lexed; everything after the marker is content.

use logos::Logos;

use super::ast::{HeadingLevel, ListMarker, Span};

/// Markers recognized at column 0 of a line
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[token("### ")]
    Heading3,
    #[token("## ")]
    Heading2,
    #[token("# ")]
    Heading1,

    #[token("- ")]
    Dash,
    #[token("• ")]
    Bullet,

    // Digits are discarded; only the shape matters
    #[regex(r"[0-9]+\. ")]
    Numbered,
}

/// What a line contributes to block structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Text,
    Heading(HeadingLevel),
    ListItem(ListMarker),
}

/// One classified source line
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    pub kind: LineKind,
    /// Full line without its terminator
    pub text: &'a str,
    /// Text after the marker (the whole line for text lines)
    pub content: &'a str,
    /// Absolute byte offset of `content`
    pub content_offset: usize,
    /// Span of `text` in the source
    pub span: Span,
}

/// Classify a single line (no terminator) that starts at `offset`
pub fn classify(line: &str, offset: usize) -> Line<'_> {
    let text_line = Line {
        kind: LineKind::Text,
        text: line,
        content: line,
        content_offset: offset,
        span: offset..offset + line.len(),
    };

    if line.trim().is_empty() {
        return Line {
            kind: LineKind::Blank,
            ..text_line
        };
    }

    let mut lexer = Token::lexer(line);
    let token = match lexer.next() {
        Some(Ok(token)) if lexer.span().start == 0 => token,
        _ => return text_line,
    };

    // A marker needs at least one character after it
    let content = lexer.remainder();
    if content.is_empty() {
        return text_line;
    }

    let kind = match token {
        Token::Heading1 => LineKind::Heading(HeadingLevel::H1),
        Token::Heading2 => LineKind::Heading(HeadingLevel::H2),
        Token::Heading3 => LineKind::Heading(HeadingLevel::H3),
        Token::Dash | Token::Bullet => LineKind::ListItem(ListMarker::Bullet),
        Token::Numbered => LineKind::ListItem(ListMarker::Numbered),
    };

    let marker_len = lexer.span().end;
    Line {
        kind,
        content,
        content_offset: offset + marker_len,
        ..text_line
    }
}

/// Split input into classified lines. `\r\n` terminators are accepted.
pub fn lex_lines(input: &str) -> impl Iterator<Item = Line<'_>> + '_ {
    let mut offset = 0;
    input.split('\n').map(move |raw| {
        let start = offset;
        offset += raw.len() + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        classify(line, start)
    })
}
