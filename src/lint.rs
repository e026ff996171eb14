//! Lint checks for markup the formatter shows literally.
//!
//! Rendering never fails, so markers that are not recognized end up visible
//! in the chat bubble. These checks point at them without changing output:
//! unterminated emphasis, headings deeper than level 3 or missing their space,
//! indented markers, and markers with no text after them.

use std::fmt;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::parser::ast::Span;
use crate::parser::inline::literal_markers;
use crate::parser::lexer::{classify, lex_lines, LineKind};

/// A lint warning about markup left visible
#[derive(Debug, Clone, PartialEq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
    pub span: Span,
}

/// Category of lint finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    UnterminatedEmphasis,
    UnsupportedHeading,
    IndentedMarker,
    EmptyMarker,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::UnterminatedEmphasis => write!(f, "unterminated-emphasis"),
            LintCategory::UnsupportedHeading => write!(f, "unsupported-heading"),
            LintCategory::IndentedMarker => write!(f, "indented-marker"),
            LintCategory::EmptyMarker => write!(f, "empty-marker"),
        }
    }
}

impl LintWarning {
    fn new(category: LintCategory, message: impl Into<String>, span: Span) -> Self {
        Self {
            category,
            message: message.into(),
            span,
        }
    }

    /// Format the warning with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        // Spans are byte offsets; ariadne counts chars unless told otherwise
        let written = Report::build(ReportKind::Warning, filename, self.span.start)
            .with_config(Config::default().with_index_type(IndexType::Byte))
            .with_code(self.category.to_string())
            .with_message(&self.message)
            .with_label(
                Label::new((filename, self.span.clone()))
                    .with_message(&self.message)
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("warning[{}]: {}", self.category, self.message),
        }
    }
}

/// Run all lint checks on a reply
pub fn check(source: &str) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    for line in lex_lines(source) {
        match line.kind {
            LineKind::Blank => continue,
            LineKind::Text => check_markers(line.text, line.span.clone(), &mut warnings),
            LineKind::Heading(_) | LineKind::ListItem(_) => {}
        }
        check_emphasis(line.content, line.content_offset, &mut warnings);
    }
    warnings
}

fn check_emphasis(content: &str, offset: usize, warnings: &mut Vec<LintWarning>) {
    for star in literal_markers(content) {
        let at = offset + star;
        warnings.push(LintWarning::new(
            LintCategory::UnterminatedEmphasis,
            "'*' has no matching marker and will be shown as-is",
            at..at + 1,
        ));
    }
}

/// Block marker checks for a text line, at most one warning per line
fn check_markers(text: &str, span: Span, warnings: &mut Vec<LintWarning>) {
    let indent = text.len() - text.trim_start().len();
    let marker = text.trim();
    if is_bare_marker(marker) {
        let start = span.start + indent;
        warnings.push(LintWarning::new(
            LintCategory::EmptyMarker,
            "marker has no text after it and will be shown as-is",
            start..start + marker.len(),
        ));
        return;
    }

    let hashes = text.chars().take_while(|&c| c == '#').count();
    if hashes > 0 {
        let rest = &text[hashes..];
        if hashes > 3 && rest.starts_with(' ') {
            warnings.push(LintWarning::new(
                LintCategory::UnsupportedHeading,
                format!("only heading levels 1 to 3 are supported, found {}", hashes),
                span.start..span.start + hashes,
            ));
            return;
        }
        if hashes <= 3 && !rest.is_empty() && !rest.starts_with(' ') && !rest.starts_with('#') {
            warnings.push(LintWarning::new(
                LintCategory::UnsupportedHeading,
                "heading marker needs a space before the title",
                span.start..span.start + hashes,
            ));
            return;
        }
    }

    if indent > 0 {
        let trimmed = classify(text.trim_start(), span.start + indent);
        if matches!(trimmed.kind, LineKind::Heading(_) | LineKind::ListItem(_)) {
            warnings.push(LintWarning::new(
                LintCategory::IndentedMarker,
                "markers must start the line; this one is indented and will be shown as-is",
                span.start + indent..trimmed.content_offset,
            ));
        }
    }
}

/// `-`, `•`, `#`..`###` or `12.` on its own
fn is_bare_marker(text: &str) -> bool {
    match text {
        "-" | "•" | "#" | "##" | "###" => true,
        _ => text
            .strip_suffix('.')
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())),
    }
}
