//! Lint checks run over whole replies

use advice_markup::{lint, render_with_lint, LintCategory, RenderConfig};
use pretty_assertions::assert_eq;

const LITERAL_MARKERS: &str = include_str!("fixtures/literal-markers.md");
const CLEAN_REPLY: &str = include_str!("fixtures/clean-reply.md");

#[test]
fn test_every_category_is_reported() {
    let categories: Vec<LintCategory> = lint::check(LITERAL_MARKERS)
        .into_iter()
        .map(|w| w.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            LintCategory::UnsupportedHeading,
            LintCategory::UnsupportedHeading,
            LintCategory::IndentedMarker,
            LintCategory::EmptyMarker,
            LintCategory::UnterminatedEmphasis,
            LintCategory::UnterminatedEmphasis,
        ]
    );
}

#[test]
fn test_spans_point_at_markers() {
    for warning in lint::check(LITERAL_MARKERS) {
        let marked = &LITERAL_MARKERS[warning.span.clone()];
        match warning.category {
            LintCategory::UnterminatedEmphasis => assert_eq!(marked, "*"),
            LintCategory::UnsupportedHeading => assert!(marked.chars().all(|c| c == '#')),
            LintCategory::IndentedMarker => assert_eq!(marked, "- "),
            LintCategory::EmptyMarker => assert_eq!(marked, "-"),
        }
    }
}

#[test]
fn test_clean_reply_has_no_warnings() {
    assert!(lint::check(CLEAN_REPLY).is_empty());
}

#[test]
fn test_lint_does_not_change_output() {
    let (plain, none) = render_with_lint(LITERAL_MARKERS, &RenderConfig::new());
    let (linted, warnings) = render_with_lint(LITERAL_MARKERS, &RenderConfig::new().with_lint(true));
    assert_eq!(plain, linted);
    assert!(none.is_empty());
    assert_eq!(warnings.len(), 6);
    assert!(linted.contains("#### Deep heading"));
    assert!(linted.contains("Keep *some cash aside"));
}

#[test]
fn test_report_names_category_and_file() {
    let warnings = lint::check(LITERAL_MARKERS);
    let report = warnings[0].format(LITERAL_MARKERS, "reply.md");
    assert!(report.contains("unsupported-heading"));
    assert!(report.contains("reply.md"));
}

/// Drop ANSI color sequences so report columns can be compared
fn strip_ansi(report: &str) -> String {
    let mut out = String::new();
    let mut chars = report.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Char column of the first `needle` on the first line containing `anchor`,
/// and of the label caret on the line below it
fn caret_columns(report: &str, anchor: &str, needle: char) -> (usize, usize) {
    let lines: Vec<&str> = report.lines().collect();
    let at = lines
        .iter()
        .position(|l| l.contains(anchor))
        .unwrap_or_else(|| panic!("source line missing from report:\n{}", report));
    let column = |line: &str, c: char| line.chars().position(|x| x == c);
    let marker = column(lines[at], needle).unwrap();
    let caret = column(lines[at + 1], '┬').unwrap();
    (marker, caret)
}

#[test]
fn test_report_caret_after_multibyte_text() {
    for source in ["₹5,000 keep *cash aside now", "• ₹₹₹₹ keep *cash"] {
        let warnings = lint::check(source);
        assert_eq!(warnings.len(), 1);
        assert_eq!(&source[warnings[0].span.clone()], "*");

        let report = strip_ansi(&warnings[0].format(source, "reply.md"));
        let (marker, caret) = caret_columns(&report, "keep *cash", '*');
        assert_eq!(marker, caret, "caret misplaced in:\n{}", report);
    }
}

#[test]
fn test_report_keeps_context_on_emoji_lines() {
    let source = "Your buddy 😊😊😊😊 says *save";
    let warnings = lint::check(source);
    let report = strip_ansi(&warnings[0].format(source, "reply.md"));
    assert!(report.contains("says *save"), "no source context in:\n{}", report);
}
