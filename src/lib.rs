//! Advice Markup - formatting for AI finance-assistant replies
//!
//! This library turns the lightweight markup an advice service writes
//! (`# headings`, `**bold**`, `*italic*`, `- bullets`, `1. steps`) into a
//! document tree, and renders that tree as escaped HTML or plain text.
//!
//! # Example
//!
//! ```rust
//! use advice_markup::render;
//!
//! let html = render("**Pay yourself first.**");
//! assert!(html.contains("<strong>Pay yourself first.</strong>"));
//! ```

pub mod chat;
pub mod error;
pub mod lint;
pub mod parser;
pub mod renderer;
pub mod theme;

use std::path::Path;

pub use error::Error;
pub use lint::{LintCategory, LintWarning};
pub use parser::{parse, Document};
pub use renderer::{render_html, render_text, HtmlConfig};
pub use theme::Theme;

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Theme for class names
    pub theme: Theme,
    /// Lint mode: collect warnings for markup shown literally
    pub lint: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Set the theme for class names
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable lint mode
    pub fn with_lint(mut self, lint: bool) -> Self {
        self.lint = lint;
        self
    }
}

/// Render a reply to HTML with default configuration
///
/// # Example
///
/// ```rust
/// use advice_markup::render;
///
/// let html = render("## Steps\n- track spending\n- cut one subscription");
/// assert!(html.contains("<h2"));
/// assert!(html.contains("track spending</li>"));
/// ```
pub fn render(source: &str) -> String {
    render_with_config(source, &RenderConfig::default())
}

/// Render a reply to HTML with custom configuration
///
/// # Example
///
/// ```rust
/// use advice_markup::{render_with_config, HtmlConfig, RenderConfig};
///
/// let config = RenderConfig::new()
///     .with_html(HtmlConfig::new().with_classes(false).with_container(false));
///
/// assert_eq!(render_with_config("*soon*", &config), "<p><em>soon</em></p>");
/// ```
pub fn render_with_config(source: &str, config: &RenderConfig) -> String {
    let doc = parse(source);
    render_html(&doc, &config.html, &config.theme)
}

/// Render a reply and collect lint warnings when lint mode is on
pub fn render_with_lint(source: &str, config: &RenderConfig) -> (String, Vec<LintWarning>) {
    let html = render_with_config(source, config);
    let warnings = if config.lint {
        lint::check(source)
    } else {
        Vec::new()
    };
    (html, warnings)
}

/// Render a reply as plain text with all markers removed
pub fn render_plain(source: &str) -> String {
    render_text(&parse(source))
}

/// Read an input file to a string
pub fn read_input(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|e| Error::read(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_wraps_in_container() {
        let html = render("hello");
        assert!(html.starts_with(r#"<div class="prose"#));
        assert!(html.ends_with("</div>"));
        assert!(html.contains(r#"<p class="mb-3 leading-relaxed">hello</p>"#));
    }

    #[test]
    fn test_render_never_panics_on_odd_input() {
        for source in ["", "*", "**", "***", "#", "- ", "1.", "\n\n\n", "• ", "**a*b**c*", "\r\n"] {
            let _ = render(source);
            let _ = render_plain(source);
        }
    }

    #[test]
    fn test_render_with_lint_disabled() {
        let (html, warnings) = render_with_lint("*oops", &RenderConfig::new());
        assert!(html.contains("*oops"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_render_with_lint_enabled() {
        let (_, warnings) = render_with_lint("*oops", &RenderConfig::new().with_lint(true));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, LintCategory::UnterminatedEmphasis);
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(render_plain("**Save** more"), "Save more");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Path::new("/nonexistent/reply.md")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
