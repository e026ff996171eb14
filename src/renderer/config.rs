//! Configuration for HTML rendering

/// Configuration options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Whether to emit `class` attributes from the theme
    pub classes: bool,

    /// Whether to put each element on its own indented line
    pub pretty_print: bool,

    /// Whether to wrap the blocks in a container `<div>`
    pub container: bool,

    /// Text placed before each bullet item (numbered items get none)
    pub bullet_glyph: Option<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            classes: true,
            pretty_print: false,
            container: true,
            bullet_glyph: Some("• ".to_string()),
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether class attributes are emitted
    pub fn with_classes(mut self, classes: bool) -> Self {
        self.classes = classes;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set whether output is wrapped in a container element
    pub fn with_container(mut self, container: bool) -> Self {
        self.container = container;
        self
    }

    /// Set the bullet glyph
    pub fn with_bullet_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.bullet_glyph = Some(glyph.into());
        self
    }

    /// Render bullet items without a glyph
    pub fn without_bullet_glyph(mut self) -> Self {
        self.bullet_glyph = None;
        self
    }
}
