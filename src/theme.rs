//! Theme system for CSS class names
//!
//! Each rendered element looks up its class list by a token (`heading-1`,
//! `list-item`, ...). Themes are TOML files; tokens a theme leaves out fall
//! back to the built-in defaults, and an empty string removes the class.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A theme mapping element tokens to CSS class lists
#[derive(Debug, Clone)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Class mappings: element token -> class list
    pub classes: HashMap<String, String>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    classes: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default classes, matching the chat view's utility-class styling
const DEFAULT_THEME: &str = r##"
[metadata]
name = "default"
description = "Utility classes used by the assistant chat view"

[classes]
container = "prose prose-sm max-w-none text-inherit"
heading-1 = "text-2xl font-bold mt-4 mb-3"
heading-2 = "text-xl font-bold mt-4 mb-2"
heading-3 = "text-lg font-semibold mt-3 mb-2"
list = "my-2"
list-item = "ml-4 mb-1"
paragraph = "mb-3 leading-relaxed"

# Transcript bubbles
message-user = "rounded-2xl px-4 py-3 bg-gradient-to-r from-cyan-500 to-blue-600 text-white"
message-assistant = "rounded-2xl px-4 py-3 bg-white/10 backdrop-blur-sm text-white border border-white/20"
user-text = "text-sm leading-relaxed"
summary = "text-xs"
"##;

impl Theme {
    /// Load theme from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Class list for a token defined in this theme
    ///
    /// Returns None if the token is not defined or maps to an empty string.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.classes
            .get(token)
            .map(|s| s.as_str())
            .filter(|s| !s.trim().is_empty())
    }

    /// Class list for a token, falling back to the default theme
    ///
    /// A token this theme sets to an empty string stays unset.
    pub fn resolve_or_default(&self, token: &str) -> Option<String> {
        if let Some(classes) = self.classes.get(token) {
            return Some(classes.clone()).filter(|s| !s.trim().is_empty());
        }
        BUILTIN.resolve(token).map(str::to_string)
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    /// Load theme from TOML string
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            classes: parsed.classes,
        })
    }
}

/// Parsed once; fallback lookups happen for every inline element
static BUILTIN: LazyLock<Theme> = LazyLock::new(|| {
    DEFAULT_THEME
        .parse()
        .expect("Default theme should be valid TOML")
});

impl Default for Theme {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
