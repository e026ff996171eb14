//! Renderers for parsed replies
//!
//! `html` produces escaped markup with theme classes for the chat view;
//! `text` strips all markers for plain-text surfaces.

pub mod config;
pub mod html;
pub mod text;

pub use config::HtmlConfig;
pub use html::{escape_html, render_html};
pub use text::render_text;
