//! Error types for loading inputs
//!
//! Formatting itself cannot fail; these cover the files and records around it.

use std::path::PathBuf;

use thiserror::Error;

use crate::chat::records::RecordError;
use crate::theme::ThemeError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("record error: {0}")]
    Record(#[from] RecordError),

    #[error("invalid transcript: {0}")]
    Transcript(#[from] serde_json::Error),
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }
}
