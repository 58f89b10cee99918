//! Error types for Caliper operations.
//!
//! This module provides the main error type [`CaliperError`] which wraps
//! the error conditions that can occur while loading fonts and rendering
//! diagrams.

use std::io;

use thiserror::Error;

use caliper_core::error::GlyphError;
use caliper_font::FontError;

/// The main error type for Caliper operations.
#[derive(Debug, Error)]
pub enum CaliperError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Glyph error: {0}")]
    Glyph(#[from] GlyphError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for CaliperError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
