//! Error adapter for converting CaliperError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic;

use caliper::{CaliperError, FontError, GlyphError};

/// Adapter that renders a [`CaliperError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a CaliperError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CaliperError::Io(_) => "caliper::io",
            CaliperError::Font(_) => "caliper::font",
            CaliperError::Glyph(_) => "caliper::glyph",
            CaliperError::Config(_) => "caliper::config",
            CaliperError::Export(_) => "caliper::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CaliperError::Glyph(GlyphError::Missing { .. }) => {
                "choose a character the font covers, or pass a different --font"
            }
            CaliperError::Font(FontError::FamilyNotFound { .. }) => {
                "set `label_family` under [font] in the configuration file"
            }
            CaliperError::Font(FontError::Parse { .. }) => {
                "--font expects a TrueType or OpenType file"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}
