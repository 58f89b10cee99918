//! Errors raised while looking up glyphs.

use thiserror::Error;

/// Failure to obtain data for a single glyph from a [`GlyphSource`](crate::font::GlyphSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    /// The font maps no glyph to the requested code point.
    #[error("no glyph for {ch:?} in font")]
    Missing { ch: char },

    /// The glyph exists but its metrics tables are incomplete.
    #[error("incomplete metrics for {ch:?}: {reason}")]
    Metrics { ch: char, reason: String },
}
