//! Errors raised while loading fonts.

use std::{io, path::PathBuf};

use caliper_core::error::GlyphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font file `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a usable font (face {index}): {source}")]
    Parse {
        index: u32,
        #[source]
        source: ttf_parser::FaceParsingError,
    },

    #[error("no installed font matches family `{family}`")]
    FamilyNotFound { family: String },

    #[error(transparent)]
    Glyph(#[from] GlyphError),
}
