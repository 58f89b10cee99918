//! Font loading for Caliper.
//!
//! Provides [`FontFace`], a [`GlyphSource`](caliper_core::font::GlyphSource)
//! backed by TrueType/OpenType data, and [`find_system_font`] for resolving
//! installed families.
//!
//! ```no_run
//! use caliper_core::font::GlyphSource;
//! use caliper_font::FontFace;
//!
//! let face = FontFace::from_file("NettoOffc.ttf")?;
//! let metrics = face.glyph_metrics('g')?;
//! println!("advance width: {}", metrics.advance_width());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod face;
mod outline;
mod system;

pub use error::FontError;
pub use face::FontFace;
pub use outline::OutlineCollector;
pub use system::find_system_font;
