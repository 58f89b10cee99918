//! Canvas backends that turn a diagram into a file format.
//!
//! - [`raster::RasterCanvas`] paints into an RGBA pixmap and encodes PNG.
//! - [`svg::SvgCanvas`] records the same calls as SVG elements.

pub mod raster;
pub mod svg;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("Encoding error: {0}")]
    Encode(String),
}
