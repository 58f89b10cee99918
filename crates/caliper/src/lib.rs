//! Caliper - annotated diagrams of a glyph's layout metrics.
//!
//! Given one character and a font, Caliper draws the glyph inside its
//! advance box and annotates every metric around it: the side bearings, the
//! ink width and height, and the advance width and height. Output is a
//! raster image (PNG) or an SVG document.

pub mod config;
pub mod export;
pub mod layout;
pub mod render;

mod error;
#[cfg(test)]
mod testing;

pub use caliper_core::{color, draw, error::GlyphError, font, geometry};
pub use caliper_font::{FontError, FontFace, find_system_font};

pub use error::CaliperError;

use log::{debug, info};

use caliper_core::{
    draw::Canvas,
    font::{GlyphSource, scale_factor},
    geometry::Size,
};

use config::AppConfig;
use export::{raster::RasterCanvas, svg::SvgCanvas};
use layout::DiagramLayout;
use render::{DiagramRenderer, DiagramStyle};

/// Builder for laying out and rendering glyph metric diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use caliper::{DiagramBuilder, FontFace, config::AppConfig, find_system_font};
///
/// let glyph_font = FontFace::from_file("NettoOffc.ttf")?;
/// let label_font = find_system_font("sans-serif")?;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let png = builder.render_png(&glyph_font, &label_font, 'g')?;
/// std::fs::write("g.png", png)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the builder's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Canvas pixels per design unit of `font`.
    pub fn scale(&self, font: &dyn GlyphSource) -> f32 {
        scale_factor(
            self.config.font().size(),
            self.config.canvas().dpi(),
            font.units_per_em(),
        )
    }

    /// Computes the diagram geometry for `ch` on a canvas of `canvas_size`.
    ///
    /// # Errors
    ///
    /// Returns [`CaliperError::Glyph`] if the font has no glyph for `ch`.
    pub fn layout(
        &self,
        font: &dyn GlyphSource,
        ch: char,
        canvas_size: Size,
    ) -> Result<DiagramLayout, CaliperError> {
        let metrics = font.glyph_metrics(ch)?;
        let scale = self.scale(font);
        debug!(ch:?, scale, metrics:?; "Glyph metrics resolved");
        Ok(DiagramLayout::compose(&metrics, scale, canvas_size))
    }

    /// Renders the diagram of `ch` onto any canvas.
    ///
    /// # Arguments
    ///
    /// * `canvas` - Surface to paint on; its size decides where the diagram is centred
    /// * `glyph_font` - Font whose glyph is measured
    /// * `label_font` - Font used for the measurement labels
    /// * `ch` - Character to measure
    ///
    /// # Errors
    ///
    /// Returns [`CaliperError::Glyph`] if either font lacks a needed glyph
    /// and [`CaliperError::Config`] if a configured color is invalid.
    pub fn render(
        &self,
        canvas: &mut dyn Canvas,
        glyph_font: &dyn GlyphSource,
        label_font: &dyn GlyphSource,
        ch: char,
    ) -> Result<(), CaliperError> {
        info!(ch:?; "Rendering glyph diagram");

        let style = DiagramStyle::from_config(&self.config)?;
        let layout = self.layout(glyph_font, ch, canvas.size())?;
        let outline = glyph_font.glyph_outline(ch)?;

        DiagramRenderer::new(&style, label_font).render(
            canvas,
            &layout,
            outline.as_ref(),
            self.scale(glyph_font),
        )?;

        info!("Diagram rendered successfully");
        Ok(())
    }

    /// Renders the diagram of `ch` into a new raster canvas.
    ///
    /// # Errors
    ///
    /// See [`DiagramBuilder::render`]; also fails if the configured canvas
    /// size is zero.
    pub fn render_raster(
        &self,
        glyph_font: &dyn GlyphSource,
        label_font: &dyn GlyphSource,
        ch: char,
    ) -> Result<RasterCanvas, CaliperError> {
        let canvas_config = self.config.canvas();
        let mut canvas = RasterCanvas::new(canvas_config.width(), canvas_config.height())?;
        self.render(&mut canvas, glyph_font, label_font, ch)?;
        Ok(canvas)
    }

    /// Renders the diagram of `ch` as PNG bytes.
    ///
    /// # Errors
    ///
    /// See [`DiagramBuilder::render_raster`]; also fails if PNG encoding fails.
    pub fn render_png(
        &self,
        glyph_font: &dyn GlyphSource,
        label_font: &dyn GlyphSource,
        ch: char,
    ) -> Result<Vec<u8>, CaliperError> {
        let canvas = self.render_raster(glyph_font, label_font, ch)?;
        Ok(canvas.encode_png()?)
    }

    /// Renders the diagram of `ch` as an SVG document.
    ///
    /// # Errors
    ///
    /// See [`DiagramBuilder::render`].
    pub fn render_svg(
        &self,
        glyph_font: &dyn GlyphSource,
        label_font: &dyn GlyphSource,
        ch: char,
    ) -> Result<String, CaliperError> {
        let canvas_config = self.config.canvas();
        let size = Size::new(canvas_config.width() as f32, canvas_config.height() as f32);
        let mut canvas = SvgCanvas::new(size);
        self.render(&mut canvas, glyph_font, label_font, ch)?;
        Ok(canvas.into_document().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BoxFont, RecordingCanvas};
    use caliper_core::error::GlyphError;

    #[test]
    fn test_scale_uses_config() {
        let builder = DiagramBuilder::default();
        // 200pt at 96dpi over a 1000 unit em
        assert!((builder.scale(&BoxFont) - 0.266_666_7).abs() < 1e-6);
    }

    #[test]
    fn test_render_missing_glyph() {
        let builder = DiagramBuilder::default();
        let mut canvas = RecordingCanvas::default();
        let err = builder
            .render(&mut canvas, &BoxFont, &BoxFont, '\u{0}')
            .unwrap_err();

        assert!(matches!(err, CaliperError::Glyph(GlyphError::Missing { ch: '\u{0}' })));
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_render_invalid_color() {
        let config: AppConfig = toml::from_str("[style]\nglyph_color = \"nope\"").unwrap();
        let builder = DiagramBuilder::new(config);
        let mut canvas = RecordingCanvas::default();

        let err = builder
            .render(&mut canvas, &BoxFont, &BoxFont, 'a')
            .unwrap_err();
        assert!(matches!(err, CaliperError::Config(_)));
    }
}
