//! Configuration types for Caliper diagram rendering.
//!
//! This module provides configuration structures that control the canvas,
//! the fonts and the colors of a diagram. All types implement
//! [`serde::Deserialize`] so they can be loaded from TOML files; every field
//! is optional and falls back to the defaults listed on each type.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`CanvasConfig`] - Output size and resolution.
//! - [`FontConfig`] - Glyph size and the label font.
//! - [`StyleConfig`] - Fill and stroke colors.
//!
//! # Example
//!
//! ```
//! # use caliper::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 720);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use caliper_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Font configuration section.
    #[serde(default)]
    font: FontConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, font: FontConfig, style: StyleConfig) -> Self {
        Self {
            canvas,
            font,
            style,
        }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the font configuration.
    pub fn font(&self) -> &FontConfig {
        &self.font
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Output surface settings.
///
/// | Field | Default |
/// |-------|---------|
/// | `width` | 720 px |
/// | `height` | 720 px |
/// | `dpi` | 96 |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: u32,
    height: u32,
    dpi: f32,
}

impl CanvasConfig {
    pub fn new(width: u32, height: u32, dpi: f32) -> Self {
        Self { width, height, dpi }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resolution used to convert the glyph's point size into pixels.
    pub fn dpi(&self) -> f32 {
        self.dpi
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 720,
            height: 720,
            dpi: 96.0,
        }
    }
}

/// Font settings.
///
/// | Field | Default |
/// |-------|---------|
/// | `size` | 200 pt |
/// | `label_family` | `"sans-serif"` |
/// | `label_size` | 20 px |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    size: f32,
    label_family: String,
    label_size: f32,
}

impl FontConfig {
    pub fn new(size: f32, label_family: impl Into<String>, label_size: f32) -> Self {
        Self {
            size,
            label_family: label_family.into(),
            label_size,
        }
    }

    /// Size of the measured glyph in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Family name or CSS generic family used for labels.
    pub fn label_family(&self) -> &str {
        &self.label_family
    }

    /// Label em size in pixels.
    pub fn label_size(&self) -> f32 {
        self.label_size
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            label_family: String::from("sans-serif"),
            label_size: 20.0,
        }
    }
}

/// Diagram colors as CSS color strings.
///
/// Unset fields fall back to the built-in palette:
///
/// | Field | Default |
/// |-------|---------|
/// | `background_color` | white |
/// | `advance_fill_color` | azure |
/// | `glyph_box_fill_color` | lightgreen |
/// | `advance_outline_color` | darkblue |
/// | `glyph_box_outline_color` | darkgreen |
/// | `glyph_color` | black |
/// | `dividing_line_color` | gray |
/// | `measurement_color` | black |
/// | `label_color` | black |
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,
    #[serde(default)]
    advance_fill_color: Option<String>,
    #[serde(default)]
    glyph_box_fill_color: Option<String>,
    #[serde(default)]
    advance_outline_color: Option<String>,
    #[serde(default)]
    glyph_box_outline_color: Option<String>,
    #[serde(default)]
    glyph_color: Option<String>,
    #[serde(default)]
    dividing_line_color: Option<String>,
    #[serde(default)]
    measurement_color: Option<String>,
    #[serde(default)]
    label_color: Option<String>,
}

fn parse_color(value: Option<&str>, default: &str, field: &str) -> Result<Color, String> {
    Color::new(value.unwrap_or(default)).map_err(|err| format!("Invalid {field} in config: {err}"))
}

impl StyleConfig {
    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        parse_color(self.background_color.as_deref(), "white", "background color")
    }

    /// Returns the parsed advance box fill [`Color`].
    pub fn advance_fill_color(&self) -> Result<Color, String> {
        parse_color(self.advance_fill_color.as_deref(), "azure", "advance fill color")
    }

    /// Returns the parsed glyph box fill [`Color`].
    pub fn glyph_box_fill_color(&self) -> Result<Color, String> {
        parse_color(
            self.glyph_box_fill_color.as_deref(),
            "lightgreen",
            "glyph box fill color",
        )
    }

    /// Returns the parsed advance box outline [`Color`].
    pub fn advance_outline_color(&self) -> Result<Color, String> {
        parse_color(
            self.advance_outline_color.as_deref(),
            "darkblue",
            "advance outline color",
        )
    }

    /// Returns the parsed glyph box outline [`Color`].
    pub fn glyph_box_outline_color(&self) -> Result<Color, String> {
        parse_color(
            self.glyph_box_outline_color.as_deref(),
            "darkgreen",
            "glyph box outline color",
        )
    }

    /// Returns the parsed [`Color`] of the glyph itself.
    pub fn glyph_color(&self) -> Result<Color, String> {
        parse_color(self.glyph_color.as_deref(), "black", "glyph color")
    }

    /// Returns the parsed [`Color`] of dividing and leader lines.
    pub fn dividing_line_color(&self) -> Result<Color, String> {
        parse_color(self.dividing_line_color.as_deref(), "gray", "dividing line color")
    }

    /// Returns the parsed [`Color`] of measurement lines and arrow heads.
    pub fn measurement_color(&self) -> Result<Color, String> {
        parse_color(self.measurement_color.as_deref(), "black", "measurement color")
    }

    /// Returns the parsed label [`Color`].
    pub fn label_color(&self) -> Result<Color, String> {
        parse_color(self.label_color.as_deref(), "black", "label color")
    }
}
