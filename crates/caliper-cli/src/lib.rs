//! CLI logic for the Caliper glyph metrics tool.
//!
//! This module contains the core CLI logic: it resolves configuration and
//! fonts, renders the diagram and writes it in the format the output path
//! asks for.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{debug, info};

use caliper::{CaliperError, DiagramBuilder, FontFace, find_system_font};

/// Output file formats, selected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    /// Picks the format from the extension of `path`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CaliperError::Config`] for any extension other than
    /// `png` or `svg`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CaliperError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(CaliperError::Config(format!(
                "unsupported output format for `{}`; use .png or .svg",
                path.display()
            ))),
        }
    }
}

/// Run the Caliper CLI application
///
/// Renders the metrics diagram of `args.character` and writes it to the
/// output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CaliperError` for:
/// - Configuration loading errors
/// - Unsupported output formats
/// - Font loading errors
/// - Missing glyphs
/// - Export and file I/O errors
pub fn run(args: &Args) -> Result<(), CaliperError> {
    info!(
        character = args.character.to_string(),
        output_path = args.output;
        "Processing glyph"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let format = OutputFormat::from_path(&args.output)?;

    let glyph_font = args.font.as_ref().map(FontFace::from_file).transpose()?;
    let label_font = find_system_font(app_config.font().label_family())?;
    let glyph_font = glyph_font.as_ref().unwrap_or(&label_font);
    debug!(
        glyph_family = glyph_font.family(),
        label_family = label_font.family();
        "Fonts loaded"
    );

    let builder = DiagramBuilder::new(app_config);
    let bytes = match format {
        OutputFormat::Png => builder.render_png(glyph_font, &label_font, args.character)?,
        OutputFormat::Svg => builder
            .render_svg(glyph_font, &label_font, args.character)?
            .into_bytes(),
    };

    fs::write(&args.output, bytes)?;

    info!(output_file = args.output, format:?; "Diagram exported successfully");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(OutputFormat::from_path("out.png").unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path("dir/g.SVG").unwrap(), OutputFormat::Svg);
    }

    #[test]
    fn test_output_format_rejects_unknown() {
        assert!(matches!(
            OutputFormat::from_path("out.gif"),
            Err(CaliperError::Config(_))
        ));
        assert!(OutputFormat::from_path("out").is_err());
    }
}
