//! Font faces backed by TrueType/OpenType data.

use std::{fs, path::Path as FsPath, sync::Arc};

use caliper_core::{
    error::GlyphError,
    font::{GlyphMetrics, GlyphOutline, GlyphSource},
    geometry::{Bounds, Point, Size},
};
use log::{debug, trace};
use ttf_parser::{Face, GlyphId, Rect};

use crate::{error::FontError, outline::OutlineCollector};

/// A single face of a font file.
///
/// The raw file data is kept and parsed on demand; `ttf_parser` only reads
/// the tables a lookup touches, so re-parsing is cheap.
#[derive(Debug, Clone)]
pub struct FontFace {
    data: Arc<[u8]>,
    index: u32,
    family: String,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
}

impl FontFace {
    /// Parses face `index` of a font collection, or the only face of a
    /// plain font file when `index` is 0.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the data is not a valid font.
    pub fn from_bytes(data: impl Into<Arc<[u8]>>, index: u32) -> Result<Self, FontError> {
        let data = data.into();
        let face = Face::parse(&data, index).map_err(|source| FontError::Parse { index, source })?;

        let family = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == ttf_parser::name_id::FAMILY)
            .find_map(|name| name.to_string())
            .unwrap_or_default();
        let units_per_em = face.units_per_em();
        let ascender = face.ascender();
        let descender = face.descender();

        debug!(
            family = family.as_str(),
            index,
            units_per_em,
            glyphs = face.number_of_glyphs();
            "Parsed font face"
        );

        Ok(Self {
            data,
            index,
            family,
            units_per_em,
            ascender,
            descender,
        })
    }

    /// Reads and parses the first face of a font file.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Io`] if the file cannot be read and
    /// [`FontError::Parse`] if it is not a valid font.
    pub fn from_file(path: impl AsRef<FsPath>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data, 0)
    }

    /// Family name from the `name` table, empty if the font has none.
    pub fn family(&self) -> &str {
        &self.family
    }

    fn face(&self, ch: char) -> Result<Face<'_>, GlyphError> {
        Face::parse(&self.data, self.index).map_err(|err| GlyphError::Metrics {
            ch,
            reason: err.to_string(),
        })
    }

    fn glyph_id(face: &Face<'_>, ch: char) -> Result<GlyphId, GlyphError> {
        face.glyph_index(ch).ok_or(GlyphError::Missing { ch })
    }

    /// Top of the default vertical advance box, used when the font has no
    /// vertical metrics.
    fn default_vertical_origin(&self) -> f32 {
        f32::from(self.ascender)
    }
}

fn ink_bounds(rect: Rect) -> Bounds {
    Bounds::new_from_top_left(
        Point::new(f32::from(rect.x_min), f32::from(rect.y_min)),
        Size::new(
            f32::from(rect.x_max) - f32::from(rect.x_min),
            f32::from(rect.y_max) - f32::from(rect.y_min),
        ),
    )
}

impl GlyphSource for FontFace {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_metrics(&self, ch: char) -> Result<GlyphMetrics, GlyphError> {
        let face = self.face(ch)?;
        let id = Self::glyph_id(&face, ch)?;

        let advance_width = face
            .glyph_hor_advance(id)
            .ok_or_else(|| GlyphError::Metrics {
                ch,
                reason: String::from("no horizontal advance"),
            })?;
        let bbox = face.glyph_bounding_box(id).map(ink_bounds);
        let ink = bbox.map(Bounds::to_size).unwrap_or_default();

        let left_side_bearing = face
            .glyph_hor_side_bearing(id)
            .map(f32::from)
            .or_else(|| bbox.map(Bounds::min_x))
            .unwrap_or_default();

        let advance_height = face
            .glyph_ver_advance(id)
            .map(f32::from)
            .unwrap_or_else(|| f32::from(self.ascender) - f32::from(self.descender));

        // Bounds are y-up here, so max_y is the top of the ink
        let top_side_bearing = face
            .glyph_ver_side_bearing(id)
            .map(f32::from)
            .unwrap_or_else(|| {
                self.default_vertical_origin() - bbox.map(Bounds::max_y).unwrap_or_default()
            });

        trace!(
            ch:?,
            glyph = id.0,
            advance_width,
            advance_height;
            "Glyph metrics"
        );

        Ok(GlyphMetrics::new(
            Size::new(f32::from(advance_width), advance_height),
            left_side_bearing,
            top_side_bearing,
            ink,
        ))
    }

    fn glyph_outline(&self, ch: char) -> Result<Option<GlyphOutline>, GlyphError> {
        let face = self.face(ch)?;
        let id = Self::glyph_id(&face, ch)?;

        let mut collector = OutlineCollector::new();
        let Some(rect) = face.outline_glyph(id, &mut collector) else {
            return Ok(None);
        };
        Ok(Some(GlyphOutline::new(collector.finish(), ink_bounds(rect))))
    }
}
