//! Lookup of installed fonts by family name.

use cosmic_text::{
    FontSystem,
    fontdb::{Family, Query, Stretch, Style, Weight},
};
use log::{info, warn};

use crate::{error::FontError, face::FontFace};

/// Maps CSS generic family keywords onto `fontdb` families.
fn family(name: &str) -> Family<'_> {
    match name.to_ascii_lowercase().as_str() {
        "serif" => Family::Serif,
        "sans-serif" => Family::SansSerif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => Family::Name(name),
    }
}

fn is_generic(family: &Family<'_>) -> bool {
    !matches!(family, Family::Name(_))
}

/// Loads the regular face of an installed font family.
///
/// `name` is either a concrete family name or a CSS generic family such as
/// `sans-serif`. When a generic family has no configured match the first
/// installed face is used.
///
/// # Errors
///
/// Returns [`FontError::FamilyNotFound`] if nothing matches and
/// [`FontError::Parse`] if the matched file cannot be parsed.
pub fn find_system_font(name: &str) -> Result<FontFace, FontError> {
    info!(family = name; "Initializing FontSystem");
    let font_system = FontSystem::new();
    let db = font_system.db();

    let families = [family(name)];
    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        style: Style::Normal,
        stretch: Stretch::Normal,
    };

    let id = match db.query(&query) {
        Some(id) => id,
        None if is_generic(&families[0]) => {
            let Some(face) = db.faces().next() else {
                return Err(FontError::FamilyNotFound {
                    family: name.to_string(),
                });
            };
            warn!(family = name; "No match for generic family, using first installed face");
            face.id
        }
        None => {
            return Err(FontError::FamilyNotFound {
                family: name.to_string(),
            });
        }
    };

    db.with_face_data(id, |data, index| FontFace::from_bytes(data.to_vec(), index))
        .unwrap_or_else(|| {
            Err(FontError::FamilyNotFound {
                family: name.to_string(),
            })
        })
}
