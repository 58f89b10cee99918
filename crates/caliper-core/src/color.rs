//! Color handling for glyph diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, adding the conversions the canvas backends need.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use caliper_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("darkblue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a color from a CSS name that is known to be valid.
    ///
    /// Only used for the built-in palette; panics on an unknown name.
    pub(crate) fn named(name: &str) -> Self {
        Self::new(name).expect("built-in color names are valid CSS colors")
    }

    /// Returns the alpha (transparency) component of this color,
    /// between 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Converts the color to 8-bit sRGB components `[r, g, b, a]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use caliper_core::color::Color;
    ///
    /// let gray = Color::new("gray").unwrap();
    /// assert_eq!(gray.to_rgba8(), [128, 128, 128, 255]);
    /// ```
    pub fn to_rgba8(self) -> [u8; 4] {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        [rgba.r, rgba.g, rgba.b, rgba.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::named("black")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_default_is_black() {
        assert_eq!(Color::default().to_string(), "black");
        assert_eq!(Color::default().to_rgba8(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_color_new_invalid() {
        let err = Color::new("blurple").unwrap_err();
        assert!(err.contains("invalid color `blurple`"));
    }

    #[test]
    fn test_color_named_palette() {
        assert_eq!(Color::named("darkblue").to_rgba8(), [0, 0, 139, 255]);
        assert_eq!(Color::named("darkgreen").to_rgba8(), [0, 100, 0, 255]);
        assert_eq!(Color::named("azure").to_rgba8(), [240, 255, 255, 255]);
        assert_eq!(Color::named("lightgreen").to_rgba8(), [144, 238, 144, 255]);
    }

    #[test]
    fn test_color_alpha() {
        assert_eq!(Color::new("red").unwrap().alpha(), 1.0);
        let transparent = Color::new("rgba(0, 0, 0, 0.5)").unwrap();
        assert_eq!(transparent.alpha(), 0.5);
    }
}
