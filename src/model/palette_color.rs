//! Named palette entry.

use std::fmt;

use crate::color::Rgb;

/// Identity of a palette entry within a [`crate::store::PaletteStore`].
///
/// Two entries with equal names and colors are still distinct; only the
/// id identifies an entry.
pub type ColorId = u64;

/// A named color in a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteColor {
    /// Store-assigned identity
    pub id: ColorId,
    /// Display name; duplicates are allowed
    pub name: String,
    /// The color value
    pub color: Rgb,
}

impl PaletteColor {
    /// Placeholder name for an entry created without one.
    pub const DEFAULT_NAME: &'static str = "New Color";

    /// Create an entry with the given identity, name and color.
    pub fn new(id: ColorId, name: impl Into<String>, color: Rgb) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }

    /// Create an entry with the placeholder name.
    pub fn unnamed(id: ColorId, color: Rgb) -> Self {
        Self::new(id, Self::DEFAULT_NAME, color)
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color.to_hex())
    }
}
