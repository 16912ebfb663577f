//! Interchange types for palette import/export.
//!
//! Formats read and write [`PaletteEntry`] values: a name plus a color,
//! nothing else. Store identities are not part of any file format; they
//! are assigned when entries are installed into a
//! [`crate::store::PaletteStore`].

use crate::color::Rgb;
use crate::model::PaletteColor;

/// A named color as it appears in a palette file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Display name; `"Unnamed"` when the file carried none
    pub name: String,
    /// The color value
    pub color: Rgb,
}

impl PaletteEntry {
    /// Name used for color lines with no name tokens.
    pub const UNNAMED: &'static str = "Unnamed";

    /// Create an entry.
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Create an entry from a live store entry, dropping its identity.
    pub fn from_color(color: &PaletteColor) -> Self {
        Self {
            name: color.name.clone(),
            color: color.color,
        }
    }
}

impl From<&PaletteColor> for PaletteEntry {
    fn from(color: &PaletteColor) -> Self {
        Self::from_color(color)
    }
}

/// A named group of entries, used only by the legacy grouped export.
#[derive(Debug, Clone, Default)]
pub struct ColorGroup {
    /// Group heading written to the file
    pub name: String,
    /// Entries in this group, in display order
    pub colors: Vec<PaletteEntry>,
}

impl ColorGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: Vec::new(),
        }
    }

    /// Create a group holding the given entries.
    pub fn with_colors(name: impl Into<String>, colors: Vec<PaletteEntry>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }
}
