//! Data model for palette entries.

mod palette_color;

pub use palette_color::{ColorId, PaletteColor};
