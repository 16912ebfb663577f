//! Asynchronous save/load facade over the canonical format.
//!
//! File access is the only I/O in the library, and a UI must not freeze
//! on it, so the operations are exposed as futures. Internally each one
//! is sequential: open, read or write straight through, close. File
//! handles are scoped and released on every exit path, including errors.
//!
//! The futures carry no executor requirements; drive them with
//! `pollster::block_on` on a plain thread or await them from whatever
//! runtime hosts the caller.

use std::path::Path;

use crate::format::formats::GimpFormat;
use crate::format::{
    FormatError, LoadOptions, PaletteEntry, PaletteFormat, SaveOptions, SaveResult,
};
use crate::model::PaletteColor;

/// Save the palette to `path` in the canonical format.
///
/// `name` is written into the file header. I/O failures propagate to the
/// caller; nothing is retried.
pub async fn save_palette(
    path: impl AsRef<Path>,
    name: &str,
    colors: &[PaletteColor],
) -> Result<SaveResult, FormatError> {
    let entries: Vec<PaletteEntry> = colors.iter().map(PaletteEntry::from).collect();
    GimpFormat.save(&entries, path.as_ref(), &SaveOptions::new(name))
}

/// Load a palette from `path` in the canonical format.
///
/// Uses lenient parsing: malformed lines are skipped. On success the
/// caller installs the result with
/// [`crate::store::PaletteStore::load_palette`].
pub async fn load_palette(path: impl AsRef<Path>) -> Result<Vec<PaletteEntry>, FormatError> {
    GimpFormat.load(path.as_ref(), &LoadOptions::default())
}

/// Load a palette, failing on the first malformed color line.
pub async fn load_palette_strict(
    path: impl AsRef<Path>,
) -> Result<Vec<PaletteEntry>, FormatError> {
    GimpFormat.load(path.as_ref(), &LoadOptions::new().strict(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    use pollster::block_on;

    #[test]
    fn test_save_and_load_through_disk() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("swatchbook-io-test-{}.gpl", std::process::id()));

        let colors = vec![
            PaletteColor::new(0, "Color 1", Rgb::new(255, 0, 0)),
            PaletteColor::new(1, "Color 2", Rgb::new(0, 255, 0)),
        ];

        let saved = block_on(save_palette(&path, "Disk Test", &colors)).unwrap();
        assert_eq!(saved.colors_written, 2);

        let loaded = block_on(load_palette(&path)).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Color 1");
        assert_eq!(loaded[1].color, Rgb::new(0, 255, 0));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file_propagates_io_error() {
        let result = block_on(load_palette("/nonexistent/swatchbook-missing.gpl"));
        assert!(matches!(result, Err(FormatError::Io(_))));
    }
}
