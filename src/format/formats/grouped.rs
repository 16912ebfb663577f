//! Legacy grouped palette format.
//!
//! An older export format that organized entries under `#GROUP`
//! headings. It never had a loader and is kept for writing files that
//! other tooling from that era still reads. New code should use
//! [`crate::format::formats::GimpFormat`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::format::entry::{ColorGroup, PaletteEntry};
use crate::format::error::FormatError;
use crate::format::traits::{LoadOptions, PaletteFormat, SaveOptions, SaveResult};

/// Header line identifying the grouped format.
const GROUPED_HEADER: &str = "PaletteCraft v2";

/// Grouped palette format (export-only).
///
/// Supports:
/// - Saving entries under named group headings
///
/// Does not support:
/// - Loading (legacy files are written, never read back)
pub struct GroupedFormat;

impl GroupedFormat {
    /// Write multiple named groups to `path`.
    ///
    /// The trait-level [`PaletteFormat::save`] writes a flat entry list
    /// as a single group named after the palette; this method is the
    /// full grouped export.
    pub fn save_groups(&self, groups: &[ColorGroup], path: &Path) -> Result<SaveResult, FormatError> {
        log::info!("Saving {} groups to {:?}", groups.len(), path);

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let colors_written = write_groups(&mut writer, groups)?;
        writer.flush()?;

        log::info!("Saved {} colors", colors_written);
        Ok(SaveResult { colors_written })
    }
}

impl PaletteFormat for GroupedFormat {
    fn id(&self) -> &'static str {
        "grouped"
    }

    fn display_name(&self) -> &'static str {
        "Grouped palette (legacy)"
    }

    fn extensions(&self) -> &[&'static str] {
        &["txt"]
    }

    fn supports_load(&self) -> bool {
        false
    }

    fn save(
        &self,
        entries: &[PaletteEntry],
        path: &Path,
        options: &SaveOptions,
    ) -> Result<SaveResult, FormatError> {
        let group = ColorGroup::with_colors(options.palette_name.clone(), entries.to_vec());
        self.save_groups(std::slice::from_ref(&group), path)
    }

    fn load(&self, _path: &Path, _options: &LoadOptions) -> Result<Vec<PaletteEntry>, FormatError> {
        Err(FormatError::UnsupportedOperation(
            "the grouped format is export-only".to_string(),
        ))
    }
}

/// Write the header and each group's block. Returns the number of color
/// lines written.
pub(crate) fn write_groups(
    writer: &mut impl Write,
    groups: &[ColorGroup],
) -> Result<usize, FormatError> {
    writeln!(writer, "{}", GROUPED_HEADER)?;

    let mut colors_written = 0;
    for group in groups {
        writeln!(writer, "#GROUP {}", group.name)?;
        for entry in &group.colors {
            writeln!(
                writer,
                "{} {} {} {}",
                entry.color.r, entry.color.g, entry.color.b, entry.name
            )?;
            colors_written += 1;
        }
    }

    Ok(colors_written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_write_groups_layout() {
        let groups = [
            ColorGroup::with_colors(
                "Warm",
                vec![
                    PaletteEntry::new("Ember", Rgb::new(200, 60, 0)),
                    PaletteEntry::new("Sand", Rgb::new(230, 200, 150)),
                ],
            ),
            ColorGroup::with_colors("Cool", vec![PaletteEntry::new("Ice", Rgb::new(200, 230, 255))]),
        ];

        let mut buf = Vec::new();
        let written = write_groups(&mut buf, &groups).unwrap();
        assert_eq!(written, 3);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "PaletteCraft v2",
                "#GROUP Warm",
                "200 60 0 Ember",
                "230 200 150 Sand",
                "#GROUP Cool",
                "200 230 255 Ice",
            ]
        );
    }

    #[test]
    fn test_load_is_unsupported() {
        let result = GroupedFormat.load(Path::new("legacy.txt"), &LoadOptions::default());
        assert!(matches!(result, Err(FormatError::UnsupportedOperation(_))));
    }
}
