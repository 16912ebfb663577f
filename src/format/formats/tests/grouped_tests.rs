//! Tests for the legacy grouped format.

use std::path::Path;

use crate::color::Rgb;
use crate::format::entry::{ColorGroup, PaletteEntry};
use crate::format::error::FormatError;
use crate::format::formats::GroupedFormat;
use crate::format::formats::grouped::write_groups;
use crate::format::traits::{LoadOptions, PaletteFormat};

#[test]
fn test_format_metadata() {
    let format = GroupedFormat;
    assert_eq!(format.id(), "grouped");
    assert!(!format.supports_load(), "grouped is export-only");
}

#[test]
fn test_load_reports_unsupported() {
    let result = GroupedFormat.load(Path::new("old-palette.txt"), &LoadOptions::default());
    assert!(matches!(result, Err(FormatError::UnsupportedOperation(_))));
}

#[test]
fn test_header_and_group_lines() {
    let groups = [ColorGroup::with_colors(
        "Default",
        vec![PaletteEntry::new("Night", Rgb::new(10, 10, 30))],
    )];

    let mut buf = Vec::new();
    write_groups(&mut buf, &groups).unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("PaletteCraft v2\n"));
    assert!(text.contains("#GROUP Default\n"));
    assert!(text.contains("10 10 30 Night\n"));
}

#[test]
fn test_empty_groups_write_headings_only() {
    let groups = [ColorGroup::new("Empty")];

    let mut buf = Vec::new();
    let written = write_groups(&mut buf, &groups).unwrap();
    assert_eq!(written, 0);

    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "PaletteCraft v2\n#GROUP Empty\n");
}
