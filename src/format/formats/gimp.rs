//! GIMP-style flat palette format.
//!
//! This is the canonical format: one header block followed by one line
//! per color, `R G B<TAB>name`, channels left-justified in width 3.
//! Loading is lenient by default; lines that do not parse as colors are
//! skipped so hand-edited or noisy files still load.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::format::entry::PaletteEntry;
use crate::format::error::FormatError;
use crate::format::traits::{LoadOptions, PaletteFormat, SaveOptions, SaveResult};

/// GIMP-style flat palette format.
///
/// Supports:
/// - Save and load
/// - Names containing spaces (everything after the channels)
///
/// Out-of-range channel integers in loaded files are clamped to 0-255;
/// saved files always contain in-range values.
pub struct GimpFormat;

impl PaletteFormat for GimpFormat {
    fn id(&self) -> &'static str {
        "gimp"
    }

    fn display_name(&self) -> &'static str {
        "GIMP Palette"
    }

    fn extensions(&self) -> &[&'static str] {
        &["gpl", "txt"]
    }

    fn supports_load(&self) -> bool {
        true
    }

    fn save(
        &self,
        entries: &[PaletteEntry],
        path: &Path,
        options: &SaveOptions,
    ) -> Result<SaveResult, FormatError> {
        log::info!("Saving palette '{}' to {:?}", options.palette_name, path);

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let colors_written = write_palette(&mut writer, entries, &options.palette_name)?;
        writer.flush()?;

        log::info!("Saved {} colors", colors_written);
        Ok(SaveResult { colors_written })
    }

    fn load(&self, path: &Path, options: &LoadOptions) -> Result<Vec<PaletteEntry>, FormatError> {
        log::info!("Loading palette from {:?}", path);

        let file = File::open(path)?;
        let entries = parse_palette(BufReader::new(file), options)?;

        log::info!("Loaded {} colors", entries.len());
        Ok(entries)
    }
}

/// Write the header block and one line per entry. Returns the number of
/// color lines written.
pub(crate) fn write_palette(
    writer: &mut impl Write,
    entries: &[PaletteEntry],
    palette_name: &str,
) -> Result<usize, FormatError> {
    writeln!(writer, "GIMP Palette")?;
    writeln!(writer, "Name: {}", palette_name)?;
    writeln!(writer, "# Generated {}", current_timestamp())?;
    writeln!(writer, "#")?;

    for entry in entries {
        writeln!(
            writer,
            "{:<3} {:<3} {:<3}\t{}",
            entry.color.r, entry.color.g, entry.color.b, entry.name
        )?;
    }

    Ok(entries.len())
}

/// Parse a palette stream.
///
/// The first line is assumed to be the format header and discarded.
/// Empty lines, `#` comments and the `Name:` header are skipped. In
/// lenient mode (the default) any remaining line that does not parse as
/// a color is skipped too; in strict mode it is an error.
pub(crate) fn parse_palette(
    reader: impl BufRead,
    options: &LoadOptions,
) -> Result<Vec<PaletteEntry>, FormatError> {
    let mut entries = Vec::new();
    let mut lines = reader.lines();

    // Header line ("GIMP Palette"); its content is not checked.
    if lines.next().transpose()?.is_none() {
        return Ok(entries);
    }

    for (index, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("Name:") {
            continue;
        }

        match parse_color_line(line) {
            Some(entry) => entries.push(entry),
            None if options.strict => {
                // Line numbers are 1-based and count the discarded header.
                return Err(FormatError::malformed_line(index + 2, line));
            }
            None => {
                log::debug!("Skipping malformed palette line: {:?}", line);
            }
        }
    }

    Ok(entries)
}

/// Parse a single color line: three channel integers, then an optional
/// name made of the remaining tokens.
fn parse_color_line(line: &str) -> Option<PaletteEntry> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return None;
    }

    let r: i64 = parts[0].parse().ok()?;
    let g: i64 = parts[1].parse().ok()?;
    let b: i64 = parts[2].parse().ok()?;

    let name = if parts.len() > 3 {
        parts[3..].join(" ")
    } else {
        PaletteEntry::UNNAMED.to_string()
    };

    Some(PaletteEntry::new(name, clamp_channels(r, g, b)))
}

/// Clamp loaded channel values into the 8-bit range.
fn clamp_channels(r: i64, g: i64, b: i64) -> crate::color::Rgb {
    crate::color::Rgb {
        r: r.clamp(0, 255) as u8,
        g: g.clamp(0, 255) as u8,
        b: b.clamp(0, 255) as u8,
    }
}

/// Current UTC time as `YYYY-MM-DD HH:MM:SS` for the generated-at
/// comment line.
fn current_timestamp() -> String {
    let now = web_time::SystemTime::now();
    let duration = now
        .duration_since(web_time::SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = duration.as_secs();

    let days_since_epoch = secs / 86400;
    let secs_today = secs % 86400;
    let hours = secs_today / 3600;
    let mins = (secs_today % 3600) / 60;
    let secs_remaining = secs_today % 60;

    let (year, month, day) = days_to_ymd(days_since_epoch);

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        year, month, day, hours, mins, secs_remaining
    )
}

/// Convert days since Unix epoch to year/month/day.
fn days_to_ymd(days: u64) -> (u32, u32, u32) {
    let mut remaining_days = days as i64;
    let mut year = 1970i32;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let leap = is_leap_year(year);
    let days_in_months: [i64; 12] = if leap {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 1u32;
    for &days_in_month in &days_in_months {
        if remaining_days < days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    let day = remaining_days as u32 + 1;
    (year as u32, month, day)
}

/// Check if a year is a leap year.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_parse_color_line_with_name() {
        let entry = parse_color_line("255 128 0\tBlaze Orange").unwrap();
        assert_eq!(entry.color, Rgb::new(255, 128, 0));
        assert_eq!(entry.name, "Blaze Orange");
    }

    #[test]
    fn test_parse_color_line_without_name() {
        let entry = parse_color_line("1 2 3").unwrap();
        assert_eq!(entry.name, "Unnamed");
    }

    #[test]
    fn test_parse_color_line_rejects_short_and_bad_lines() {
        assert!(parse_color_line("255 128").is_none());
        assert!(parse_color_line("red green blue").is_none());
        assert!(parse_color_line("").is_none());
    }

    #[test]
    fn test_parse_color_line_clamps_out_of_range() {
        let entry = parse_color_line("300 -5 255 Hot").unwrap();
        assert_eq!(entry.color, Rgb::new(255, 0, 255));
    }

    #[test]
    fn test_line_format_is_fixed_width() {
        let mut buf = Vec::new();
        let entries = [PaletteEntry::new("Ink", Rgb::new(7, 42, 255))];
        write_palette(&mut buf, &entries, "Test").unwrap();

        let text = String::from_utf8(buf).unwrap();
        let color_line = text.lines().last().unwrap();
        assert_eq!(color_line, "7   42  255\tInk");
    }

    #[test]
    fn test_header_lines() {
        let mut buf = Vec::new();
        write_palette(&mut buf, &[], "Sunset").unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "GIMP Palette");
        assert_eq!(lines[1], "Name: Sunset");
        assert!(lines[2].starts_with("# Generated "));
        assert_eq!(lines[3], "#");
    }

    #[test]
    fn test_days_to_ymd() {
        assert_eq!(days_to_ymd(0), (1970, 1, 1));
        assert_eq!(days_to_ymd(365), (1971, 1, 1));
        // 2000 was a leap year (divisible by 400).
        assert_eq!(days_to_ymd(11016), (2000, 2, 29));
    }
}
