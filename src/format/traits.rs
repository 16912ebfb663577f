//! Trait definitions for palette format implementations.

use std::path::Path;

use crate::format::entry::PaletteEntry;
use crate::format::error::FormatError;

/// Trait for palette format save/load implementations.
///
/// Each on-disk format implements this trait to convert between the
/// in-memory entry list and its textual representation. Formats are
/// looked up through the [`crate::format::FormatRegistry`].
pub trait PaletteFormat: Send + Sync {
    /// Unique identifier for this format (e.g., "gimp", "grouped").
    fn id(&self) -> &'static str;

    /// Human-readable name for UI display.
    fn display_name(&self) -> &'static str;

    /// File extensions this format uses.
    fn extensions(&self) -> &[&'static str];

    /// Whether this format can load files, or is export-only legacy.
    fn supports_load(&self) -> bool;

    /// Write the entries to `path`.
    fn save(
        &self,
        entries: &[PaletteEntry],
        path: &Path,
        options: &SaveOptions,
    ) -> Result<SaveResult, FormatError>;

    /// Read entries from `path`.
    ///
    /// Export-only formats return
    /// [`FormatError::UnsupportedOperation`].
    fn load(&self, path: &Path, options: &LoadOptions) -> Result<Vec<PaletteEntry>, FormatError>;
}

/// Options for save operations.
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Palette name written into the file header.
    pub palette_name: String,
}

impl SaveOptions {
    /// Create save options with the given palette name.
    pub fn new(palette_name: impl Into<String>) -> Self {
        Self {
            palette_name: palette_name.into(),
        }
    }
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

/// Options for load operations.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Fail on malformed color lines instead of skipping them.
    ///
    /// The default is lenient: noisy files load with their bad lines
    /// silently dropped.
    pub strict: bool,
}

impl LoadOptions {
    /// Create load options with defaults (lenient).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Result of a save operation.
#[derive(Debug, Default)]
pub struct SaveResult {
    /// Number of color lines written.
    pub colors_written: usize,
}
