//! Format registry for discovering and accessing palette formats.

use std::collections::HashMap;

use crate::format::formats::{GimpFormat, GroupedFormat};
use crate::format::traits::PaletteFormat;

/// Registry of available palette formats.
///
/// This provides a central location to discover and access format
/// implementations. All built-in formats are registered automatically on
/// creation.
pub struct FormatRegistry {
    formats: HashMap<&'static str, Box<dyn PaletteFormat>>,
}

impl FormatRegistry {
    /// Create a new registry with all built-in formats registered.
    pub fn new() -> Self {
        let mut registry = Self {
            formats: HashMap::new(),
        };

        registry.register(Box::new(GimpFormat));
        registry.register(Box::new(GroupedFormat));

        registry
    }

    /// Register a format implementation.
    pub fn register(&mut self, format: Box<dyn PaletteFormat>) {
        self.formats.insert(format.id(), format);
    }

    /// Get a format by its ID.
    pub fn get(&self, id: &str) -> Option<&dyn PaletteFormat> {
        self.formats.get(id).map(|f| f.as_ref())
    }

    /// Find formats by file extension.
    pub fn by_extension(&self, ext: &str) -> Vec<&dyn PaletteFormat> {
        self.formats
            .values()
            .filter(|f| f.extensions().contains(&ext))
            .map(|f| f.as_ref())
            .collect()
    }

    /// Get all registered formats.
    pub fn all(&self) -> Vec<&dyn PaletteFormat> {
        self.formats.values().map(|f| f.as_ref()).collect()
    }

    /// Get the canonical format used by the async save/load facade.
    pub fn canonical(&self) -> &dyn PaletteFormat {
        self.get("gimp")
            .expect("Canonical format should always be registered")
    }

    /// Get formats that can load files (not export-only).
    pub fn loadable_formats(&self) -> Vec<&dyn PaletteFormat> {
        self.all()
            .into_iter()
            .filter(|f| f.supports_load())
            .collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
