//! Palette file save/load system.
//!
//! This module provides a trait-based system for reading and writing
//! palettes in on-disk formats. New formats are added by implementing
//! the [`PaletteFormat`] trait and registering the implementation.
//!
//! ## Supported Formats
//!
//! - **GIMP Palette**: the canonical flat format, saved and loaded
//! - **Grouped (legacy)**: `#GROUP`-sectioned export, write-only
//!
//! ## Usage
//!
//! ```rust,ignore
//! use swatchbook::format::{FormatRegistry, SaveOptions};
//!
//! let registry = FormatRegistry::new();
//! let format = registry.get("gimp").unwrap();
//! format.save(&entries, path, &SaveOptions::new("My Palette"))?;
//! ```

mod entry;
mod error;
pub mod formats;
mod registry;
mod traits;

pub use entry::{ColorGroup, PaletteEntry};
pub use error::FormatError;
pub use registry::FormatRegistry;
pub use traits::{LoadOptions, PaletteFormat, SaveOptions, SaveResult};
