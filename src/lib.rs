//! Swatchbook - palette editing core
//!
//! The non-visual engine behind a palette editor: RGB/HSL conversion,
//! gradient generation, an undoable palette store, and palette file
//! save/load. A UI layer owns a [`PaletteStore`], drives it through the
//! operations here, and persists it with the [`io`] facade.

pub mod color;
pub mod config;
pub mod format;
pub mod gradient;
pub mod history;
pub mod io;
pub mod model;
pub mod store;

pub use color::{ColorParseError, Hsl, Rgb};
pub use config::{AppConfig, ConfigError, LogLevel, UserPreferences};
pub use format::{
    ColorGroup, FormatError, FormatRegistry, LoadOptions, PaletteEntry, PaletteFormat, SaveOptions,
    SaveResult,
};
pub use gradient::smooth_gradient;
pub use history::{HistoryConfig, Snapshot, SnapshotHistory};
pub use model::{ColorId, PaletteColor};
pub use store::{PaletteEvent, PaletteStore};
