//! The palette store: the single owner of the live color list.
//!
//! A [`PaletteStore`] is created once by the composition root and handed
//! by reference to whatever drives it; there is no ambient global
//! instance. Every structural mutation records a deep-copy snapshot of
//! the pre-mutation state, so undo and redo restore whole palettes
//! rather than replaying individual edits.
//!
//! The store is single-owner by design: it holds no locks and is not
//! meant for concurrent mutation.

use std::fmt;

use crate::color::Rgb;
use crate::format::PaletteEntry;
use crate::history::{HistoryConfig, Snapshot, SnapshotHistory};
use crate::model::{ColorId, PaletteColor};

/// Notification emitted after a store mutation took effect.
///
/// No-op operations (deleting an absent id, undo with no history) emit
/// nothing, even when they still record a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteEvent {
    /// An entry was appended
    Added {
        /// Identity of the new entry
        id: ColorId,
    },
    /// An entry was removed
    Removed {
        /// Identity of the removed entry
        id: ColorId,
    },
    /// An entry's color was replaced in place
    ColorChanged {
        /// Identity of the edited entry
        id: ColorId,
    },
    /// The list was emptied
    Cleared,
    /// The list was replaced wholesale from a loaded palette
    Loaded {
        /// Number of entries installed
        count: usize,
    },
    /// A snapshot was restored by undo or redo
    Restored,
}

/// Optional observer invoked after every effective mutation.
///
/// Wraps the usual `Option<Box<dyn Fn>>` so the store does not need to
/// know anything about its listeners.
pub struct ChangeCallback {
    f: Option<Box<dyn Fn(&PaletteEvent)>>,
}

impl ChangeCallback {
    /// Create a callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&PaletteEvent) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no observer).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Invoke the callback, if one is registered.
    pub fn emit(&self, event: &PaletteEvent) {
        if let Some(ref f) = self.f {
            f(event);
        }
    }

    /// Check if an observer is registered.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl Default for ChangeCallback {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for ChangeCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeCallback")
            .field("set", &self.is_some())
            .finish()
    }
}

/// Ordered collection of named colors with snapshot-based undo/redo.
#[derive(Debug, Default)]
pub struct PaletteStore {
    /// The live list; the only mutable palette instance
    colors: Vec<PaletteColor>,
    /// Snapshot stacks
    history: SnapshotHistory,
    /// Next identity to hand out
    next_id: ColorId,
    /// Observer notified after effective mutations
    on_change: ChangeCallback,
}

impl PaletteStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a custom history configuration.
    pub fn with_history_config(config: HistoryConfig) -> Self {
        Self {
            history: SnapshotHistory::with_config(config),
            ..Default::default()
        }
    }

    /// Register an observer called after every effective mutation.
    ///
    /// Replaces any previously registered observer.
    pub fn on_change<F>(&mut self, f: F)
    where
        F: Fn(&PaletteEvent) + 'static,
    {
        self.on_change = ChangeCallback::new(f);
    }

    /// The current ordered color list.
    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Look up an entry by identity.
    pub fn get(&self, id: ColorId) -> Option<&PaletteColor> {
        self.colors.iter().find(|c| c.id == id)
    }

    /// Append a color with an auto-generated name.
    ///
    /// The name is `"Color {N}"` where N is the pre-insertion count plus
    /// one. Names are never renumbered on delete, so gaps and duplicates
    /// can occur.
    ///
    /// Returns the identity of the new entry.
    pub fn add_color(&mut self, color: Rgb) -> ColorId {
        self.record_snapshot();

        let name = format!("Color {}", self.colors.len() + 1);
        let id = self.allocate_id();
        log::debug!("Store: add {} as '{}'", color.to_hex(), name);
        self.colors.push(PaletteColor::new(id, name, color));

        self.on_change.emit(&PaletteEvent::Added { id });
        id
    }

    /// Remove the entry with the given identity.
    ///
    /// An absent id is a no-op, but the snapshot is still recorded, so
    /// the attempt occupies an undo step either way.
    ///
    /// Returns true if an entry was removed.
    pub fn delete_color(&mut self, id: ColorId) -> bool {
        self.record_snapshot();

        let Some(index) = self.colors.iter().position(|c| c.id == id) else {
            log::debug!("Store: delete of absent id {}", id);
            return false;
        };

        let removed = self.colors.remove(index);
        log::debug!("Store: deleted '{}'", removed.name);
        self.on_change.emit(&PaletteEvent::Removed { id });
        true
    }

    /// Replace an entry's color in place.
    ///
    /// Same snapshot policy as [`PaletteStore::delete_color`]: an absent
    /// id still records a snapshot.
    ///
    /// Returns true if an entry was updated.
    pub fn set_color(&mut self, id: ColorId, color: Rgb) -> bool {
        self.record_snapshot();

        let Some(entry) = self.colors.iter_mut().find(|c| c.id == id) else {
            log::debug!("Store: set_color on absent id {}", id);
            return false;
        };

        entry.color = color;
        log::debug!("Store: '{}' set to {}", entry.name, color.to_hex());
        self.on_change.emit(&PaletteEvent::ColorChanged { id });
        true
    }

    /// Remove every entry.
    pub fn clear_colors(&mut self) {
        self.record_snapshot();
        self.colors.clear();
        log::debug!("Store: cleared");
        self.on_change.emit(&PaletteEvent::Cleared);
    }

    /// Replace the palette wholesale with entries loaded from a file.
    ///
    /// Fresh identities are assigned in order; loaded names are kept
    /// as-is.
    pub fn load_palette(&mut self, entries: Vec<PaletteEntry>) {
        self.record_snapshot();

        let mut colors = Vec::with_capacity(entries.len());
        for e in entries {
            let id = self.allocate_id();
            colors.push(PaletteColor::new(id, e.name, e.color));
        }
        self.colors = colors;

        let count = self.colors.len();
        log::info!("Store: installed loaded palette of {} entries", count);
        self.on_change.emit(&PaletteEvent::Loaded { count });
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back to the previous recorded state.
    ///
    /// Returns true if a state was restored; with nothing to step back
    /// to this is a no-op, never an error.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo(self.colors.clone()) else {
            return false;
        };
        self.colors = snapshot;
        self.on_change.emit(&PaletteEvent::Restored);
        true
    }

    /// Step forward to a state previously undone.
    ///
    /// Returns true if a state was restored.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo(self.colors.clone()) else {
            return false;
        };
        self.colors = snapshot;
        self.on_change.emit(&PaletteEvent::Restored);
        true
    }

    /// Record the current state as the pre-mutation snapshot.
    fn record_snapshot(&mut self) {
        let snapshot: Snapshot = self.colors.clone();
        self.history.record(snapshot);
    }

    fn allocate_id(&mut self) -> ColorId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_add_assigns_sequential_names() {
        let mut store = PaletteStore::new();
        store.add_color(Rgb::new(1, 2, 3));
        store.add_color(Rgb::new(4, 5, 6));

        assert_eq!(store.colors()[0].name, "Color 1");
        assert_eq!(store.colors()[1].name, "Color 2");
    }

    #[test]
    fn test_names_not_renumbered_after_delete() {
        let mut store = PaletteStore::new();
        let first = store.add_color(Rgb::new(1, 0, 0));
        store.add_color(Rgb::new(2, 0, 0));
        store.delete_color(first);
        store.add_color(Rgb::new(3, 0, 0));

        // Pre-insertion count is 1, so the new entry repeats "Color 2".
        let names: Vec<_> = store.colors().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Color 2", "Color 2"]);
    }

    #[test]
    fn test_delete_by_identity_not_value() {
        let mut store = PaletteStore::new();
        let a = store.add_color(Rgb::new(9, 9, 9));
        let b = store.add_color(Rgb::new(9, 9, 9));

        assert!(store.delete_color(a));
        assert_eq!(store.len(), 1);
        assert_eq!(store.colors()[0].id, b);
    }

    #[test]
    fn test_undo_redo_stack_law() {
        let mut store = PaletteStore::new();
        let x = Rgb::new(10, 0, 0);
        let y = Rgb::new(0, 10, 0);
        store.add_color(x);
        store.add_color(y);

        // Undo restores the single-element state.
        assert!(store.undo());
        assert_eq!(store.len(), 1);
        assert_eq!(store.colors()[0].color, x);

        // A second undo must never empty a store with only the baseline
        // left below the current state.
        assert!(!store.undo());
        assert_eq!(store.len(), 1);

        // Redo restores both entries.
        assert!(store.redo());
        assert_eq!(store.len(), 2);
        assert_eq!(store.colors()[1].color, y);
    }

    #[test]
    fn test_mutation_after_undo_clears_redo() {
        let mut store = PaletteStore::new();
        store.add_color(Rgb::new(1, 0, 0));
        store.add_color(Rgb::new(2, 0, 0));
        store.undo();
        assert!(store.can_redo());

        store.add_color(Rgb::new(3, 0, 0));
        assert!(!store.can_redo());
        assert!(!store.redo());
    }

    #[test]
    fn test_noop_delete_still_snapshots() {
        let mut store = PaletteStore::new();
        store.add_color(Rgb::new(1, 0, 0));
        let before = store.history.undo_count();

        assert!(!store.delete_color(9999));
        assert_eq!(store.history.undo_count(), before + 1);
    }

    #[test]
    fn test_set_color_is_undoable() {
        let mut store = PaletteStore::new();
        let id = store.add_color(Rgb::new(1, 0, 0));
        assert!(store.set_color(id, Rgb::new(200, 100, 50)));
        assert_eq!(store.get(id).unwrap().color, Rgb::new(200, 100, 50));

        assert!(store.undo());
        assert_eq!(store.get(id).unwrap().color, Rgb::new(1, 0, 0));
    }

    #[test]
    fn test_clear_then_undo_restores() {
        let mut store = PaletteStore::new();
        store.add_color(Rgb::new(1, 0, 0));
        store.add_color(Rgb::new(2, 0, 0));
        store.clear_colors();
        assert!(store.is_empty());

        assert!(store.undo());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_palette_replaces_wholesale() {
        let mut store = PaletteStore::new();
        store.add_color(Rgb::new(1, 0, 0));

        store.load_palette(vec![
            PaletteEntry::new("Ink", Rgb::new(0, 0, 0)),
            PaletteEntry::new("Paper", Rgb::new(255, 255, 255)),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.colors()[0].name, "Ink");
        assert_eq!(store.colors()[1].name, "Paper");

        // Loading is one undo step.
        assert!(store.undo());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_change_events() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();

        let mut store = PaletteStore::new();
        store.on_change(move |e| sink.borrow_mut().push(*e));

        let id = store.add_color(Rgb::new(1, 2, 3));
        store.delete_color(id);
        store.delete_color(id); // absent: snapshot but no event
        store.undo();

        assert_eq!(
            *events.borrow(),
            vec![
                PaletteEvent::Added { id },
                PaletteEvent::Removed { id },
                PaletteEvent::Restored,
            ]
        );
    }
}
