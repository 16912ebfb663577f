//! Undo/Redo history for palette state.
//!
//! The history is memento-based: before every mutation the store records
//! a full deep copy of its ordered color list. Undo and redo then swap
//! whole snapshots in and out rather than replaying individual commands.
//!
//! Two stacks are maintained:
//! - `undo_stack`: past states, oldest at the bottom. The bottom entry is
//!   the baseline recorded before the first mutation; undo never pops it.
//! - `redo_stack`: states stepped back from, cleared whenever a new
//!   snapshot is recorded.

use crate::model::PaletteColor;

/// A fully-copied palette state captured at one point in time.
///
/// Snapshots own their entries outright; nothing in a snapshot aliases
/// the live list, so later mutations cannot corrupt history.
pub type Snapshot = Vec<PaletteColor>;

/// Configuration for the snapshot history.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Maximum number of snapshots to keep on the undo stack
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}

/// The undo/redo snapshot stacks.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    /// Past states, most recent at the end
    undo_stack: Vec<Snapshot>,
    /// States available for redo, most recent at the end
    redo_stack: Vec<Snapshot>,
    /// Configuration
    config: HistoryConfig,
}

impl SnapshotHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration.
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Record the pre-mutation state of the palette.
    ///
    /// This clears the redo stack: stepping forward is no longer
    /// meaningful once the timeline has branched. When the undo stack
    /// exceeds the configured depth the oldest snapshots are dropped,
    /// which silently moves the baseline forward.
    pub fn record(&mut self, snapshot: Snapshot) {
        log::debug!("History: recorded snapshot of {} entries", snapshot.len());
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();

        while self.undo_stack.len() > self.config.max_depth {
            self.undo_stack.remove(0);
        }
    }

    /// Check if undo is available.
    ///
    /// Undo needs at least two recorded snapshots: the state to restore
    /// plus the baseline that must remain underneath it.
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() >= 2
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Step back one state.
    ///
    /// `current` is the live state being stepped away from; it is parked
    /// on the redo stack. Returns the snapshot to restore, or `None`
    /// when only the baseline remains.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.redo_stack.push(current);
        let restored = self.undo_stack.pop();
        log::debug!(
            "History: undo ({} past, {} redoable)",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        restored
    }

    /// Step forward one state.
    ///
    /// `current` is pushed back onto the undo stack. Returns the snapshot
    /// to restore, or `None` if there is nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let restored = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        log::debug!(
            "History: redo ({} past, {} redoable)",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Some(restored)
    }

    /// Number of snapshots on the undo stack.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots on the redo stack.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        log::debug!("History: cleared");
    }
}
