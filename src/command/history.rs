use std::collections::VecDeque;

use crate::stroke::Stroke;

/// Undo depth used when no other limit is configured
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// A fully independent copy of the committed stroke list at one moment
pub type Snapshot = Vec<Stroke>;

/// Bounded undo/redo over whole-canvas snapshots.
///
/// Snapshots are owned values: nothing handed to or returned from the history
/// shares storage with the live stroke list.
#[derive(Debug, Clone)]
pub struct History {
    /// Oldest snapshot at the front, newest at the back
    undo_stack: VecDeque<Snapshot>,
    /// Snapshots that can be redone, newest at the back
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl History {
    /// Creates an empty history. A depth below one is raised to one.
    pub fn new(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(max_depth + 1),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Record the state *before* a destructive action.
    ///
    /// Evicts the oldest snapshot once the depth is exceeded and always
    /// invalidates redo.
    pub fn save_state(&mut self, strokes: &[Stroke]) {
        self.undo_stack.push_back(strokes.to_vec());

        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
            log::trace!("History full, evicted oldest snapshot");
        }

        self.redo_stack.clear();
        log::debug!("Saved snapshot of {} strokes (undo depth {})", strokes.len(), self.undo_stack.len());
    }

    /// Step back one snapshot. `current` is kept for redo and the previous
    /// state returned; with nothing to undo `current` comes back unchanged.
    pub fn undo(&mut self, current: Vec<Stroke>) -> Vec<Stroke> {
        match self.undo_stack.pop_back() {
            Some(previous) => {
                self.redo_stack.push(current);
                log::debug!("Undo (undo depth {}, redo depth {})", self.undo_stack.len(), self.redo_stack.len());
                previous
            }
            None => current,
        }
    }

    /// Step forward one snapshot. Mirrors [`History::undo`].
    ///
    /// The push onto the undo stack does not evict: only [`History::save_state`]
    /// enforces the depth limit.
    pub fn redo(&mut self, current: Vec<Stroke>) -> Vec<Stroke> {
        match self.redo_stack.pop() {
            Some(next) => {
                self.undo_stack.push_back(current);
                log::debug!("Redo (undo depth {}, redo depth {})", self.undo_stack.len(), self.redo_stack.len());
                next
            }
            None => current,
        }
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Undo snapshots from oldest to newest
    pub fn undo_snapshots(&self) -> impl Iterator<Item = &[Stroke]> + '_ {
        self.undo_stack.iter().map(Vec::as_slice)
    }

    /// Drop both stacks
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
