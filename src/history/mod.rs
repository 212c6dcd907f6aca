//! Undo/redo history.
//!
//! The undo stack always holds the snapshot of the current position on
//! top, starting with the initial deal. Undo moves the top snapshot onto
//! the redo stack and hands back the one beneath it; redo reverses that.
//! Recording a new position discards anything left to redo.

pub mod snapshot;

pub use snapshot::Snapshot;

/// Snapshot stacks for undo and redo.
#[derive(Clone, Debug, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl History {
    /// Create a history rooted at the given position.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self {
            undo: vec![initial],
            redo: Vec::new(),
        }
    }

    /// Record a new current position.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.undo.push(snapshot);
        self.redo.clear();
        log::debug!("state saved, history depth {}", self.undo.len());
    }

    /// Step back one position.
    ///
    /// Returns the position to restore, or `None` when only the initial
    /// position remains.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.undo.len() <= 1 {
            return None;
        }
        let undone = self.undo.pop()?;
        self.redo.push(undone);
        self.undo.last()
    }

    /// Step forward to the most recently undone position.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let snapshot = self.redo.pop()?;
        self.undo.push(snapshot);
        self.undo.last()
    }

    /// Number of positions that can be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len().saturating_sub(1)
    }

    /// Number of positions that can be redone.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::zones::Pile;
    use im::Vector;

    fn snapshot(moves: u32) -> Snapshot {
        let mut waste = Pile::new();
        waste.place(Card::new(Suit::Hearts, Rank::ALL[moves as usize % 13]));
        Snapshot {
            tableau: Vector::new(),
            stock: Pile::new(),
            waste,
            moves,
            selected: 0,
        }
    }

    #[test]
    fn test_initial_cannot_be_undone() {
        let mut history = History::new(snapshot(0));
        assert_eq!(history.undo_depth(), 0);
        assert!(history.undo().is_none());
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_returns_previous() {
        let mut history = History::new(snapshot(0));
        history.record(snapshot(1));
        history.record(snapshot(2));

        assert_eq!(history.undo().map(|s| s.moves), Some(1));
        assert_eq!(history.undo().map(|s| s.moves), Some(0));
        assert!(history.undo().is_none());
        assert_eq!(history.redo_depth(), 2);
    }

    #[test]
    fn test_redo_reapplies() {
        let mut history = History::new(snapshot(0));
        history.record(snapshot(1));
        history.undo();

        assert_eq!(history.redo().map(|s| s.moves), Some(1));
        assert!(history.redo().is_none());
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new(snapshot(0));
        history.record(snapshot(1));
        history.undo();
        assert_eq!(history.redo_depth(), 1);

        history.record(snapshot(5));
        assert_eq!(history.redo_depth(), 0);
        assert!(history.redo().is_none());
    }
}
