//! Undo history.

use crate::core::moves::Move;

/// Applied moves, oldest first.
///
/// Only forward moves are recorded; undoing pops. There is no redo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    moves: Vec<Move>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        debug_assert!(!mv.kind.is_undo(), "undo moves are never recorded");
        self.moves.push(mv);
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Most recent move.
    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}
