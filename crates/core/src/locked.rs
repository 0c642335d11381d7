//! LockedSet - the authoritative record of settled cells
//!
//! A sparse map from board coordinate to the kind of piece that settled there.
//! Only lock-in and line clears mutate it; everything else reads a [`Grid`]
//! built from it.
//!
//! [`Grid`]: crate::grid::Grid

use std::collections::BTreeMap;

use crate::grid::Grid;
use crate::types::PieceKind;

/// Board coordinate `(x, y)`
pub type Pos = (i8, i8);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockedSet {
    cells: BTreeMap<Pos, PieceKind>,
}

impl LockedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a settled cell.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the board. Collision checks guarantee
    /// this never happens for a legally placed piece.
    pub fn insert(&mut self, x: i8, y: i8, kind: PieceKind) {
        assert!(
            Grid::in_bounds(x, y),
            "locked cell ({x}, {y}) is outside the board"
        );
        self.cells.insert((x, y), kind);
    }

    /// Remove a cell if present; absent keys are ignored.
    pub fn remove_if_present(&mut self, x: i8, y: i8) -> Option<PieceKind> {
        self.cells.remove(&(x, y))
    }

    pub fn get(&self, x: i8, y: i8) -> Option<PieceKind> {
        self.cells.get(&(x, y)).copied()
    }

    pub fn contains(&self, x: i8, y: i8) -> bool {
        self.cells.contains_key(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate cells in `(x, y)` order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, PieceKind)> + '_ {
        self.cells.iter().map(|(&pos, &kind)| (pos, kind))
    }

    /// Any settled cell inside the rows above `limit`
    pub fn any_above(&self, limit: i8) -> bool {
        self.cells.keys().any(|&(_, y)| y < limit)
    }

    /// Remove every cell, then re-insert the survivors through `f`.
    ///
    /// Used by row compaction, which moves many keys at once.
    pub(crate) fn rebuild(&mut self, mut f: impl FnMut(Pos, PieceKind) -> Option<Pos>) {
        let old = std::mem::take(&mut self.cells);
        for (pos, kind) in old {
            if let Some((x, y)) = f(pos, kind) {
                self.insert(x, y, kind);
            }
        }
    }
}
