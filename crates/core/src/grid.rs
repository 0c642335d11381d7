//! Grid module - dense projection of the locked cells
//!
//! The grid is a 10x20 array where each cell can be empty or filled with a piece kind.
//! It is never edited in place: [`Grid::build`] derives it from the authoritative
//! [`LockedSet`] whenever the session needs to check collisions, clear rows or
//! publish a snapshot.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::locked::LockedSet;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

/// Row-major cell storage, `rows[y][x]`
pub type GridRows = [[Cell; W]; H];

/// The game grid - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: GridRows,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            rows: [[None; W]; H],
        }
    }

    /// Project a locked set onto a fresh grid
    pub fn build(locked: &LockedSet) -> Self {
        let mut grid = Self::new();
        for ((x, y), kind) in locked.iter() {
            // LockedSet rejects out-of-range keys on insert.
            grid.rows[y as usize][x as usize] = Some(kind);
        }
        grid
    }

    /// Get width of the grid
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the grid
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Check if position is out of bounds
    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= H {
            return false;
        }
        self.rows[y].iter().all(|cell| cell.is_some())
    }

    /// Row-major view of the cells
    pub fn rows(&self) -> &GridRows {
        &self.rows
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
