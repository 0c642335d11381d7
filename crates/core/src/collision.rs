//! Collision rules - the single authority on placement legality
//!
//! Movement, rotation, gravity and spawning all ask [`is_valid_placement`].

use crate::grid::Grid;
use crate::pieces::{Piece, ShapeMatrix};

/// Check a shape at origin `(x, y)` against the grid
///
/// Every occupied cell must land inside the board on an empty cell.
/// Stops at the first violation.
pub fn is_valid_placement(shape: &ShapeMatrix, x: i8, y: i8, grid: &Grid) -> bool {
    shape
        .minos()
        .iter()
        .all(|&(dx, dy)| grid.is_empty_at(x + dx, y + dy))
}

/// Check a piece where it currently stands
pub fn piece_fits(piece: &Piece, grid: &Grid) -> bool {
    is_valid_placement(&piece.shape, piece.x, piece.y, grid)
}
