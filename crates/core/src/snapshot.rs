use crate::grid::{Grid, GridRows};
use crate::pieces::{Piece, ShapeMatrix};
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// The board is a copy of the derived grid; renderers cannot reach the
/// session's locked cells through it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: GridRows,
    pub current: Option<PieceSnapshot>,
    pub next: PieceSnapshot,
    pub score: u32,
    pub lines: u32,
    pub fall_interval_ms: f64,
    pub lost: bool,
}

impl GameSnapshot {
    /// Snapshot of an empty board with no falling piece
    pub fn empty(next: PieceKind) -> Self {
        Self {
            board: *Grid::new().rows(),
            current: None,
            next: Piece::new(next).into(),
            score: 0,
            lines: 0,
            fall_interval_ms: 0.0,
            lost: false,
        }
    }
}
