//! Shape catalog - the seven tetrominoes and a uniform draw over them
//!
//! Unlike a bag randomizer, every draw is independent: each kind has a 1/7
//! chance regardless of history.

use crate::pieces::{get_shape, Piece, ShapeMatrix};
use crate::rng::SimpleRng;
use crate::types::{PieceKind, Rgb};

/// One immutable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeEntry {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Rgb,
}

impl ShapeEntry {
    pub fn id(&self) -> u8 {
        self.kind.id()
    }
}

/// Fixed tetromino set plus the random source used to draw from it
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    rng: SimpleRng,
}

impl ShapeCatalog {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Catalog entry for a kind
    pub fn entry(kind: PieceKind) -> ShapeEntry {
        ShapeEntry {
            kind,
            shape: get_shape(kind),
            color: kind.color(),
        }
    }

    /// All seven entries in type-id order
    pub fn entries() -> [ShapeEntry; 7] {
        PieceKind::ALL.map(Self::entry)
    }

    /// Draw a kind uniformly at random
    pub fn draw_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Draw a new piece at the spawn origin
    pub fn draw(&mut self) -> Piece {
        Piece::new(self.draw_kind())
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::new(1)
    }
}
