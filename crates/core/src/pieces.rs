//! Pieces module - tetromino shape matrices and rotation with wall kicks
//!
//! Shapes are small boolean matrices stored in a fixed 4x4 array with explicit
//! row/column counts. Rotation is transpose-and-reverse (90° clockwise); when
//! the rotated shape does not fit where the piece is, a horizontal offset
//! search ("wall kick") looks for the nearest legal column.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rgb, SPAWN_POSITION};

/// Largest row/column count a shape may have
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a single mino relative to the piece origin, `(dx, dy)`
pub type MinoOffset = (i8, i8);

/// Occupied cells of a shape, at most one per matrix slot
pub type Minos = ArrayVec<MinoOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Fixed-capacity boolean shape matrix
///
/// Slots outside `rows x cols` are always `false`, so two matrices compare
/// equal exactly when they describe the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    rows: u8,
    cols: u8,
}

impl ShapeMatrix {
    /// Build a matrix from 0/1 rows.
    ///
    /// # Panics
    ///
    /// Panics on an empty, ragged, oversized or all-zero template.
    pub fn from_rows(template: &[&[u8]]) -> Self {
        let rows = template.len();
        assert!(
            (1..=MAX_SHAPE_DIM).contains(&rows),
            "shape must have 1..={MAX_SHAPE_DIM} rows, got {rows}"
        );
        let cols = template[0].len();
        assert!(
            (1..=MAX_SHAPE_DIM).contains(&cols),
            "shape must have 1..={MAX_SHAPE_DIM} columns, got {cols}"
        );

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in template.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape row {r}");
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        let shape = Self {
            cells,
            rows: rows as u8,
            cols: cols as u8,
        };
        assert!(shape.mino_count() > 0, "shape has no occupied cell");
        shape
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Occupancy at `(row, col)`; false outside the matrix
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Rotate 90° clockwise: reverse the rows, then transpose.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in cells.iter_mut().enumerate().take(self.cols as usize) {
            for (c, cell) in row.iter_mut().enumerate().take(rows) {
                *cell = self.cells[rows - 1 - c][r];
            }
        }
        Self {
            cells,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Occupied cells as `(dx, dy)` offsets in row-major order
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.cells[r][c] {
                    out.push((c as i8, r as i8));
                }
            }
        }
        out
    }

    pub fn mino_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v).count()
    }
}

/// Get the spawn template for a piece kind
pub fn get_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => ShapeMatrix::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => ShapeMatrix::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::J => ShapeMatrix::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => ShapeMatrix::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        PieceKind::S => ShapeMatrix::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => ShapeMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

/// A piece on the board: shape, identity, and origin (top-left of its bounding box)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in its spawn orientation at the spawn origin
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_POSITION.0, SPAWN_POSITION.1)
    }

    /// Create a piece in its spawn orientation at `(x, y)`
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            x,
            y,
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Absolute board coordinates of every occupied cell
    pub fn cells(&self) -> Minos {
        self.shape
            .minos()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

/// Try to rotate a shape clockwise with wall kicks
///
/// `fits(shape, x, y)` decides legality. The rotated shape is tried at the
/// current origin first, then shifted left and right by `1..=n` columns (left
/// before right at each distance), where `n` is the rotated row count.
/// Returns `Some((rotated, dx))` for the first legal placement, `None` when the
/// rotation has to be discarded.
pub fn try_rotate(
    shape: &ShapeMatrix,
    x: i8,
    y: i8,
    fits: impl Fn(&ShapeMatrix, i8, i8) -> bool,
) -> Option<(ShapeMatrix, i8)> {
    let rotated = shape.rotated_cw();

    if fits(&rotated, x, y) {
        return Some((rotated, 0));
    }

    for offset in 1..=rotated.rows() as i8 {
        if fits(&rotated, x - offset, y) {
            return Some((rotated, -offset));
        }
        if fits(&rotated, x + offset, y) {
            return Some((rotated, offset));
        }
    }

    None
}
