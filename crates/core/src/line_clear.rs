//! Line clear engine - removes full rows and compacts the stack
//!
//! Full rows are detected on the dense [`Grid`], but the edit happens on the
//! [`LockedSet`]: cleared cells are dropped, and every surviving cell moves
//! down by the number of cleared rows beneath it. Relative order is preserved.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::locked::LockedSet;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Indices of the full rows, bottom to top
pub fn full_rows(grid: &Grid) -> ArrayVec<usize, { BOARD_HEIGHT as usize }> {
    (0..BOARD_HEIGHT as usize)
        .rev()
        .filter(|&y| grid.is_row_full(y))
        .collect()
}

/// Clear every full row and return how many were removed
///
/// `grid` must be the projection of `locked` (see [`Grid::build`]).
pub fn clear_lines(grid: &Grid, locked: &mut LockedSet) -> u32 {
    let cleared = full_rows(grid);
    if cleared.is_empty() {
        return 0;
    }

    for &y in &cleared {
        for x in 0..BOARD_WIDTH as i8 {
            locked.remove_if_present(x, y as i8);
        }
    }

    locked.rebuild(|(x, y), _| {
        let below = cleared.iter().filter(|&&row| row as i8 > y).count() as i8;
        Some((x, y + below))
    });

    cleared.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn fill_row(locked: &mut LockedSet, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            locked.insert(x, y, kind);
        }
    }

    #[test]
    fn no_full_rows_is_a_no_op() {
        let mut locked = LockedSet::new();
        locked.insert(0, 19, PieceKind::I);
        let before = locked.clone();

        assert_eq!(clear_lines(&Grid::build(&locked), &mut locked), 0);
        assert_eq!(locked, before);
    }

    #[test]
    fn clears_bottom_row_and_shifts_everything_above() {
        let mut locked = LockedSet::new();
        fill_row(&mut locked, 19, PieceKind::I);
        locked.insert(2, 18, PieceKind::T);
        locked.insert(7, 10, PieceKind::S);
        locked.insert(0, 0, PieceKind::Z);

        let rows = clear_lines(&Grid::build(&locked), &mut locked);

        assert_eq!(rows, 1);
        assert_eq!(locked.len(), 3);
        assert_eq!(locked.get(2, 19), Some(PieceKind::T));
        assert_eq!(locked.get(7, 11), Some(PieceKind::S));
        assert_eq!(locked.get(0, 1), Some(PieceKind::Z));
    }

    #[test]
    fn cells_between_cleared_rows_drop_by_rows_below_them() {
        let mut locked = LockedSet::new();
        fill_row(&mut locked, 19, PieceKind::I);
        locked.insert(4, 18, PieceKind::J); // between the two full rows
        fill_row(&mut locked, 17, PieceKind::O);
        locked.insert(5, 16, PieceKind::L); // above both

        let rows = clear_lines(&Grid::build(&locked), &mut locked);

        assert_eq!(rows, 2);
        assert_eq!(locked.len(), 2);
        assert_eq!(locked.get(4, 19), Some(PieceKind::J));
        assert_eq!(locked.get(5, 18), Some(PieceKind::L));
    }

    #[test]
    fn four_rows_at_once() {
        let mut locked = LockedSet::new();
        for y in 16..20 {
            fill_row(&mut locked, y, PieceKind::I);
        }
        locked.insert(9, 15, PieceKind::T);

        let rows = clear_lines(&Grid::build(&locked), &mut locked);
        assert_eq!(rows, 4);
        assert_eq!(locked.iter().collect::<Vec<_>>(), vec![((9, 19), PieceKind::T)]);
    }

    #[test]
    fn full_rows_reports_bottom_to_top() {
        let mut locked = LockedSet::new();
        fill_row(&mut locked, 5, PieceKind::I);
        fill_row(&mut locked, 12, PieceKind::I);
        let rows = full_rows(&Grid::build(&locked));
        assert_eq!(rows.as_slice(), &[12, 5]);
    }
}
