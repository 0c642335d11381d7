//! Game session module - the spawn / fall / lock state machine
//!
//! This module ties together all core components: locked cells, pieces, the
//! shape catalog, collision rules and line clears. It owns every piece of
//! mutable game state and only changes it from [`GameSession::tick`] and
//! [`GameSession::apply_action`].

use log::{debug, info};

use crate::catalog::ShapeCatalog;
use crate::collision::{is_valid_placement, piece_fits};
use crate::config::SessionConfig;
use crate::grid::Grid;
use crate::line_clear::clear_lines;
use crate::locked::LockedSet;
use crate::pieces::{try_rotate, Piece};
use crate::scoring::{line_clear_score, next_fall_interval, triggers_speed_up};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Where the session is in its spawn / fall / lock cycle
///
/// `Spawning` and `Locking` are transient: they are entered and left within
/// a single call, so callers only ever observe `Falling` or `Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    Lost,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Gravity moved the piece down one row
    pub fell: bool,
    /// The piece could not descend and was locked
    pub locked: bool,
    /// Rows removed by that lock
    pub rows_cleared: u32,
    /// The run ended during this tick
    pub lost: bool,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    catalog: ShapeCatalog,
    locked: LockedSet,
    current: Option<Piece>,
    next: Piece,
    phase: Phase,
    score: u32,
    fall_interval_ms: f64,
    drop_timer_ms: u32,
    lines_cleared: u32,
    pieces_locked: u32,
}

impl GameSession {
    /// Create a session and spawn its first piece
    pub fn new(config: SessionConfig) -> Self {
        let mut catalog = ShapeCatalog::new(config.seed);
        let next = catalog.draw();

        let mut session = Self {
            catalog,
            locked: LockedSet::new(),
            current: None,
            next,
            phase: Phase::Spawning,
            score: 0,
            fall_interval_ms: config.fall_interval_ms,
            drop_timer_ms: 0,
            lines_cleared: 0,
            pieces_locked: 0,
        };
        session.spawn_piece();
        session
    }

    /// Build a session around an existing board and falling piece.
    ///
    /// Later pieces still come from a catalog seeded with `config.seed`.
    /// The session starts out lost when `current` does not fit or a locked
    /// cell already sits in the loss zone.
    pub fn from_parts(
        config: SessionConfig,
        locked: LockedSet,
        current: Piece,
        next: PieceKind,
    ) -> Self {
        let mut session = Self {
            catalog: ShapeCatalog::new(config.seed),
            locked,
            current: Some(current),
            next: Piece::new(next),
            phase: Phase::Falling,
            score: 0,
            fall_interval_ms: config.fall_interval_ms,
            drop_timer_ms: 0,
            lines_cleared: 0,
            pieces_locked: 0,
        };
        if !piece_fits(&current, &session.grid()) || session.locked.any_above(LOSS_ROW_LIMIT) {
            session.phase = Phase::Lost;
            session.current = None;
        }
        session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_lost(&self) -> bool {
        self.phase == Phase::Lost
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn fall_interval_ms(&self) -> f64 {
        self.fall_interval_ms
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn locked(&self) -> &LockedSet {
        &self.locked
    }

    /// Dense projection of the locked cells
    pub fn grid(&self) -> Grid {
        Grid::build(&self.locked)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: *self.grid().rows(),
            current: self.current.map(Into::into),
            next: self.next.into(),
            score: self.score,
            lines: self.lines_cleared,
            fall_interval_ms: self.fall_interval_ms,
            lost: self.is_lost(),
        }
    }

    /// Promote the queued piece and draw a new one
    fn spawn_piece(&mut self) {
        self.phase = Phase::Spawning;

        let piece = self.next;
        self.next = self.catalog.draw();

        if !piece_fits(&piece, &self.grid()) {
            info!("spawn of {} blocked, run lost", piece.kind.as_str());
            self.current = None;
            self.phase = Phase::Lost;
            return;
        }

        debug!(
            "spawned {} at ({}, {}), next {}",
            piece.kind.as_str(),
            piece.x,
            piece.y,
            self.next.kind.as_str()
        );
        self.current = Some(piece);
        self.phase = Phase::Falling;
    }

    /// Try to move the falling piece by one offset
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        if !is_valid_placement(&piece.shape, piece.x + dx, piece.y + dy, &self.grid()) {
            return false;
        }

        self.current = Some(Piece {
            x: piece.x + dx,
            y: piece.y + dy,
            ..piece
        });
        true
    }

    /// Rotate the falling piece clockwise with wall-kick recovery
    ///
    /// On failure the piece keeps its pre-rotation shape and origin.
    pub fn try_rotate(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        let grid = self.grid();
        let result = try_rotate(&piece.shape, piece.x, piece.y, |shape, x, y| {
            is_valid_placement(shape, x, y, &grid)
        });

        match result {
            Some((shape, dx)) => {
                self.current = Some(Piece {
                    shape,
                    x: piece.x + dx,
                    ..piece
                });
                true
            }
            None => {
                debug!(
                    "rotation of {} at ({}, {}) discarded",
                    piece.kind.as_str(),
                    piece.x,
                    piece.y
                );
                false
            }
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Main game tick - advance the fall timer and apply gravity
    pub fn tick(&mut self, elapsed_ms: u32) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.phase != Phase::Falling {
            return outcome;
        }
        let Some(piece) = self.current else {
            return outcome;
        };

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if (self.drop_timer_ms as f64) < self.fall_interval_ms {
            return outcome;
        }
        self.drop_timer_ms = 0;

        let target_y = piece.y + 1;
        if is_valid_placement(&piece.shape, piece.x, target_y, &self.grid()) {
            self.current = Some(Piece {
                y: target_y,
                ..piece
            });
            outcome.fell = true;
        } else if target_y > 0 {
            outcome.locked = true;
            outcome.rows_cleared = self.lock_piece();
            outcome.lost = self.is_lost();
        }

        outcome
    }

    /// Settle the falling piece, clear rows, score, then spawn or lose
    fn lock_piece(&mut self) -> u32 {
        let Some(piece) = self.current.take() else {
            return 0;
        };
        self.phase = Phase::Locking;

        for (x, y) in piece.cells() {
            self.locked.insert(x, y, piece.kind);
        }
        self.pieces_locked += 1;
        debug!(
            "locked {} at ({}, {})",
            piece.kind.as_str(),
            piece.x,
            piece.y
        );

        let rows = clear_lines(&self.grid(), &mut self.locked);
        if rows > 0 {
            self.lines_cleared += rows;
            self.score += line_clear_score(rows);
            info!("cleared {} row(s), score {}", rows, self.score);
        }
        if triggers_speed_up(rows) {
            self.fall_interval_ms = next_fall_interval(self.fall_interval_ms, rows);
            info!("speed up, fall interval {:.1}ms", self.fall_interval_ms);
        }

        if self.locked.any_above(LOSS_ROW_LIMIT) {
            info!(
                "stack reached the top, run lost with score {}",
                self.score
            );
            self.phase = Phase::Lost;
            return rows;
        }

        self.spawn_piece();
        rows
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
