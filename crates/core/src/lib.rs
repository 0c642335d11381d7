//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board/piece state machine and nothing else. It has
//! no dependency on terminals, input devices or clocks:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is reachable through plain function calls
//! - **Portable**: the terminal runner is just one possible front end
//!
//! # Module Structure
//!
//! - [`locked`]: the authoritative set of settled cells
//! - [`grid`]: dense 10x20 projection of the locked cells
//! - [`pieces`]: shape matrices, pieces and clockwise rotation with wall kicks
//! - [`catalog`]: the seven tetrominoes and a uniform random draw
//! - [`collision`]: placement legality
//! - [`line_clear`]: full-row removal and stack compaction
//! - [`scoring`]: points and speed-up rule
//! - [`session`]: the spawn / fall / lock state machine
//!
//! # Game Rules
//!
//! - Pieces spawn at (3, 0) and fall one row per fall interval (1000ms at start)
//! - A piece that cannot fall locks in place; full rows are then removed
//! - Each cleared row scores 10 points
//! - Clearing 4 rows with one piece multiplies the fall interval by 0.95
//! - A locked cell in the top row ends the run
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::{GameSession, SessionConfig};
//! use classic_tetris_types::GameAction;
//!
//! let mut session = GameSession::new(SessionConfig::default().with_seed(12345));
//!
//! session.apply_action(GameAction::MoveRight);
//! session.apply_action(GameAction::Rotate);
//! session.tick(16);
//!
//! assert_eq!(session.score(), 0);
//! assert!(!session.is_lost());
//! ```

pub mod catalog;
pub mod collision;
pub mod config;
pub mod grid;
pub mod line_clear;
pub mod locked;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use catalog::{ShapeCatalog, ShapeEntry};
pub use collision::{is_valid_placement, piece_fits};
pub use config::SessionConfig;
pub use grid::Grid;
pub use line_clear::clear_lines;
pub use locked::LockedSet;
pub use pieces::{get_shape, try_rotate, Piece, ShapeMatrix};
pub use rng::SimpleRng;
pub use session::{GameSession, Phase, TickOutcome};
pub use snapshot::{GameSnapshot, PieceSnapshot};
