//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Game state is
//! drawn into a plain framebuffer by the pure [`GameView`], and
//! [`TerminalRenderer`] flushes framebuffers to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure so layouts can be asserted in tests
//! - Compensate for glyph aspect ratio (2 chars wide per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, LOST_TEXT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
