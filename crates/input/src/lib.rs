//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`]s and drains
//! the pending ones once per tick.

pub mod events;
pub mod map;

pub use classic_tetris_types as types;

pub use events::{drain_events, CrosstermPoller, EventPoller};
pub use map::{handle_key_event, should_quit, to_input_event};
