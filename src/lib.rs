//! Classic Tetris (workspace facade crate).
//!
//! Re-exports the member crates under `classic_tetris::{core,input,term,types}`
//! and hosts the pieces shared by the binary and the integration tests:
//! environment configuration, logging setup and the per-tick [`app::App`] step.

pub mod app;
pub mod config;
pub mod logging;

pub use classic_tetris_core as core;
pub use classic_tetris_input as input;
pub use classic_tetris_term as term;
pub use classic_tetris_types as types;
