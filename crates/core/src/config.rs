//! Session configuration passed into [`GameSession::new`].
//!
//! [`GameSession::new`]: crate::session::GameSession::new

use crate::types::INITIAL_FALL_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Gravity interval at the start of the run, in milliseconds
    pub fall_interval_ms: f64,
    /// Seed for the shape catalog's random draw
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fall_interval_ms: INITIAL_FALL_INTERVAL_MS,
            seed: 1,
        }
    }
}

impl SessionConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_fall_interval_ms(mut self, ms: f64) -> Self {
        self.fall_interval_ms = ms;
        self
    }
}
