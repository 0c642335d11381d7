//! Scoring module - points per cleared row and the speed-up rule

use crate::types::{POINTS_PER_ROW, SPEED_UP_FACTOR, SPEED_UP_MIN_ROWS};

/// Points for a lock-in that cleared `rows` rows
pub fn line_clear_score(rows: u32) -> u32 {
    rows * POINTS_PER_ROW
}

/// Whether a lock-in clearing `rows` rows speeds the game up
pub fn triggers_speed_up(rows: u32) -> bool {
    rows >= SPEED_UP_MIN_ROWS
}

/// Fall interval after a lock-in that cleared `rows` rows
///
/// Never larger than `interval_ms`.
pub fn next_fall_interval(interval_ms: f64, rows: u32) -> f64 {
    if triggers_speed_up(rows) {
        interval_ms * SPEED_UP_FACTOR
    } else {
        interval_ms
    }
}
