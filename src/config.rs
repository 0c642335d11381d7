//! Runner configuration read from the environment.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use crate::core::SessionConfig;
use crate::types::{INITIAL_FALL_INTERVAL_MS, TICK_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub seed: u32,
    pub fall_interval_ms: f64,
    pub tick_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            fall_interval_ms: INITIAL_FALL_INTERVAL_MS,
            tick_ms: TICK_MS,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    ///
    /// - `TETRIS_SEED`: piece sequence seed (default: clock-derived)
    /// - `TETRIS_FALL_MS`: initial fall interval in ms (default 1000)
    /// - `TETRIS_TICK_MS`: frame interval in ms (default 16)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = parse_var(&lookup, "TETRIS_SEED", |v: &u32| *v != 0).unwrap_or_else(clock_seed);

        let fall_interval_ms = parse_var(&lookup, "TETRIS_FALL_MS", |v: &f64| {
            v.is_finite() && *v > 0.0
        })
        .unwrap_or(INITIAL_FALL_INTERVAL_MS);

        let tick_ms = parse_var(&lookup, "TETRIS_TICK_MS", |v: &u32| *v > 0).unwrap_or(TICK_MS);

        Self {
            seed,
            fall_interval_ms,
            tick_ms,
        }
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig::default()
            .with_seed(self.seed)
            .with_fall_interval_ms(self.fall_interval_ms)
    }
}

/// Parse an optional variable; malformed or rejected values are logged and ignored.
fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    accept: impl Fn(&T) -> bool,
) -> Option<T> {
    let raw = lookup(key)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<T>() {
        Ok(v) if accept(&v) => Some(v),
        _ => {
            warn!("ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("TETRIS_SEED", "42"),
            ("TETRIS_FALL_MS", "500"),
            ("TETRIS_TICK_MS", "10"),
        ]));
        assert_eq!(
            cfg,
            AppConfig {
                seed: 42,
                fall_interval_ms: 500.0,
                tick_ms: 10,
            }
        );
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("TETRIS_SEED", "7"),
            ("TETRIS_FALL_MS", "-3"),
            ("TETRIS_TICK_MS", "fast"),
        ]));
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.fall_interval_ms, INITIAL_FALL_INTERVAL_MS);
        assert_eq!(cfg.tick_ms, TICK_MS);
    }

    #[test]
    fn session_config_carries_seed_and_interval() {
        let cfg = AppConfig {
            seed: 9,
            fall_interval_ms: 700.0,
            tick_ms: 16,
        };
        let session = cfg.session();
        assert_eq!(session.seed, 9);
        assert_eq!(session.fall_interval_ms, 700.0);
    }
}
