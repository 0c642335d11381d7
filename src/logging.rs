//! Logging setup.
//!
//! The game owns the terminal (raw mode, alternate screen), so log records go
//! to a file instead of stderr. Without `TETRIS_LOG_PATH` logging stays off.

use std::env;
use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Log file requested through `TETRIS_LOG_PATH`, if any
pub fn log_path_from_env() -> Option<String> {
    log_path_from_lookup(|key| env::var(key).ok())
}

/// Same as [`log_path_from_env`] with an injectable variable source.
pub fn log_path_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup("TETRIS_LOG_PATH")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Install the global logger writing to `path` (appending).
///
/// `RUST_LOG` picks the filter; the default is `info`.
pub fn init(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("installing logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn log_path_ignores_blank_values() {
        assert_eq!(log_path_from_lookup(|_| None), None);
        assert_eq!(log_path_from_lookup(|_| Some("   ".into())), None);
        assert_eq!(
            log_path_from_lookup(|_| Some(" /tmp/tetris.log ".into())),
            Some("/tmp/tetris.log".to_string())
        );
    }

    #[test]
    fn no_path_leaves_logging_off() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn unopenable_path_is_an_error() {
        let path = env::temp_dir().join("classic-tetris-missing-dir").join("x").join("game.log");
        let err = init(path.to_str()).unwrap_err();
        assert!(err.to_string().contains("opening log file"));
    }

    // The only test in this binary that installs the global logger.
    #[test]
    fn records_are_written_to_the_file() {
        let path = env::temp_dir().join(format!("classic-tetris-{}.log", std::process::id()));
        let _ = fs::remove_file(&path);

        init(path.to_str()).unwrap();
        log::warn!("board full at row 0");
        log::logger().flush();

        let contents = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert!(contents.contains("board full at row 0"), "log file: {contents:?}");
        assert!(contents.contains("WARN"));
    }
}
