//! Per-tick event draining.
//!
//! The runner asks for input once per tick. Everything already queued by the
//! terminal is returned in arrival order; the call only blocks for the first
//! event, up to `timeout`.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::to_input_event;
use crate::types::InputEvent;

/// Source of raw terminal events
///
/// Implemented for the real terminal by [`CrosstermPoller`]; tests feed a
/// scripted queue instead.
pub trait EventPoller {
    fn poll(&mut self, timeout: Duration) -> Result<bool>;
    fn read(&mut self) -> Result<Event>;
}

/// Reads events from the process terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermPoller;

impl EventPoller for CrosstermPoller {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// Drain pending key presses into `out`.
///
/// Waits at most `timeout` for the first event, then takes whatever else is
/// already queued without waiting. Key releases and terminal auto-repeat are
/// ignored so one press is one move.
pub fn drain_events(
    poller: &mut impl EventPoller,
    timeout: Duration,
    out: &mut Vec<InputEvent>,
) -> Result<()> {
    let mut wait = timeout;
    while poller.poll(wait)? {
        wait = Duration::ZERO;
        if let Event::Key(key) = poller.read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(ev) = to_input_event(key) {
                out.push(ev);
            }
        }
    }
    Ok(())
}
