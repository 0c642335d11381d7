//! One tick of the game loop, independent of the terminal.
//!
//! The binary measures time and polls input; [`App::step`] applies the
//! drained events in arrival order and then advances the session clock.

use log::{debug, info};

use crate::core::{GameSession, GameSnapshot, SessionConfig, TickOutcome};
use crate::types::InputEvent;

/// What the runner should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// The player asked to quit; stop without the loss message
    Quit,
    /// The run is over; show the loss message, then stop
    Lost,
}

pub struct App {
    session: GameSession,
    last_outcome: TickOutcome,
}

impl App {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_session(GameSession::new(config))
    }

    pub fn with_session(session: GameSession) -> Self {
        Self {
            session,
            last_outcome: TickOutcome::default(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn last_outcome(&self) -> TickOutcome {
        self.last_outcome
    }

    /// Apply `events`, then advance the session by `elapsed_ms`.
    ///
    /// A quit event ends the step immediately; events after it are dropped.
    pub fn step(&mut self, events: impl IntoIterator<Item = InputEvent>, elapsed_ms: u32) -> Control {
        for event in events {
            match event {
                InputEvent::Quit => {
                    info!("quit requested, score {}", self.session.score());
                    return Control::Quit;
                }
                InputEvent::Action(action) => {
                    if !self.session.apply_action(action) {
                        debug!("{} rejected", action.as_str());
                    }
                }
            }
        }

        self.last_outcome = self.session.tick(elapsed_ms);

        if self.session.is_lost() {
            Control::Lost
        } else {
            Control::Continue
        }
    }
}
