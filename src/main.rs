//! Terminal Tetris runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::info;

use classic_tetris::app::{App, Control};
use classic_tetris::config::AppConfig;
use classic_tetris::input::{drain_events, CrosstermPoller};
use classic_tetris::logging;
use classic_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use classic_tetris::types::LOST_MESSAGE_MS;

fn main() -> Result<()> {
    logging::init(logging::log_path_from_env().as_deref())?;
    let config = AppConfig::from_env();
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut app = App::new(config.session());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut poller = CrosstermPoller;
    let mut events = Vec::new();

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Input, waiting at most until the next tick is due.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        events.clear();
        drain_events(&mut poller, timeout, &mut events)?;

        // Carry sub-millisecond remainders into the next tick.
        let elapsed_ms = u32::try_from(last_tick.elapsed().as_millis()).unwrap_or(u32::MAX);
        last_tick += Duration::from_millis(elapsed_ms as u64);

        let control = app.step(events.drain(..), elapsed_ms);
        if control == Control::Quit {
            return Ok(());
        }

        // Render.
        let (w, h) = term.size();
        view.render_into(&app.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if control == Control::Lost {
            thread::sleep(Duration::from_millis(LOST_MESSAGE_MS));
            return Ok(());
        }
    }
}
