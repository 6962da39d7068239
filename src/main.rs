//! Terminal falling-block game (default binary).
//!
//! crossterm for input, a tile screen renderer for output, and a fixed
//! frame loop that feeds elapsed time into the session.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::RunConfig;
use blockfall::core::{RandomTypes, SurfaceConfig};
use blockfall::engine::{Session, SessionStatus};
use blockfall::input::{map_key, should_quit};
use blockfall::term::{Canvas, Frame, GameView, Labels, Screen, TerminalRenderer, Viewport};
use blockfall::types::{ProgressField, FRAME_MS};

fn main() -> Result<()> {
    let config = RunConfig::parse();

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up the terminal")?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let labels = result?;
    eprintln!(
        "[blockfall] final score {} (level {}, {} lines toward next)",
        labels.get(ProgressField::Score),
        labels.get(ProgressField::Level),
        labels.get(ProgressField::Lines),
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<Labels> {
    let source = match config.seed {
        Some(seed) => RandomTypes::seeded(seed),
        None => RandomTypes::from_entropy(),
    };
    let mut session = Session::new(source, Labels::default());

    let mut board_canvas = Canvas::default();
    session.board().initialize(&mut board_canvas);
    let mut preview_canvas = Canvas::with_config(SurfaceConfig::PREVIEW);

    let view = GameView::default();
    let mut screen = Screen::default();

    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        session.render(&mut board_canvas, &mut preview_canvas);
        let message = match session.status() {
            SessionStatus::Running => None,
            SessionStatus::Paused => Some("PAUSED"),
            SessionStatus::Over => Some("GAME OVER"),
        };
        let frame = Frame {
            board: &board_canvas,
            preview: &preview_canvas,
            labels: session.progress().reporter(),
            message,
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&frame, Viewport::new(w, h), &mut screen);
        term.present(&mut screen).context("failed to draw frame")?;

        // Input with timeout until next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout).context("failed to poll input")? {
            match event::read().context("failed to read input")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(*session.progress().reporter());
                    }
                    if let Some(input) = map_key(key) {
                        session.handle(input);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame_duration {
            last_frame = Instant::now();
            session.advance(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
