//! Session - the game loop around a board
//!
//! The session owns everything the board deliberately does not: the player's
//! progress, the fall timer, the pause/over state, and the rewards that come
//! from input rather than from line clears.

use crate::core::{
    drop_reward, fall_interval_ms, Board, Progress, ProgressReporter, RandomTypes, RenderSink,
    TickOutcome, TypeSource,
};
use crate::types::{Command, Input};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Paused,
    Over,
}

/// One game from start to game over, restartable.
#[derive(Debug, Clone)]
pub struct Session<R, S = RandomTypes> {
    board: Board<S>,
    progress: Progress<R>,
    status: SessionStatus,
    fall_interval_ms: u32,
    /// Time accumulated since the last gravity step.
    elapsed_ms: u32,
}

impl<R: ProgressReporter, S: TypeSource> Session<R, S> {
    /// Start a game: fresh board, zeroed progress, level 0 speed.
    pub fn new(source: S, reporter: R) -> Self {
        let mut progress = Progress::new(reporter);
        progress.reset();
        Self {
            board: Board::new(source),
            progress,
            status: SessionStatus::Running,
            fall_interval_ms: fall_interval_ms(0),
            elapsed_ms: 0,
        }
    }

    pub fn board(&self) -> &Board<S> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<S> {
        &mut self.board
    }

    pub fn progress(&self) -> &Progress<R> {
        &self.progress
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Current gravity interval in milliseconds
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Throw the current game away and start over.
    pub fn restart(&mut self) {
        self.board.reset();
        self.progress.reset();
        self.fall_interval_ms = fall_interval_ms(0);
        self.elapsed_ms = 0;
        self.status = SessionStatus::Running;
    }

    /// Apply one input. Returns whether anything changed.
    pub fn handle(&mut self, input: Input) -> bool {
        match input {
            Input::Move(command) => self.apply_command(command),
            Input::TogglePause => match self.status {
                SessionStatus::Running => {
                    self.status = SessionStatus::Paused;
                    true
                }
                SessionStatus::Paused => {
                    self.status = SessionStatus::Running;
                    true
                }
                SessionStatus::Over => false,
            },
            Input::Finish => {
                if self.status == SessionStatus::Over {
                    return false;
                }
                self.status = SessionStatus::Over;
                true
            }
            Input::Restart => {
                self.restart();
                true
            }
        }
    }

    fn apply_command(&mut self, command: Command) -> bool {
        if !self.is_running() {
            return false;
        }
        match command {
            Command::HardDrop => {
                let rows = self.board.hard_drop();
                self.progress.add_score(drop_reward(rows, true));
                rows > 0
            }
            Command::Down => {
                let moved = self.board.apply_move(command).moved();
                if moved {
                    self.progress.add_score(drop_reward(1, false));
                }
                moved
            }
            Command::Left | Command::Right | Command::Rotate => {
                self.board.apply_move(command).moved()
            }
        }
    }

    /// Feed elapsed wall time; runs a gravity step once the accumulated time
    /// exceeds the fall interval.
    ///
    /// Returns the tick outcome when a step ran. Does nothing unless running.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<TickOutcome> {
        if !self.is_running() {
            return None;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms <= self.fall_interval_ms {
            return None;
        }
        self.elapsed_ms = 0;
        Some(self.tick())
    }

    /// Run one gravity step right away.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.board.tick(&mut self.progress);
        if let Some(level_up) = outcome.line_clear().and_then(|clear| clear.level_up) {
            self.fall_interval_ms = level_up.fall_interval_ms;
        }
        if outcome.is_game_over() {
            self.status = SessionStatus::Over;
        }
        outcome
    }

    /// Repaint the playfield and the preview.
    pub fn render(&self, board_sink: &mut impl RenderSink, preview_sink: &mut impl RenderSink) {
        board_sink.clear();
        self.board.draw(board_sink);
        self.board.draw_preview(preview_sink);
    }
}
