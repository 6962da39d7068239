//! Player progress - score, level and cleared-line counter
//!
//! [`Progress`] is the single update channel for these values. Every change is
//! pushed to the injected [`ProgressReporter`] right away, one field at a time,
//! so a UI label can mirror each value as it moves.

use crate::scoring::fall_interval_ms;
use crate::types::{ProgressField, LINES_PER_LEVEL};

/// Observer for progress changes.
///
/// `value` is always the new absolute value of `field`, never a delta.
pub trait ProgressReporter {
    fn report_progress(&mut self, field: ProgressField, value: u32);
}

impl<R: ProgressReporter + ?Sized> ProgressReporter for &mut R {
    fn report_progress(&mut self, field: ProgressField, value: u32) {
        (**self).report_progress(field, value);
    }
}

/// Reporter that drops every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn report_progress(&mut self, _field: ProgressField, _value: u32) {}
}

/// Emitted when enough lines were cleared to reach a new level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub fall_interval_ms: u32,
}

/// Score, level and the line counter towards the next level.
#[derive(Debug, Clone)]
pub struct Progress<R> {
    score: u32,
    level: u32,
    /// Lines cleared since the last level-up.
    lines: u32,
    reporter: R,
}

impl<R: ProgressReporter> Progress<R> {
    pub fn new(reporter: R) -> Self {
        Self {
            score: 0,
            level: 0,
            lines: 0,
            reporter,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current value of a named field
    pub fn get(&self, field: ProgressField) -> u32 {
        match field {
            ProgressField::Score => self.score,
            ProgressField::Level => self.level,
            ProgressField::Lines => self.lines,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Zero every field and report all three.
    pub fn reset(&mut self) {
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        for field in ProgressField::ALL {
            self.reporter.report_progress(field, 0);
        }
    }

    pub fn add_score(&mut self, points: u32) {
        if points == 0 {
            return;
        }
        self.score = self.score.saturating_add(points);
        self.reporter
            .report_progress(ProgressField::Score, self.score);
    }

    /// Count cleared lines and advance the level once the threshold is reached.
    ///
    /// The threshold is subtracted rather than the counter zeroed, so surplus
    /// lines carry over into the next level.
    pub fn add_lines(&mut self, lines: u32) -> Option<LevelUp> {
        if lines == 0 {
            return None;
        }
        self.lines += lines;
        self.reporter
            .report_progress(ProgressField::Lines, self.lines);

        if self.lines < LINES_PER_LEVEL {
            return None;
        }

        self.level += 1;
        self.reporter
            .report_progress(ProgressField::Level, self.level);
        self.lines -= LINES_PER_LEVEL;
        self.reporter
            .report_progress(ProgressField::Lines, self.lines);

        Some(LevelUp {
            level: self.level,
            fall_interval_ms: fall_interval_ms(self.level),
        })
    }
}

impl Default for Progress<NullReporter> {
    fn default() -> Self {
        Self::new(NullReporter)
    }
}
