//! Progress labels: the terminal counterpart of the score/level/lines text.

use crate::core::ProgressReporter;
use crate::types::ProgressField;

/// Latest reported value of each progress field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Labels {
    score: u32,
    level: u32,
    lines: u32,
}

impl Labels {
    pub fn get(&self, field: ProgressField) -> u32 {
        match field {
            ProgressField::Score => self.score,
            ProgressField::Level => self.level,
            ProgressField::Lines => self.lines,
        }
    }
}

impl ProgressReporter for Labels {
    fn report_progress(&mut self, field: ProgressField, value: u32) {
        match field {
            ProgressField::Score => self.score = value,
            ProgressField::Level => self.level = value,
            ProgressField::Lines => self.lines = value,
        }
    }
}
