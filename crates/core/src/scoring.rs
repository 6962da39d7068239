//! Scoring module - reward and level-speed tables
//!
//! Line clears pay a fixed reward keyed by the exact number of rows removed;
//! there is no level multiplier. Drop rewards belong to the session driver but
//! are computed here so both tables live together.

use crate::types::{
    LEVEL_INTERVALS_MS, REWARD_DOUBLE, REWARD_HARD_DROP, REWARD_SINGLE, REWARD_SOFT_DROP,
    REWARD_TETRIS, REWARD_TRIPLE,
};

/// Points for clearing `lines` rows with a single lock.
///
/// Only 1 to 4 pay out; anything else is worth nothing.
pub fn calculate_score(lines: usize) -> u32 {
    match lines {
        1 => REWARD_SINGLE,
        2 => REWARD_DOUBLE,
        3 => REWARD_TRIPLE,
        4 => REWARD_TETRIS,
        _ => 0,
    }
}

/// Drop reward
/// soft drop: +1 per step
/// hard drop: +2 per row
pub fn drop_reward(rows: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        rows * REWARD_HARD_DROP
    } else {
        rows * REWARD_SOFT_DROP
    }
}

/// Fall interval for a level (in milliseconds)
/// Levels past the end of the table keep the fastest interval
pub fn fall_interval_ms(level: u32) -> u32 {
    let last = LEVEL_INTERVALS_MS[LEVEL_INTERVALS_MS.len() - 1];
    LEVEL_INTERVALS_MS
        .get(level as usize)
        .copied()
        .unwrap_or(last)
}
