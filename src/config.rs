//! Run configuration for the `blockfall` binary.
//!
//! Sources, highest priority first: command-line flags, the
//! `BLOCKFALL_SEED` environment variable, defaults.

use clap::Parser;

/// Environment variable holding a piece sequence seed.
pub const SEED_ENV: &str = "BLOCKFALL_SEED";

/// Terminal falling-block puzzle game.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "blockfall", version)]
pub struct RunConfig {
    /// Fixed seed for a reproducible piece sequence; entropy when omitted
    #[arg(long, env = SEED_ENV)]
    pub seed: Option<u64>,
}
