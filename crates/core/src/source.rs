//! Piece type sources
//!
//! The board asks a [`TypeSource`] for the kind of every piece it spawns.
//! [`RandomTypes`] draws uniformly over the seven kinds; [`Sequence`] replays a
//! fixed list, which keeps tests and benchmarks deterministic.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Supplies the kind of each newly created piece.
pub trait TypeSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<F: FnMut() -> PieceKind> TypeSource for F {
    fn next_kind(&mut self) -> PieceKind {
        self()
    }
}

/// Uniform random kinds backed by a small fast RNG.
#[derive(Debug, Clone)]
pub struct RandomTypes {
    rng: SmallRng,
}

impl RandomTypes {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Same seed, same piece sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TypeSource for RandomTypes {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// Cycles through a fixed list of kinds.
#[derive(Debug, Clone)]
pub struct Sequence {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl Sequence {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let kinds: Vec<PieceKind> = kinds.into_iter().collect();
        assert!(!kinds.is_empty(), "Sequence needs at least one piece kind");
        Self { kinds, pos: 0 }
    }
}

impl TypeSource for Sequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.pos];
        self.pos = (self.pos + 1) % self.kinds.len();
        kind
    }
}
