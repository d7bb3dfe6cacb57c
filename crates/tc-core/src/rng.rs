//! Random sources for zone generation and disruption events.
//!
//! Every random draw in the engine goes through a [`RandomSource`] passed
//! in by the caller.  Nothing reads thread-local or global randomness, so a
//! seeded [`WorldRng`] reproduces a build exactly, and tests can substitute
//! a scripted source to force specific zones or disruptions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// The two primitive draws the engine needs.
pub trait RandomSource {
    /// Uniform `f64` in `[lo, hi)`.  Returns `lo` when `hi <= lo`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// Uniform index in `0..n`.  `n` must be non-zero.
    fn index(&mut self, n: usize) -> usize;
}

// ── WorldRng ──────────────────────────────────────────────────────────────────

/// Build-level RNG backed by `SmallRng`.
///
/// Single-threaded use only.  One instance is threaded through zone
/// generation and all three build phases.
pub struct WorldRng(SmallRng);

impl WorldRng {
    /// Deterministic source: the same seed always yields the same build.
    pub fn new(seed: u64) -> Self {
        WorldRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-reproducible source seeded from the OS.
    pub fn from_entropy() -> Self {
        WorldRng(SmallRng::from_entropy())
    }

    /// Derive a child source with a different seed offset.
    pub fn child(&mut self, offset: u64) -> WorldRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        WorldRng(SmallRng::seed_from_u64(child_seed))
    }
}

impl RandomSource for WorldRng {
    #[inline]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if hi > lo { self.0.gen_range(lo..hi) } else { lo }
    }

    #[inline]
    fn index(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }
}

// ── ReplayRng ─────────────────────────────────────────────────────────────────

/// Replays a fixed sequence of unit-interval draws, cycling when exhausted.
///
/// Each draw `u` becomes `lo + u · (hi − lo)` for [`uniform`] and
/// `⌊u · n⌋` for [`index`].  Lets tests force exact zone sets and
/// disruption outcomes without depending on a PRNG's output stream.
///
/// [`uniform`]: RandomSource::uniform
/// [`index`]: RandomSource::index
#[derive(Clone, Debug)]
pub struct ReplayRng {
    draws: Vec<f64>,
    pos:   usize,
}

impl ReplayRng {
    /// Draws are clamped into `[0, 1)`.  An empty sequence replays `0.0`.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let mut draws: Vec<f64> = draws.into();
        if draws.is_empty() {
            draws.push(0.0);
        }
        for d in &mut draws {
            *d = d.clamp(0.0, 1.0 - f64::EPSILON);
        }
        Self { draws, pos: 0 }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    fn next_unit(&mut self) -> f64 {
        let u = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        u
    }
}

impl RandomSource for ReplayRng {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let u = self.next_unit();
        if hi > lo { lo + u * (hi - lo) } else { lo }
    }

    fn index(&mut self, n: usize) -> usize {
        let u = self.next_unit();
        ((u * n as f64) as usize).min(n.saturating_sub(1))
    }
}
