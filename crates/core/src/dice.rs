//! Randomness seam. The engine draws every random value through `Dice` so tests
//! can script outcomes and replays can reproduce a session from its seed.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub trait Dice {
    /// Uniform integer in `lo..=hi`.
    fn roll(&mut self, lo: i32, hi: i32) -> i32;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index into a non-empty collection of `len` elements.
    fn pick(&mut self, len: usize) -> usize {
        let last = i32::try_from(len.saturating_sub(1)).unwrap_or(i32::MAX);
        usize::try_from(self.roll(0, last)).unwrap_or(0)
    }
}

pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Dice for SeededDice {
    fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (i64::from(hi) - i64::from(lo) + 1) as u64;
        let offset = self.rng.next_u64() % span;
        (i64::from(lo) + offset as i64) as i32
    }

    fn unit(&mut self) -> f64 {
        // 53 random mantissa bits.
        (self.rng.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// Replays queued values. Integer draws are clamped into the requested range;
/// an empty queue yields the lower bound, or `fallback_unit` for unit draws.
pub struct ScriptedDice {
    rolls: VecDeque<i32>,
    units: VecDeque<f64>,
    fallback_unit: f64,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self { rolls: VecDeque::new(), units: VecDeque::new(), fallback_unit: 0.99 }
    }

    pub fn rolls(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.rolls.extend(values);
        self
    }

    pub fn units(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(values);
        self
    }

    pub fn fallback_unit(mut self, value: f64) -> Self {
        self.fallback_unit = value;
        self
    }
}

impl Default for ScriptedDice {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        match self.rolls.pop_front() {
            Some(value) => value.clamp(lo, hi.max(lo)),
            None => lo,
        }
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(self.fallback_unit)
    }
}
