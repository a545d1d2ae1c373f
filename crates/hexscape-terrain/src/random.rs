//! Injected randomness for decoration and cloud placement.
//!
//! Generation never reaches for an ambient RNG: every draw goes through a
//! [`RandomSource`] handed in by the caller, so a seeded or scripted source
//! replays a run exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A stream of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Uniform draw in `[min, max)`.
    fn range(&mut self, (min, max): (f32, f32)) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Consumes one draw and reports whether it lands in the top `probability`
    /// of the unit interval. A probability of 1 always fires, 0 never does.
    fn chance(&mut self, probability: f32) -> bool {
        self.next_f32() >= 1.0 - probability
    }
}

/// ChaCha8-backed source: identical seeds give identical streams on every
/// platform and build.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f32(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// An empty script yields `0.0` forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always returns `value`.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// A fresh seed for runs that did not configure one.
pub fn fresh_seed() -> u64 {
    rand::random()
}

/// Derive an independent seed for one consumer (`stream`) of a run seed.
///
/// FNV-1a over the stream name, folded into the seed through a splitmix64
/// finalizer. Both are fixed functions, so a seed replays the same map on any
/// build; neighbouring run seeds still land far apart.
pub fn derive_seed(seed: u64, stream: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let name = stream
        .bytes()
        .fold(FNV_OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
    splitmix64(seed ^ name)
}

fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_deterministic() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_f32(), b.next_f32(), "Same seed must replay same draws");
        }
    }

    #[test]
    fn test_seeded_random_in_unit_interval() {
        let mut rng = SeededRandom::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v), "draw {v} outside [0, 1)");
        }
    }

    #[test]
    fn test_scripted_random_cycles() {
        let mut rng = ScriptedRandom::new(vec![0.1, 0.2]);
        assert_eq!(rng.next_f32(), 0.1);
        assert_eq!(rng.next_f32(), 0.2);
        assert_eq!(rng.next_f32(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_empty_script_yields_zero() {
        let mut rng = ScriptedRandom::default();
        assert_eq!(rng.next_f32(), 0.0);
    }

    #[test]
    fn test_range_maps_draw() {
        let mut rng = ScriptedRandom::constant(0.5);
        assert!((rng.range((1.25, 2.25)) - 1.75).abs() < 1e-6);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = ScriptedRandom::new(vec![0.0, 0.999]);
        assert!(rng.chance(1.0), "certain chance must fire on a zero draw");
        assert!(!rng.chance(0.0), "zero chance must never fire");
    }

    #[test]
    fn test_chance_threshold() {
        let mut rng = ScriptedRandom::new(vec![0.85, 0.5]);
        assert!(rng.chance(0.2));
        assert!(!rng.chance(0.2));
    }

    #[test]
    fn test_derive_seed_streams_differ() {
        assert_eq!(derive_seed(1, "decoration"), derive_seed(1, "decoration"));
        assert_ne!(derive_seed(1, "decoration"), derive_seed(1, "clouds"));
        assert_ne!(derive_seed(1, "decoration"), derive_seed(2, "decoration"));
    }

    #[test]
    fn test_derive_seed_is_fixed_across_builds() {
        // Pinned values: a change here breaks replay of saved seeds.
        assert_eq!(splitmix64(0), 0xe220_a839_7b1d_cdaf);
        assert_eq!(derive_seed(42, "decoration"), 0xdf00_9e29_72f2_c13b);
    }
}
