//! Coherent noise and the noise-to-height mapping.
//!
//! Tiles sample a 2D simplex field at their scaled axial coordinates. The raw
//! sample in `[-1, 1]` is normalized to `[0, 1]`, raised to an exponent that
//! favours lowland, and scaled to the configured maximum height.

use hexscape_config::Config;
use noise::{NoiseFn, Simplex};

use crate::grid::AxialCoord;

/// A reproducible 2D scalar field with values in `[-1, 1]`.
pub trait NoiseSource {
    /// Sample the field. Must be pure: identical inputs give identical outputs.
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Simplex gradient noise from the `noise` crate.
pub struct SimplexNoise {
    noise: Simplex,
    seed: u32,
}

impl SimplexNoise {
    /// Create a field for the given run seed. Only the low 32 bits are used.
    pub fn new(seed: u64) -> Self {
        let seed = seed as u32;
        Self {
            noise: Simplex::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseSource for SimplexNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.noise.get([x, y])
    }
}

/// A flat field, mostly useful for pinning heights in tests.
#[derive(Clone, Copy, Debug)]
pub struct ConstantNoise(pub f64);

impl NoiseSource for ConstantNoise {
    fn sample(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}

/// Maps noise samples at tile coordinates to column heights.
#[derive(Clone, Debug)]
pub struct HeightSampler {
    /// Multiplier applied to axial coordinates before sampling.
    pub noise_scale: f64,
    /// Exponent applied to the normalized sample.
    pub exponent: f64,
    /// Height of a tile whose sample is `1.0`.
    pub max_height: f32,
}

impl HeightSampler {
    pub fn from_config(config: &Config) -> Self {
        Self {
            noise_scale: config.map.noise_scale,
            exponent: config.map.height_exponent,
            max_height: config.height.max_height,
        }
    }

    /// Map a raw sample to `[0, 1]`, clamping stray values first.
    pub fn normalize(&self, sample: f64) -> f64 {
        debug_assert!(!sample.is_nan(), "noise produced NaN");
        let clamped = sample.clamp(-1.0, 1.0);
        if clamped != sample {
            tracing::trace!(sample, "noise sample outside [-1, 1], clamped");
        }
        ((clamped + 1.0) * 0.5).powf(self.exponent)
    }

    /// Column height for a tile, in `[0, max_height]`.
    pub fn height_at<N: NoiseSource + ?Sized>(&self, noise: &N, coord: AxialCoord) -> f32 {
        let sample = noise.sample(
            coord.col as f64 * self.noise_scale,
            coord.row as f64 * self.noise_scale,
        );
        (self.normalize(sample) * self.max_height as f64) as f32
    }
}
