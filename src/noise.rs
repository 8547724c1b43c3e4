// noise.rs - Coherent noise driving where rain falls
//
// Seeded Perlin gradient noise. The same seed always yields the same field,
// and nearby inputs yield nearby outputs, so spawn regions drift as blobs.

use ::noise::{NoiseFn, Perlin};

pub struct NoiseField {
    perlin: Perlin,
    seed: u32,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self { perlin: Perlin::new(seed), seed }
    }

    /// Seed from an entropy value in [0, 1), the shape of `Math.random()`
    pub fn from_entropy(value: f64) -> Self {
        Self::new(seed_from_entropy(value))
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample in [-1, 1]
    #[inline]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.perlin.get([x, y, z]).clamp(-1.0, 1.0)
    }
}

pub fn seed_from_entropy(value: f64) -> u32 {
    (value.clamp(0.0, 1.0) * u32::MAX as f64) as u32
}
