//! Gaussian noise sources for frontier scoring.
//!
//! The scorer draws one sample per scored frontier through the
//! [`NoiseSource`] trait, so tests can plug in [`ZeroNoise`] or a fixed
//! sequence while deployments use a seeded [`GaussianNoise`].

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::StandardNormal;

/// Produces zero-mean Gaussian samples.
pub trait NoiseSource {
    /// Next sample.
    fn next_gaussian(&mut self) -> f32;
}

/// Zero-mean Gaussian noise with configurable seed for reproducibility
#[derive(Clone, Debug)]
pub struct GaussianNoise {
    rng: SmallRng,
    std_dev: f32,
}

impl GaussianNoise {
    /// Create a new noise generator
    ///
    /// If seed is 0, uses random entropy for non-deterministic behavior.
    /// Otherwise, uses the provided seed for reproducible results.
    pub fn new(std_dev: f32, seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng, std_dev }
    }

    /// Standard deviation of the generated samples
    pub fn std_dev(&self) -> f32 {
        self.std_dev
    }
}

impl NoiseSource for GaussianNoise {
    #[inline]
    fn next_gaussian(&mut self) -> f32 {
        if self.std_dev == 0.0 {
            return 0.0;
        }
        let n: f32 = self.rng.sample(StandardNormal);
        n * self.std_dev
    }
}

/// Always returns 0.0.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    #[inline]
    fn next_gaussian(&mut self) -> f32 {
        0.0
    }
}

impl<F: FnMut() -> f32> NoiseSource for F {
    #[inline]
    fn next_gaussian(&mut self) -> f32 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_seed() {
        let mut noise1 = GaussianNoise::new(0.2, 42);
        let mut noise2 = GaussianNoise::new(0.2, 42);

        for _ in 0..100 {
            assert_eq!(noise1.next_gaussian(), noise2.next_gaussian());
        }
    }

    #[test]
    fn test_zero_std_dev() {
        let mut noise = GaussianNoise::new(0.0, 42);
        for _ in 0..10 {
            assert_eq!(noise.next_gaussian(), 0.0);
        }
    }

    #[test]
    fn test_sample_statistics() {
        let mut noise = GaussianNoise::new(0.2, 7);
        let trials = 20_000;
        let samples: Vec<f32> = (0..trials).map(|_| noise.next_gaussian()).collect();

        let mean = samples.iter().sum::<f32>() / trials as f32;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f32>() / trials as f32;

        assert!(mean.abs() < 0.01);
        assert!((variance.sqrt() - 0.2).abs() < 0.01);
    }

    #[test]
    fn test_closure_source() {
        let mut values = [0.5f32, -0.25].into_iter().cycle();
        let mut source = move || values.next().unwrap_or(0.0);
        assert_eq!(source.next_gaussian(), 0.5);
        assert_eq!(source.next_gaussian(), -0.25);
        assert_eq!(ZeroNoise.next_gaussian(), 0.0);
    }
}
