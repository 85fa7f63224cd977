//! Random sampling for anti-aliasing.
//!
//! A [`Sampler`] owns its ChaCha20 PRNG instead of touching global state,
//! so a render seeded the same way draws the same jitter sequence and a
//! future parallel render can give each worker its own sampler.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::vec3::Vec3;

/// Owned, seedable source of pixel jitter.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: ChaCha20Rng,
}

impl Sampler {
    /// Create a sampler with a fixed seed. Renders with the same seed and
    /// configuration produce identical images.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Create a sampler seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Random f64 in [0.0, 1.0)
    pub fn random(&mut self) -> f64 {
        self.rng.random()
    }

    /// Random offset in the [-0.5, 0.5) x [-0.5, 0.5) unit pixel square.
    ///
    /// Returned as a vector in pixel-delta space: x scales `pixel_delta_u`,
    /// y scales `pixel_delta_v`, z is unused.
    pub fn sample_square(&mut self) -> Vec3 {
        Vec3::new(self.random() - 0.5, self.random() - 0.5, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Sampler::seeded(7);
        let mut b = Sampler::seeded(7);
        for _ in 0..32 {
            assert_eq!(a.random(), b.random());
        }
    }

    #[test]
    fn sample_square_stays_in_the_half_open_box() {
        let mut s = Sampler::seeded(0);
        for _ in 0..256 {
            let o = s.sample_square();
            assert!((-0.5..0.5).contains(&o.x));
            assert!((-0.5..0.5).contains(&o.y));
            assert_eq!(o.z, 0.0);
        }
    }
}
