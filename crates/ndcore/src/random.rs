use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::array::Array;
use crate::error::{NdError, Result};
use crate::math::size_of_shape;

impl Array {
    /// Uniform samples in `[0, 1)` from the thread RNG.
    pub fn random(shape: &[usize]) -> Result<Array> {
        Array::random_with(shape, 0.0, 1.0, &mut rand::thread_rng())
    }

    /// Uniform samples in `[low, high)` from the thread RNG.
    pub fn random_range(shape: &[usize], low: f64, high: f64) -> Result<Array> {
        Array::random_with(shape, low, high, &mut rand::thread_rng())
    }

    /// Reproducible uniform samples in `[0, 1)`.
    pub fn random_seeded(shape: &[usize], seed: u64) -> Result<Array> {
        let mut rng = StdRng::seed_from_u64(seed);
        Array::random_with(shape, 0.0, 1.0, &mut rng)
    }

    pub fn random_with<R: Rng + ?Sized>(
        shape: &[usize],
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Result<Array> {
        if shape.is_empty() {
            return Err(NdError::shape("random", "at least one dimension", shape));
        }
        if !(low < high) {
            return Err(NdError::DegenerateArgument("random range needs low < high"));
        }
        if !(high - low).is_finite() {
            return Err(NdError::DegenerateArgument("random range needs finite bounds"));
        }
        let data = (0..size_of_shape(shape))
            .map(|_| rng.gen_range(low..high))
            .collect();
        Ok(Array::from_parts(shape.to_vec(), data))
    }
}
