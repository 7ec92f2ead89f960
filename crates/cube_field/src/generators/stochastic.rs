//! Seeded random lattice.
//!
//! For level `n > 0`: `half = 2 + n`, `base = 2 / half`, `step = 1.3 * base`.
//! Every offset in `[-half, half]³` draws one uniform sample from a stream
//! seeded with `BASE_SEED + n` and is kept iff the sample is `<= p`, with
//! `p = max(0.15, 0.5 - 0.03 n)`.
//!
//! The draw order follows the enumeration order, so enumeration stays
//! sequential here.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Cube, CubeField};

/// Seed the per-level stream is derived from.
pub const BASE_SEED: u64 = 1234;

pub const STEP_FACTOR: f32 = 1.3;

/// Lower bound on the inclusion probability.
pub const MIN_PROBABILITY: f32 = 0.15;

#[inline]
pub fn grid_half(level: u32) -> i32 {
  2 + level as i32
}

#[inline]
pub fn inclusion_probability(level: u32) -> f32 {
  (0.5 - 0.03 * level as f32).max(MIN_PROBABILITY)
}

/// Generate with the default [`BASE_SEED`].
pub fn generate(level: u32) -> CubeField {
  generate_with_seed(level, BASE_SEED)
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "generators::stochastic"))]
pub fn generate_with_seed(level: u32, base_seed: u64) -> CubeField {
  if level == 0 {
    return CubeField::fallback();
  }

  let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(level as u64));
  let half = grid_half(level);
  let base = 2.0 / half as f32;
  let step = STEP_FACTOR * base;
  let p = inclusion_probability(level);

  let mut cubes = Vec::new();
  for ix in -half..=half {
    for iy in -half..=half {
      for iz in -half..=half {
        let sample: f32 = rng.random();
        if sample > p {
          continue;
        }
        cubes.push(Cube::new(
          ix as f32 * step,
          iy as f32 * step,
          iz as f32 * step,
          base,
        ));
      }
    }
  }

  CubeField::from_cubes(cubes)
}

#[cfg(test)]
#[path = "stochastic_test.rs"]
mod stochastic_test;
