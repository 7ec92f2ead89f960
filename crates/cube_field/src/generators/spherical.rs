//! Perforated spherical shell.
//!
//! For level `n > 0`: `half = 4 + 2n`, `base = 2 / half`, `step = 1.4 * base`.
//! An offset in `[-half, half]³` is kept iff its radius
//! `r = step * sqrt(ix² + iy² + iz²)` is at most [`RADIUS`] and its squared
//! length is a multiple of 5. The extent is the max of `r + base`.
//!
//! The radius cutoff is decided on integers: with `step = (7/5)(2/half)`,
//! `r <= 2` is `49 * sq <= 25 * half²`, so offsets exactly on the sphere
//! are kept at every level.

use super::{collect_grid, norm_sq};
use crate::types::{Cube, CubeField};

pub const STEP_FACTOR: f32 = 1.4;

/// Radius cutoff in world units.
pub const RADIUS: f64 = 2.0;

/// `STEP_FACTOR` as an exact ratio.
const STEP_NUM: i64 = 7;
const STEP_DEN: i64 = 5;

/// Radius cutoff in world units, as an integer.
const RADIUS_INT: i64 = 2;

/// Selection modulus applied to `ix² + iy² + iz²`.
pub const SELECTION_MODULUS: i64 = 5;

#[inline]
pub fn grid_half(level: u32) -> i32 {
  4 + 2 * level as i32
}

/// Whether an offset with squared length `sq` lies within [`RADIUS`].
///
/// `(STEP_NUM / STEP_DEN) * (2 / half) * sqrt(sq) <= RADIUS_INT`, squared and
/// cleared of denominators.
#[inline]
pub fn within_radius(sq: i64, half: i32) -> bool {
  let half = half as i64;
  let lhs = (2 * STEP_NUM) * (2 * STEP_NUM) * sq;
  let rhs = (STEP_DEN * RADIUS_INT * half) * (STEP_DEN * RADIUS_INT * half);
  lhs <= rhs
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "generators::spherical"))]
pub fn generate(level: u32) -> CubeField {
  if level == 0 {
    return CubeField::fallback();
  }

  let half = grid_half(level);
  let base = 2.0 / half as f32;
  let step = STEP_FACTOR * base;
  let step_f64 = (STEP_NUM as f64 / STEP_DEN as f64) * 2.0 / half as f64;

  let kept: Vec<(Cube, f32)> = collect_grid(half, |ix, iy, iz| {
    let sq = norm_sq(ix, iy, iz);
    if sq % SELECTION_MODULUS != 0 || !within_radius(sq, half) {
      return None;
    }
    // Clamp rounding noise on the boundary shell.
    let r = (step_f64 * (sq as f64).sqrt()).min(RADIUS);
    let cube = Cube::new(ix as f32 * step, iy as f32 * step, iz as f32 * step, base);
    Some((cube, r as f32))
  });

  let extent = kept.iter().map(|(_, r)| r + base).fold(0.0, f32::max);
  let cubes = kept.into_iter().map(|(cube, _)| cube).collect();

  CubeField::with_extent(cubes, extent)
}

#[cfg(test)]
#[path = "spherical_test.rs"]
mod spherical_test;
