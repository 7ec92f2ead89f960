//! Sparse cubic lattice.
//!
//! For level `n > 0`: `base = 2 / (n + 1)`, `step = 1.6 * base`, and a cube of
//! edge `base` sits at `(ix, iy, iz) * step` for every offset in `[-n, n]³`
//! whose squared length is a multiple of 4.

use super::{collect_grid, norm_sq};
use crate::types::{Cube, CubeField};

/// Spacing between neighbouring cells, in cube edges.
pub const STEP_FACTOR: f32 = 1.6;

/// Selection modulus applied to `ix² + iy² + iz²`.
pub const SELECTION_MODULUS: i64 = 4;

#[inline]
pub fn base_size(level: u32) -> f32 {
  2.0 / (level as f32 + 1.0)
}

#[inline]
pub fn is_selected(ix: i32, iy: i32, iz: i32) -> bool {
  norm_sq(ix, iy, iz) % SELECTION_MODULUS == 0
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "generators::lattice"))]
pub fn generate(level: u32) -> CubeField {
  if level == 0 {
    return CubeField::fallback();
  }

  let half = level as i32;
  let base = base_size(level);
  let step = STEP_FACTOR * base;

  let cubes = collect_grid(half, |ix, iy, iz| {
    is_selected(ix, iy, iz).then(|| {
      Cube::new(ix as f32 * step, iy as f32 * step, iz as f32 * step, base)
    })
  });

  CubeField::from_cubes(cubes)
}

#[cfg(test)]
#[path = "lattice_test.rs"]
mod lattice_test;
