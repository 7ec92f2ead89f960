//! Level interpolation between two adjacent integer levels.
//!
//! # Algorithm
//!
//! 1. **Paired prefix**: the first `min(|low|, |high|)` cubes are paired by
//!    index and lerped component-wise by `t`.
//! 2. **Growth**: when `high` holds more cubes and `t > 0.1`,
//!    `floor(surplus * t²)` cubes from `high` (starting at the end of the
//!    prefix, in order) are appended unmodified.
//! 3. **Extent**: lerp of the two extents.
//!
//! Correspondence is positional, not spatial. When `high` is the smaller
//! field, the surplus of `low` is dropped outright; there is no shrink
//! animation.

use crate::types::{lerp, CubeField};

/// Growth only starts once the blend factor passes this value.
pub const GROWTH_THRESHOLD: f32 = 0.1;

/// Number of surplus cubes appended at blend factor `t`.
///
/// Quadratic easing: `floor(surplus * t²)`, zero at or below
/// [`GROWTH_THRESHOLD`], never more than `surplus`.
#[inline]
pub fn grown_count(surplus: usize, t: f32) -> usize {
  if surplus == 0 || t <= GROWTH_THRESHOLD {
    return 0;
  }
  let t = t.min(1.0);
  ((surplus as f32 * t * t).floor() as usize).min(surplus)
}

/// Blend the field for level `L` (`low`) with the field for `L + 1` (`high`).
///
/// `t` is clamped to `[0, 1]`; a NaN factor is treated as 0. Inputs are
/// never modified.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "blend::blend"))]
pub fn blend(low: &CubeField, high: &CubeField, t: f32) -> CubeField {
  let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

  let low_cubes = low.cubes();
  let high_cubes = high.cubes();
  let paired = low_cubes.len().min(high_cubes.len());
  let surplus = high_cubes.len().saturating_sub(low_cubes.len());
  let grown = grown_count(surplus, t);

  let mut cubes = Vec::with_capacity(paired + grown);
  cubes.extend(
    low_cubes
      .iter()
      .zip(high_cubes)
      .map(|(a, b)| a.lerp(b, t)),
  );
  cubes.extend_from_slice(&high_cubes[paired..paired + grown]);

  CubeField::with_extent(cubes, lerp(low.extent(), high.extent(), t))
}

#[cfg(test)]
#[path = "blend_test.rs"]
mod blend_test;
