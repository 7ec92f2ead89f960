//! Pattern generators.
//!
//! Each generator is a pure function of an integer level (plus a fixed seed
//! for the stochastic one) that returns a non-empty [`CubeField`]. Level 0
//! always yields the single fallback cube `(0, 0, 0, 2.0)`.
//!
//! Cube order is deterministic: lattice enumerations run `x` outermost, then
//! `y`, then `z`, and subdivision keeps parents in order with each parent's
//! children contiguous. The interpolator pairs cubes by index, so this order
//! is part of the contract.
//!
//! Cube counts grow quickly with level (cubic for the lattices, `21^level`
//! for the fractal); callers bound the level, see
//! [`LevelCaps`](crate::morph::LevelCaps).
//!
//! [`CubeField`]: crate::types::CubeField

pub mod fractal;
pub mod lattice;
pub mod spherical;
pub mod stochastic;

use rayon::prelude::*;

/// Enumerate `[-half, half]³` in `x`, `y`, `z` order and collect whatever
/// `keep` returns for each offset.
///
/// Rows along `x` are produced in parallel; the collected order matches the
/// sequential enumeration.
pub(crate) fn collect_grid<T, F>(half: i32, keep: F) -> Vec<T>
where
  T: Send,
  F: Fn(i32, i32, i32) -> Option<T> + Sync,
{
  (-half..=half)
    .into_par_iter()
    .flat_map_iter(|ix| {
      let keep = &keep;
      (-half..=half).flat_map(move |iy| (-half..=half).filter_map(move |iz| keep(ix, iy, iz)))
    })
    .collect()
}

/// Squared integer radius of a grid offset.
#[inline]
pub(crate) fn norm_sq(ix: i32, iy: i32, iz: i32) -> i64 {
  let (x, y, z) = (ix as i64, iy as i64, iz as i64);
  x * x + y * y + z * z
}
