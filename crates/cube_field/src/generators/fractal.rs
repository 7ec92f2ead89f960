//! Menger-style sparse subdivision.
//!
//! Starting from the fallback cube, each iteration replaces every cube of
//! edge `s` with the 21 cells of its 3×3×3 grid (edge `s / 3`, offsets
//! `{-s/3, 0, +s/3}`) that do not lie on one of the three axis lines through
//! the parent's center. Parents are not retained.

use glam::Vec3;
use rayon::prelude::*;

use crate::types::{Cube, CubeField};

/// Children kept per subdivided cube.
pub const CHILDREN_PER_CUBE: usize = 21;

/// Grid offsets (in child edges) of the kept children, `x`-major.
///
/// An offset is dropped when at least two of its components are zero: the
/// six face centers and the body center.
pub fn child_offsets() -> impl Iterator<Item = [i32; 3]> {
  (-1..=1).flat_map(|ix| {
    (-1..=1).flat_map(move |iy| {
      (-1..=1)
        .map(move |iz| [ix, iy, iz])
        .filter(|offset| offset.iter().filter(|&&c| c == 0).count() < 2)
    })
  })
}

/// Replace one cube with its kept children.
pub fn subdivide(parent: &Cube) -> impl Iterator<Item = Cube> + '_ {
  let s = parent.size / 3.0;
  child_offsets().map(move |[ix, iy, iz]| Cube {
    center: parent.center + Vec3::new(ix as f32, iy as f32, iz as f32) * s,
    size: s,
  })
}

/// Cube count after `level` iterations.
pub fn cube_count(level: u32) -> usize {
  CHILDREN_PER_CUBE.pow(level)
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "generators::fractal"))]
pub fn generate(level: u32) -> CubeField {
  let mut cubes = vec![Cube::FALLBACK];

  for _ in 0..level {
    cubes = cubes.par_iter().flat_map_iter(subdivide).collect();
  }

  CubeField::from_cubes(cubes)
}

#[cfg(test)]
#[path = "fractal_test.rs"]
mod fractal_test;
