//! Core data types shared by the generators, the level cache and the
//! interpolator.

use glam::Vec3;

/// Edge length of the fallback cube every generator falls back to.
pub const FALLBACK_SIZE: f32 = 2.0;

/// Extent of a field holding only the fallback cube.
pub const FALLBACK_EXTENT: f32 = 2.0;

/// Axis-aligned box descriptor.
///
/// `size` is the full edge length: the cube spans `center ± size / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
  /// Center in world units.
  pub center: Vec3,
  /// Edge length (> 0).
  pub size: f32,
}

impl Cube {
  pub const FALLBACK: Self = Self {
    center: Vec3::ZERO,
    size: FALLBACK_SIZE,
  };

  pub fn new(x: f32, y: f32, z: f32, size: f32) -> Self {
    Self {
      center: Vec3::new(x, y, z),
      size,
    }
  }

  /// Largest `|coordinate| + size` over the three axes.
  #[inline]
  pub fn axis_reach(&self) -> f32 {
    self.center.abs().max_element() + self.size
  }

  /// Component-wise linear interpolation `a + (b - a) * t`.
  #[inline]
  pub fn lerp(&self, other: &Cube, t: f32) -> Cube {
    Cube {
      center: self.center + (other.center - self.center) * t,
      size: lerp(self.size, other.size, t),
    }
  }

  /// `[x, y, z, size]` layout used by renderers and tests.
  pub fn to_array(&self) -> [f32; 4] {
    [self.center.x, self.center.y, self.center.z, self.size]
  }
}

/// Scalar `a + (b - a) * t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
  a + (b - a) * t
}

/// Ordered set of cubes plus the half-width of the origin-centered AABB that
/// holds them.
///
/// Never empty: every constructor substitutes the fallback cube when handed
/// no cubes. Order is generator insertion order and is what the interpolator
/// pairs by.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeField {
  cubes: Vec<Cube>,
  extent: f32,
}

impl CubeField {
  /// Single `(0, 0, 0, 2.0)` cube with extent 2.0.
  pub fn fallback() -> Self {
    Self {
      cubes: vec![Cube::FALLBACK],
      extent: FALLBACK_EXTENT,
    }
  }

  /// Build a field whose extent is the max `|coordinate| + size`.
  pub fn from_cubes(cubes: Vec<Cube>) -> Self {
    if cubes.is_empty() {
      return Self::fallback();
    }
    let extent = max_axis_reach(&cubes);
    Self { cubes, extent }
  }

  /// Build a field with a caller-computed extent.
  ///
  /// Used where the extent is not the axis reach (spherical radius, blended
  /// extent). An empty cube list still yields the fallback field.
  pub fn with_extent(cubes: Vec<Cube>, extent: f32) -> Self {
    if cubes.is_empty() {
      return Self::fallback();
    }
    Self {
      cubes,
      extent: extent.max(0.0),
    }
  }

  pub fn cubes(&self) -> &[Cube] {
    &self.cubes
  }

  pub fn iter(&self) -> impl Iterator<Item = &Cube> {
    self.cubes.iter()
  }

  pub fn len(&self) -> usize {
    self.cubes.len()
  }

  /// Always false for fields built through the public constructors.
  pub fn is_empty(&self) -> bool {
    self.cubes.is_empty()
  }

  pub fn extent(&self) -> f32 {
    self.extent
  }

  /// Recomputed max `|coordinate| + size`, independent of the stored extent.
  pub fn axis_extent(&self) -> f32 {
    max_axis_reach(&self.cubes)
  }

  pub fn into_cubes(self) -> Vec<Cube> {
    self.cubes
  }
}

impl Default for CubeField {
  fn default() -> Self {
    Self::fallback()
  }
}

fn max_axis_reach(cubes: &[Cube]) -> f32 {
  cubes.iter().map(Cube::axis_reach).fold(0.0, f32::max)
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
