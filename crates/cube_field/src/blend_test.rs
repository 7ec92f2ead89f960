use super::*;
use crate::types::Cube;

fn row(count: usize, y: f32, size: f32, extent: f32) -> CubeField {
  let cubes = (0..count)
    .map(|i| Cube::new(i as f32, y, 0.0, size))
    .collect();
  CubeField::with_extent(cubes, extent)
}

fn assert_cube_close(got: &Cube, want: &Cube) {
  for (g, w) in got.to_array().iter().zip(want.to_array()) {
    assert!((g - w).abs() < 1e-5, "{got:?} != {want:?}");
  }
}

// =========================================================================
// Growth law
// =========================================================================

#[test]
fn test_growth_half_way() {
  // |A| = 2, |B| = 10, t = 0.5 -> floor(8 * 0.25) = 2
  assert_eq!(grown_count(8, 0.5), 2);
  let blended = blend(&row(2, 0.0, 1.0, 2.0), &row(10, 1.0, 0.5, 4.0), 0.5);
  assert_eq!(blended.len(), 4);
}

#[test]
fn test_no_growth_at_or_below_threshold() {
  assert_eq!(grown_count(1000, 0.1), 0);
  assert_eq!(grown_count(1000, 0.05), 0);
  assert_eq!(grown_count(1000, 0.0), 0);
  assert!(grown_count(1000, 0.11) > 0);
}

#[test]
fn test_growth_is_monotonic_and_capped() {
  let mut prev = 0;
  for step in 0..=100 {
    let t = step as f32 / 100.0;
    let n = grown_count(37, t);
    assert!(n >= prev, "growth went backwards at t={t}");
    assert!(n <= 37);
    prev = n;
  }
  assert_eq!(grown_count(37, 1.0), 37);
}

// =========================================================================
// Endpoints
// =========================================================================

#[test]
fn test_t_zero_is_truncated_low() {
  let low = row(5, 0.0, 1.0, 3.0);
  let high = row(3, 2.0, 0.5, 6.0);
  let blended = blend(&low, &high, 0.0);

  assert_eq!(blended.len(), 3);
  assert_eq!(blended.cubes(), &low.cubes()[..3]);
  assert_eq!(blended.extent(), low.extent());
}

#[test]
fn test_t_zero_no_growth() {
  let low = row(2, 0.0, 1.0, 3.0);
  let high = row(10, 2.0, 0.5, 6.0);
  let blended = blend(&low, &high, 0.0);
  assert_eq!(blended.cubes(), low.cubes());
}

#[test]
fn test_t_one_reaches_high() {
  let low = row(2, 0.0, 1.0, 3.0);
  let high = row(10, 2.0, 0.5, 6.0);
  let blended = blend(&low, &high, 1.0);

  assert_eq!(blended.len(), high.len());
  for (got, want) in blended.iter().zip(high.iter()) {
    assert_cube_close(got, want);
  }
  assert!((blended.extent() - high.extent()).abs() < 1e-6);
}

// =========================================================================
// Blending details
// =========================================================================

#[test]
fn test_prefix_is_lerped_and_surplus_unmodified() {
  let low = row(2, 0.0, 1.0, 2.0);
  let high = row(10, 4.0, 0.5, 4.0);
  let blended = blend(&low, &high, 0.5);

  assert_cube_close(&blended.cubes()[0], &Cube::new(0.0, 2.0, 0.0, 0.75));
  assert_cube_close(&blended.cubes()[1], &Cube::new(1.0, 2.0, 0.0, 0.75));
  // Grown cubes come from high, starting at index 2, untouched
  assert_eq!(blended.cubes()[2], high.cubes()[2]);
  assert_eq!(blended.cubes()[3], high.cubes()[3]);
  assert!((blended.extent() - 3.0).abs() < 1e-6);
}

/// Shrinking drops the low surplus immediately.
#[test]
fn test_shrink_truncates_without_fade() {
  let low = row(10, 0.0, 1.0, 4.0);
  let high = row(4, 0.0, 1.0, 2.0);
  for t in [0.0, 0.3, 0.9, 1.0] {
    assert_eq!(blend(&low, &high, t).len(), 4, "t={t}");
  }
}

#[test]
fn test_out_of_range_t_is_clamped() {
  let low = row(2, 0.0, 1.0, 2.0);
  let high = row(6, 2.0, 0.5, 4.0);

  assert_eq!(blend(&low, &high, -3.0), blend(&low, &high, 0.0));
  assert_eq!(blend(&low, &high, 7.5), blend(&low, &high, 1.0));
  assert_eq!(blend(&low, &high, f32::NAN), blend(&low, &high, 0.0));
}

#[test]
fn test_inputs_untouched() {
  let low = row(2, 0.0, 1.0, 2.0);
  let high = row(6, 2.0, 0.5, 4.0);
  let (low_copy, high_copy) = (low.clone(), high.clone());
  let _ = blend(&low, &high, 0.7);
  assert_eq!(low, low_copy);
  assert_eq!(high, high_copy);
}

#[test]
fn test_blend_real_levels() {
  use crate::pattern::PatternId;

  let low = PatternId::Lattice.generate(2);
  let high = PatternId::Lattice.generate(3);
  let blended = blend(&low, &high, 0.5);

  assert!(blended.len() >= low.len().min(high.len()));
  assert!(blended.len() <= high.len().max(low.len()));
  let expected = low.extent() + (high.extent() - low.extent()) * 0.5;
  assert!((blended.extent() - expected).abs() < 1e-6);
}
