use super::*;

#[test]
fn test_level_zero_is_fallback() {
  assert_eq!(generate(0), CubeField::fallback());
}

#[test]
fn test_exactly_21_offsets_survive() {
  let offsets: Vec<_> = child_offsets().collect();
  assert_eq!(offsets.len(), CHILDREN_PER_CUBE);

  // Face centers and body center are gone
  for dropped in [
    [0, 0, 0],
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
  ] {
    assert!(!offsets.contains(&dropped), "{dropped:?} should be removed");
  }

  // Edges and corners remain
  assert!(offsets.contains(&[1, 1, 0]));
  assert!(offsets.contains(&[-1, -1, -1]));
}

#[test]
fn test_count_is_21_pow_k() {
  for level in 0..=3u32 {
    assert_eq!(generate(level).len(), cube_count(level), "level {level}");
  }
  assert_eq!(cube_count(0), 1);
  assert_eq!(cube_count(2), 441);
}

#[test]
fn test_children_scale_and_offsets() {
  let field = generate(1);
  let s = 2.0 / 3.0;

  assert!(field.iter().all(|c| (c.size - s).abs() < 1e-6));
  // First child is the (-1,-1,-1) corner
  let first = field.cubes()[0].center;
  assert!((first - Vec3::splat(-s)).length() < 1e-6);
  // No child sits at the parent center
  assert!(field.iter().all(|c| c.center.length() > 1e-3));
}

#[test]
fn test_parents_are_replaced() {
  let field = generate(2);
  let child = 2.0 / 9.0;
  assert!(field.iter().all(|c| (c.size - child).abs() < 1e-6));
}

#[test]
fn test_extent_recomputed_from_final_set() {
  // Level 1: corner children reach 2/3 + 2/3
  let field = generate(1);
  assert!((field.extent() - 4.0 / 3.0).abs() < 1e-6);
  assert_eq!(field.extent(), field.axis_extent());
}

#[test]
fn test_parallel_order_matches_sequential() {
  let sequential: Vec<Cube> = generate(1).iter().flat_map(subdivide).collect();
  assert_eq!(generate(2).cubes(), sequential.as_slice());
}
