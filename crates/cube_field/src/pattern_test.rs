use super::*;

#[test]
fn test_index_roundtrip() {
  for pattern in PatternId::ALL {
    assert_eq!(PatternId::from_index(pattern.index()), Ok(pattern));
  }
}

#[test]
fn test_index_out_of_range() {
  assert_eq!(
    PatternId::from_index(0),
    Err(CubeFieldError::PatternIndexOutOfRange(0))
  );
  assert_eq!(
    PatternId::from_index(5),
    Err(CubeFieldError::PatternIndexOutOfRange(5))
  );
}

#[test]
fn test_parse_names_and_digits() {
  assert_eq!("fractal".parse::<PatternId>(), Ok(PatternId::Fractal));
  assert_eq!("  Spherical ".parse::<PatternId>(), Ok(PatternId::Spherical));
  assert_eq!("3".parse::<PatternId>(), Ok(PatternId::Stochastic));
  assert_eq!(
    "menger".parse::<PatternId>(),
    Err(CubeFieldError::UnknownPattern("menger".to_string()))
  );
}

#[test]
fn test_next_cycles_through_all() {
  let mut pattern = PatternId::Lattice;
  for expected in [
    PatternId::Fractal,
    PatternId::Stochastic,
    PatternId::Spherical,
    PatternId::Lattice,
  ] {
    pattern = pattern.next();
    assert_eq!(pattern, expected);
  }
}

#[test]
fn test_display_matches_name() {
  assert_eq!(PatternId::Stochastic.to_string(), "stochastic");
}
