use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

/// Generator that counts invocations per call.
#[derive(Default)]
struct CountingGenerator {
  calls: AtomicUsize,
}

impl CountingGenerator {
  fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

impl FieldGenerator for CountingGenerator {
  fn generate(&self, pattern: PatternId, level: u32) -> CubeField {
    self.calls.fetch_add(1, Ordering::SeqCst);
    pattern.generate(level)
  }
}

#[test]
fn test_second_get_returns_same_instance() {
  let mut cache = LevelCache::with_generator(CountingGenerator::default());

  let first = cache.get(PatternId::Fractal, 2);
  let second = cache.get(PatternId::Fractal, 2);

  assert!(Arc::ptr_eq(&first, &second), "expected the cached allocation");
  assert_eq!(cache.generator().calls(), 1, "generator must run once per key");
  assert_eq!(cache.stats().hits, 1);
  assert_eq!(cache.stats().misses, 1);
}

#[test]
fn test_keys_are_pattern_and_level() {
  let mut cache = LevelCache::with_generator(CountingGenerator::default());

  cache.get(PatternId::Lattice, 1);
  cache.get(PatternId::Spherical, 1);
  cache.get(PatternId::Lattice, 2);
  cache.get(PatternId::Lattice, 1);

  assert_eq!(cache.len(), 3);
  assert_eq!(cache.generator().calls(), 3);
}

#[test]
fn test_negative_level_clamps_to_zero() {
  let mut cache = LevelCache::with_generator(CountingGenerator::default());

  let negative = cache.get(PatternId::Stochastic, -5);
  let zero = cache.get(PatternId::Stochastic, 0);

  assert!(Arc::ptr_eq(&negative, &zero));
  assert_eq!(*zero, CubeField::fallback());
  assert_eq!(cache.generator().calls(), 1);
}

#[test]
fn test_cached_value_matches_generator() {
  let mut cache = LevelCache::new();
  let field = cache.get(PatternId::Spherical, 2);
  assert_eq!(*field, PatternId::Spherical.generate(2));
}

#[test]
fn test_default_is_unbounded() {
  let mut cache = LevelCache::new();
  for level in 0..20 {
    cache.get(PatternId::Lattice, level);
  }
  assert_eq!(cache.len(), 20);
  assert_eq!(cache.capacity(), None);
  assert_eq!(cache.stats().evictions, 0);
}

#[test]
fn test_capacity_limit_evicts_least_recently_used() {
  let mut cache = LevelCache::with_generator(CountingGenerator::default()).with_capacity_limit(2);

  cache.get(PatternId::Lattice, 1);
  cache.get(PatternId::Lattice, 2);
  // Touch level 1 so level 2 is the oldest
  cache.get(PatternId::Lattice, 1);
  cache.get(PatternId::Lattice, 3);

  assert_eq!(cache.len(), 2);
  assert!(cache.contains(LevelKey::new(PatternId::Lattice, 1)));
  assert!(!cache.contains(LevelKey::new(PatternId::Lattice, 2)));
  assert!(cache.contains(LevelKey::new(PatternId::Lattice, 3)));
  assert_eq!(cache.stats().evictions, 1);

  // Evicted key regenerates on demand
  cache.get(PatternId::Lattice, 2);
  assert_eq!(cache.generator().calls(), 4);
}

#[test]
fn test_peek_does_not_generate() {
  let mut cache = LevelCache::with_generator(CountingGenerator::default());
  let key = LevelKey::new(PatternId::Fractal, 1);

  assert!(cache.peek(key).is_none());
  cache.get_key(key);
  assert!(cache.peek(key).is_some());
  assert_eq!(cache.generator().calls(), 1);
}

#[test]
fn test_prewarm_fills_missing_levels_only() {
  let mut cache = LevelCache::with_generator(CountingGenerator::default());
  cache.get(PatternId::Lattice, 1);

  let generated = cache.prewarm(PatternId::Lattice, 0..=3);

  assert_eq!(generated, 3);
  assert_eq!(cache.len(), 4);
  assert_eq!(cache.generator().calls(), 4);

  // Everything is now a hit
  cache.get(PatternId::Lattice, 3);
  assert_eq!(cache.generator().calls(), 4);
}

#[test]
fn test_custom_stochastic_seed() {
  let mut seeded = LevelCache::with_generator(Patterns::with_seed(42));
  let mut default = LevelCache::new();

  assert_ne!(
    *seeded.get(PatternId::Stochastic, 3),
    *default.get(PatternId::Stochastic, 3)
  );
  assert_eq!(
    *seeded.get(PatternId::Lattice, 3),
    *default.get(PatternId::Lattice, 3)
  );
}

#[test]
fn test_level_key_clamping() {
  assert_eq!(LevelKey::clamped(PatternId::Lattice, -1).level, 0);
  assert_eq!(LevelKey::clamped(PatternId::Lattice, 7).level, 7);
  assert_eq!(LevelKey::clamped(PatternId::Lattice, i64::MAX).level, u32::MAX);
}

// =========================================================================
// SharedLevelCache
// =========================================================================

#[test]
fn test_shared_cache_generates_once_across_threads() {
  let shared = Arc::new(SharedLevelCache::new(LevelCache::with_generator(
    CountingGenerator::default(),
  )));

  let handles: Vec<_> = (0..8)
    .map(|_| {
      let shared = Arc::clone(&shared);
      std::thread::spawn(move || shared.get(PatternId::Fractal, 2))
    })
    .collect();

  let fields: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

  assert_eq!(shared.lock().generator().calls(), 1);
  assert!(fields.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
  assert_eq!(shared.len(), 1);
  assert_eq!(shared.stats().misses, 1);
  assert_eq!(shared.stats().hits, 7);
}
