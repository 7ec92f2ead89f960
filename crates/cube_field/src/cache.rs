//! Level cache - memoizes `(pattern, level) -> CubeField`.
//!
//! The first request for a key runs the generator; later requests return the
//! stored field. Fields are shared as `Arc<CubeField>`, so repeated lookups of
//! one key hand out the same allocation.
//!
//! Unbounded by default. [`LevelCache::with_capacity_limit`] opts into
//! least-recently-used eviction for long-lived embeddings; generator output is
//! the same either way.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex, PoisonError};

use rayon::prelude::*;

use crate::generators::stochastic;
use crate::pattern::PatternId;
use crate::types::CubeField;

// =============================================================================
// Generator seam
// =============================================================================

/// Source of cube fields for the cache.
pub trait FieldGenerator {
  fn generate(&self, pattern: PatternId, level: u32) -> CubeField;
}

/// The four built-in generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Patterns {
  /// Base seed for the stochastic pattern.
  pub stochastic_seed: u64,
}

impl Patterns {
  pub fn with_seed(stochastic_seed: u64) -> Self {
    Self { stochastic_seed }
  }
}

impl Default for Patterns {
  fn default() -> Self {
    Self {
      stochastic_seed: stochastic::BASE_SEED,
    }
  }
}

impl FieldGenerator for Patterns {
  fn generate(&self, pattern: PatternId, level: u32) -> CubeField {
    match pattern {
      PatternId::Stochastic => stochastic::generate_with_seed(level, self.stochastic_seed),
      other => other.generate(level),
    }
  }
}

// =============================================================================
// Keys and stats
// =============================================================================

/// Cache identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LevelKey {
  pub pattern: PatternId,
  pub level: u32,
}

impl LevelKey {
  pub fn new(pattern: PatternId, level: u32) -> Self {
    Self { pattern, level }
  }

  /// Key for a signed level; negative levels clamp to 0.
  pub fn clamped(pattern: PatternId, level: i64) -> Self {
    let level = u32::try_from(level.max(0)).unwrap_or(u32::MAX);
    Self { pattern, level }
  }
}

/// Lookup counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
  /// Lookups served from the cache.
  pub hits: u64,
  /// Lookups that ran the generator.
  pub misses: u64,
  /// Entries dropped by the capacity limit.
  pub evictions: u64,
}

struct Entry {
  field: Arc<CubeField>,
  last_used: u64,
}

// =============================================================================
// LevelCache
// =============================================================================

/// Memo table from [`LevelKey`] to generated field.
pub struct LevelCache<G: FieldGenerator = Patterns> {
  generator: G,
  entries: HashMap<LevelKey, Entry>,
  /// Maximum entries kept (None = unbounded).
  capacity: Option<usize>,
  /// Monotonic use counter for LRU ordering.
  clock: u64,
  stats: CacheStats,
}

impl LevelCache<Patterns> {
  pub fn new() -> Self {
    Self::with_generator(Patterns::default())
  }
}

impl Default for LevelCache<Patterns> {
  fn default() -> Self {
    Self::new()
  }
}

impl<G: FieldGenerator> LevelCache<G> {
  pub fn with_generator(generator: G) -> Self {
    Self {
      generator,
      entries: HashMap::new(),
      capacity: None,
      clock: 0,
      stats: CacheStats::default(),
    }
  }

  /// Bound the cache to `capacity` entries (minimum 1), evicting the least
  /// recently used key when full.
  pub fn with_capacity_limit(mut self, capacity: usize) -> Self {
    self.capacity = Some(capacity.max(1));
    self
  }

  /// Field for `pattern` at `level`, generating it on first request.
  ///
  /// Negative levels are clamped to 0.
  pub fn get(&mut self, pattern: PatternId, level: i64) -> Arc<CubeField> {
    self.get_key(LevelKey::clamped(pattern, level))
  }

  pub fn get_key(&mut self, key: LevelKey) -> Arc<CubeField> {
    self.clock += 1;
    if let Some(entry) = self.entries.get_mut(&key) {
      entry.last_used = self.clock;
      self.stats.hits += 1;
      return Arc::clone(&entry.field);
    }

    self.stats.misses += 1;
    let field = Arc::new(self.generator.generate(key.pattern, key.level));

    #[cfg(feature = "tracing")]
    tracing::debug!(
      pattern = %key.pattern,
      level = key.level,
      cubes = field.len(),
      extent = field.extent(),
      "level cache miss"
    );

    self.store(key, Arc::clone(&field));
    field
  }

  /// Stored field for `key`, without generating or touching LRU order.
  pub fn peek(&self, key: LevelKey) -> Option<Arc<CubeField>> {
    self.entries.get(&key).map(|entry| Arc::clone(&entry.field))
  }

  pub fn contains(&self, key: LevelKey) -> bool {
    self.entries.contains_key(&key)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn stats(&self) -> CacheStats {
    self.stats
  }

  pub fn capacity(&self) -> Option<usize> {
    self.capacity
  }

  pub fn generator(&self) -> &G {
    &self.generator
  }

  fn store(&mut self, key: LevelKey, field: Arc<CubeField>) {
    if let Some(capacity) = self.capacity {
      while self.entries.len() >= capacity {
        if !self.evict_oldest() {
          break;
        }
      }
    }
    self.entries.insert(
      key,
      Entry {
        field,
        last_used: self.clock,
      },
    );
  }

  fn evict_oldest(&mut self) -> bool {
    let Some(oldest) = self
      .entries
      .iter()
      .min_by_key(|(_, entry)| entry.last_used)
      .map(|(key, _)| *key)
    else {
      return false;
    };

    self.entries.remove(&oldest);
    self.stats.evictions += 1;

    #[cfg(feature = "tracing")]
    tracing::debug!(pattern = %oldest.pattern, level = oldest.level, "level cache eviction");

    true
  }
}

impl<G: FieldGenerator + Sync> LevelCache<G> {
  /// Generate every missing level in `levels` for `pattern` in parallel and
  /// store the results. Returns how many levels were generated.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "cache::prewarm"))]
  pub fn prewarm(&mut self, pattern: PatternId, levels: RangeInclusive<u32>) -> usize {
    let missing: Vec<u32> = levels
      .filter(|&level| !self.contains(LevelKey::new(pattern, level)))
      .collect();

    let generator = &self.generator;
    let generated: Vec<(u32, CubeField)> = missing
      .par_iter()
      .map(|&level| (level, generator.generate(pattern, level)))
      .collect();

    let count = generated.len();
    for (level, field) in generated {
      self.clock += 1;
      self.stats.misses += 1;
      self.store(LevelKey::new(pattern, level), Arc::new(field));
    }
    count
  }
}

// =============================================================================
// SharedLevelCache
// =============================================================================

/// Thread-safe level cache.
///
/// The lock is held across check, generate and insert, so two threads asking
/// for the same missing key never both run the generator.
pub struct SharedLevelCache<G: FieldGenerator = Patterns> {
  inner: Mutex<LevelCache<G>>,
}

impl<G: FieldGenerator> SharedLevelCache<G> {
  pub fn new(cache: LevelCache<G>) -> Self {
    Self {
      inner: Mutex::new(cache),
    }
  }

  pub fn get(&self, pattern: PatternId, level: i64) -> Arc<CubeField> {
    self.lock().get(pattern, level)
  }

  pub fn stats(&self) -> CacheStats {
    self.lock().stats()
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  /// Exclusive access to the wrapped cache.
  pub fn lock(&self) -> std::sync::MutexGuard<'_, LevelCache<G>> {
    // A panic inside a generator leaves the map itself consistent.
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl Default for SharedLevelCache<Patterns> {
  fn default() -> Self {
    Self::new(LevelCache::new())
  }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;
