//! Level morph driver.
//!
//! Owns a continuous `current_level` that eases toward a user-set
//! `target_level` at a fixed speed. Each frame the current level is split
//! into a [`LevelSpan`] (floor, floor + 1, fraction); the two bounding fields
//! come from a [`LevelCache`] and are blended.
//!
//! This is plain state owned by whoever drives the animation. There is no
//! global pattern selector or memo table.

use crate::blend::blend;
use crate::cache::{FieldGenerator, LevelCache};
use crate::pattern::PatternId;
use crate::types::CubeField;

// =============================================================================
// Configuration
// =============================================================================

/// Highest selectable level per pattern.
///
/// Cube counts grow cubically (lattices) or as `21^level` (fractal), so the
/// driver never asks for levels past these caps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelCaps {
  pub lattice: u32,
  pub fractal: u32,
  pub stochastic: u32,
  pub spherical: u32,
}

impl LevelCaps {
  pub const DEFAULT: Self = Self {
    lattice: 12,
    fractal: 4,
    stochastic: 12,
    spherical: 8,
  };

  /// Same cap for every pattern.
  pub fn uniform(cap: u32) -> Self {
    Self {
      lattice: cap,
      fractal: cap,
      stochastic: cap,
      spherical: cap,
    }
  }

  pub fn get(&self, pattern: PatternId) -> u32 {
    match pattern {
      PatternId::Lattice => self.lattice,
      PatternId::Fractal => self.fractal,
      PatternId::Stochastic => self.stochastic,
      PatternId::Spherical => self.spherical,
    }
  }

  /// Lower every cap to at most `cap`.
  pub fn limited_to(self, cap: u32) -> Self {
    Self {
      lattice: self.lattice.min(cap),
      fractal: self.fractal.min(cap),
      stochastic: self.stochastic.min(cap),
      spherical: self.spherical.min(cap),
    }
  }
}

impl Default for LevelCaps {
  fn default() -> Self {
    Self::DEFAULT
  }
}

/// Morph driver tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct MorphConfig {
  /// Levels per second the current level moves toward the target.
  pub morph_speed: f32,
  /// Distance below which the current level counts as settled.
  pub settle_epsilon: f32,
  /// Target levels per pixel of horizontal drag.
  pub drag_sensitivity: f32,
  /// Per-pattern upper bound on the target level.
  pub caps: LevelCaps,
}

impl Default for MorphConfig {
  fn default() -> Self {
    Self {
      morph_speed: 3.0,
      settle_epsilon: 0.001,
      drag_sensitivity: 0.01,
      caps: LevelCaps::DEFAULT,
    }
  }
}

impl MorphConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_morph_speed(mut self, speed: f32) -> Self {
    self.morph_speed = speed.max(0.0);
    self
  }

  pub fn with_settle_epsilon(mut self, epsilon: f32) -> Self {
    self.settle_epsilon = epsilon.max(0.0);
    self
  }

  pub fn with_drag_sensitivity(mut self, sensitivity: f32) -> Self {
    self.drag_sensitivity = sensitivity;
    self
  }

  pub fn with_caps(mut self, caps: LevelCaps) -> Self {
    self.caps = caps;
    self
  }
}

// =============================================================================
// LevelSpan
// =============================================================================

/// Decomposition of a continuous level into two integer levels and a blend
/// factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelSpan {
  pub low: u32,
  pub high: u32,
  /// Fraction of the way from `low` to `high`, in `[0, 1)`.
  pub t: f32,
}

impl LevelSpan {
  /// Split `level` into floor, floor + 1 and fraction, never reaching past
  /// `cap`. At the cap both ends are `cap` and `t` is 0.
  pub fn from_level(level: f32, cap: u32) -> Self {
    let level = if level.is_finite() { level.max(0.0) } else { 0.0 };
    let low = level.floor() as u32;
    if low >= cap {
      return Self {
        low: cap,
        high: cap,
        t: 0.0,
      };
    }
    Self {
      low,
      high: low + 1,
      t: (level - low as f32).clamp(0.0, 1.0),
    }
  }
}

// =============================================================================
// LevelMorph
// =============================================================================

/// Continuous level animation state for one pattern selector.
#[derive(Clone, Debug)]
pub struct LevelMorph {
  pattern: PatternId,
  current_level: f32,
  target_level: f32,
  config: MorphConfig,
}

impl LevelMorph {
  pub fn new(pattern: PatternId, config: MorphConfig) -> Self {
    Self {
      pattern,
      current_level: 0.0,
      target_level: 0.0,
      config,
    }
  }

  pub fn pattern(&self) -> PatternId {
    self.pattern
  }

  pub fn current_level(&self) -> f32 {
    self.current_level
  }

  pub fn target_level(&self) -> f32 {
    self.target_level
  }

  pub fn config(&self) -> &MorphConfig {
    &self.config
  }

  /// Highest level selectable for the active pattern.
  pub fn max_level(&self) -> u32 {
    self.config.caps.get(self.pattern)
  }

  /// Switch pattern. Levels carry over, clamped to the new pattern's cap.
  pub fn set_pattern(&mut self, pattern: PatternId) {
    self.pattern = pattern;
    let max = self.max_level() as f32;
    self.target_level = self.target_level.min(max);
    self.current_level = self.current_level.min(max);
  }

  /// Set the target, clamped to `[0, max_level]`.
  pub fn set_target(&mut self, level: f32) {
    self.target_level = self.clamp_level(level);
  }

  /// Jump straight to `level` without animating.
  pub fn snap_to(&mut self, level: f32) {
    self.set_target(level);
    self.current_level = self.target_level;
  }

  /// Move the target by a horizontal drag of `dx` pixels.
  pub fn drag(&mut self, dx: f32) {
    self.set_target(self.target_level + dx * self.config.drag_sensitivity);
  }

  pub fn is_settled(&self) -> bool {
    (self.current_level - self.target_level).abs() <= self.config.settle_epsilon
  }

  /// Step the current level toward the target by `morph_speed * dt`,
  /// stopping exactly on the target.
  pub fn advance(&mut self, dt: f32) {
    if self.is_settled() || dt.is_nan() || dt <= 0.0 {
      return;
    }
    let step = self.config.morph_speed * dt;
    if self.current_level < self.target_level {
      self.current_level = (self.current_level + step).min(self.target_level);
    } else {
      self.current_level = (self.current_level - step).max(self.target_level);
    }
  }

  pub fn span(&self) -> LevelSpan {
    LevelSpan::from_level(self.current_level, self.max_level())
  }

  /// Blended field for the current level.
  pub fn sample<G: FieldGenerator>(&self, cache: &mut LevelCache<G>) -> CubeField {
    let span = self.span();
    let low = cache.get(self.pattern, span.low as i64);
    let high = cache.get(self.pattern, span.high as i64);
    blend(&low, &high, span.t)
  }

  fn clamp_level(&self, level: f32) -> f32 {
    if level.is_nan() {
      return 0.0;
    }
    level.clamp(0.0, self.max_level() as f32)
  }
}

impl Default for LevelMorph {
  fn default() -> Self {
    Self::new(PatternId::default(), MorphConfig::default())
  }
}

#[cfg(test)]
#[path = "morph_test.rs"]
mod morph_test;
