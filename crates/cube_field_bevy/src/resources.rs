//! Bevy resources wrapping the cube_field driver state.

use bevy::prelude::*;
use cube_field::{
  CacheStats, CubeField, JitterConfig, LevelCache, LevelMorph, MorphConfig, PatternId, Patterns,
};

/// Morph driver, level cache and the field blended for this frame.
///
/// The app owns this state; nothing in cube_field is global.
#[derive(Resource)]
pub struct CubeFieldState {
  pub morph: LevelMorph,
  pub cache: LevelCache<Patterns>,
  /// Blended field for the current level, refreshed every frame.
  pub field: CubeField,
}

impl CubeFieldState {
  pub fn new(pattern: PatternId, config: MorphConfig, generator: Patterns) -> Self {
    let morph = LevelMorph::new(pattern, config);
    let mut cache = LevelCache::with_generator(generator);
    let field = morph.sample(&mut cache);
    Self { morph, cache, field }
  }

  /// Re-blend `field` from the morph's current level.
  pub fn refresh(&mut self) {
    self.field = self.morph.sample(&mut self.cache);
  }

  pub fn cache_stats(&self) -> CacheStats {
    self.cache.stats()
  }
}

impl Default for CubeFieldState {
  fn default() -> Self {
    Self::new(PatternId::default(), MorphConfig::default(), Patterns::default())
  }
}

/// Colours, line width and per-frame wobble for drawing.
#[derive(Resource, Clone, Debug)]
pub struct CubeFieldStyle {
  pub cube_color: Color,
  pub floor_color: Color,
  pub wall_color: Color,
  pub clear_color: Color,
  pub line_width: f32,
  /// `None` draws cubes exactly as generated.
  pub jitter: Option<JitterConfig>,
}

impl Default for CubeFieldStyle {
  fn default() -> Self {
    Self {
      cube_color: Color::srgb(0.9, 0.9, 1.0),
      floor_color: Color::srgb(0.2, 0.22, 0.28),
      wall_color: Color::srgb(0.18, 0.2, 0.26),
      clear_color: Color::srgb(0.05, 0.05, 0.08),
      line_width: 1.3,
      jitter: Some(JitterConfig::default()),
    }
  }
}
