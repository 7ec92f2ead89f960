//! Command-line configuration.

use anyhow::{bail, Context, Result};
use bevy::prelude::*;
use clap::Parser;
use cube_field::{LevelCaps, MorphConfig, PatternId};

/// Interactive viewer for procedural cube fields.
#[derive(Parser, Debug)]
#[command(name = "cube_viewer")]
#[command(about = "Morph between levels of procedural cube patterns")]
pub struct ViewerArgs {
  /// Starting pattern: 1-4 or lattice, fractal, stochastic, spherical.
  #[arg(short, long, default_value = "lattice")]
  pub pattern: String,

  /// Starting level (may be fractional).
  #[arg(short, long, default_value_t = 0.0)]
  pub level: f32,

  /// Levels per second when easing toward the target.
  #[arg(long, default_value_t = 3.0)]
  pub morph_speed: f32,

  /// Lower every pattern's level cap to this value.
  #[arg(long)]
  pub max_level: Option<u32>,

  /// Window width in pixels.
  #[arg(long, default_value_t = 1280)]
  pub width: u32,

  /// Window height in pixels.
  #[arg(long, default_value_t = 720)]
  pub height: u32,

  /// Draw cubes without the per-frame wobble.
  #[arg(long)]
  pub no_jitter: bool,
}

/// Validated viewer configuration.
#[derive(Resource, Clone, Debug)]
pub struct ViewerSettings {
  pub pattern: PatternId,
  pub level: f32,
  pub morph: MorphConfig,
  pub width: u32,
  pub height: u32,
  pub jitter: bool,
}

impl ViewerArgs {
  pub fn into_settings(self) -> Result<ViewerSettings> {
    let pattern: PatternId = self
      .pattern
      .parse()
      .with_context(|| format!("invalid --pattern {:?}", self.pattern))?;

    if !self.level.is_finite() || self.level < 0.0 {
      bail!("--level must be a non-negative number, got {}", self.level);
    }
    if !self.morph_speed.is_finite() || self.morph_speed <= 0.0 {
      bail!("--morph-speed must be positive, got {}", self.morph_speed);
    }
    if self.width == 0 || self.height == 0 {
      bail!("window size must be non-zero, got {}x{}", self.width, self.height);
    }

    let caps = match self.max_level {
      Some(cap) => LevelCaps::DEFAULT.limited_to(cap),
      None => LevelCaps::DEFAULT,
    };
    let morph = MorphConfig::default()
      .with_morph_speed(self.morph_speed)
      .with_caps(caps);

    Ok(ViewerSettings {
      pattern,
      level: self.level,
      morph,
      width: self.width,
      height: self.height,
      jitter: !self.no_jitter,
    })
  }
}
