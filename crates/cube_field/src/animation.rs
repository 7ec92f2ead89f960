//! Per-frame wobble applied to cubes just before drawing.
//!
//! Each cube drifts on three sine waves and pulses in size, phase-shifted by
//! its position so neighbours move out of step. Cached and blended fields are
//! never touched; this only maps a cube to its displayed pose at `time`.

use glam::Vec3;

use crate::types::Cube;

/// Wobble parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JitterConfig {
  /// Positional amplitude in world units.
  pub amplitude: f32,
  /// Angular frequency per axis (rad/s).
  pub frequencies: Vec3,
  /// Phase multiplier per axis.
  pub phase_scales: Vec3,
  /// Relative size pulse amplitude.
  pub scale_amplitude: f32,
  pub scale_frequency: f32,
  pub scale_phase: f32,
}

impl JitterConfig {
  /// No movement, cubes drawn as generated.
  pub const STILL: Self = Self {
    amplitude: 0.0,
    frequencies: Vec3::ZERO,
    phase_scales: Vec3::ZERO,
    scale_amplitude: 0.0,
    scale_frequency: 0.0,
    scale_phase: 0.0,
  };
}

impl Default for JitterConfig {
  fn default() -> Self {
    Self {
      amplitude: 0.2,
      frequencies: Vec3::new(1.5, 1.7, 1.3),
      phase_scales: Vec3::new(1.0, 0.7, 1.3),
      scale_amplitude: 0.3,
      scale_frequency: 2.0,
      scale_phase: 0.3,
    }
  }
}

/// Displayed pose of `cube` at `time` seconds.
#[inline]
pub fn animate(cube: &Cube, time: f32, config: &JitterConfig) -> Cube {
  let c = cube.center;
  let phase = (c.x + c.y + c.z) * 0.5;
  let wave = config.frequencies * time + config.phase_scales * phase;
  let offset = Vec3::new(wave.x.sin(), wave.y.sin(), wave.z.sin()) * config.amplitude;
  let scale =
    1.0 + config.scale_amplitude * (config.scale_frequency * time + config.scale_phase * phase).sin();

  Cube {
    center: c + offset,
    size: cube.size * scale,
  }
}
