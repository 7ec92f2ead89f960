//! Bevy components for the cube-field viewer.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

/// Orbit camera looking at the origin.
///
/// Attach to the camera entity together with the input bundle from
/// [`orbit_camera_input_bundle`](crate::input::orbit_camera_input_bundle).
#[derive(Component, Clone, Debug, PartialEq)]
pub struct OrbitCamera {
  /// Horizontal angle in radians.
  pub yaw: f32,
  /// Vertical angle in radians, kept inside `±pitch_limit`.
  pub pitch: f32,
  /// Distance from the origin.
  pub distance: f32,
  pub min_distance: f32,
  pub max_distance: f32,
  /// Radians per pixel of middle-drag.
  pub orbit_sensitivity: f32,
  /// Distance multiplier per wheel notch toward the origin.
  pub wheel_zoom_in: f32,
  /// Distance multiplier per wheel notch away from the origin.
  pub wheel_zoom_out: f32,
  /// Distance change per Q/E press.
  pub key_zoom_step: f32,
  /// The camera never sits closer than `extent * extent_margin`.
  pub extent_margin: f32,
}

impl Default for OrbitCamera {
  fn default() -> Self {
    Self {
      yaw: 0.9,
      pitch: -0.6,
      distance: 12.0,
      min_distance: 2.0,
      max_distance: 200.0,
      orbit_sensitivity: 0.01,
      wheel_zoom_in: 0.9,
      wheel_zoom_out: 1.1,
      key_zoom_step: 0.5,
      extent_margin: 1.2,
    }
  }
}

impl OrbitCamera {
  /// Pitch stays 0.1 rad short of straight up/down.
  pub const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.1;

  /// Apply a middle-drag of `delta` pixels.
  pub fn orbit(&mut self, delta: Vec2) {
    self.yaw += delta.x * self.orbit_sensitivity;
    self.pitch =
      (self.pitch + delta.y * self.orbit_sensitivity).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
  }

  /// Wheel zoom: positive notches move closer.
  pub fn scroll(&mut self, notches: f32) {
    if notches > 0.0 {
      self.distance = (self.distance * self.wheel_zoom_in).max(self.min_distance);
    } else if notches < 0.0 {
      self.distance = (self.distance * self.wheel_zoom_out).min(self.max_distance);
    }
  }

  /// Q (closer) / E (farther).
  pub fn step_zoom(&mut self, closer: bool) {
    self.distance = if closer {
      (self.distance - self.key_zoom_step).max(self.min_distance)
    } else {
      (self.distance + self.key_zoom_step).min(self.max_distance)
    };
  }

  /// Push the camera out so a field of `extent` stays in front of it.
  pub fn keep_clear_of(&mut self, extent: f32) {
    let floor = extent * self.extent_margin;
    if self.distance < floor {
      self.distance = floor;
    }
  }

  /// Eye position on the orbit sphere.
  pub fn eye(&self) -> Vec3 {
    let (sp, cp) = self.pitch.sin_cos();
    let (sy, cy) = self.yaw.sin_cos();
    Vec3::new(cp * sy, sp, cp * cy) * self.distance
  }

  /// Camera transform looking at the origin with +Y up.
  pub fn transform(&self) -> Transform {
    Transform::from_translation(self.eye()).looking_at(Vec3::ZERO, Vec3::Y)
  }
}

/// Pointer state accumulated by input observers each frame.
#[derive(Component, Default, Debug)]
pub struct OrbitCameraInput {
  /// Mouse motion this frame, in pixels.
  pub pointer_delta: Vec2,
  /// Wheel motion this frame.
  pub scroll: f32,
  /// Middle button held.
  pub orbiting: bool,
  /// Left button held.
  pub dragging_level: bool,
}
