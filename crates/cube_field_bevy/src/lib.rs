//! Bevy presentation layer for cube_field.
//!
//! Owns the morph driver as a resource, maps pointer and keyboard input to
//! level and camera changes, and draws the blended field with gizmos.

pub mod components;
pub mod input;
pub mod resources;
pub mod systems;

use bevy::prelude::*;
pub use components::*;
pub use input::{orbit_camera_input_bundle, OrbitInputContext, OrbitInputPlugin};
pub use resources::*;

/// Marker for the viewer camera.
#[derive(Component)]
pub struct CubeFieldCamera;

/// Camera entity bundle: perspective camera, orbit controller and input.
pub fn cube_field_camera_bundle(orbit: OrbitCamera) -> impl Bundle {
  let transform = orbit.transform();
  (
    Camera3d::default(),
    Projection::Perspective(PerspectiveProjection {
      fov: 60f32.to_radians(),
      near: 0.1,
      far: 200.0,
      ..default()
    }),
    transform,
    CubeFieldCamera,
    orbit_camera_input_bundle(orbit),
  )
}

/// Per-frame system order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CubeFieldSet {
  Input,
  Morph,
  Camera,
  Draw,
}

/// Bevy plugin for the cube-field viewer.
///
/// Uses `CubeFieldState` and `CubeFieldStyle` if already inserted,
/// otherwise their defaults.
pub struct CubeFieldPlugin;

impl Plugin for CubeFieldPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(OrbitInputPlugin)
      .init_resource::<CubeFieldState>()
      .init_resource::<CubeFieldStyle>()
      .configure_sets(
        Update,
        (
          CubeFieldSet::Input,
          CubeFieldSet::Morph,
          CubeFieldSet::Camera,
          CubeFieldSet::Draw,
        )
          .chain(),
      )
      .add_systems(Startup, systems::apply_style)
      .add_systems(
        Update,
        (
          (systems::handle_pattern_keys, systems::apply_level_drag)
            .chain()
            .in_set(CubeFieldSet::Input),
          systems::advance_morph.in_set(CubeFieldSet::Morph),
          systems::update_orbit_camera.in_set(CubeFieldSet::Camera),
          systems::draw_cube_field.in_set(CubeFieldSet::Draw),
        ),
      );
  }
}
