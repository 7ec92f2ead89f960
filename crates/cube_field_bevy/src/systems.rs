//! Per-frame systems: input to morph state, level easing, camera, drawing.

use bevy::prelude::*;
use cube_field::{animate, room_outline, PatternId};

use crate::components::{OrbitCamera, OrbitCameraInput};
use crate::resources::{CubeFieldState, CubeFieldStyle};

/// Number keys 1-4 select the pattern.
const PATTERN_KEYS: [(KeyCode, PatternId); 4] = [
  (KeyCode::Digit1, PatternId::Lattice),
  (KeyCode::Digit2, PatternId::Fractal),
  (KeyCode::Digit3, PatternId::Stochastic),
  (KeyCode::Digit4, PatternId::Spherical),
];

// =============================================================================
// Startup
// =============================================================================

/// Apply clear colour and gizmo line width from the style.
pub fn apply_style(
  mut commands: Commands,
  style: Res<CubeFieldStyle>,
  mut config_store: ResMut<GizmoConfigStore>,
) {
  commands.insert_resource(ClearColor(style.clear_color));
  let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
  config.line.width = style.line_width;
}

// =============================================================================
// Input
// =============================================================================

pub fn handle_pattern_keys(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<CubeFieldState>) {
  for (key, pattern) in PATTERN_KEYS {
    if keyboard.just_pressed(key) && state.morph.pattern() != pattern {
      state.morph.set_pattern(pattern);
      info!(
        "[CubeField] Pattern: {} (max level {})",
        pattern,
        state.morph.max_level()
      );
    }
  }
}

/// Left-drag moves the target level.
pub fn apply_level_drag(query: Query<&OrbitCameraInput>, mut state: ResMut<CubeFieldState>) {
  let Ok(input) = query.single() else {
    return;
  };
  if input.dragging_level && input.pointer_delta.x != 0.0 {
    state.morph.drag(input.pointer_delta.x);
  }
}

// =============================================================================
// Morph
// =============================================================================

/// Ease the current level toward the target and re-blend the field.
pub fn advance_morph(time: Res<Time>, mut state: ResMut<CubeFieldState>) {
  state.morph.advance(time.delta_secs());
  state.refresh();
}

// =============================================================================
// Camera
// =============================================================================

pub fn update_orbit_camera(
  keyboard: Res<ButtonInput<KeyCode>>,
  state: Res<CubeFieldState>,
  mut query: Query<(&mut OrbitCamera, &mut Transform, &OrbitCameraInput)>,
) {
  let Ok((mut orbit, mut transform, input)) = query.single_mut() else {
    return;
  };

  if input.orbiting {
    orbit.orbit(input.pointer_delta);
  }
  if input.scroll != 0.0 {
    orbit.scroll(input.scroll);
  }
  if keyboard.just_pressed(KeyCode::KeyQ) {
    orbit.step_zoom(true);
  }
  if keyboard.just_pressed(KeyCode::KeyE) {
    orbit.step_zoom(false);
  }

  orbit.keep_clear_of(state.field.extent());
  *transform = orbit.transform();
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the room outline and every cube as a wireframe box.
pub fn draw_cube_field(
  mut gizmos: Gizmos,
  time: Res<Time>,
  state: Res<CubeFieldState>,
  style: Res<CubeFieldStyle>,
) {
  let room = room_outline(state.field.extent());
  gizmos.linestrip(closed(&room.floor), style.floor_color);
  for wall in room.walls() {
    gizmos.linestrip(closed(wall), style.wall_color);
  }

  let t = time.elapsed_secs();
  for cube in state.field.iter() {
    let posed = match &style.jitter {
      Some(jitter) => animate(cube, t, jitter),
      None => *cube,
    };
    gizmos.cuboid(
      Transform::from_translation(posed.center).with_scale(Vec3::splat(posed.size)),
      style.cube_color,
    );
  }
}

/// Quad corners with the first corner repeated to close the loop.
fn closed(quad: &[Vec3; 4]) -> [Vec3; 5] {
  [quad[0], quad[1], quad[2], quad[3], quad[0]]
}
