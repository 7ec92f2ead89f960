//! cube_viewer - interactive procedural cube fields
//!
//! Controls:
//! - 1-4: Lattice, Fractal, Stochastic, Spherical
//! - Left drag: change level
//! - Middle drag: orbit
//! - Wheel, Q/E: zoom
//! - F1: toggle HUD
//! - Esc: quit

mod config;
mod hud;

use anyhow::{bail, Result};
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiPlugin;
use clap::Parser;
use cube_field::{JitterConfig, Patterns};
use cube_field_bevy::{
  cube_field_camera_bundle, CubeFieldPlugin, CubeFieldState, CubeFieldStyle, OrbitCamera,
};

use config::{ViewerArgs, ViewerSettings};
use hud::HudPlugin;

fn main() -> Result<()> {
  let settings = ViewerArgs::parse().into_settings()?;

  let mut state = CubeFieldState::new(settings.pattern, settings.morph.clone(), Patterns::default());
  state.morph.snap_to(settings.level);
  let style = CubeFieldStyle {
    jitter: settings.jitter.then(JitterConfig::default),
    ..default()
  };

  let exit = App::new()
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        title: "cubes".into(),
        resolution: (settings.width, settings.height).into(),
        ..default()
      }),
      ..default()
    }))
    .add_plugins(FrameTimeDiagnosticsPlugin::default())
    .add_plugins(EguiPlugin::default())
    .insert_resource(state)
    .insert_resource(style)
    .insert_resource(settings)
    .add_plugins(CubeFieldPlugin)
    .add_plugins(HudPlugin)
    .add_systems(Startup, (spawn_camera, prewarm_levels))
    .add_systems(Update, (exit_on_escape, update_window_title))
    .run();

  if let AppExit::Error(code) = exit {
    bail!("viewer exited with code {code}");
  }
  Ok(())
}

fn spawn_camera(mut commands: Commands) {
  commands.spawn(cube_field_camera_bundle(OrbitCamera::default()));
}

/// Generate the levels around the starting level before the first frame.
fn prewarm_levels(settings: Res<ViewerSettings>, mut state: ResMut<CubeFieldState>) {
  let pattern = state.morph.pattern();
  let last = (settings.level.ceil() as u32 + 1).min(state.morph.max_level());
  let generated = state.cache.prewarm(pattern, 0..=last);
  state.refresh();
  info!(
    "[Viewer] Prewarmed {} levels of {} ({} cubes at level {:.2})",
    generated,
    pattern,
    state.field.len(),
    state.morph.current_level()
  );
}

fn exit_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
  if keyboard.just_pressed(KeyCode::Escape) {
    info!("[Viewer] Quit");
    exit.write(AppExit::Success);
  }
}

fn update_window_title(
  state: Res<CubeFieldState>,
  camera: Query<&OrbitCamera>,
  mut window: Query<&mut Window, With<PrimaryWindow>>,
) {
  let (Ok(orbit), Ok(mut window)) = (camera.single(), window.single_mut()) else {
    return;
  };
  let title = format!(
    "cubes | mode={} level={:.2} dist={:.1}",
    state.morph.pattern().index(),
    state.morph.current_level(),
    orbit.distance
  );
  if window.title != title {
    window.title = title;
  }
}
