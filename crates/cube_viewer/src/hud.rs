//! egui overlay with frame timing, morph state and cache counters.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use cube_field_bevy::{CubeFieldState, OrbitCamera};

pub struct HudPlugin;

impl Plugin for HudPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_resource::<HudWindow>()
      .add_systems(Update, toggle_hud)
      .add_systems(EguiPrimaryContextPass, render_hud);
  }
}

/// HUD placement and visibility (F1 toggles).
#[derive(Resource)]
pub struct HudWindow {
  /// Offset from the top-left corner.
  pub offset: egui::Vec2,
  pub visible: bool,
}

impl Default for HudWindow {
  fn default() -> Self {
    Self {
      offset: egui::vec2(10.0, 10.0),
      visible: true,
    }
  }
}

fn toggle_hud(keyboard: Res<ButtonInput<KeyCode>>, mut window: ResMut<HudWindow>) {
  if keyboard.just_pressed(KeyCode::F1) {
    window.visible = !window.visible;
  }
}

fn row(ui: &mut egui::Ui, label: &str, value: String) {
  ui.horizontal(|ui| {
    ui.label(label);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
      ui.label(value);
    });
  });
}

fn render_hud(
  mut contexts: EguiContexts,
  window: Res<HudWindow>,
  state: Res<CubeFieldState>,
  camera: Query<&OrbitCamera>,
  diagnostics: Res<DiagnosticsStore>,
) {
  if !window.visible {
    return;
  }

  let Ok(ctx) = contexts.ctx_mut() else {
    return;
  };

  let morph = &state.morph;
  let stats = state.cache_stats();

  egui::Window::new("Cubes")
    .anchor(egui::Align2::LEFT_TOP, window.offset)
    .resizable(false)
    .collapsible(false)
    .title_bar(false)
    .show(ctx, |ui| {
      ui.set_min_width(160.0);

      if let Some(fps) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
      {
        row(ui, "FPS:", format!("{fps:.0}"));
      }
      if let Some(frame) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FRAME_TIME)
        .and_then(|d| d.smoothed())
      {
        row(ui, "Frame:", format!("{frame:.2} ms"));
      }

      ui.separator();
      row(
        ui,
        "Pattern:",
        format!("{} {}", morph.pattern().index(), morph.pattern()),
      );
      row(ui, "Level:", format!("{:.2}", morph.current_level()));
      row(
        ui,
        "Target:",
        format!("{:.2} / {}", morph.target_level(), morph.max_level()),
      );
      row(ui, "Cubes:", state.field.len().to_string());
      row(ui, "Extent:", format!("{:.2}", state.field.extent()));
      if let Ok(orbit) = camera.single() {
        row(ui, "Distance:", format!("{:.1}", orbit.distance));
      }

      ui.separator();
      row(ui, "Cached:", state.cache.len().to_string());
      row(ui, "Hits:", stats.hits.to_string());
      row(ui, "Misses:", stats.misses.to_string());

      ui.separator();
      ui.label(
        egui::RichText::new("1-4 pattern | LMB drag level | MMB orbit | wheel/Q/E zoom | Esc quit")
          .size(11.0)
          .color(egui::Color32::GRAY),
      );
    });
}
