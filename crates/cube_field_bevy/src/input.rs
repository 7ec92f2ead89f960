//! Pointer input for the orbit camera and level dragging.
//!
//! Uses bevy_enhanced_input for mouse bindings. Keyboard shortcuts (pattern
//! keys, Q/E zoom) are read directly in [`crate::systems`].

use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use crate::components::{OrbitCamera, OrbitCameraInput};

// =============================================================================
// Actions
// =============================================================================

/// Pointer motion (mouse delta) - outputs Vec2.
#[derive(Debug, InputAction)]
#[action_output(Vec2)]
pub struct Pointer;

/// Mouse wheel - outputs Vec2.
#[derive(Debug, InputAction)]
#[action_output(Vec2)]
pub struct Scroll;

/// Orbit while held (middle mouse button) - outputs bool.
#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct HoldOrbit;

/// Drag the target level while held (left mouse button) - outputs bool.
#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct HoldLevelDrag;

// =============================================================================
// Input Context
// =============================================================================

/// Input context marker for the orbit camera.
#[derive(Component)]
pub struct OrbitInputContext;

/// Returns a bundle with OrbitCamera, input context, and all action bindings.
/// Use this when spawning the camera entity.
pub fn orbit_camera_input_bundle(orbit: OrbitCamera) -> impl Bundle {
	(
		orbit,
		OrbitCameraInput::default(),
		OrbitInputContext,
		actions!(OrbitInputContext[
			(
				Action::<Pointer>::default(),
				bindings![Binding::mouse_motion()],
			),
			(
				Action::<Scroll>::default(),
				bindings![Binding::mouse_wheel()],
			),
			(
				Action::<HoldOrbit>::default(),
				bindings![MouseButton::Middle],
			),
			(
				Action::<HoldLevelDrag>::default(),
				bindings![MouseButton::Left],
			),
		]),
	)
}

// =============================================================================
// Observers
// =============================================================================

fn on_pointer(trigger: On<Fire<Pointer>>, mut query: Query<&mut OrbitCameraInput>) {
	if let Ok(mut input) = query.get_mut(trigger.context) {
		input.pointer_delta = trigger.value;
	}
}

fn on_pointer_completed(trigger: On<Complete<Pointer>>, mut query: Query<&mut OrbitCameraInput>) {
	if let Ok(mut input) = query.get_mut(trigger.context) {
		input.pointer_delta = Vec2::ZERO;
	}
}

fn on_scroll(trigger: On<Fire<Scroll>>, mut query: Query<&mut OrbitCameraInput>) {
	if let Ok(mut input) = query.get_mut(trigger.context) {
		input.scroll = trigger.value.y;
	}
}

fn on_scroll_completed(trigger: On<Complete<Scroll>>, mut query: Query<&mut OrbitCameraInput>) {
	if let Ok(mut input) = query.get_mut(trigger.context) {
		input.scroll = 0.0;
	}
}

fn on_hold_orbit(trigger: On<Fire<HoldOrbit>>, mut query: Query<&mut OrbitCameraInput>) {
	if let Ok(mut input) = query.get_mut(trigger.context) {
		input.orbiting = trigger.value;
	}
}

fn on_hold_orbit_completed(trigger: On<Complete<HoldOrbit>>, mut query: Query<&mut OrbitCameraInput>) {
	if let Ok(mut input) = query.get_mut(trigger.context) {
		input.orbiting = false;
	}
}

fn on_hold_level_drag(trigger: On<Fire<HoldLevelDrag>>, mut query: Query<&mut OrbitCameraInput>) {
	if let Ok(mut input) = query.get_mut(trigger.context) {
		input.dragging_level = trigger.value;
	}
}

fn on_hold_level_drag_completed(
	trigger: On<Complete<HoldLevelDrag>>,
	mut query: Query<&mut OrbitCameraInput>,
) {
	if let Ok(mut input) = query.get_mut(trigger.context) {
		input.dragging_level = false;
	}
}

// =============================================================================
// Plugin
// =============================================================================

/// Plugin that registers the input context and its observers.
pub struct OrbitInputPlugin;

impl Plugin for OrbitInputPlugin {
	fn build(&self, app: &mut App) {
		app.add_plugins(EnhancedInputPlugin)
			.add_input_context::<OrbitInputContext>();

		// Fire observers - set values when input is active
		app.add_observer(on_pointer)
			.add_observer(on_scroll)
			.add_observer(on_hold_orbit)
			.add_observer(on_hold_level_drag);

		// Complete observers - reset values when input ends
		app.add_observer(on_pointer_completed)
			.add_observer(on_scroll_completed)
			.add_observer(on_hold_orbit_completed)
			.add_observer(on_hold_level_drag_completed);
	}
}
