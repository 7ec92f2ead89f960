//! Room outline drawn around a cube field.
//!
//! A floor quad plus back, left and right walls, all sized from the field
//! extent so the room grows and shrinks with the morph.

use glam::Vec3;

/// Room half-width per unit of extent.
pub const ROOM_SCALE: f32 = 2.5;

/// Floor depth and wall height as a fraction of the half-width.
pub const HEIGHT_FRACTION: f32 = 0.6;

/// Closed line loops of the room.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomOutline {
  pub floor: [Vec3; 4],
  pub back_wall: [Vec3; 4],
  pub left_wall: [Vec3; 4],
  pub right_wall: [Vec3; 4],
}

impl RoomOutline {
  pub fn walls(&self) -> [&[Vec3; 4]; 3] {
    [&self.back_wall, &self.left_wall, &self.right_wall]
  }
}

/// Outline for a field of the given extent.
pub fn room_outline(extent: f32) -> RoomOutline {
  let size = extent.max(0.0) * ROOM_SCALE;
  let floor_y = -size * HEIGHT_FRACTION;
  let top = size * HEIGHT_FRACTION;

  RoomOutline {
    floor: [
      Vec3::new(-size, floor_y, -size),
      Vec3::new(size, floor_y, -size),
      Vec3::new(size, floor_y, size),
      Vec3::new(-size, floor_y, size),
    ],
    back_wall: [
      Vec3::new(-size, floor_y, -size),
      Vec3::new(size, floor_y, -size),
      Vec3::new(size, top, -size),
      Vec3::new(-size, top, -size),
    ],
    left_wall: [
      Vec3::new(-size, floor_y, -size),
      Vec3::new(-size, floor_y, size),
      Vec3::new(-size, top, size),
      Vec3::new(-size, top, -size),
    ],
    right_wall: [
      Vec3::new(size, floor_y, -size),
      Vec3::new(size, floor_y, size),
      Vec3::new(size, top, size),
      Vec3::new(size, top, -size),
    ],
  }
}
