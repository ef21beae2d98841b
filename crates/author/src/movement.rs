//! Screen and keyboard math for the free-flying camera and axis drags.
//!
//! Angles are degrees. Cursor coordinates are window pixels, origin top-left.

use glam::{Vec2, Vec3};
use voxedit_common::{Axis, snap_to_grid};
use voxedit_input::MoveKeys;

/// Heading offset, relative to camera yaw, for a movement key combination.
///
/// Bits are forward=1, left=2, back=4, right=8. Combinations where opposite
/// keys cancel out completely have no entry.
pub fn walk_offset(combo: u8) -> Option<f32> {
    let offset = match combo {
        1 | 11 => 0.0,
        2 | 7 => 90.0,
        3 => 45.0,
        4 | 14 => 180.0,
        6 => 135.0,
        8 | 13 => 270.0,
        9 => 315.0,
        12 => 225.0,
        _ => return None,
    };
    Some(offset)
}

/// Horizontal camera displacement for one frame, or `None` when not walking.
pub fn walk_delta(yaw: f32, keys: MoveKeys, rate: f32) -> Option<Vec3> {
    let heading = (yaw + walk_offset(keys.combo())?).to_radians();
    Some(rate * Vec3::new(heading.cos(), heading.sin(), 0.0))
}

/// Yaw and pitch change from the cursor's deviation from the viewport center.
pub fn look_delta(cursor: Vec2, viewport: Vec2, rate: f32, sensitivity: f32) -> (f32, f32) {
    let deviation = viewport * 0.5 - cursor;
    (
        rate * deviation.x * sensitivity,
        rate * deviation.y * sensitivity,
    )
}

/// Cursor position mapped to [-1, 1] on both axes, +y pointing down.
pub fn normalized_cursor(cursor: Vec2, viewport: Vec2) -> Vec2 {
    (cursor / viewport - Vec2::splat(0.5)) * 2.0
}

/// Snapped world coordinate for a drag along `axis`.
///
/// X follows the horizontal screen axis. Y and Z both follow the vertical
/// screen axis, with up on screen being positive.
pub fn drag_target(cursor: Vec2, viewport: Vec2, axis: Axis, reach: f32, grid: f32) -> f32 {
    let ndc = normalized_cursor(cursor, viewport);
    let screen = match axis {
        Axis::X => ndc.x,
        Axis::Y | Axis::Z => -ndc.y,
    };
    snap_to_grid(screen * reach, grid)
}
