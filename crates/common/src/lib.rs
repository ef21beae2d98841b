//! Shared types for the voxel editor: entity handles, colors, axes, grid snapping.

mod types;

pub use types::{Axis, EntityId, Rgba, snap_to_grid};

pub fn crate_info() -> &'static str {
    "voxedit-common v0.1.0"
}
