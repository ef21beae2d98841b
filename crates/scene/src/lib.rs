//! Scene kernel: the free-flying camera, cube entities, and the scene that owns them.
//!
//! # Invariants
//! - Every mutation of entities or camera flows through `Scene`.
//! - Insertion order is display order and serialization order.
//! - Selection is a per-entity flag; the selected set is always derived, never stored.

pub mod camera;
pub mod entity;
pub mod scene;

pub use camera::Camera;
pub use entity::{Entity, EntityKind, Material, MeshHandle};
pub use scene::{Scene, SceneEvent};

pub fn crate_info() -> &'static str {
    "voxedit-scene v0.1.0"
}
