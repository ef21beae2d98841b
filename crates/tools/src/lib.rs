//! Developer Tooling: scene inspector and the object list shown beside the viewport.
//!
//! # Invariants
//! - Tools read the scene; the only writes are selection toggles.

mod inspector;

pub use inspector::{EntityInfo, ObjectList, ObjectListEntry, SceneInspector, SceneSummary};

pub fn crate_info() -> &'static str {
    "voxedit-tools v0.1.0"
}
