//! Persistence: the flat text scene file.
//!
//! # Invariants
//! - Export writes exactly one line per entity, in collection order.
//! - Import is all-or-nothing: the file is fully decoded before the scene is replaced.
//! - Entity type round-trips (CUBE stays CUBE, ENTITY stays ENTITY).

pub mod format;
mod store;

use std::path::PathBuf;

pub use format::{EntityRecord, RecordKind};
pub use store::{
    DEFAULT_SCENE_DIR, DEFAULT_SCENE_FILE, DEMO_CUBE_POSITION, SceneStore, export_scene,
    import_scene, load_or_seed,
};

/// Errors from reading or writing scene files.
#[derive(Debug, thiserror::Error)]
pub enum SceneFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("scene file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: unknown entity type {tag:?}")]
    UnknownType { line: usize, tag: String },
    #[error("line {line}: field {field} is not a number: {text:?}")]
    NotNumeric {
        line: usize,
        field: usize,
        text: String,
    },
}

pub fn crate_info() -> &'static str {
    "voxedit-persist v0.1.0"
}
