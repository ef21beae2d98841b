//! In-viewport authoring: turns per-frame input into camera motion and scene edits.
//!
//! # Invariants
//! - The editor never touches the camera or the entity collection except through `Scene`.
//! - Move mode acts on a held set of handles captured on entry, never on the live selection.
//! - File errors are logged and reported as events; they never escape `Editor::update`.

mod config;
mod editor;
pub mod material;
pub mod movement;

pub use config::{ConfigError, EditorConfig};
pub use editor::{DefaultFilename, Editor, EditorEvent, FilenamePrompt, InteractionState};
pub use material::{ColorParseError, apply_material, parse_channel, parse_color};

pub fn crate_info() -> &'static str {
    "voxedit-author v0.1.0"
}
