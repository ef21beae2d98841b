//! Input: the per-frame sample the editor core consumes, plus frame timing.
//!
//! # Invariants
//! - The core never polls devices; adapters build one `FrameInput` per frame.
//! - Triggers are edge-triggered (true on the frame they were pressed);
//!   movement keys and modifiers report held state.

#[cfg(feature = "desktop")]
pub mod desktop;
pub mod frame;
pub mod timing;

pub use frame::{FrameInput, MoveKeys};
pub use timing::FrameTiming;

pub fn crate_info() -> &'static str {
    "voxedit-input v0.1.0"
}
