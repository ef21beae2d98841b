//! Rendering Adapter: renderer-agnostic interface over the scene.
//!
//! # Invariants
//! - Renderers only read the scene; they never mutate entities or the camera.
//! - Entities without a mesh are iterated but never produce a draw item.
//!
//! A GPU backend implements [`Renderer`] and maps [`MeshHandle`]s to buffers
//! through a [`MeshTracker`]. The [`DebugTextRenderer`] is the headless stand-in.
//!
//! [`MeshHandle`]: voxedit_scene::MeshHandle

mod renderer;

pub use renderer::{
    DebugTextRenderer, DrawItem, MeshChanges, MeshTracker, Projection, RenderView, Renderer, draw_list,
};

pub fn crate_info() -> &'static str {
    "voxedit-render v0.1.0"
}
