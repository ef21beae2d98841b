use std::collections::BTreeSet;
use std::fmt::Write;

use glam::{Mat4, Vec3};
use voxedit_common::{EntityId, Rgba};
use voxedit_scene::{Camera, MeshHandle, Scene, SceneEvent};

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::for_viewport(1280.0, 760.0)
    }
}

impl Projection {
    /// 45 degree projection for a viewport of the given pixel size.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        Self {
            fov_y_degrees: 45.0,
            aspect: if height > 0.0 { width / height } else { 1.0 },
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Camera/view configuration for one frame, derived from the scene camera.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point one unit along the camera's forward vector.
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
}

impl Default for RenderView {
    fn default() -> Self {
        Self::from_camera(&Camera::default(), Projection::default())
    }
}

impl RenderView {
    pub fn from_camera(camera: &Camera, projection: Projection) -> Self {
        Self {
            eye: camera.position,
            target: camera.position + camera.forward(),
            up: camera.up(),
            projection,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection times view.
    pub fn view_projection(&self) -> Mat4 {
        self.projection.matrix() * self.view_matrix()
    }
}

/// Everything a backend needs to draw one cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub id: EntityId,
    pub mesh: MeshHandle,
    pub model: Mat4,
    pub color: Rgba,
    pub selected: bool,
}

/// Draw items for every drawable entity, in collection order.
pub fn draw_list(scene: &Scene) -> Vec<DrawItem> {
    scene
        .entities()
        .iter()
        .filter_map(|e| {
            Some(DrawItem {
                id: e.id(),
                mesh: e.mesh()?,
                model: e.model_transform(),
                color: e.material.color,
                selected: e.is_selected,
            })
        })
        .collect()
}

/// Mesh handles that changed in one [`MeshTracker::sync`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshChanges {
    pub uploaded: Vec<MeshHandle>,
    pub released: Vec<MeshHandle>,
}

/// Tracks which mesh handles a backend currently holds resources for.
///
/// Fed from [`Scene::drain_events`]; a backend uploads geometry for
/// `uploaded` and frees buffers for `released`.
#[derive(Debug, Default)]
pub struct MeshTracker {
    live: BTreeSet<MeshHandle>,
}

impl MeshTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, mesh: MeshHandle) -> bool {
        self.live.contains(&mesh)
    }

    pub fn sync(&mut self, scene: &Scene, events: &[SceneEvent]) -> MeshChanges {
        let mut changes = MeshChanges::default();
        for event in events {
            match event {
                SceneEvent::Added { id } => {
                    let Some(mesh) = scene.get(*id).and_then(|e| e.mesh()) else {
                        continue;
                    };
                    if self.live.insert(mesh) {
                        changes.uploaded.push(mesh);
                    }
                }
                SceneEvent::Removed {
                    mesh: Some(mesh), ..
                } => {
                    if self.live.remove(mesh) {
                        changes.released.push(*mesh);
                    }
                }
                SceneEvent::Removed { mesh: None, .. } | SceneEvent::Cleared { .. } => {}
            }
        }
        if !changes.uploaded.is_empty() || !changes.released.is_empty() {
            tracing::trace!(
                uploaded = changes.uploaded.len(),
                released = changes.released.len(),
                live = self.live.len(),
                "mesh set changed"
            );
        }
        changes
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene and a view, then produces output. It never
/// mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene and view.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Debug text renderer: headless stand-in for a GPU backend.
///
/// Lists the camera and every entity, one line each. Placeholders are listed
/// but marked as having no mesh.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let camera = scene.camera();
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Scene (entities={}, selected={}) ===",
            scene.entity_count(),
            scene.selected_count()
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) theta={:.1} phi={:.1} fov={:.0}",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            camera.theta(),
            camera.phi(),
            view.projection.fov_y_degrees
        );

        for (index, entity) in scene.entities().iter().enumerate() {
            let p = entity.position;
            let [r, g, b, a] = entity.material.color.to_array();
            let _ = write!(
                out,
                "  {index:>3} [{}] {:<6} pos=({:.2}, {:.2}, {:.2}) yaw={:.1} rgba=({r:.2}, {g:.2}, {b:.2}, {a:.2})",
                entity.id().short(),
                entity.kind().tag(),
                p.x,
                p.y,
                p.z,
                entity.eulers.y,
            );
            if !entity.has_drawable() {
                out.push_str(" (no mesh)");
            }
            if entity.is_selected {
                out.push_str(" *");
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_renderer_empty_scene() {
        let scene = Scene::new();
        let output = DebugTextRenderer::new().render(&scene, &RenderView::default());

        assert!(output.contains("entities=0"));
        assert!(output.contains("eye=(0.0, 0.0, 2.0)"));
        assert!(output.contains("fov=45"));
    }

    #[test]
    fn debug_renderer_lists_every_entity() {
        let mut scene = Scene::new();
        scene.add_cube(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        scene.add_placeholder(Vec3::ZERO, Vec3::ZERO, Rgba::WHITE);

        let output = DebugTextRenderer::new().render(&scene, &RenderView::default());
        assert!(output.contains("entities=2, selected=1"));
        assert!(output.contains("CUBE   pos=(1.00, 2.00, 3.00)"));
        assert!(output.contains("ENTITY"));
        assert!(output.contains("(no mesh)"));
        assert_eq!(output.lines().filter(|l| l.ends_with('*')).count(), 1);
    }

    #[test]
    fn view_follows_camera() {
        let mut scene = Scene::new();
        scene.spin_camera(90.0, 0.0);
        let view = RenderView::from_camera(scene.camera(), Projection::default());

        assert!((view.target - Vec3::new(0.0, 1.0, 2.0)).length() < 1e-5);
        assert_eq!(view.view_matrix(), scene.camera().view_matrix());
        // the eye maps to the origin of view space
        let eye = view.view_matrix().transform_point3(view.eye);
        assert!(eye.length() < 1e-5);
    }

    #[test]
    fn projection_defaults() {
        let projection = Projection::default();
        assert_eq!(projection.fov_y_degrees, 45.0);
        assert!((projection.aspect - 1280.0 / 760.0).abs() < 1e-6);
        assert_eq!((projection.near, projection.far), (0.1, 100.0));
        assert_eq!(Projection::for_viewport(100.0, 0.0).aspect, 1.0);
    }

    #[test]
    fn draw_list_skips_placeholders() {
        let mut scene = Scene::new();
        let a = scene.add_cube(Vec3::new(0.0, 0.0, -3.0), Vec3::ZERO);
        scene.add_placeholder(Vec3::ONE, Vec3::ZERO, Rgba::WHITE);
        let b = scene.add_cube_colored(Vec3::X, Vec3::ZERO, Rgba::WHITE);

        let items = draw_list(&scene);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, a);
        assert_eq!(items[1].id, b);
        assert_ne!(items[0].mesh, items[1].mesh);
        assert_eq!(items[1].color, Rgba::WHITE);
        assert_eq!(
            items[0].model.transform_point3(Vec3::ZERO),
            Vec3::new(0.0, 0.0, -3.0)
        );
    }

    #[test]
    fn mesh_tracker_follows_scene_events() {
        let mut scene = Scene::new();
        let mut tracker = MeshTracker::new();
        let a = scene.add_cube(Vec3::ZERO, Vec3::ZERO);
        scene.add_cube(Vec3::X, Vec3::ZERO);
        scene.add_placeholder(Vec3::Y, Vec3::ZERO, Rgba::WHITE);

        let events = scene.drain_events();
        let changes = tracker.sync(&scene, &events);
        assert_eq!(changes.uploaded.len(), 2);
        assert_eq!(tracker.live_count(), 2);

        let mesh = scene.get(a).and_then(|e| e.mesh()).unwrap();
        scene.remove_entity(a);
        let events = scene.drain_events();
        let changes = tracker.sync(&scene, &events);
        assert_eq!(changes.released, vec![mesh]);
        assert!(!tracker.is_live(mesh));

        scene.clear();
        let events = scene.drain_events();
        tracker.sync(&scene, &events);
        assert_eq!(tracker.live_count(), 0);
    }
}
