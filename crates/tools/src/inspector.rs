use serde::Serialize;
use voxedit_common::{EntityId, Rgba};
use voxedit_scene::{Scene, SceneEvent};

/// Scene inspector for developer tooling.
///
/// Read-only queries against the scene for debugging and the property panel.
pub struct SceneInspector;

impl SceneInspector {
    /// Produce a summary of the scene state.
    pub fn summary(scene: &Scene) -> SceneSummary {
        let camera = scene.camera();
        let cubes = scene.entities().iter().filter(|e| e.is_cube()).count();
        SceneSummary {
            entity_count: scene.entity_count(),
            cube_count: cubes,
            placeholder_count: scene.entity_count() - cubes,
            selected_count: scene.selected_count(),
            pending_events: scene.events().len(),
            camera_position: camera.position.to_array(),
            camera_theta: camera.theta(),
            camera_phi: camera.phi(),
        }
    }

    pub fn inspect_entity(scene: &Scene, id: EntityId) -> Option<EntityInfo> {
        let index = scene.index_of(id)?;
        let entity = scene.get_at(index)?;
        Some(EntityInfo {
            id,
            index,
            kind: entity.kind().tag(),
            position: entity.position.to_array(),
            eulers: entity.eulers.to_array(),
            color: entity.material.color,
            selected: entity.is_selected,
            has_mesh: entity.has_drawable(),
        })
    }

    /// List all entity IDs in collection order.
    pub fn list_entities(scene: &Scene) -> Vec<EntityId> {
        scene.entities().iter().map(|e| e.id()).collect()
    }
}

/// Summary of scene state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSummary {
    pub entity_count: usize,
    pub cube_count: usize,
    pub placeholder_count: usize,
    pub selected_count: usize,
    pub pending_events: usize,
    pub camera_position: [f32; 3],
    pub camera_theta: f32,
    pub camera_phi: f32,
}

impl std::fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [x, y, z] = self.camera_position;
        write!(
            f,
            "Scene: entities={} (cubes={} placeholders={}) selected={} camera=({x:.2}, {y:.2}, {z:.2}) theta={:.1} phi={:.1}",
            self.entity_count,
            self.cube_count,
            self.placeholder_count,
            self.selected_count,
            self.camera_theta,
            self.camera_phi,
        )
    }
}

/// Detailed info about a single entity.
#[derive(Debug, Clone, Serialize)]
pub struct EntityInfo {
    pub id: EntityId,
    pub index: usize,
    pub kind: &'static str,
    pub position: [f32; 3],
    pub eulers: [f32; 3],
    pub color: Rgba,
    pub selected: bool,
    pub has_mesh: bool,
}

impl std::fmt::Display for EntityInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.color.to_array();
        write!(
            f,
            "{} #{} [{}] pos=({:.2}, {:.2}, {:.2}) eulers=({:.1}, {:.1}, {:.1}) rgba=({r:.2}, {g:.2}, {b:.2}, {a:.2}){}",
            self.kind,
            self.index,
            self.id.short(),
            self.position[0],
            self.position[1],
            self.position[2],
            self.eulers[0],
            self.eulers[1],
            self.eulers[2],
            if self.selected { " selected" } else { "" },
        )
    }
}

/// One row of the object list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectListEntry {
    pub id: EntityId,
    /// `voxel.<index>`, with the index in collection order.
    pub label: String,
    pub selected: bool,
}

/// The object list panel: one labelled row per entity.
///
/// Rebuilt from the scene whenever entities are added or removed; selection
/// flags are refreshed every sync.
#[derive(Debug, Clone, Default)]
pub struct ObjectList {
    entries: Vec<ObjectListEntry>,
}

impl ObjectList {
    pub fn new(scene: &Scene) -> Self {
        let mut list = Self::default();
        list.rebuild(scene);
        list
    }

    pub fn entries(&self) -> &[ObjectListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bring the list up to date. Returns true if rows were rebuilt.
    pub fn sync(&mut self, scene: &Scene, events: &[SceneEvent]) -> bool {
        let structural = !events.is_empty() || self.entries.len() != scene.entity_count();
        if structural {
            self.rebuild(scene);
        } else {
            for (entry, entity) in self.entries.iter_mut().zip(scene.entities()) {
                entry.selected = entity.is_selected;
            }
        }
        structural
    }

    fn rebuild(&mut self, scene: &Scene) {
        self.entries = scene
            .entities()
            .iter()
            .enumerate()
            .map(|(index, entity)| ObjectListEntry {
                id: entity.id(),
                label: format!("voxel.{index}"),
                selected: entity.is_selected,
            })
            .collect();
        tracing::trace!(rows = self.entries.len(), "object list rebuilt");
    }

    /// Flip the selection of the entity in row `index`.
    ///
    /// Returns the new selection state, or `None` for an out-of-range row.
    pub fn toggle(&mut self, scene: &mut Scene, index: usize) -> Option<bool> {
        let entity = scene.get_at_mut(index)?;
        entity.is_selected = !entity.is_selected;
        let selected = entity.is_selected;
        if let Some(entry) = self.entries.get_mut(index) {
            entry.selected = selected;
        }
        Some(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn summary_empty_scene() {
        let summary = SceneInspector::summary(&Scene::new());
        assert_eq!(summary.entity_count, 0);
        assert_eq!(summary.camera_position, [0.0, 0.0, 2.0]);
    }

    #[test]
    fn summary_counts_kinds() {
        let mut scene = Scene::new();
        scene.add_cube(Vec3::ZERO, Vec3::ZERO);
        scene.add_cube(Vec3::X, Vec3::ZERO);
        scene.add_placeholder(Vec3::Y, Vec3::ZERO, Rgba::WHITE);

        let summary = SceneInspector::summary(&scene);
        assert_eq!(summary.entity_count, 3);
        assert_eq!(summary.cube_count, 2);
        assert_eq!(summary.placeholder_count, 1);
        assert_eq!(summary.selected_count, 2);
        assert_eq!(summary.pending_events, 3);
    }

    #[test]
    fn summary_display_and_json() {
        let summary = SceneInspector::summary(&Scene::new());
        let s = format!("{summary}");
        assert!(s.contains("entities=0"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["entity_count"], 0);
    }

    #[test]
    fn inspect_entity_found() {
        let mut scene = Scene::new();
        scene.add_placeholder(Vec3::ZERO, Vec3::ZERO, Rgba::WHITE);
        let id = scene.add_cube(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);

        let info = SceneInspector::inspect_entity(&scene, id).unwrap();
        assert_eq!(info.index, 1);
        assert_eq!(info.kind, "CUBE");
        assert_eq!(info.position, [1.0, 2.0, 3.0]);
        assert!(info.has_mesh);
        assert!(info.to_string().starts_with("CUBE #1"));
    }

    #[test]
    fn inspect_entity_not_found() {
        let scene = Scene::new();
        assert!(SceneInspector::inspect_entity(&scene, EntityId::new()).is_none());
    }

    #[test]
    fn list_entities_in_order() {
        let mut scene = Scene::new();
        let id1 = scene.add_cube(Vec3::ZERO, Vec3::ZERO);
        let id2 = scene.add_cube(Vec3::ZERO, Vec3::ZERO);
        assert_eq!(SceneInspector::list_entities(&scene), vec![id1, id2]);
    }

    #[test]
    fn object_list_labels_follow_order() {
        let mut scene = Scene::new();
        scene.add_cube(Vec3::ZERO, Vec3::ZERO);
        let middle = scene.add_cube(Vec3::X, Vec3::ZERO);
        scene.add_cube(Vec3::Y, Vec3::ZERO);
        let mut list = ObjectList::new(&scene);
        let labels: Vec<_> = list.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["voxel.0", "voxel.1", "voxel.2"]);

        scene.drain_events();
        scene.remove_entity(middle);
        let events = scene.drain_events();
        assert!(list.sync(&scene, &events));
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[1].label, "voxel.1");
    }

    #[test]
    fn toggle_selection_by_row() {
        let mut scene = Scene::new();
        let a = scene.add_cube(Vec3::ZERO, Vec3::ZERO);
        let mut list = ObjectList::new(&scene);

        assert_eq!(list.toggle(&mut scene, 0), Some(false));
        assert!(!scene.get(a).unwrap().is_selected);
        assert!(!list.entries()[0].selected);
        assert_eq!(list.toggle(&mut scene, 0), Some(true));
        assert_eq!(list.toggle(&mut scene, 5), None);
    }

    #[test]
    fn sync_refreshes_selection_without_rebuild() {
        let mut scene = Scene::new();
        let a = scene.add_cube(Vec3::ZERO, Vec3::ZERO);
        let mut list = ObjectList::new(&scene);
        scene.drain_events();

        scene.set_selected(a, false);
        assert!(!list.sync(&scene, &[]));
        assert!(!list.entries()[0].selected);
    }
}
