use glam::Vec3;
use serde::{Deserialize, Serialize};
use voxedit_common::{EntityId, Rgba};

use crate::camera::Camera;
use crate::entity::{Entity, EntityKind, Material, MeshHandle};

/// An event record produced by every structural change to the scene.
///
/// Render and UI adapters drain these to free GPU resources and rebuild lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    /// Entity appended at the end of the collection.
    Added { id: EntityId },
    /// Entity removed. Carries the mesh handle it released, if any.
    Removed {
        id: EntityId,
        mesh: Option<MeshHandle>,
    },
    /// The whole collection was dropped; each entity also produced `Removed`.
    Cleared { count: usize },
}

/// The editable scene: an ordered entity collection plus the camera.
///
/// All mutations go through explicit operations here, so the interaction
/// layer never touches the camera or the collection directly.
///
/// Not `Clone`: every mesh handle belongs to exactly one entity. Events pile up
/// until a consumer calls [`Scene::drain_events`], which frame drivers do once
/// per frame.
#[derive(Debug, Default)]
pub struct Scene {
    entities: Vec<Entity>,
    camera: Camera,
    next_mesh: u64,
    events: Vec<SceneEvent>,
}

impl Scene {
    /// Empty scene with the camera at its default position.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_camera(camera: Camera) -> Self {
        Self {
            camera,
            ..Self::default()
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Entities in insertion order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    pub fn get_at(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    pub fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id() == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    /// Drain and return pending scene events.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only access to pending events.
    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    /// Add a default gray cube. See [`Scene::add_cube_colored`].
    pub fn add_cube(&mut self, position: Vec3, eulers: Vec3) -> EntityId {
        self.add_cube_colored(position, eulers, Rgba::DEFAULT_GRAY)
    }

    /// Append a cube with its own material and mesh, and select it.
    ///
    /// Other entities keep their selection state.
    pub fn add_cube_colored(&mut self, position: Vec3, eulers: Vec3, color: Rgba) -> EntityId {
        let mesh = self.allocate_mesh();
        let id = self.push(EntityKind::Cube { mesh: Some(mesh) }, position, eulers, color);
        if let Some(entity) = self.entities.last_mut() {
            entity.is_selected = true;
        }
        tracing::debug!(id = %id.short(), ?position, "added cube");
        id
    }

    /// Append a pose-only placeholder. Placeholders start unselected and own no mesh.
    pub fn add_placeholder(&mut self, position: Vec3, eulers: Vec3, color: Rgba) -> EntityId {
        let id = self.push(EntityKind::Placeholder, position, eulers, color);
        tracing::debug!(id = %id.short(), ?position, "added placeholder");
        id
    }

    /// Append a selected cube with the pose and color of `source`.
    ///
    /// The copy always goes through [`Scene::add_cube_colored`], so it gets a
    /// fresh identity and mesh even when `source` is a placeholder.
    pub fn duplicate(&mut self, source: EntityId) -> Option<EntityId> {
        let (position, eulers, color) = self
            .get(source)
            .map(|e| (e.position, e.eulers, e.material.color))?;
        Some(self.add_cube_colored(position, eulers, color))
    }

    /// Remove an entity by handle. Returns false for unknown or already-removed handles.
    pub fn remove_entity(&mut self, id: EntityId) -> bool {
        match self.index_of(id) {
            Some(index) => self.remove_entity_at(index),
            None => false,
        }
    }

    /// Remove the entity at `index`, preserving the order of the rest.
    pub fn remove_entity_at(&mut self, index: usize) -> bool {
        if index >= self.entities.len() {
            return false;
        }
        let mut entity = self.entities.remove(index);
        self.release(&mut entity);
        true
    }

    /// Remove every entity, releasing their resources.
    pub fn clear(&mut self) {
        let count = self.entities.len();
        for mut entity in std::mem::take(&mut self.entities) {
            self.release(&mut entity);
        }
        self.events.push(SceneEvent::Cleared { count });
        tracing::debug!(count, "cleared scene");
    }

    /// Handles of all selected entities, in collection order.
    ///
    /// Returns a fresh snapshot; callers may mutate the scene while walking it.
    pub fn selected_entities(&self) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.is_selected)
            .map(Entity::id)
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_selected).count()
    }

    /// Set the selection flag of one entity. Returns false for unknown handles.
    pub fn set_selected(&mut self, id: EntityId, selected: bool) -> bool {
        match self.get_mut(id) {
            Some(entity) => {
                entity.is_selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        for entity in &mut self.entities {
            entity.is_selected = false;
        }
    }

    /// Per-frame idle behavior for every entity, selected or not.
    pub fn update(&mut self, rate: f32) {
        for entity in &mut self.entities {
            entity.idle_update(rate);
        }
    }

    pub fn move_camera(&mut self, delta: Vec3) {
        self.camera.translate(delta);
    }

    pub fn spin_camera(&mut self, d_theta: f32, d_phi: f32) {
        self.camera.spin(d_theta, d_phi);
    }

    fn push(&mut self, kind: EntityKind, position: Vec3, eulers: Vec3, color: Rgba) -> EntityId {
        let id = EntityId::new();
        self.entities
            .push(Entity::new(id, kind, position, eulers, Material::new(color)));
        self.events.push(SceneEvent::Added { id });
        id
    }

    fn allocate_mesh(&mut self) -> MeshHandle {
        let handle = MeshHandle(self.next_mesh);
        self.next_mesh += 1;
        handle
    }

    fn release(&mut self, entity: &mut Entity) {
        let mesh = entity.destroy();
        tracing::debug!(id = %entity.id().short(), ?mesh, "removed entity");
        self.events.push(SceneEvent::Removed {
            id: entity.id(),
            mesh,
        });
    }
}
