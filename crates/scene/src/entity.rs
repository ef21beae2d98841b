use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use voxedit_common::{EntityId, Rgba};

/// Degrees of idle yaw per nominal frame.
pub const IDLE_YAW_STEP: f32 = 0.25;

/// Opaque handle to a render-side mesh resource owned by one entity.
///
/// The render adapter maps handles to GPU buffers and frees them when the
/// scene reports the entity as removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeshHandle(pub u64);

/// Solid RGBA material. Each entity owns exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Material {
    pub color: Rgba,
}

impl Material {
    pub fn new(color: Rgba) -> Self {
        Self { color }
    }
}

/// The variant of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Unit cube with a mesh. The mesh is `None` only after `destroy`.
    Cube { mesh: Option<MeshHandle> },
    /// Pose-only placeholder. Iterable, never drawn.
    Placeholder,
}

impl EntityKind {
    /// Tag used in scene files.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Cube { .. } => "CUBE",
            Self::Placeholder => "ENTITY",
        }
    }
}

/// A placed object: pose, selection flag, material and optional mesh.
///
/// `is_selected` and `material.color` may be edited directly by UI
/// collaborators; everything else goes through `Scene`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    pub position: Vec3,
    /// Euler angles in degrees. Index 1 carries the idle yaw.
    pub eulers: Vec3,
    pub is_selected: bool,
    pub material: Material,
}

impl Entity {
    pub(crate) fn new(
        id: EntityId,
        kind: EntityKind,
        position: Vec3,
        eulers: Vec3,
        material: Material,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            eulers,
            is_selected: false,
            material,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn is_cube(&self) -> bool {
        matches!(self.kind, EntityKind::Cube { .. })
    }

    /// Whether the render adapter should issue a draw call for this entity.
    pub fn has_drawable(&self) -> bool {
        matches!(self.kind, EntityKind::Cube { mesh: Some(_) })
    }

    pub fn mesh(&self) -> Option<MeshHandle> {
        match self.kind {
            EntityKind::Cube { mesh } => mesh,
            EntityKind::Placeholder => None,
        }
    }

    /// Advance the cosmetic idle spin. `rate` is actual / target frame time.
    pub fn idle_update(&mut self, rate: f32) {
        let yaw = self.eulers.y + IDLE_YAW_STEP * rate;
        self.eulers.y = if yaw > 360.0 { yaw.rem_euclid(360.0) } else { yaw };
    }

    /// Model matrix: rotate about the local vertical axis, then translate.
    pub fn model_transform(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_y(self.eulers.y.to_radians())
    }

    /// Release the mesh resource. Returns the handle the first time only.
    pub fn destroy(&mut self) -> Option<MeshHandle> {
        match &mut self.kind {
            EntityKind::Cube { mesh } => mesh.take(),
            EntityKind::Placeholder => None,
        }
    }
}
