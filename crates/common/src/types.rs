use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable handle for an entity in a scene.
///
/// Handles are never reused, so a handle to a removed entity stays invalid
/// even after new entities are created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for log lines and debug output.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// RGBA color with every channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    /// Neutral gray at half opacity, the color of freshly placed cubes.
    pub const DEFAULT_GRAY: Self = Self([0.5, 0.5, 0.5, 0.5]);
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);

    /// Build a color, clamping each channel into [0, 1]. NaN becomes 0.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a].map(clamp_unit))
    }

    pub fn from_array(channels: [f32; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }

    pub fn r(&self) -> f32 {
        self.0[0]
    }

    pub fn g(&self) -> f32 {
        self.0[1]
    }

    pub fn b(&self) -> f32 {
        self.0[2]
    }

    pub fn a(&self) -> f32 {
        self.0[3]
    }

    pub fn to_array(self) -> [f32; 4] {
        self.0
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::DEFAULT_GRAY
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// World axis a drag is locked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of this axis in a `Vec3`.
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Overwrite this axis' component of `v`.
    pub fn set(self, v: &mut Vec3, value: f32) {
        v[self.index()] = value;
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(s)
    }
}

/// Round `value` to the nearest multiple of `grid`.
///
/// A non-positive grid disables snapping.
pub fn snap_to_grid(value: f32, grid: f32) -> f32 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_uniqueness() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
        assert_eq!(a.short().len(), 8);
    }

    #[test]
    fn rgba_clamps_channels() {
        let c = Rgba::new(-0.5, 0.25, 1.5, f32::NAN);
        assert_eq!(c.to_array(), [0.0, 0.25, 1.0, 0.0]);
    }

    #[test]
    fn rgba_default_is_half_gray() {
        assert_eq!(Rgba::default(), Rgba([0.5, 0.5, 0.5, 0.5]));
    }

    #[test]
    fn axis_sets_component() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        Axis::Y.set(&mut v, 9.0);
        assert_eq!(v, Vec3::new(1.0, 9.0, 3.0));
        Axis::Z.set(&mut v, -4.0);
        assert_eq!(v, Vec3::new(1.0, 9.0, -4.0));
    }

    #[test]
    fn snap_rounds_to_nearest_multiple() {
        assert_eq!(snap_to_grid(3.4, 1.0), 3.0);
        assert_eq!(snap_to_grid(3.6, 1.0), 4.0);
        assert_eq!(snap_to_grid(-3.6, 1.0), -4.0);
        assert_eq!(snap_to_grid(1.3, 0.5), 1.5);
        assert_eq!(snap_to_grid(1.3, 0.0), 1.3);
    }
}
