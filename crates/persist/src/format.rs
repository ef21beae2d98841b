//! Text encoding of the entity list.
//!
//! ```text
//! # Scene file v1
//! CUBE 0.0 0.0 -3.0  0.0 0.0 0.0  0.5 0.5 0.5 0.5
//! ENTITY 1.0 2.0 3.0  0.0 90.0 0.0  1.0 1.0 1.0 1.0
//! ```
//!
//! One entity per line: type tag, position, Euler angles (degrees), RGBA.
//! Blank lines and lines starting with `#` are ignored.

use glam::Vec3;
use voxedit_common::Rgba;
use voxedit_scene::{Entity, EntityKind, Scene};

use crate::SceneFileError;

/// First line written by every export.
pub const HEADER: &str = "# Scene file v1";

/// Tag plus eleven numeric fields.
pub const FIELD_COUNT: usize = 11;

const CUBE_TAG: &str = "CUBE";
const PLACEHOLDER_TAG: &str = "ENTITY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Cube,
    Placeholder,
}

impl RecordKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Cube => CUBE_TAG,
            Self::Placeholder => PLACEHOLDER_TAG,
        }
    }
}

/// One decoded line of a scene file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityRecord {
    pub kind: RecordKind,
    pub position: Vec3,
    pub eulers: Vec3,
    pub color: Rgba,
}

impl EntityRecord {
    pub fn from_entity(entity: &Entity) -> Self {
        let kind = match entity.kind() {
            EntityKind::Cube { .. } => RecordKind::Cube,
            EntityKind::Placeholder => RecordKind::Placeholder,
        };
        Self {
            kind,
            position: entity.position,
            eulers: entity.eulers,
            color: entity.material.color,
        }
    }

    /// Encode as a single line without trailing newline.
    pub fn encode(&self) -> String {
        let (p, e, c) = (self.position, self.eulers, self.color.to_array());
        format!(
            "{} {:?} {:?} {:?}  {:?} {:?} {:?}  {:?} {:?} {:?} {:?}",
            self.kind.tag(),
            p.x,
            p.y,
            p.z,
            e.x,
            e.y,
            e.z,
            c[0],
            c[1],
            c[2],
            c[3]
        )
    }

    /// Decode one non-comment line. `line_no` is 1-based and only used for errors.
    pub fn decode(line: &str, line_no: usize) -> Result<Self, SceneFileError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != FIELD_COUNT {
            return Err(SceneFileError::FieldCount {
                line: line_no,
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }

        let kind = match fields[0] {
            CUBE_TAG => RecordKind::Cube,
            PLACEHOLDER_TAG => RecordKind::Placeholder,
            other => {
                return Err(SceneFileError::UnknownType {
                    line: line_no,
                    tag: other.to_string(),
                });
            }
        };

        let mut values = [0.0f32; FIELD_COUNT - 1];
        for (i, text) in fields[1..].iter().enumerate() {
            values[i] = text.parse().map_err(|_| SceneFileError::NotNumeric {
                line: line_no,
                field: i + 1,
                text: text.to_string(),
            })?;
        }

        Ok(Self {
            kind,
            position: Vec3::new(values[0], values[1], values[2]),
            eulers: Vec3::new(values[3], values[4], values[5]),
            color: Rgba::new(values[6], values[7], values[8], values[9]),
        })
    }
}

/// Encode every entity in collection order, header first.
pub fn encode_scene(scene: &Scene) -> String {
    let mut out = String::with_capacity(64 * (scene.entity_count() + 1));
    out.push_str(HEADER);
    out.push('\n');
    for entity in scene.entities() {
        out.push_str(&EntityRecord::from_entity(entity).encode());
        out.push('\n');
    }
    out
}

/// Decode a whole file. Any malformed line fails the whole decode.
pub fn decode_records(text: &str) -> Result<Vec<EntityRecord>, SceneFileError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| EntityRecord::decode(line, line_no))
        .collect()
}

/// Replace the scene's entities with `records`.
///
/// Cubes go through the normal cube construction path and are then
/// deselected; placeholders are created without a mesh.
pub fn apply_records(scene: &mut Scene, records: &[EntityRecord]) -> usize {
    scene.clear();
    for record in records {
        match record.kind {
            RecordKind::Cube => {
                let id = scene.add_cube_colored(record.position, record.eulers, record.color);
                scene.set_selected(id, false);
            }
            RecordKind::Placeholder => {
                scene.add_placeholder(record.position, record.eulers, record.color);
            }
        }
    }
    records.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_cube_line() {
        let record = EntityRecord {
            kind: RecordKind::Cube,
            position: Vec3::new(0.0, 0.0, -3.0),
            eulers: Vec3::ZERO,
            color: Rgba::DEFAULT_GRAY,
        };
        assert_eq!(
            record.encode(),
            "CUBE 0.0 0.0 -3.0  0.0 0.0 0.0  0.5 0.5 0.5 0.5"
        );
    }

    #[test]
    fn encode_scene_starts_with_header() {
        let mut scene = Scene::new();
        scene.add_cube(Vec3::ZERO, Vec3::ZERO);
        scene.add_placeholder(Vec3::ONE, Vec3::ZERO, Rgba::WHITE);
        let text = encode_scene(&scene);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("CUBE "));
        assert!(lines[2].starts_with("ENTITY "));
    }

    #[test]
    fn decode_skips_comments_and_blanks() {
        let text = "# Scene file v1\n\n   \n# note\nENTITY 1 2 3 0 90 0 1 1 1 1\n";
        let records = decode_records(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, RecordKind::Placeholder);
        assert_eq!(records[0].position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(records[0].eulers, Vec3::new(0.0, 90.0, 0.0));
    }

    #[test]
    fn decode_rejects_wrong_field_count() {
        let err = decode_records("CUBE 0 0 0 0 0 0 1 1 1\n").unwrap_err();
        assert!(matches!(
            err,
            SceneFileError::FieldCount {
                line: 1,
                found: 10,
                ..
            }
        ));
        let err = decode_records("CUBE 0 0 0 0 0 0 1 1 1 1 1\n").unwrap_err();
        assert!(matches!(err, SceneFileError::FieldCount { found: 12, .. }));
    }

    #[test]
    fn decode_rejects_non_numeric_field() {
        let text = "# header\nCUBE 0 0 0 0 zero 0 1 1 1 1\n";
        let err = decode_records(text).unwrap_err();
        match err {
            SceneFileError::NotNumeric { line, field, text } => {
                assert_eq!(line, 2);
                assert_eq!(field, 5);
                assert_eq!(text, "zero");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_rejects_unknown_type() {
        let err = decode_records("SPHERE 0 0 0 0 0 0 1 1 1 1\n").unwrap_err();
        assert!(matches!(err, SceneFileError::UnknownType { line: 1, .. }));
    }

    #[test]
    fn decode_clamps_colors() {
        let records = decode_records("CUBE 0 0 0 0 0 0 2 -1 0.5 1\n").unwrap();
        assert_eq!(records[0].color.to_array(), [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn apply_records_replaces_and_deselects() {
        let mut scene = Scene::new();
        scene.add_cube(Vec3::splat(9.0), Vec3::ZERO);

        let records = decode_records(
            "CUBE 0 0 -3 0 0 0 0.5 0.5 0.5 0.5\nENTITY 1 1 1 0 0 0 1 1 1 1\n",
        )
        .unwrap();
        assert_eq!(apply_records(&mut scene, &records), 2);

        assert_eq!(scene.entity_count(), 2);
        assert!(scene.selected_entities().is_empty());
        assert!(scene.entities()[0].has_drawable());
        assert!(!scene.entities()[1].has_drawable());
        assert_eq!(scene.entities()[0].position, Vec3::new(0.0, 0.0, -3.0));
    }

    #[test]
    fn text_round_trip_preserves_kinds_and_values() {
        let mut scene = Scene::new();
        scene.add_cube_colored(
            Vec3::new(1.5, -2.25, 3.0),
            Vec3::new(10.0, 45.5, -5.0),
            Rgba::new(0.49, 0.1, 0.9, 0.5),
        );
        scene.add_placeholder(Vec3::new(-7.0, 0.0, 0.125), Vec3::ZERO, Rgba::WHITE);

        let records = decode_records(&encode_scene(&scene)).unwrap();
        let mut restored = Scene::new();
        apply_records(&mut restored, &records);

        assert_eq!(restored.entity_count(), scene.entity_count());
        for (a, b) in scene.entities().iter().zip(restored.entities()) {
            assert_eq!(a.kind().tag(), b.kind().tag());
            assert!((a.position - b.position).length() < 1e-6);
            assert!((a.eulers - b.eulers).length() < 1e-6);
            assert_eq!(a.material.color, b.material.color);
        }
    }
}
