//! Material editor: four text fields applied as one color to the selection.

use voxedit_common::Rgba;
use voxedit_scene::Scene;

/// Value used for a channel whose field is left empty.
pub const DEFAULT_CHANNEL: f32 = 0.5;

const CHANNELS: [char; 4] = ['r', 'g', 'b', 'a'];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{channel} channel: {text:?} is not a number")]
pub struct ColorParseError {
    pub channel: char,
    pub text: String,
}

/// Parse one color field. Empty means 0.5; a number `v` becomes `(v mod 101) / 100`.
pub fn parse_channel(channel: char, text: &str) -> Result<f32, ColorParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(DEFAULT_CHANNEL);
    }
    match text.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok((v.rem_euclid(101.0) / 100.0).clamp(0.0, 1.0)),
        _ => Err(ColorParseError {
            channel,
            text: text.to_string(),
        }),
    }
}

/// Parse all four fields, failing on the first bad one.
pub fn parse_color(fields: [&str; 4]) -> Result<Rgba, ColorParseError> {
    let mut channels = [0.0; 4];
    for ((slot, channel), text) in channels.iter_mut().zip(CHANNELS).zip(fields) {
        *slot = parse_channel(channel, text)?;
    }
    Ok(Rgba::from_array(channels))
}

/// Assign the parsed color to every selected entity.
///
/// Nothing is changed if any field fails to parse. Returns how many entities were recolored.
pub fn apply_material(scene: &mut Scene, fields: [&str; 4]) -> Result<usize, ColorParseError> {
    let color = parse_color(fields)?;
    let selected = scene.selected_entities();
    for id in &selected {
        if let Some(entity) = scene.get_mut(*id) {
            entity.material.color = color;
        }
    }
    tracing::debug!(count = selected.len(), ?color, "applied material");
    Ok(selected.len())
}
