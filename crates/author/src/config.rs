use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use voxedit_persist::{DEFAULT_SCENE_DIR, DEFAULT_SCENE_FILE, SceneStore};

/// Errors from loading or saving an editor configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Editor tuning: snapping, drag reach, look speed, frame pacing and file locations.
///
/// Missing keys in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Snapping quantum for dragged positions, in world units.
    pub grid_size: f32,
    /// World distance reached when the cursor touches the viewport edge.
    pub max_reach: f32,
    /// Degrees of camera spin per pixel of cursor deviation.
    pub look_sensitivity: f32,
    /// Frame time, in milliseconds, that motion constants are tuned for.
    pub target_frame_ms: f32,
    /// Viewport size in pixels.
    pub viewport: Vec2,
    pub scene_dir: PathBuf,
    /// Name offered by the save/load prompt and loaded at startup.
    pub default_file: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: 1.0,
            max_reach: 20.0,
            look_sensitivity: 0.1,
            target_frame_ms: 16.7,
            viewport: Vec2::new(1280.0, 760.0),
            scene_dir: PathBuf::from(DEFAULT_SCENE_DIR),
            default_file: DEFAULT_SCENE_FILE.to_string(),
        }
    }
}

impl EditorConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn store(&self) -> SceneStore {
        SceneStore::new(&self.scene_dir)
    }

    /// Path of the scene file loaded at startup.
    pub fn default_scene_path(&self) -> PathBuf {
        self.scene_dir.join(&self.default_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.grid_size, 1.0);
        assert_eq!(config.max_reach, 20.0);
        assert_eq!(config.viewport, Vec2::new(1280.0, 760.0));
        assert_eq!(config.default_scene_path(), PathBuf::from("scenes/scene.txt"));
    }

    #[test]
    fn save_and_load() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let config = EditorConfig {
            grid_size: 0.5,
            scene_dir: PathBuf::from("levels"),
            ..EditorConfig::default()
        };
        config.save(tmp.path()).unwrap();

        let loaded = EditorConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.store().root(), Path::new("levels"));
    }

    #[test]
    fn partial_file_uses_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), r#"{ "max_reach": 40.0 }"#).unwrap();

        let loaded = EditorConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded.max_reach, 40.0);
        assert_eq!(loaded.grid_size, 1.0);
        assert_eq!(loaded.default_file, "scene.txt");
    }

    #[test]
    fn invalid_json_is_reported() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "not json").unwrap();
        assert!(matches!(
            EditorConfig::load(tmp.path()),
            Err(ConfigError::Json(_))
        ));
    }
}
