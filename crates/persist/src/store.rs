//! File-backed scene persistence.
//!
//! Scene files live in a single directory, conventionally `scenes/`:
//! ```text
//! scenes/
//!   scene.txt      - default scene, loaded at startup
//!   <name>.txt     - anything the user saves
//! ```

use glam::Vec3;
use std::path::{Path, PathBuf};
use voxedit_scene::Scene;

use crate::SceneFileError;
use crate::format::{apply_records, decode_records, encode_scene};

/// Directory scene files are saved to by default.
pub const DEFAULT_SCENE_DIR: &str = "scenes";

/// File name offered by the save/load prompt.
pub const DEFAULT_SCENE_FILE: &str = "scene.txt";

/// Where the startup demo cube is placed when no scene file can be loaded.
pub const DEMO_CUBE_POSITION: Vec3 = Vec3::new(0.0, 0.0, -3.0);

/// Write every entity of `scene` to `path`, creating parent directories.
///
/// Returns the number of entities written.
pub fn export_scene(scene: &Scene, path: impl AsRef<Path>) -> Result<usize, SceneFileError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, encode_scene(scene))?;
    tracing::info!(path = %path.display(), entities = scene.entity_count(), "exported scene");
    Ok(scene.entity_count())
}

/// Replace the entities of `scene` with the contents of `path`.
///
/// The file is decoded completely before the scene is touched, so a missing
/// or malformed file leaves the scene as it was. Returns the number of
/// entities imported.
pub fn import_scene(scene: &mut Scene, path: impl AsRef<Path>) -> Result<usize, SceneFileError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(SceneFileError::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    let records = decode_records(&text)?;
    let count = apply_records(scene, &records);
    tracing::info!(path = %path.display(), entities = count, "imported scene");
    Ok(count)
}

/// Load the scene at `path`, or seed a single demo cube if that fails.
///
/// Returns true when the file was loaded.
pub fn load_or_seed(scene: &mut Scene, path: impl AsRef<Path>) -> bool {
    match import_scene(scene, path.as_ref()) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("scene not loaded ({e}); creating demo cube");
            scene.add_cube(DEMO_CUBE_POSITION, Vec3::ZERO);
            false
        }
    }
}

/// A directory of scene files addressed by file name.
#[derive(Debug, Clone)]
pub struct SceneStore {
    root: PathBuf,
}

impl SceneStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the scene file called `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn export(&self, scene: &Scene, name: &str) -> Result<usize, SceneFileError> {
        export_scene(scene, self.path_for(name))
    }

    pub fn import(&self, scene: &mut Scene, name: &str) -> Result<usize, SceneFileError> {
        import_scene(scene, self.path_for(name))
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCENE_DIR)
    }
}
