use std::path::PathBuf;

use glam::Vec2;
use voxedit_common::{Axis, EntityId};
use voxedit_input::{FrameInput, FrameTiming};
use voxedit_persist::{export_scene, import_scene};
use voxedit_scene::Scene;

use crate::config::EditorConfig;
use crate::movement::{drag_target, look_delta, walk_delta};

/// Supplies the file name for a save or load.
///
/// Returning `None` cancels the operation.
pub trait FilenamePrompt {
    fn filename(&mut self, default: &str, load: bool) -> Option<String>;
}

/// Accepts the offered default every time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFilename;

impl FilenamePrompt for DefaultFilename {
    fn filename(&mut self, default: &str, _load: bool) -> Option<String> {
        Some(default.to_string())
    }
}

impl<F> FilenamePrompt for F
where
    F: FnMut(&str, bool) -> Option<String>,
{
    fn filename(&mut self, default: &str, load: bool) -> Option<String> {
        self(default, load)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Dragging the held entities. No drag happens until an axis is chosen.
    MoveMode { axis: Option<Axis> },
}

/// A record of each state transition or edit made by the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    EnteredMoveMode { held: usize, cloned: bool },
    ExitedMoveMode,
    AxisSelected(Axis),
    Deleted { count: usize },
    Exported { path: PathBuf, ok: bool },
    Imported { path: PathBuf, ok: bool },
}

/// Per-frame interaction state machine over a [`Scene`].
///
/// Each call to [`Editor::update`] handles keys first (walk, enter move mode,
/// axis, delete, save/load), then the mouse (look, cancel, drag), then
/// advances idle animation.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    state: InteractionState,
    held: Vec<EntityId>,
    events: Vec<EditorEvent>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            state: InteractionState::Idle,
            held: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.state, InteractionState::MoveMode { .. })
    }

    /// Entities captured on entering move mode.
    pub fn held(&self) -> &[EntityId] {
        &self.held
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.config.viewport = Vec2::new(width, height);
    }

    /// Center of the viewport, where the adapter parks the cursor while looking around.
    pub fn viewport_center(&self) -> Vec2 {
        self.config.viewport * 0.5
    }

    /// Drain and return pending editor events.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[EditorEvent] {
        &self.events
    }

    /// Run one frame of interaction against `scene`, then advance idle animation.
    pub fn update(
        &mut self,
        scene: &mut Scene,
        input: &FrameInput,
        timing: &FrameTiming,
        prompt: &mut dyn FilenamePrompt,
    ) {
        self.apply_input(scene, input, timing, prompt);
        scene.update(timing.rate());
    }

    /// Handle one frame of input without the idle spin.
    ///
    /// Scripted edits use this so that only the edited fields change.
    pub fn apply_input(
        &mut self,
        scene: &mut Scene,
        input: &FrameInput,
        timing: &FrameTiming,
        prompt: &mut dyn FilenamePrompt,
    ) {
        let rate = timing.rate();
        self.handle_keys(scene, input, rate, prompt);
        self.handle_mouse(scene, input, rate);
    }

    fn handle_keys(
        &mut self,
        scene: &mut Scene,
        input: &FrameInput,
        rate: f32,
        prompt: &mut dyn FilenamePrompt,
    ) {
        if let Some(delta) = walk_delta(scene.camera().theta(), input.movement, rate) {
            scene.move_camera(delta);
        }

        if input.wants_move() && !self.is_moving() {
            self.begin_move(scene, input.clone_move);
        }

        if let (InteractionState::MoveMode { axis }, Some(picked)) = (&mut self.state, input.axis()) {
            *axis = Some(picked);
            tracing::debug!(%picked, "drag axis selected");
            self.events.push(EditorEvent::AxisSelected(picked));
        }

        if input.delete {
            self.delete_selection(scene);
        }

        if input.save_load {
            self.save_or_load(scene, input.load_modifier, prompt);
        }
    }

    fn handle_mouse(&mut self, scene: &mut Scene, input: &FrameInput, rate: f32) {
        if input.rotate_held {
            let (d_theta, d_phi) = look_delta(
                input.cursor,
                self.config.viewport,
                rate,
                self.config.look_sensitivity,
            );
            scene.spin_camera(d_theta, d_phi);
        }

        if input.cancel_move {
            self.cancel_move();
            return;
        }

        if let InteractionState::MoveMode { axis: Some(axis) } = self.state {
            self.drag(scene, axis, input.cursor);
        }
    }

    /// Capture the selection (or clones of it) as the held set and enter move mode.
    ///
    /// Only leaves `Idle`; does nothing while already moving. Stays idle when
    /// nothing is selected.
    pub fn begin_move(&mut self, scene: &mut Scene, clone: bool) {
        if self.is_moving() {
            return;
        }
        let snapshot = scene.selected_entities();
        self.held = if clone {
            snapshot
                .into_iter()
                .filter_map(|original| {
                    scene.set_selected(original, false);
                    scene.duplicate(original)
                })
                .collect()
        } else {
            snapshot
        };

        if self.held.is_empty() {
            return;
        }
        self.state = InteractionState::MoveMode { axis: None };
        tracing::debug!(held = self.held.len(), clone, "entered move mode");
        self.events.push(EditorEvent::EnteredMoveMode {
            held: self.held.len(),
            cloned: clone,
        });
    }

    /// Leave move mode, dropping the held set and axis.
    pub fn cancel_move(&mut self) {
        if !self.is_moving() {
            return;
        }
        self.state = InteractionState::Idle;
        self.held.clear();
        tracing::debug!("left move mode");
        self.events.push(EditorEvent::ExitedMoveMode);
    }

    fn drag(&mut self, scene: &mut Scene, axis: Axis, cursor: Vec2) {
        let value = drag_target(
            cursor,
            self.config.viewport,
            axis,
            self.config.max_reach,
            self.config.grid_size,
        );
        for id in &self.held {
            if let Some(entity) = scene.get_mut(*id) {
                axis.set(&mut entity.position, value);
            }
        }
    }

    /// Remove every selected entity. Returns how many were removed.
    pub fn delete_selection(&mut self, scene: &mut Scene) -> usize {
        let count = scene
            .selected_entities()
            .into_iter()
            .filter(|id| scene.remove_entity(*id))
            .count();
        self.held.retain(|id| scene.contains(*id));
        tracing::debug!(count, "deleted selection");
        self.events.push(EditorEvent::Deleted { count });
        count
    }

    fn save_or_load(&mut self, scene: &mut Scene, load: bool, prompt: &mut dyn FilenamePrompt) {
        let Some(name) = prompt.filename(&self.config.default_file, load) else {
            tracing::debug!(load, "save/load cancelled");
            return;
        };
        let path = self.config.scene_dir.join(name);

        if load {
            let ok = match import_scene(scene, &path) {
                Ok(_) => true,
                Err(e) => {
                    tracing::error!(path = %path.display(), "import failed: {e}");
                    false
                }
            };
            if ok {
                self.cancel_move();
            }
            self.events.push(EditorEvent::Imported { path, ok });
        } else {
            let ok = match export_scene(scene, &path) {
                Ok(_) => true,
                Err(e) => {
                    tracing::error!(path = %path.display(), "export failed: {e}");
                    false
                }
            };
            self.events.push(EditorEvent::Exported { path, ok });
        }
    }
}
