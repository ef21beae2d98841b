//! winit adapter: collects window events and emits one `FrameInput` per frame.
//!
//! Bindings: W/A/S/D move, G move selection, N clone and move, X/Y/Z lock
//! axis, Delete removes the selection, M saves (Ctrl+M loads), Shift held
//! rotates the camera, right mouse button leaves move mode.

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::frame::{FrameInput, MoveKeys};

/// Accumulates device state between frames.
#[derive(Debug, Default)]
pub struct DesktopInput {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
    right_pressed: bool,
    cursor: Vec2,
}

impl DesktopInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a window event. Returns true if the event was an input event.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                self.key(*key, *state == ElementState::Pressed, *repeat);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y);
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_button(*button, *state == ElementState::Pressed);
                true
            }
            WindowEvent::Focused(false) => {
                self.held.clear();
                false
            }
            _ => false,
        }
    }

    pub fn key(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        if pressed {
            if !repeat && self.held.insert(key) {
                self.pressed.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Vec2::new(x as f32, y as f32);
    }

    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Right && pressed {
            self.right_pressed = true;
        }
    }

    /// Record that the window moved the pointer back to `center`.
    pub fn recenter(&mut self, center: Vec2) {
        self.cursor = center;
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    fn held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    fn pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Build this frame's input and reset edge-triggered state.
    pub fn sample(&mut self) -> FrameInput {
        let input = FrameInput {
            movement: MoveKeys::new(
                self.held(KeyCode::KeyW),
                self.held(KeyCode::KeyA),
                self.held(KeyCode::KeyS),
                self.held(KeyCode::KeyD),
            ),
            begin_move: self.pressed(KeyCode::KeyG),
            clone_move: self.pressed(KeyCode::KeyN),
            axis_x: self.pressed(KeyCode::KeyX),
            axis_y: self.pressed(KeyCode::KeyY),
            axis_z: self.pressed(KeyCode::KeyZ),
            cancel_move: self.right_pressed,
            cursor: self.cursor,
            rotate_held: self.held(KeyCode::ShiftLeft) || self.held(KeyCode::ShiftRight),
            delete: self.pressed(KeyCode::Delete),
            save_load: self.pressed(KeyCode::KeyM),
            load_modifier: self.held(KeyCode::ControlLeft) || self.held(KeyCode::ControlRight),
        };
        self.pressed.clear();
        self.right_pressed = false;
        input
    }
}
