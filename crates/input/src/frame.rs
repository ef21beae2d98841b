use glam::Vec2;
use voxedit_common::Axis;

/// The four directional movement keys, held state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveKeys {
    pub forward: bool,
    pub left: bool,
    pub back: bool,
    pub right: bool,
}

impl MoveKeys {
    pub fn new(forward: bool, left: bool, back: bool, right: bool) -> Self {
        Self {
            forward,
            left,
            back,
            right,
        }
    }

    /// Pack into a 4-bit mask: forward=1, left=2, back=4, right=8.
    pub fn combo(self) -> u8 {
        u8::from(self.forward)
            | u8::from(self.left) << 1
            | u8::from(self.back) << 2
            | u8::from(self.right) << 3
    }

    pub fn any(self) -> bool {
        self.combo() != 0
    }
}

/// Everything the editor core reads from the devices for one frame.
///
/// Cursor coordinates are window pixels with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub movement: MoveKeys,
    /// Enter move mode on the current selection.
    pub begin_move: bool,
    /// Clone the current selection, then enter move mode on the clones.
    pub clone_move: bool,
    pub axis_x: bool,
    pub axis_y: bool,
    pub axis_z: bool,
    /// Leave move mode (right mouse button).
    pub cancel_move: bool,
    pub cursor: Vec2,
    /// Rotate-camera modifier. The adapter re-centers the cursor while it is held.
    pub rotate_held: bool,
    pub delete: bool,
    pub save_load: bool,
    /// Turns `save_load` into a load instead of a save.
    pub load_modifier: bool,
}

impl FrameInput {
    /// Idle frame with the cursor at `cursor`.
    pub fn at_cursor(cursor: Vec2) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    /// Axis requested this frame. X wins over Y, Y over Z.
    pub fn axis(&self) -> Option<Axis> {
        if self.axis_x {
            Some(Axis::X)
        } else if self.axis_y {
            Some(Axis::Y)
        } else if self.axis_z {
            Some(Axis::Z)
        } else {
            None
        }
    }

    /// Whether this frame asks to enter move mode.
    pub fn wants_move(&self) -> bool {
        self.begin_move || self.clone_move
    }
}
