use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;

/// Actions the host's input layer resolves key presses and wheel input into.
///
/// The canvas never sees raw key codes; bindings live with the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Restore the previous snapshot
    Undo,
    /// Re-apply the last undone snapshot
    Redo,
    /// Remove every committed stroke
    Clear,
    /// Flip curve smoothing for subsequent strokes
    ToggleSmoothing,
    ShowPicker,
    HidePicker,
    TogglePicker,
    /// Grow (positive) or shrink (negative) the brush
    AdjustBrushSize(f32),
}

impl Command {
    /// Apply the command. Returns whether it had an effect, so the host can
    /// decide whether the input was consumed.
    pub fn execute(&self, canvas: &mut Canvas) -> bool {
        log::trace!("Executing {:?}", self);
        match *self {
            Command::Undo => canvas.undo(),
            Command::Redo => canvas.redo(),
            Command::Clear => {
                canvas.clear();
                true
            }
            Command::ToggleSmoothing => {
                canvas.toggle_smoothing();
                true
            }
            Command::ShowPicker => {
                let changed = !canvas.picker().is_shown();
                canvas.picker_mut().show();
                changed
            }
            Command::HidePicker => {
                let changed = canvas.picker().is_shown();
                canvas.picker_mut().hide();
                changed
            }
            Command::TogglePicker => {
                canvas.toggle_color_picker();
                true
            }
            Command::AdjustBrushSize(delta) => canvas.adjust_brush_size(delta),
        }
    }

    /// Whether executing pushes a history snapshot
    pub fn is_destructive(&self) -> bool {
        matches!(self, Command::Clear)
    }
}
