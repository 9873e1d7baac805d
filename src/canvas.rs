//! The drawing surface: committed strokes, the stroke in progress, brush,
//! history and the color picker.
//!
//! # State Transitions
//!
//! ```text
//!              start_stroke            end_stroke
//!   ┌──────┐ ───────────────► ┌─────────┐ ──────────► ┌──────┐
//!   │ Idle │                  │ Drawing │             │ Idle │
//!   └──────┘                  └────┬────┘             └──────┘
//!                                  │ ▲
//!                                  └─┘ continue_stroke
//! ```
//!
//! Every guarded call outside its state is a silent no-op. Nothing here
//! returns an error; booleans only report whether a call had an effect.
use std::mem;

use egui::Pos2;

use crate::brush::BrushSettings;
use crate::command::history::History;
use crate::config::CanvasConfig;
use crate::geometry::{Argb, DrawPoint, Point};
use crate::interpolate::interpolate;
use crate::smoothing::CurveSmoother;
use crate::stroke::Stroke;
use crate::widgets::ColorPicker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingState {
    /// No pointer held
    #[default]
    Idle,
    /// Between pointer-down and pointer-up
    Drawing,
}

impl DrawingState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DrawingState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, DrawingState::Drawing)
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    strokes: Vec<Stroke>,
    current_stroke: Option<Stroke>,
    /// Raw samples of the stroke in progress, input to smoothing
    control_points: Vec<Point>,
    last_position: Option<(i32, i32)>,
    state: DrawingState,

    brush: BrushSettings,
    smoother: CurveSmoother,
    history: History,
    picker: ColorPicker,
}

fn screen_center(width: i32, height: i32) -> Pos2 {
    Pos2::new((width / 2) as f32, (height / 2) as f32)
}

impl Canvas {
    /// Canvas with default settings, picker centred on a `width` x `height` screen
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_config(&CanvasConfig::default(), width, height)
    }

    pub fn with_config(config: &CanvasConfig, width: i32, height: i32) -> Self {
        Self {
            strokes: Vec::new(),
            current_stroke: None,
            control_points: Vec::new(),
            last_position: None,
            state: DrawingState::Idle,
            brush: config.brush.to_settings(),
            smoother: CurveSmoother::new(config.bezier_segments),
            history: History::new(config.history_depth),
            picker: ColorPicker::from_config(&config.picker, screen_center(width, height)),
        }
    }

    fn brush_point(&self, x: i32, y: i32) -> DrawPoint {
        DrawPoint::new(x, y, self.brush.color(), self.brush.line_width())
    }

    /// Idle -> Drawing. Snapshots the committed strokes first.
    pub fn start_stroke(&mut self, x: i32, y: i32) {
        if !self.state.is_idle() {
            return;
        }

        self.history.save_state(&self.strokes);
        self.state = DrawingState::Drawing;

        let mut stroke = Stroke::new();
        stroke.add_point(self.brush_point(x, y));
        self.current_stroke = Some(stroke);

        self.control_points.clear();
        self.control_points.push(Point::new(x as f32, y as f32));
        self.last_position = Some((x, y));

        log::trace!("Stroke started at ({}, {})", x, y);
    }

    pub fn continue_stroke(&mut self, x: i32, y: i32) {
        if !self.state.is_drawing() {
            return;
        }
        let color = self.brush.color();
        let size = self.brush.line_width();
        let Some(stroke) = self.current_stroke.as_mut() else {
            return;
        };

        self.control_points.push(Point::new(x as f32, y as f32));
        if let Some((last_x, last_y)) = self.last_position {
            stroke.add_points(interpolate(last_x, last_y, x, y, color, size));
        }
        self.last_position = Some((x, y));
    }

    /// Drawing -> Idle. Smooths (if enabled and there are enough samples),
    /// seals and commits the stroke unless it ended up empty.
    pub fn end_stroke(&mut self) {
        if !self.state.is_drawing() {
            return;
        }
        self.state = DrawingState::Idle;

        if let Some(mut stroke) = self.current_stroke.take() {
            if self.brush.is_smoothing_enabled() && self.control_points.len() > 2 {
                stroke = self.smoother.smooth(&self.control_points, &self.brush);
                log::trace!("Smoothed stroke from {} control points", self.control_points.len());
            }

            stroke.seal();
            if !stroke.is_empty() {
                log::debug!("🖌️ Committed stroke with {} points", stroke.len());
                self.strokes.push(stroke);
            }
        }

        self.control_points.clear();
        self.last_position = None;
    }

    /// Empty the committed strokes (undoable). An open stroke is emptied in
    /// place; the drawing state does not change.
    pub fn clear(&mut self) {
        self.history.save_state(&self.strokes);
        self.strokes.clear();
        if let Some(stroke) = self.current_stroke.as_mut() {
            stroke.clear();
        }
        log::debug!("Canvas cleared");
    }

    /// Returns whether there was anything to undo
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let current = mem::take(&mut self.strokes);
        self.strokes = self.history.undo(current);
        true
    }

    /// Returns whether there was anything to redo
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let current = mem::take(&mut self.strokes);
        self.strokes = self.history.redo(current);
        true
    }

    pub fn adjust_brush_size(&mut self, delta: f32) -> bool {
        self.brush.adjust_size(delta)
    }

    pub fn toggle_smoothing(&mut self) {
        self.brush.toggle_smoothing();
    }

    /// Sets the brush color and keeps the picker selection in sync
    pub fn set_brush_color(&mut self, color: Argb) {
        self.brush.set_color(color);
        self.picker.set_selected_color(color);
    }

    pub fn toggle_color_picker(&mut self) {
        self.picker.toggle();
    }

    /// Re-centre the picker for a new screen size
    pub fn resize(&mut self, width: i32, height: i32) {
        self.picker.set_center(screen_center(width, height));
    }

    /// Advance per-frame animations
    pub fn tick(&mut self) {
        self.picker.tick();
    }

    /// Route a primary-button press.
    ///
    /// While the picker is visible the press never draws: a swatch hit picks its
    /// color, a press outside the picker dismisses it, and a press inside the
    /// picker but between swatches is ignored. Returns whether the press had an effect.
    pub fn pointer_down(&mut self, x: i32, y: i32) -> bool {
        if self.picker.is_visible() {
            let (fx, fy) = (x as f32, y as f32);
            if self.picker.handle_mouse_click(fx, fy) {
                self.brush.set_color(self.picker.selected_color());
                return true;
            }
            if !self.picker.is_point_inside(fx, fy) {
                self.picker.hide();
                return true;
            }
            return false;
        }

        self.start_stroke(x, y);
        self.state.is_drawing()
    }

    pub fn pointer_move(&mut self, x: i32, y: i32) -> bool {
        if self.picker.is_visible() {
            return self.picker.handle_mouse_move(x as f32, y as f32);
        }
        if self.state.is_drawing() {
            self.continue_stroke(x, y);
            return true;
        }
        false
    }

    pub fn pointer_up(&mut self) -> bool {
        let was_drawing = self.state.is_drawing();
        self.end_stroke();
        was_drawing
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.current_stroke.as_ref()
    }

    /// Raw samples collected for the stroke in progress
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut BrushSettings {
        &mut self.brush
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn picker(&self) -> &ColorPicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut ColorPicker {
        &mut self.picker
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Points across committed strokes plus the stroke in progress
    pub fn total_point_count(&self) -> usize {
        let committed: usize = self.strokes.iter().map(Stroke::len).sum();
        committed + self.current_stroke.as_ref().map_or(0, Stroke::len)
    }

    /// Every renderable point, committed strokes first, in drawing order
    pub fn render_points(&self) -> impl Iterator<Item = &DrawPoint> + '_ {
        self.strokes
            .iter()
            .chain(self.current_stroke.iter())
            .flat_map(|stroke| stroke.points().iter())
    }
}
