use serde::Serialize;

use crate::geometry::Argb;

/// Brush state applied to every point the canvas generates.
///
/// `line_width` is clamped into [`BrushSettings::MIN_LINE_WIDTH`, `BrushSettings::MAX_LINE_WIDTH`]
/// on every mutation. Color is stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrushSettings {
    line_width: f32,
    color: Argb,
    smoothing_enabled: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            line_width: Self::DEFAULT_LINE_WIDTH,
            color: Self::DEFAULT_COLOR,
            smoothing_enabled: true,
        }
    }
}

impl BrushSettings {
    pub const MIN_LINE_WIDTH: f32 = 0.5;
    pub const MAX_LINE_WIDTH: f32 = 20.0;
    pub const DEFAULT_LINE_WIDTH: f32 = 2.0;
    pub const DEFAULT_COLOR: Argb = Argb::WHITE;

    pub fn new(line_width: f32, color: Argb, smoothing_enabled: bool) -> Self {
        let mut brush = Self {
            color,
            smoothing_enabled,
            ..Self::default()
        };
        brush.set_line_width(line_width);
        brush
    }

    fn clamp_width(width: f32) -> f32 {
        width.clamp(Self::MIN_LINE_WIDTH, Self::MAX_LINE_WIDTH)
    }

    /// Grow or shrink the brush by `delta`, clamped into range.
    /// Returns whether the stored width actually changed.
    pub fn adjust_size(&mut self, delta: f32) -> bool {
        let old = self.line_width;
        self.set_line_width(old + delta);
        let changed = self.line_width != old;
        if changed {
            log::debug!("Brush size {:.1} -> {:.1}", old, self.line_width);
        }
        changed
    }

    /// Set the width, clamped into range, and return the stored value.
    /// NaN leaves the current width untouched.
    pub fn set_line_width(&mut self, width: f32) -> f32 {
        if !width.is_nan() {
            self.line_width = Self::clamp_width(width);
        }
        self.line_width
    }

    pub fn toggle_smoothing(&mut self) {
        self.smoothing_enabled = !self.smoothing_enabled;
        log::debug!("Smoothing {}", if self.smoothing_enabled { "on" } else { "off" });
    }

    pub fn set_smoothing_enabled(&mut self, enabled: bool) {
        self.smoothing_enabled = enabled;
    }

    pub fn set_color(&mut self, color: Argb) {
        self.color = color;
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn color(&self) -> Argb {
        self.color
    }

    pub fn is_smoothing_enabled(&self) -> bool {
        self.smoothing_enabled
    }
}
