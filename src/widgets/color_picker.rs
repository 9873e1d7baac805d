use std::f64::consts::TAU;

use egui::{Pos2, Rect};

use crate::config::PickerConfig;
use crate::geometry::{Argb, hit_testing};

/// The default 19-color palette, laid out clockwise from the +x axis
pub const DEFAULT_PALETTE: [Argb; 19] = [
    Argb(0xFF000000), Argb(0xFF7F7F7F), Argb(0xFFC3C3C3), Argb(0xFF880015),
    Argb(0xFFED1C24), Argb(0xFFB97A57), Argb(0xFFFF7F27), Argb(0xFFB5E61D),
    Argb(0xFFFFC90E), Argb(0xFFFFF200), Argb(0xFFEFE4B0), Argb(0xFF22B14C),
    Argb(0xFF3F48CC), Argb(0xFF00A2E8), Argb(0xFFA349A4), Argb(0xFF7092BE),
    Argb(0xFF99D9EA), Argb(0xFFC8BFE7), Argb(0xFFFFAEC9),
];

pub const DEFAULT_SWATCH_SIZE: f32 = 24.0;
pub const DEFAULT_RADIUS: f32 = 120.0;
/// Slack added around the ring before a click counts as "outside"
pub const DISMISS_MARGIN: f32 = 16.0;
/// Ticks for a full fade in or out
pub const DEFAULT_FADE_TICKS: u32 = 6;

/// Everything a renderer needs to draw one swatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub index: usize,
    pub color: Argb,
    pub center: Pos2,
    pub rect: Rect,
    pub selected: bool,
    pub hovered: bool,
    /// 0.0 (rest) to 1.0 (fully highlighted)
    pub hover_phase: f32,
}

fn approach(value: f32, target: f32, step: f32) -> f32 {
    if value < target {
        (value + step).min(target)
    } else {
        (value - step).max(target)
    }
}

/// Radial palette of color swatches.
///
/// Visibility fades over a fixed number of [`ColorPicker::tick`] calls. The
/// picker keeps reporting itself visible, and keeps hit-testing, until the
/// fade has fully reached zero.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    palette: Vec<Argb>,
    center: Pos2,
    swatch_size: f32,
    radius: f32,
    dismiss_margin: f32,

    shown: bool,
    fade: f32,
    fade_step: f32,

    selected: Option<usize>,
    selected_color: Argb,
    hovered: Option<usize>,
    hover_phases: Vec<f32>,
}

impl ColorPicker {
    /// Picker with the default palette and layout
    pub fn new(center: Pos2) -> Self {
        Self::with_layout(DEFAULT_PALETTE.to_vec(), center, DEFAULT_SWATCH_SIZE, DEFAULT_RADIUS)
    }

    pub fn with_layout(palette: Vec<Argb>, center: Pos2, swatch_size: f32, radius: f32) -> Self {
        let hover_phases = vec![0.0; palette.len()];
        Self {
            palette,
            center,
            swatch_size,
            radius,
            dismiss_margin: DISMISS_MARGIN,
            shown: false,
            fade: 0.0,
            fade_step: 1.0 / DEFAULT_FADE_TICKS as f32,
            selected: None,
            selected_color: Argb::WHITE,
            hovered: None,
            hover_phases,
        }
    }

    pub fn from_config(config: &PickerConfig, center: Pos2) -> Self {
        let mut picker = Self::with_layout(config.palette.clone(), center, config.swatch_size, config.radius);
        picker.dismiss_margin = config.dismiss_margin;
        picker.fade_step = 1.0 / config.fade_ticks.max(1) as f32;
        picker
    }

    pub fn set_center(&mut self, center: Pos2) {
        self.center = center;
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn palette(&self) -> &[Argb] {
        &self.palette
    }

    pub fn swatch_size(&self) -> f32 {
        self.swatch_size
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn show(&mut self) {
        if !self.shown {
            log::debug!("Color picker shown");
        }
        self.shown = true;
    }

    pub fn hide(&mut self) {
        if self.shown {
            log::debug!("Color picker hidden");
        }
        self.shown = false;
    }

    pub fn toggle(&mut self) {
        if self.shown {
            self.hide();
        } else {
            self.show();
        }
    }

    /// Whether the picker has been asked to show, ignoring the fade
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Shown, or still fading out
    pub fn is_visible(&self) -> bool {
        self.shown || self.fade > 0.0
    }

    /// Current fade phase in `[0, 1]`
    pub fn opacity(&self) -> f32 {
        self.fade
    }

    /// Advance the fade and hover animations by one frame.
    pub fn tick(&mut self) {
        let target = if self.shown { 1.0 } else { 0.0 };
        self.fade = approach(self.fade, target, self.fade_step);

        if self.fade == 0.0 {
            self.hovered = None;
        }

        for (index, phase) in self.hover_phases.iter_mut().enumerate() {
            let target = if self.hovered == Some(index) { 1.0 } else { 0.0 };
            *phase = approach(*phase, target, self.fade_step);
        }
    }

    /// Centre of swatch `index`, at angle `2π·index/N` on the ring
    pub fn swatch_center(&self, index: usize) -> Option<Pos2> {
        if index >= self.palette.len() {
            return None;
        }

        let angle = TAU * index as f64 / self.palette.len() as f64;
        let radius = f64::from(self.radius);
        Some(Pos2::new(
            (f64::from(self.center.x) + radius * angle.cos()) as f32,
            (f64::from(self.center.y) + radius * angle.sin()) as f32,
        ))
    }

    pub fn swatch_rect(&self, index: usize) -> Option<Rect> {
        self.swatch_center(index)
            .map(|center| hit_testing::square_around(center, self.swatch_size))
    }

    /// First swatch (lowest index) whose square contains the point.
    /// Pure geometry: works whether or not the picker is visible.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let pos = Pos2::new(x, y);
        (0..self.palette.len()).find(|&index| {
            self.swatch_center(index)
                .is_some_and(|center| hit_testing::point_in_square(pos, center, self.swatch_size))
        })
    }

    /// Coarse circular bound used to dismiss the picker on outside clicks.
    pub fn is_point_inside(&self, x: f32, y: f32) -> bool {
        if !self.is_visible() {
            return false;
        }
        let bound = self.radius + self.swatch_size + self.dismiss_margin;
        hit_testing::within_radius(Pos2::new(x, y), self.center, bound)
    }

    /// Select the swatch under the pointer. Returns whether a swatch was hit.
    pub fn handle_mouse_click(&mut self, x: f32, y: f32) -> bool {
        if !self.is_visible() {
            return false;
        }

        match self.hit_test(x, y) {
            Some(index) => {
                self.select(index);
                true
            }
            None => false,
        }
    }

    /// Track the hovered swatch. Returns whether the hovered swatch changed.
    pub fn handle_mouse_move(&mut self, x: f32, y: f32) -> bool {
        let hovered = if self.is_visible() { self.hit_test(x, y) } else { None };
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index);
        self.selected_color = self.palette[index];
        log::info!("🎨 Picked color {} (swatch {})", self.selected_color, index);
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    pub fn selected_color(&self) -> Argb {
        self.selected_color
    }

    /// Adopt a color chosen elsewhere; selects its swatch if the palette has one.
    pub fn set_selected_color(&mut self, color: Argb) {
        self.selected_color = color;
        self.selected = self.palette.iter().position(|&swatch| swatch == color);
    }

    pub fn hover_phase(&self, index: usize) -> f32 {
        self.hover_phases.get(index).copied().unwrap_or(0.0)
    }

    /// Per-swatch render state, in palette order
    pub fn swatches(&self) -> Vec<Swatch> {
        self.palette
            .iter()
            .enumerate()
            .filter_map(|(index, &color)| {
                let center = self.swatch_center(index)?;
                Some(Swatch {
                    index,
                    color,
                    center,
                    rect: hit_testing::square_around(center, self.swatch_size),
                    selected: self.selected == Some(index),
                    hovered: self.hovered == Some(index),
                    hover_phase: self.hover_phase(index),
                })
            })
            .collect()
    }
}
