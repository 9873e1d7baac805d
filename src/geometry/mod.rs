//! Value types shared by the capture pipeline, the history and the renderer.

mod color;
pub mod hit_testing;

pub use color::Argb;

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A raw pointer-space control point, captured before any smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Snap to the pixel grid. Truncates toward zero.
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

impl From<Pos2> for Point {
    fn from(pos: Pos2) -> Self {
        Self::new(pos.x, pos.y)
    }
}

impl From<Point> for Pos2 {
    fn from(point: Point) -> Self {
        Pos2::new(point.x, point.y)
    }
}

/// A renderable sample with color and size baked in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawPoint {
    x: i32,
    y: i32,
    color: Argb,
    size: f32,
}

impl DrawPoint {
    pub const fn new(x: i32, y: i32, color: Argb, size: f32) -> Self {
        Self { x, y, color, size }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn color(&self) -> Argb {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn pos(&self) -> Pos2 {
        Pos2::new(self.x as f32, self.y as f32)
    }

    /// The square a renderer fills for this sample: side `size`, centred on the point.
    pub fn quad(&self) -> Rect {
        Rect::from_center_size(self.pos(), Vec2::splat(self.size))
    }
}
