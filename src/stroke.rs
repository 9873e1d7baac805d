use egui::Rect;
use serde::{Deserialize, Serialize};

use crate::geometry::{DrawPoint, hit_testing};

/// One continuous drawn line, from pointer-down to pointer-up.
///
/// A stroke starts open and accepts points. Sealing it is one-way: afterwards
/// every mutator is a silent no-op. `Clone` produces a fully detached copy
/// that keeps the sealed flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<DrawPoint>,
    sealed: bool,
}

impl Stroke {
    // Create an empty, open stroke
    pub fn new() -> Self {
        Self::default()
    }

    // Create a stroke that is already sealed
    pub fn sealed_from(points: Vec<DrawPoint>) -> Self {
        Self {
            points,
            sealed: true,
        }
    }

    pub fn add_point(&mut self, point: DrawPoint) {
        if !self.sealed {
            self.points.push(point);
        }
    }

    pub fn add_points(&mut self, points: impl IntoIterator<Item = DrawPoint>) {
        if !self.sealed {
            self.points.extend(points);
        }
    }

    pub fn clear(&mut self) {
        if !self.sealed {
            self.points.clear();
        }
    }

    pub fn replace_points(&mut self, points: Vec<DrawPoint>) {
        if !self.sealed {
            self.points = points;
        }
    }

    /// Make the stroke immutable. Sealing twice is harmless.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn points(&self) -> &[DrawPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_point(&self) -> Option<&DrawPoint> {
        self.points.first()
    }

    pub fn last_point(&self) -> Option<&DrawPoint> {
        self.points.last()
    }

    /// Screen area covered by the stroke's rendered quads.
    pub fn bounds(&self) -> Rect {
        let padding = self
            .points
            .iter()
            .map(|point| point.size() / 2.0)
            .fold(0.0, f32::max);
        hit_testing::bounds_of(self.points.iter().map(DrawPoint::pos), padding)
    }
}
