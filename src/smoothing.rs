//! Curve smoothing for finished strokes.
//!
//! Raw control points are grouped into overlapping triples with a stride of two
//! (`(0, 1, 2)`, `(2, 3, 4)`, ...) and each triple becomes one quadratic Bézier
//! segment. The sampled curve is then densified with [`interpolate`] so the
//! rendered point spacing stays one pixel regardless of curvature.

use crate::brush::BrushSettings;
use crate::geometry::{DrawPoint, Point};
use crate::interpolate::interpolate;
use crate::stroke::Stroke;

/// Samples per quadratic segment, not counting the `t = 0` sample.
pub const DEFAULT_SEGMENTS: usize = 30;

/// Evaluate `B(t) = (1-t)²·p0 + 2(1-t)t·p1 + t²·p2`.
pub fn quadratic_bezier(p0: Point, p1: Point, p2: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let a = u * u;
    let b = 2.0 * u * t;
    let c = t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x,
        a * p0.y + b * p1.y + c * p2.y,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSmoother {
    segments: usize,
}

impl Default for CurveSmoother {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl CurveSmoother {
    /// `segments` below one is raised to one.
    pub fn new(segments: usize) -> Self {
        Self {
            segments: segments.max(1),
        }
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Turn the control points of one stroke into an open, smoothed stroke.
    ///
    /// Fewer than three control points cannot form a curve; each one becomes a
    /// single rendered point instead. The brush is only read.
    pub fn smooth(&self, control_points: &[Point], brush: &BrushSettings) -> Stroke {
        let color = brush.color();
        let size = brush.line_width();
        let mut stroke = Stroke::new();

        if control_points.len() < 3 {
            stroke.add_points(control_points.iter().map(|point| {
                let (x, y) = point.to_pixel();
                DrawPoint::new(x, y, color, size)
            }));
            return stroke;
        }

        let curve = self.curve_points(control_points);
        let mut pixels = curve.into_iter().map(Point::to_pixel);
        let Some((mut last_x, mut last_y)) = pixels.next() else {
            return stroke;
        };

        stroke.add_point(DrawPoint::new(last_x, last_y, color, size));
        for (x, y) in pixels {
            stroke.add_points(interpolate(last_x, last_y, x, y, color, size));
            (last_x, last_y) = (x, y);
        }

        log::trace!(
            "Smoothed {} control points into {} rendered points",
            control_points.len(),
            stroke.len()
        );
        stroke
    }

    /// Sample the chained quadratic segments, in order, `segments + 1` samples each.
    ///
    /// When the count is even the final triple clamps to the last index, so the
    /// last control point is always on the curve.
    pub fn curve_points(&self, control_points: &[Point]) -> Vec<Point> {
        if control_points.len() < 3 {
            return control_points.to_vec();
        }

        let last = control_points.len() - 1;
        let triples = last.div_ceil(2);
        let mut curve = Vec::with_capacity(triples * (self.segments + 1));

        for start in (0..last).step_by(2) {
            let p0 = control_points[start];
            let p1 = control_points[(start + 1).min(last)];
            let p2 = control_points[(start + 2).min(last)];

            curve.extend((0..=self.segments).map(|i| {
                let t = i as f32 / self.segments as f32;
                quadratic_bezier(p0, p1, p2, t)
            }));
        }

        curve
    }
}
