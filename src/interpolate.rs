use crate::geometry::{Argb, DrawPoint};

/// Fill the straight segment from `(x1, y1)` to `(x2, y2)` with evenly spaced samples.
///
/// Produces `max(|dx|, |dy|, 1) + 1` points. Both endpoints are always included,
/// so consecutive segments share (and duplicate) their joint. Intermediate
/// positions use truncating integer division.
pub fn interpolate(x1: i32, y1: i32, x2: i32, y2: i32, color: Argb, size: f32) -> Vec<DrawPoint> {
    // i64 keeps `delta * i` from overflowing on extreme coordinates
    let dx = i64::from(x2) - i64::from(x1);
    let dy = i64::from(y2) - i64::from(y1);
    let steps = dx.abs().max(dy.abs()).max(1);

    (0..=steps)
        .map(|i| {
            let x = i64::from(x1) + dx * i / steps;
            let y = i64::from(y1) + dy * i / steps;
            DrawPoint::new(x as i32, y as i32, color, size)
        })
        .collect()
}
