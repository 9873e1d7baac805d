use egui::{Pos2, Rect, Vec2};

/// The square of side `size` centred on `center`. Edges count as inside.
pub fn square_around(center: Pos2, size: f32) -> Rect {
    Rect::from_center_size(center, Vec2::splat(size))
}

pub fn point_in_square(pos: Pos2, center: Pos2, size: f32) -> bool {
    square_around(center, size).contains(pos)
}

/// Coarse circular bound test, inclusive of the boundary.
pub fn within_radius(pos: Pos2, center: Pos2, radius: f32) -> bool {
    pos.distance(center) <= radius
}

/// Bounding box of a set of positions grown by `padding` on every side.
pub fn bounds_of(points: impl IntoIterator<Item = Pos2>, padding: f32) -> Rect {
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return Rect::NOTHING;
    };

    let mut rect = Rect::from_min_max(first, first);
    for point in points {
        rect.extend_with(point);
    }
    rect.expand(padding)
}
