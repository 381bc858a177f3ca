use gridsect_core::geom::{GridRect, Vec2};
use gridsect_core::model::Line;
use gridsect_core::polygon::dedup_points;

/// Intersection of the two infinite lines through `(a1, a2)` and
/// `(b1, b2)`, classic determinant form.
///
/// Returns `None` when the denominator is exactly zero (parallel or
/// coincident lines, or a degenerate zero-length input). Exact zero, not an
/// epsilon test: near-parallel lines still intersect, far away, and the
/// boundary filter downstream discards such points.
pub fn line_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let den = (a1.x - a2.x) * (b1.y - b2.y) - (a1.y - a2.y) * (b1.x - b2.x);
    if den == 0.0 {
        return None;
    }
    let det_a = a1.x * a2.y - a1.y * a2.x;
    let det_b = b1.x * b2.y - b1.y * b2.x;
    let x = (det_a * (b1.x - b2.x) - (a1.x - a2.x) * det_b) / den;
    let y = (det_a * (b1.y - b2.y) - (a1.y - a2.y) * det_b) / den;
    Some(Vec2::new(x, y))
}

/// Clip the infinite extension of `line` to the grid boundary.
///
/// Intersects with the four edge lines (top, bottom, left, right), keeps
/// hits that land on or inside the rectangle, and collapses exact repeats:
/// a line through a corner meets both adjacent edges at the same point and
/// must count once. Yields 0, 1, or 2 points.
pub fn clip_line_to_rect(line: &Line, rect: &GridRect) -> Vec<Vec2> {
    let mut hits = Vec::with_capacity(4);
    for (start, end) in rect.edges() {
        if let Some(p) = line_intersect(line.from, line.to, start, end) {
            if rect.contains(p) {
                hits.push(p);
            }
        }
    }
    dedup_points(&hits)
}
