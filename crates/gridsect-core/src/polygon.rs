use crate::geom::{distance, round3, Vec2};
use serde::{Deserialize, Serialize};

/// Remove points exactly equal (both coordinates) to an earlier point in
/// the list. Order of first occurrences is preserved.
pub fn dedup_points(points: &[Vec2]) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(points.len());
    for &p in points {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

/// Drop candidate vertex lists that cannot form a polygon (fewer than 3
/// points). Inputs are expected to be deduplicated already.
pub fn discard_degenerate(candidates: Vec<Vec<Vec2>>) -> Vec<Vec<Vec2>> {
    candidates.into_iter().filter(|c| c.len() >= 3).collect()
}

/// Order vertices clockwise around the box-midpoint center (the midpoint of
/// the min/max extents per axis, not the true centroid).
///
/// The first input point stays the first output point; the rest follow in
/// clockwise order from it. Rendering relies on that stable starting vertex,
/// and rerunning the sort on its own output is a no-op.
pub fn sort_clockwise(points: &[Vec2]) -> Vec<Vec2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut min = points[0];
    let mut max = points[0];
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    let center = Vec2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);

    let angle_about = |p: Vec2| (p.y - center.y).atan2(p.x - center.x);

    // Angles below the anchor's gain a full turn, so ascending order walks
    // counter-clockwise starting at the anchor (the first input point).
    let base = angle_about(points[0]);
    let mut keyed: Vec<(f64, Vec2)> = points
        .iter()
        .map(|&p| {
            let mut a = angle_about(p);
            if a < base {
                a += std::f64::consts::TAU;
            }
            (a, p)
        })
        .collect();
    keyed.sort_by(|l, r| l.0.partial_cmp(&r.0).unwrap_or(std::cmp::Ordering::Equal));
    keyed.reverse();
    // The anchor ended up last; bring it back to the front so the walk is
    // anchor-first, then clockwise.
    keyed.rotate_right(1);
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// Even-odd ray-cast membership test, with one policy carve-out: a point
/// lying exactly on a polygon edge belongs to *no* polygon. A click on a
/// dividing line therefore resolves to neither adjacent section, which is
/// intentional.
pub fn point_in_polygon(p: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    if point_on_polygon_edge(p, polygon) {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether `p` lies on some edge `(a, b)` of the polygon, tested as
/// `distance(a, p) + distance(p, b) == distance(a, b)`. Distances carry the
/// 3-decimal rounding and the sum is re-rounded before the exact compare,
/// since adding two rounded values reintroduces float noise in the last
/// place.
pub fn point_on_polygon_edge(p: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 2 {
        return false;
    }
    (0..polygon.len()).any(|i| {
        let a = polygon[i];
        let b = polygon[(i + 1) % polygon.len()];
        round3(distance(a, p) + distance(p, b)) == distance(a, b)
    })
}

/// One clickable region of the partitioned grid: at least 3 distinct
/// vertices in clockwise order, built only through `normalize_candidates`
/// or `from_candidate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub vertices: Vec<Vec2>,
}

impl Section {
    /// Normalize a raw vertex list into a section, or `None` if it
    /// collapses below 3 distinct points.
    pub fn from_candidate(points: &[Vec2]) -> Option<Self> {
        let deduped = dedup_points(points);
        if deduped.len() < 3 {
            return None;
        }
        Some(Self {
            vertices: sort_clockwise(&deduped),
        })
    }

    /// Hit test: strictly interior points only; see `point_in_polygon`.
    pub fn contains(&self, p: Vec2) -> bool {
        point_in_polygon(p, &self.vertices)
    }

    pub fn on_boundary(&self, p: Vec2) -> bool {
        point_on_polygon_edge(p, &self.vertices)
    }

    pub fn has_vertex(&self, p: Vec2) -> bool {
        self.vertices.contains(&p)
    }

    /// Unsigned shoelace area.
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }
}

/// Shoelace sum; positive for counter-clockwise vertex order.
pub fn signed_area(vertices: &[Vec2]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// The single path from raw candidate vertex lists to finished sections:
/// dedup each, drop the degenerate, sort clockwise.
pub fn normalize_candidates(candidates: Vec<Vec<Vec2>>) -> Vec<Section> {
    let deduped: Vec<Vec<Vec2>> = candidates.into_iter().map(|c| dedup_points(&c)).collect();
    discard_degenerate(deduped)
        .into_iter()
        .map(|c| Section {
            vertices: sort_clockwise(&c),
        })
        .collect()
}
