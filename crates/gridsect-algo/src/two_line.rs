use itertools::Itertools;

use gridsect_core::geom::{GridRect, Vec2};
use gridsect_core::model::Line;
use gridsect_core::polygon::{normalize_candidates, Section};

use crate::clip::{clip_line_to_rect, line_intersect};
use crate::one_line::section_one_line;

/// Angular slack when deciding whether a corner sits inside a cone. Wide
/// enough to absorb acos rounding on near-degenerate cones, narrow enough
/// that no corner can satisfy two cones of the same crossing.
pub const CONE_ANGLE_TOLERANCE: f64 = 1e-4;

/// Whether `candidate` lies inside the cone with the given apex spanned by
/// the rays toward `arm_a` and `arm_b`: the two sub-angles must sum to the
/// full cone angle. Points exactly on a bounding ray are inside.
pub fn point_in_angle(candidate: Vec2, apex: Vec2, arm_a: Vec2, arm_b: Vec2) -> bool {
    let ra = arm_a - apex;
    let rb = arm_b - apex;
    let rc = candidate - apex;
    let total = ra.angle_between(rb);
    let split = ra.angle_between(rc) + rc.angle_between(rb);
    (split - total).abs() <= CONE_ANGLE_TOLERANCE
}

/// Partition the grid with two committed lines.
///
/// Both lines must clip to two distinct boundary points; otherwise the
/// configuration cannot span the grid yet and no sections are returned.
/// The topology then splits on whether the *infinite* lines cross strictly
/// inside the grid: a corner-fan around the crossing point, or a merge of
/// the two single-line partitions.
pub fn section_two_lines(a: &Line, b: &Line, rect: &GridRect) -> Vec<Section> {
    let boundary_a = clip_line_to_rect(a, rect);
    let boundary_b = clip_line_to_rect(b, rect);
    if boundary_a.len() != 2 || boundary_b.len() != 2 {
        return Vec::new();
    }

    // Intersect the raw endpoints, not the clipped points: the crossing may
    // lie outside the drawn segments.
    let crossing =
        line_intersect(a.from, a.to, b.from, b.to).filter(|x| rect.strictly_contains(*x));

    match crossing {
        Some(x) => corner_fan(x, &boundary_a, &boundary_b, rect),
        None => merged_partition(&boundary_a, &boundary_b, rect),
    }
}

/// Interior-crossing case: each pairing of one boundary point per line
/// spans a cone from the crossing point, and every grid corner belongs to
/// the first cone that claims it (corners leave the pool once claimed).
/// A pairing that claims no corner is still a section — the triangle
/// between two adjacent entry points. A corner claimed by no cone (only
/// possible from float effects near the tolerance) is simply left out and
/// shows up in the report's unclaimed corners.
fn corner_fan(x: Vec2, boundary_a: &[Vec2], boundary_b: &[Vec2], rect: &GridRect) -> Vec<Section> {
    let mut pool: Vec<Vec2> = rect.corners().to_vec();
    let mut candidates: Vec<Vec<Vec2>> = Vec::with_capacity(4);

    for (&ea, &eb) in boundary_a.iter().cartesian_product(boundary_b.iter()) {
        let mut candidate = vec![x, ea, eb];
        let mut k = 0;
        while k < pool.len() {
            if point_in_angle(pool[k], x, ea, eb) {
                candidate.push(pool.remove(k));
            } else {
                k += 1;
            }
        }
        candidates.push(candidate);
    }

    normalize_candidates(candidates)
}

/// Non-crossing case (parallel, coincident, or crossing outside the grid):
/// section each line alone, drop the halves the other line would subdivide,
/// and close the gap with one middle section.
fn merged_partition(boundary_a: &[Vec2], boundary_b: &[Vec2], rect: &GridRect) -> Vec<Section> {
    let sections_a = section_one_line(boundary_a, rect);
    let sections_b = section_one_line(boundary_b, rect);

    // A half that covers both of the other line's boundary points would be
    // subdivided further by that line, so it cannot stand as a section.
    // The other line's boundary points sit on the grid boundary, hence on
    // the half's *edge*, so coverage is inside-or-on-edge.
    let keep = |section: &Section, other: &[Vec2]| {
        !other
            .iter()
            .all(|&p| section.contains(p) || section.on_boundary(p))
    };

    let kept: Vec<Section> = sections_a
        .into_iter()
        .filter(|s| keep(s, boundary_b))
        .chain(sections_b.into_iter().filter(|s| keep(s, boundary_a)))
        .collect();

    // Whatever corners no kept half owns belong to the band between the
    // lines, together with all four boundary points.
    let leftover_corners = rect
        .corners()
        .into_iter()
        .filter(|c| !kept.iter().any(|s| s.has_vertex(*c)));
    let middle: Vec<Vec2> = boundary_a
        .iter()
        .chain(boundary_b.iter())
        .copied()
        .chain(leftover_corners)
        .collect();

    let mut out = kept;
    out.extend(Section::from_candidate(&middle));
    out
}
