use gridsect_core::geom::{GridRect, Vec2};
use gridsect_core::polygon::{normalize_candidates, Section};

/// Which pair of rectangle features the two boundary points of a clipped
/// line touch. These are the only topologies a straight line clipped to an
/// axis-aligned rectangle can produce, so the split below is a closed case
/// analysis rather than a generic polygon clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryTopology {
    /// One point on the right edge, the other on the top edge.
    MaxRightMaxTop,
    /// Left edge / top edge.
    MinLeftMaxTop,
    /// Left edge / bottom edge.
    MinLeftMinBottom,
    /// Right edge / bottom edge.
    MaxRightMinBottom,
    /// Bottom edge / top edge (the line runs roughly vertically).
    ParallelVertical,
    /// Left edge / right edge (the line runs roughly horizontally).
    ParallelHorizontal,
    Unclassified,
}

/// Classify by exact coordinate matches against the grid bounds. A
/// corner-to-corner diagonal touches two features per endpoint and matches
/// the first pattern in this order; vertex dedup makes the resulting split
/// identical whichever corner pattern wins.
pub fn classify_boundary(p: Vec2, q: Vec2, rect: &GridRect) -> BoundaryTopology {
    let left = |v: Vec2| v.x == rect.domain.min;
    let right = |v: Vec2| v.x == rect.domain.max;
    let bottom = |v: Vec2| v.y == rect.range.min;
    let top = |v: Vec2| v.y == rect.range.max;
    let spans =
        |on_a: &dyn Fn(Vec2) -> bool, on_b: &dyn Fn(Vec2) -> bool| (on_a(p) && on_b(q)) || (on_a(q) && on_b(p));

    if spans(&right, &top) {
        BoundaryTopology::MaxRightMaxTop
    } else if spans(&left, &top) {
        BoundaryTopology::MinLeftMaxTop
    } else if spans(&left, &bottom) {
        BoundaryTopology::MinLeftMinBottom
    } else if spans(&right, &bottom) {
        BoundaryTopology::MaxRightMinBottom
    } else if spans(&bottom, &top) {
        BoundaryTopology::ParallelVertical
    } else if spans(&left, &right) {
        BoundaryTopology::ParallelHorizontal
    } else {
        BoundaryTopology::Unclassified
    }
}

/// Build the two polygons one clipped line cuts the grid into.
///
/// `boundary` is the output of the clipper; anything but 2 distinct points
/// means the line does not span the grid and no sections exist yet. Each
/// output polygon is the two boundary points closed by the corners on its
/// side of the line. A line lying along an edge leaves one candidate
/// degenerate; the normalizer drops it.
pub fn section_one_line(boundary: &[Vec2], rect: &GridRect) -> Vec<Section> {
    if boundary.len() != 2 {
        return Vec::new();
    }
    let (p, q) = (boundary[0], boundary[1]);
    let [bl, br, tr, tl] = rect.corners();

    let candidates: Vec<Vec<Vec2>> = match classify_boundary(p, q, rect) {
        BoundaryTopology::MaxRightMaxTop => vec![vec![p, q, tr], vec![p, q, tl, bl, br]],
        BoundaryTopology::MinLeftMaxTop => vec![vec![p, q, tl], vec![p, q, tr, br, bl]],
        BoundaryTopology::MinLeftMinBottom => vec![vec![p, q, bl], vec![p, q, br, tr, tl]],
        BoundaryTopology::MaxRightMinBottom => vec![vec![p, q, br], vec![p, q, bl, tl, tr]],
        BoundaryTopology::ParallelVertical => vec![vec![p, q, bl, tl], vec![p, q, br, tr]],
        BoundaryTopology::ParallelHorizontal => vec![vec![p, q, tl, tr], vec![p, q, bl, br]],
        BoundaryTopology::Unclassified => Vec::new(),
    };

    normalize_candidates(candidates)
}
