use gridsect_algo::clip::{clip_line_to_rect, line_intersect};
use gridsect_core::geom::{AxisRange, GridRect, Vec2};
use gridsect_core::model::Line;

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

fn grid() -> GridRect {
    GridRect::new(AxisRange::new(-5.0, 5.0), AxisRange::new(-5.0, 5.0))
}

#[test]
fn line_intersect_finds_the_crossing_of_two_lines() {
    let p = line_intersect(v(-1.0, -1.0), v(1.0, 1.0), v(-1.0, 1.0), v(1.0, -1.0))
        .expect("diagonals cross");
    assert_eq!(v(0.0, 0.0), p);
}

#[test]
fn line_intersect_returns_none_for_parallel_lines() {
    assert!(line_intersect(v(0.0, 0.0), v(1.0, 1.0), v(0.0, 1.0), v(1.0, 2.0)).is_none());
    // Coincident lines share every point; no single crossing exists.
    assert!(line_intersect(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0), v(3.0, 3.0)).is_none());
}

#[test]
fn clip_extends_a_short_segment_to_the_boundary() {
    // The drawn segment stops inside the grid; its infinite extension does
    // not.
    let line = Line::new(v(-1.0, 0.0), v(1.0, 0.0));
    let boundary = clip_line_to_rect(&line, &grid());
    assert_eq!(vec![v(-5.0, 0.0), v(5.0, 0.0)], boundary);
}

#[test]
fn clip_through_corners_collapses_the_duplicate_hits() {
    // A corner lies on two edges, so the raw intersection list repeats it.
    let line = Line::new(v(-5.0, -5.0), v(5.0, 5.0));
    let boundary = clip_line_to_rect(&line, &grid());
    assert_eq!(2, boundary.len());
    assert!(boundary.contains(&v(-5.0, -5.0)));
    assert!(boundary.contains(&v(5.0, 5.0)));
}

#[test]
fn clip_of_a_line_outside_the_grid_is_empty() {
    let line = Line::new(v(6.0, -5.0), v(6.0, 5.0));
    assert!(clip_line_to_rect(&line, &grid()).is_empty());
}

#[test]
fn clip_tangent_at_a_corner_yields_a_single_point() {
    // Slope -1 through (5, 5): grazes the corner, never enters the grid.
    let line = Line::new(v(4.0, 6.0), v(6.0, 4.0));
    assert_eq!(vec![v(5.0, 5.0)], clip_line_to_rect(&line, &grid()));
}

#[test]
fn clip_lands_exactly_on_integer_bounds() {
    // The determinant form must hit the edge coordinates exactly for the
    // topology classifier's equality tests to work.
    let line = Line::new(v(-2.0, -1.0), v(2.0, 1.0));
    let boundary = clip_line_to_rect(&line, &grid());
    assert_eq!(vec![v(-5.0, -2.5), v(5.0, 2.5)], boundary);
}
