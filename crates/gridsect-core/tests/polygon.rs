use gridsect_core::geom::{distance, Vec2};
use gridsect_core::polygon::{
    dedup_points, discard_degenerate, normalize_candidates, point_in_polygon,
    point_on_polygon_edge, signed_area, sort_clockwise, Section,
};

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn dedup_removes_exact_repeats_and_keeps_first_occurrences() {
    let points = vec![v(0.0, 0.0), v(1.0, 0.0), v(0.0, 0.0), v(1.0, 0.0), v(2.0, 2.0)];
    assert_eq!(
        vec![v(0.0, 0.0), v(1.0, 0.0), v(2.0, 2.0)],
        dedup_points(&points)
    );
}

#[test]
fn discard_degenerate_drops_lists_below_three_points() {
    let kept = discard_degenerate(vec![
        vec![v(0.0, 0.0), v(1.0, 0.0)],
        vec![v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)],
        Vec::new(),
    ]);
    assert_eq!(1, kept.len());
    assert_eq!(3, kept[0].len());
}

#[test]
fn sort_clockwise_keeps_the_anchor_and_winds_clockwise() {
    let points = vec![v(-5.0, 0.0), v(5.0, 0.0), v(5.0, 5.0), v(-5.0, 5.0)];
    let sorted = sort_clockwise(&points);
    assert_eq!(
        vec![v(-5.0, 0.0), v(-5.0, 5.0), v(5.0, 5.0), v(5.0, 0.0)],
        sorted
    );
    assert!(signed_area(&sorted) < 0.0, "clockwise means negative shoelace");
}

#[test]
fn sort_clockwise_is_idempotent() {
    let points = vec![v(-5.0, 0.0), v(5.0, 0.0), v(5.0, 5.0), v(-5.0, 5.0)];
    let once = sort_clockwise(&points);
    let twice = sort_clockwise(&once);
    assert_eq!(once, twice);
}

#[test]
fn point_in_polygon_distinguishes_inside_from_outside() {
    let square = vec![v(0.0, 0.0), v(0.0, 10.0), v(10.0, 10.0), v(10.0, 0.0)];
    assert!(point_in_polygon(v(5.0, 5.0), &square));
    assert!(!point_in_polygon(v(15.0, 5.0), &square));
    assert!(!point_in_polygon(v(-5.0, 5.0), &square));
    assert!(!point_in_polygon(v(5.0, 15.0), &square));
}

#[test]
fn point_on_a_dividing_line_belongs_to_neither_region() {
    // The two halves of a square split by its diagonal. A click exactly on
    // the diagonal must resolve to no section.
    let upper = vec![v(-5.0, -5.0), v(5.0, 5.0), v(-5.0, 5.0)];
    let lower = vec![v(-5.0, -5.0), v(5.0, 5.0), v(5.0, -5.0)];
    let on_diagonal = v(0.0, 0.0);
    assert!(!point_in_polygon(on_diagonal, &upper));
    assert!(!point_in_polygon(on_diagonal, &lower));
    // Just off the diagonal each half claims it again.
    assert!(point_in_polygon(v(-1.0, 1.0), &upper));
    assert!(point_in_polygon(v(1.0, -1.0), &lower));
}

#[test]
fn point_on_polygon_edge_detects_edges_and_vertices() {
    let square = vec![v(0.0, 0.0), v(0.0, 10.0), v(10.0, 10.0), v(10.0, 0.0)];
    assert!(point_on_polygon_edge(v(0.0, 5.0), &square));
    assert!(point_on_polygon_edge(v(0.0, 0.0), &square));
    assert!(point_on_polygon_edge(v(7.5, 10.0), &square));
    assert!(!point_on_polygon_edge(v(5.0, 5.0), &square));
    assert!(!point_on_polygon_edge(v(11.0, 5.0), &square));
}

#[test]
fn distance_rounds_to_three_decimals() {
    assert_eq!(1.414, distance(v(0.0, 0.0), v(1.0, 1.0)));
    assert_eq!(5.0, distance(v(0.0, 0.0), v(3.0, 4.0)));
}

#[test]
fn angle_between_perpendicular_vectors_is_a_right_angle() {
    let a = v(1.0, 0.0).angle_between(v(0.0, 1.0));
    assert!((a - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    // Antiparallel vectors: the clamped ratio keeps acos in domain.
    let b = v(1.0, 1.0).angle_between(v(-1.0, -1.0));
    assert!((b - std::f64::consts::PI).abs() < 1e-12);
}

#[test]
fn from_candidate_rejects_collapsed_polygons() {
    assert!(Section::from_candidate(&[v(1.0, 1.0), v(1.0, 1.0), v(2.0, 2.0)]).is_none());
    let section = Section::from_candidate(&[v(0.0, 0.0), v(2.0, 0.0), v(0.0, 2.0)])
        .expect("a triangle survives");
    assert_eq!(3, section.vertices.len());
    assert_eq!(2.0, section.area());
}

#[test]
fn normalize_candidates_dedups_sorts_and_filters() {
    let sections = normalize_candidates(vec![
        vec![v(0.0, 0.0), v(2.0, 0.0), v(0.0, 0.0)],
        vec![v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0), v(0.0, 0.0)],
    ]);
    assert_eq!(1, sections.len());
    assert_eq!(4, sections[0].vertices.len());
    assert!(signed_area(&sections[0].vertices) < 0.0);
    assert_eq!(4.0, sections[0].area());
}
