//! Even-odd point-in-polygon test
//!
//! Casts a ray from the query point along +X and counts edge crossings;
//! an odd count means the point is inside. Works on the graph-space vertex
//! list and makes no assumption that the outline is simple - HARD rounds
//! deliberately feed it self-intersecting polygons, and the even-odd rule
//! still gives a definite (if sometimes unintuitive) answer for those.

use glam::Vec2;

/// Classify `point` against the polygon described by `vertices`
/// (consecutive vertices connected in order, last wrapping to first).
pub fn point_in_polygon(vertices: &[Vec2], point: Vec2) -> bool {
    let n = vertices.len();
    let mut crossings = 0;

    for i in 0..n {
        if ray_intersects_edge(point, vertices[i], vertices[(i + 1) % n]) {
            crossings += 1;
        }
    }

    crossings % 2 != 0
}

/// Does the +X ray from `point` cross the edge `(v1, v2)`?
///
/// Vertical edges (`v1.x == v2.x`) hit a division by zero in the slope
/// step; the IEEE inf/NaN result flows through the final comparison
/// unguarded. The tests below pin that behavior down rather than
/// special-casing it away.
fn ray_intersects_edge(point: Vec2, v1: Vec2, v2: Vec2) -> bool {
    // Outside the edge's vertical span: no crossing.
    if point.y < v1.y.min(v2.y) || point.y > v1.y.max(v2.y) {
        return false;
    }

    // Strictly right of both endpoints: the +X ray cannot reach the edge.
    if point.x > v1.x.max(v2.x) {
        return false;
    }

    // Left of both endpoints: the ray crosses for sure.
    if point.x < v1.x.min(v2.x) {
        return true;
    }

    // Between the endpoints in X: solve for the edge's X at the ray height.
    let slope = (v2.y - v1.y) / (v2.x - v1.x);
    let intersect_x = v1.x + (point.y - v1.y) / slope;

    point.x <= intersect_x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ]
    }

    #[test]
    fn test_square_center_inside() {
        assert!(point_in_polygon(&unit_square(), Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_square_far_point_outside() {
        assert!(!point_in_polygon(&unit_square(), Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_point_left_of_polygon_outside() {
        // Within the Y span but left of everything: the ray crosses both
        // the left and right edges, even count.
        assert!(!point_in_polygon(&unit_square(), Vec2::new(-3.0, 0.0)));
    }

    #[test]
    fn test_concave_polygon() {
        // Arrowhead pointing right; the notch at x<0.5, y=0 is outside.
        let arrow = vec![
            Vec2::new(0.0, -1.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5, 0.0),
        ];
        assert!(point_in_polygon(&arrow, Vec2::new(1.0, 0.01)));
        assert!(!point_in_polygon(&arrow, Vec2::new(0.2, 0.0)));
    }

    #[test]
    fn test_empty_and_degenerate_vertex_lists() {
        assert!(!point_in_polygon(&[], Vec2::new(0.0, 0.0)));
        assert!(!point_in_polygon(&[Vec2::new(1.0, 1.0)], Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_vertical_edge_division_quirk() {
        // Point exactly on a vertical edge: slope is +inf, the (y-y1)/slope
        // term collapses to 0, and intersect_x lands on the edge itself, so
        // the edge counts as crossed.
        let v1 = Vec2::new(1.0, 0.0);
        let v2 = Vec2::new(1.0, 2.0);
        assert!(ray_intersects_edge(Vec2::new(1.0, 1.0), v1, v2));
    }

    #[test]
    fn test_coincident_endpoints_never_cross() {
        // Zero-length edge: slope is 0/0 = NaN, intersect_x is NaN, and the
        // `<=` comparison with NaN is false.
        let v = Vec2::new(1.0, 1.0);
        assert!(!ray_intersects_edge(Vec2::new(1.0, 1.0), v, v));
    }

    #[test]
    fn test_translation_consistency_with_screen_space() {
        // Classifying in graph space must agree with classifying the same
        // physical point against the raw screen-space vertices.
        use crate::geom::{Level, generate_polygon};
        use crate::graph_to_screen;
        use rand::{Rng, SeedableRng};
        use rand_pcg::Pcg32;

        let mut rng = Pcg32::seed_from_u64(314);
        let poly = generate_polygon(&mut rng, 6, Level::Normal);

        for _ in 0..200 {
            let g = Vec2::new(
                rng.random::<f32>() * 800.0 - 400.0,
                rng.random::<f32>() * 800.0 - 400.0,
            );
            let on_screen = graph_to_screen(g, poly.centroid);
            assert_eq!(
                point_in_polygon(&poly.graph_vertices, g),
                point_in_polygon(&poly.vertices, on_screen),
            );
        }
    }
}
