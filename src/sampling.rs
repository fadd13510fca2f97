//! Candidate drop-point sampling
//!
//! Draws the round's bomb candidates uniformly over the polygon's bounding
//! box padded by [`SAMPLE_MARGIN`](crate::consts::SAMPLE_MARGIN) on every
//! side. No rejection sampling: candidates land inside or outside the zone
//! with whatever probability the box gives them, and classification only
//! happens later when the player guesses.

use glam::Vec2;
use rand::Rng;

use crate::consts::SAMPLE_MARGIN;

/// Sample `count` candidate points around the polygon given by
/// `vertices` (graph space).
///
/// Returns an empty list when fewer than 2 vertices are supplied - there
/// is no meaningful box to sample from, and the caller treats an empty
/// run as "no playable round" rather than an error.
pub fn sample_candidates<R: Rng>(rng: &mut R, vertices: &[Vec2], count: usize) -> Vec<Vec2> {
    if vertices.len() < 2 {
        log::warn!(
            "sample_candidates: {} vertices is not enough for a round",
            vertices.len()
        );
        return Vec::new();
    }

    let min_x = vertices.iter().map(|v| v.x - SAMPLE_MARGIN).fold(f32::INFINITY, f32::min);
    let max_x = vertices.iter().map(|v| v.x + SAMPLE_MARGIN).fold(f32::NEG_INFINITY, f32::max);
    let min_y = vertices.iter().map(|v| v.y - SAMPLE_MARGIN).fold(f32::INFINITY, f32::min);
    let max_y = vertices.iter().map(|v| v.y + SAMPLE_MARGIN).fold(f32::NEG_INFINITY, f32::max);

    (0..count)
        .map(|_| {
            Vec2::new(
                rng.random::<f32>() * (max_x - min_x) + min_x,
                rng.random::<f32>() * (max_y - min_y) + min_y,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_too_few_vertices_yields_empty() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(sample_candidates(&mut rng, &[], 10).is_empty());
        assert!(sample_candidates(&mut rng, &[Vec2::new(3.0, 4.0)], 10).is_empty());
    }

    #[test]
    fn test_requested_count() {
        let mut rng = Pcg32::seed_from_u64(2);
        let square = [
            Vec2::new(-100.0, -100.0),
            Vec2::new(100.0, -100.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(-100.0, 100.0),
        ];
        assert_eq!(sample_candidates(&mut rng, &square, 10).len(), 10);
        assert_eq!(sample_candidates(&mut rng, &square, 0).len(), 0);
    }

    #[test]
    fn test_points_stay_in_padded_box() {
        let mut rng = Pcg32::seed_from_u64(3);
        let tri = [
            Vec2::new(0.0, 0.0),
            Vec2::new(200.0, 50.0),
            Vec2::new(80.0, 300.0),
        ];
        for p in sample_candidates(&mut rng, &tri, 500) {
            assert!(p.x >= -SAMPLE_MARGIN && p.x <= 200.0 + SAMPLE_MARGIN);
            assert!(p.y >= -SAMPLE_MARGIN && p.y <= 300.0 + SAMPLE_MARGIN);
        }
    }
}
