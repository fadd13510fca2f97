//! Random target-zone polygon generation
//!
//! Vertices are placed around the origin at roughly even angular steps,
//! then jittered in both angle and radius so every round's zone looks
//! hand-drawn rather than regular. Nothing here guarantees convexity or
//! even a simple (non-self-intersecting) outline, and HARD mode shuffles
//! the vertex order on purpose - a scrambled draw order visually distorts
//! the shape and makes the round harder to judge.

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::screen_to_graph;

/// Round difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Normal,
    /// Vertex order is shuffled after generation, which can turn the
    /// outline self-intersecting when drawn in sequence
    Hard,
}

/// A generated target zone.
///
/// `vertices` live in screen space (Y down, drawing order). `graph_vertices`
/// are the same points translated so the centroid is the origin with Y
/// flipped to point up; all hit-testing uses them. The two lists are
/// positionally paired: index `i` in one is index `i` in the other.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
    pub graph_vertices: Vec<Vec2>,
    pub centroid: Vec2,
}

impl Polygon {
    /// Build a polygon from screen-space vertices, deriving the centroid
    /// and the graph-space vertex list.
    pub fn from_vertices(vertices: Vec<Vec2>) -> Self {
        let centroid = vertices.iter().copied().sum::<Vec2>() / vertices.len() as f32;
        let graph_vertices = vertices
            .iter()
            .map(|&v| screen_to_graph(v, centroid))
            .collect();
        Self {
            vertices,
            graph_vertices,
            centroid,
        }
    }
}

/// Generate a random `sides`-gon around the origin.
///
/// Per vertex: the base angle `2π·i/sides` gets up to ±[`ANGLE_JITTER`]
/// radians of jitter, and the radius is [`BASE_RADIUS`] plus a uniform
/// spread, pulled back in by an even/odd variance so alternate vertices
/// sit on tighter and looser lobes. On [`Level::Hard`] the finished
/// vertex list is uniformly shuffled.
pub fn generate_polygon<R: Rng>(rng: &mut R, sides: usize, level: Level) -> Polygon {
    debug_assert!(sides >= 3, "a polygon needs at least 3 sides");

    let mut vertices: Vec<Vec2> = (0..sides)
        .map(|i| {
            let base_angle = std::f32::consts::TAU * i as f32 / sides as f32;
            let angle = base_angle + (rng.random::<f32>() - 0.5) * (2.0 * ANGLE_JITTER);

            let variance = if i % 2 == 0 {
                EVEN_VARIANCE
            } else {
                ODD_VARIANCE
            };
            let radius = BASE_RADIUS + rng.random::<f32>() * RADIUS_SPREAD - variance;

            Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();

    if level == Level::Hard {
        vertices.shuffle(rng);
    }

    Polygon::from_vertices(vertices)
}
