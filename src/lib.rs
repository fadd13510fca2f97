//! Bombing Run - a guess-the-hit polygon game
//!
//! The player is shown a randomly generated target zone (an irregular
//! hexagon) and a run of candidate bomb-drop points; for each point they
//! guess whether it lands inside or outside the zone, and the session
//! tracks how many guesses were right.
//!
//! Core modules:
//! - `geom`: Polygon generation, centroid, ray-casting hit test
//! - `sampling`: Bounded-box candidate point generation
//! - `session`: Game session state and event dispatch
//!
//! All randomness flows through a caller-supplied `rand::Rng`, so every
//! round is reproducible from a seed.

pub mod geom;
pub mod sampling;
pub mod session;

pub use geom::{Level, Polygon, generate_polygon, point_in_polygon};
pub use session::{Bomb, BombResult, EventOutcome, SessionEvent, SessionState, apply};

use glam::Vec2;

/// Game tuning constants
pub mod consts {
    /// Number of polygon sides in a round
    pub const POLYGON_SIDES: usize = 6;
    /// Candidate bombs sampled per round
    pub const RUN_LENGTH: usize = 10;

    /// Base polygon radius before randomization
    pub const BASE_RADIUS: f32 = 250.0;
    /// Uniform radius spread added on top of the base radius
    pub const RADIUS_SPREAD: f32 = 150.0;
    /// Radius pulled back in on even-indexed vertices
    pub const EVEN_VARIANCE: f32 = 35.0;
    /// Radius pulled back in on odd-indexed vertices (larger, so the
    /// outline alternates between tighter and looser lobes)
    pub const ODD_VARIANCE: f32 = 85.0;
    /// Per-vertex angular jitter, radians either side of the base angle
    pub const ANGLE_JITTER: f32 = 0.2;

    /// Padding added around the polygon's bounding box when sampling
    /// candidate drop points
    pub const SAMPLE_MARGIN: f32 = 150.0;
}

/// Convert a screen-space point to graph space.
///
/// Screen space has Y increasing downward; graph space is centered on the
/// polygon centroid with Y increasing upward. Hit-testing always happens
/// in graph space.
#[inline]
pub fn screen_to_graph(point: Vec2, centroid: Vec2) -> Vec2 {
    Vec2::new(point.x - centroid.x, -(point.y - centroid.y))
}

/// Convert a graph-space point back to screen space for display.
#[inline]
pub fn graph_to_screen(point: Vec2, centroid: Vec2) -> Vec2 {
    Vec2::new(point.x + centroid.x, -point.y + centroid.y)
}
