//! Geometry kernel
//!
//! Procedural target-zone generation and the point-in-polygon test.
//! Everything here is pure: randomness comes in through a caller-supplied
//! `rand::Rng`, and no module state survives a call.

pub mod polygon;
pub mod raycast;

pub use polygon::{Level, Polygon, generate_polygon};
pub use raycast::point_in_polygon;
