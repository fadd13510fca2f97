//! Game session
//!
//! Holds the state of one round (polygon, pending run, resolved history,
//! score) and processes player events through exhaustive dispatch. The
//! session expects a single logical owner: events are applied one at a
//! time, and each runs to completion before the next.

pub mod event;
pub mod state;

pub use event::{EventOutcome, SessionEvent, apply};
pub use state::{Bomb, BombResult, RngState, SessionState};
