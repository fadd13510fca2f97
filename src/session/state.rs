//! Session state and core game types
//!
//! Everything needed to replay a session lives here: the seed, the round
//! counter, the polygon, and the run of bombs. State is a plain snapshot -
//! the UI layer reads the fields directly after every event.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::event;
use crate::geom::{Level, Polygon};

/// Classification of a drop point - the player's guess on pending bombs,
/// the ground truth on resolved history entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BombResult {
    Hit,
    Miss,
    #[default]
    Unknown,
}

/// A candidate drop point.
///
/// Starts out `Unknown` and resolves exactly once when the player guesses.
/// The stored `result` on a resolved run entry is the player's *guess*
/// (that is what the run table displays); `is_guess_correct` separately
/// records whether the guess matched the true classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bomb {
    pub pos: Vec2,
    pub result: BombResult,
    pub is_guess_correct: bool,
}

impl Bomb {
    pub fn new(pos: Vec2, result: BombResult) -> Self {
        Self {
            pos,
            result,
            is_guess_correct: false,
        }
    }

    /// A fresh candidate awaiting a guess
    pub fn unresolved(pos: Vec2) -> Self {
        Self::new(pos, BombResult::Unknown)
    }

    pub fn is_resolved(&self) -> bool {
        self.result != BombResult::Unknown
    }
}

/// RNG state wrapper for serialization.
///
/// Each reset derives a fresh deterministic stream from the session seed
/// and a round counter, so repeated resets differ while the whole session
/// stays replayable from the seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub round: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, round: 0 }
    }

    /// RNG for the next round, advancing the round counter
    pub fn next_round(&mut self) -> Pcg32 {
        let rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.round));
        self.round += 1;
        rng
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// RNG state for reproducibility
    pub rng_state: RngState,
    /// Current difficulty (changes only through a reset)
    pub level: Level,
    /// The target zone
    pub polygon: Polygon,
    /// Pending run of candidates, graph space; resolved entries carry the
    /// player's guessed label
    pub run: Vec<Bomb>,
    /// Resolved drop points in screen space, marked with the ground truth
    pub bombed_points: Vec<Bomb>,
    /// Count of correct guesses across the run
    pub score: usize,
    /// Run index the player is currently guessing on, if any
    pub selected_bomb: Option<usize>,
    /// Whether the HIT/MISS choice sheet is up
    pub show_result_sheet: bool,
}

impl SessionState {
    /// Create a session and deal the first round.
    pub fn new(seed: u64, level: Level) -> Self {
        let mut state = Self {
            rng_state: RngState::new(seed),
            level,
            polygon: Polygon::default(),
            run: Vec::new(),
            bombed_points: Vec::new(),
            score: 0,
            selected_bomb: None,
            show_result_sheet: false,
        };
        event::apply(&mut state, event::SessionEvent::Reset { level: Some(level) });
        state
    }

    /// Read-only snapshot of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.clone()
    }
}
