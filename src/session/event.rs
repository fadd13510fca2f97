//! Session events and dispatch
//!
//! One entry point, [`apply`], processes every player action against the
//! session state. Invalid actions (re-guessing a resolved bomb, guessing
//! with nothing selected) are declined with [`EventOutcome::Rejected`] and
//! leave the state untouched, so stray double-taps from the UI layer are
//! harmless.

use super::state::{Bomb, BombResult, SessionState};
use crate::consts::{POLYGON_SIDES, RUN_LENGTH};
use crate::geom::{Level, generate_polygon, point_in_polygon};
use crate::graph_to_screen;
use crate::sampling::sample_candidates;

/// Player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Start a fresh round, optionally switching difficulty
    Reset { level: Option<Level> },
    /// Tap a pending bomb to guess on it
    SelectBomb { index: usize },
    /// Open or close the guess sheet without resolving anything
    ToggleResultSheet,
    /// Commit a HIT/MISS guess for the currently selected bomb
    SubmitGuess { guessed: BombResult },
}

/// Whether an event was applied or declined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    Rejected,
}

/// Apply one event to the session. Runs to completion; never panics on
/// caller-contract violations - those come back as `Rejected`.
pub fn apply(state: &mut SessionState, event: SessionEvent) -> EventOutcome {
    match event {
        SessionEvent::Reset { level } => {
            reset(state, level);
            EventOutcome::Applied
        }
        SessionEvent::SelectBomb { index } => select_bomb(state, index),
        SessionEvent::ToggleResultSheet => {
            state.show_result_sheet = !state.show_result_sheet;
            EventOutcome::Applied
        }
        SessionEvent::SubmitGuess { guessed } => submit_guess(state, guessed),
    }
}

/// Deal a fresh round: new polygon, new candidates, cleared history and
/// score. The sole place the polygon is ever replaced.
fn reset(state: &mut SessionState, level: Option<Level>) {
    let level = level.unwrap_or(state.level);
    let mut rng = state.rng_state.next_round();

    let polygon = generate_polygon(&mut rng, POLYGON_SIDES, level);
    log::info!("reset: level {:?}, centroid {}", level, polygon.centroid);
    log::debug!("polygon vertices: {:?}", polygon.vertices);
    log::debug!("graph vertices: {:?}", polygon.graph_vertices);

    let run: Vec<Bomb> = sample_candidates(&mut rng, &polygon.graph_vertices, RUN_LENGTH)
        .into_iter()
        .map(Bomb::unresolved)
        .collect();
    if run.is_empty() {
        log::warn!("reset produced no candidates; round is not playable");
    }

    state.polygon = polygon;
    state.run = run;
    state.bombed_points.clear();
    state.score = 0;
    state.level = level;
    state.selected_bomb = None;
    state.show_result_sheet = false;
}

fn select_bomb(state: &mut SessionState, index: usize) -> EventOutcome {
    match state.run.get(index) {
        Some(bomb) if !bomb.is_resolved() => {
            state.selected_bomb = Some(index);
            state.show_result_sheet = true;
            EventOutcome::Applied
        }
        Some(_) => {
            log::debug!("select_bomb: bomb {index} is already resolved");
            EventOutcome::Rejected
        }
        None => {
            log::warn!("select_bomb: index {index} out of range");
            EventOutcome::Rejected
        }
    }
}

/// Resolve the selected bomb against the polygon.
///
/// The run entry keeps the player's guessed label (that is what the run
/// table shows); the bombed-points history gets the screen-space point
/// marked with the ground truth. The two stay distinct on purpose.
fn submit_guess(state: &mut SessionState, guessed: BombResult) -> EventOutcome {
    if guessed == BombResult::Unknown {
        log::warn!("submit_guess: UNKNOWN is not a guess");
        return EventOutcome::Rejected;
    }
    let Some(index) = state.selected_bomb else {
        log::debug!("submit_guess: no bomb selected");
        return EventOutcome::Rejected;
    };
    let Some(bomb) = state.run.get(index).copied() else {
        return EventOutcome::Rejected;
    };
    if bomb.is_resolved() {
        log::debug!("submit_guess: bomb {index} is already resolved");
        return EventOutcome::Rejected;
    }

    let inside = point_in_polygon(&state.polygon.graph_vertices, bomb.pos);
    let truth = if inside {
        BombResult::Hit
    } else {
        BombResult::Miss
    };

    state.run[index] = Bomb {
        pos: bomb.pos,
        result: guessed,
        is_guess_correct: guessed == truth,
    };
    state.bombed_points.push(Bomb::new(
        graph_to_screen(bomb.pos, state.polygon.centroid),
        truth,
    ));

    state.score = state.run.iter().filter(|b| b.is_guess_correct).count();
    state.selected_bomb = None;
    state.show_result_sheet = false;

    log::info!(
        "guess {:?} on bomb {}: truth {:?}, score {}",
        guessed,
        index,
        truth,
        state.score
    );
    EventOutcome::Applied
}
