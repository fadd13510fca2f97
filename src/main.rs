//! Bombing Run entry point
//!
//! Plays one automated round in the terminal: deals a session, then guesses
//! HIT or MISS at random for every candidate and reports the score. Pass a
//! seed as the first argument for a reproducible round; set `RUST_LOG=debug`
//! to see the generated geometry.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use bombing_run::geom::Level;
use bombing_run::session::{BombResult, EventOutcome, SessionEvent, SessionState, apply};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("session seed: {seed}");

    let mut state = SessionState::new(seed, Level::Normal);
    // Separate stream for the automated player's guesses
    let mut guesser = Pcg32::seed_from_u64(seed ^ 0x9e37_79b9_97f4_a7c5);

    for index in 0..state.run.len() {
        if apply(&mut state, SessionEvent::SelectBomb { index }) == EventOutcome::Rejected {
            continue;
        }
        let guessed = if guesser.random::<bool>() {
            BombResult::Hit
        } else {
            BombResult::Miss
        };
        apply(&mut state, SessionEvent::SubmitGuess { guessed });

        let bomb = &state.run[index];
        println!(
            "bomb {index:2} at ({:7.1}, {:7.1})  guessed {:<4}  {}",
            bomb.pos.x,
            bomb.pos.y,
            format!("{guessed:?}"),
            if bomb.is_guess_correct { "correct" } else { "wrong" }
        );
    }

    println!("final score: {}/{}", state.score, state.run.len());

    if std::env::var("DUMP_STATE").is_ok() {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("failed to serialize state: {err}"),
        }
    }
}
