use std::io::BufRead;

use anyhow::{Context, Result};
use bridge_crossing_core::{Command, Event, Outcome, RetryChoice, SessionState};
use bridge_crossing_rendering::{Frame, MapLayout, Prompt, RenderingBackend, Report};
use bridge_crossing_world::{self as world, query, GameSession};
use tracing::{debug, info};

use crate::input::{acquire, parse_move, parse_retry_choice};

/// Drives a session to completion, one operator decision at a time.
///
/// Commands are only submitted in states that accept them, so any error
/// coming back from the session aborts the play-through.
pub(crate) fn play<R, B>(
    session: &mut GameSession,
    input: &mut R,
    backend: &mut B,
    layout: MapLayout,
) -> Result<Outcome>
where
    R: BufRead + ?Sized,
    B: RenderingBackend + ?Sized,
{
    let mut events = Vec::new();

    loop {
        match query::state(session) {
            SessionState::InProgress => {
                let direction = acquire(input, backend, Prompt::Move, parse_move)?;
                submit(session, Command::Move { direction }, &mut events)?;

                let map = query::move_map(session);
                if let Some(active) = map.active() {
                    backend.present(&Frame::Progress(active))?;
                }
            }
            SessionState::RowFailed => {
                let command = match acquire(input, backend, Prompt::Retry, parse_retry_choice)? {
                    RetryChoice::Retry => Command::Retry,
                    RetryChoice::Quit => Command::GiveUp,
                };
                submit(session, command, &mut events)?;
            }
            SessionState::RowComplete | SessionState::GameOver => break,
        }
    }

    let outcome = query::outcome(session).context("play-through ended without an outcome")?;
    let trials = query::trial_count(session);
    let map = query::move_map(session);
    backend.present(&Frame::Report(Report {
        map: &map,
        outcome,
        trials,
        layout,
    }))?;

    info!(?outcome, trials, "play-through finished");
    Ok(outcome)
}

fn submit(session: &mut GameSession, command: Command, events: &mut Vec<Event>) -> Result<()> {
    events.clear();
    world::apply(session, command, events).context("game state became inconsistent")?;
    for event in events.iter() {
        debug!(?event, "session event");
    }
    Ok(())
}
