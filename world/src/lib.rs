#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative play-through state for the bridge crossing game.
//!
//! A [`GameSession`] owns the hidden bridge and the log of every attempt.
//! Adapters drive it exclusively through [`apply`] and observe it through the
//! [`query`] module.

mod attempts;
mod bridge_map;

use bridge_crossing_core::{Bridge, Command, Event, Move, SessionState};
use thiserror::Error;
use tracing::debug;

pub use attempts::{AttemptLog, AttemptRow};
pub use bridge_map::BridgeMap;

/// Internal consistency violations raised by the session.
///
/// None of these occur when the caller consults the session state before
/// submitting commands; they abort the play-through rather than being recovered.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A column past the end of the bridge was checked.
    #[error("column {column} is outside a bridge of {length} columns")]
    ColumnOutOfBounds {
        /// Column that was requested.
        column: usize,
        /// Number of columns in the bridge.
        length: usize,
    },
    /// A move was recorded against an attempt that already ended.
    #[error("the active attempt has already ended")]
    RowAlreadyTerminal,
    /// A new attempt was opened while the active attempt was still running.
    #[error("a new attempt cannot start while the active attempt is still running")]
    RetryBeforeTerminal,
    /// A command arrived in a state that does not accept it.
    #[error("{command:?} is not allowed while the session is {state:?}")]
    InvalidStateTransition {
        /// Command that was rejected.
        command: Command,
        /// State the session was in.
        state: SessionState,
    },
}

/// One continuous play-through over a single, fixed bridge.
#[derive(Debug)]
pub struct GameSession {
    map: BridgeMap,
    log: AttemptLog,
    state: SessionState,
    trials: u32,
}

impl GameSession {
    /// Starts a play-through with one empty attempt over the provided bridge.
    #[must_use]
    pub fn new(bridge: Bridge) -> Self {
        let log = AttemptLog::new(bridge.len());
        Self {
            map: BridgeMap::new(bridge),
            log,
            state: SessionState::InProgress,
            trials: 0,
        }
    }

    /// Steps onto the next column of the active attempt.
    ///
    /// Returns whether the chosen lane held.
    pub fn step(&mut self, direction: Move) -> Result<bool, SessionError> {
        self.ensure_state(SessionState::InProgress, Command::Move { direction })?;

        let column = self.log.active_row().len();
        let correct = self.map.check(direction, column)?;
        self.log.record_move(direction, correct)?;

        if !correct {
            self.state = SessionState::RowFailed;
        } else if self.log.is_active_row_complete() {
            self.state = SessionState::RowComplete;
            self.trials += 1;
        }
        Ok(correct)
    }

    /// Opens a fresh attempt on the same bridge after a failure.
    pub fn retry(&mut self) -> Result<(), SessionError> {
        self.ensure_state(SessionState::RowFailed, Command::Retry)?;
        self.log.start_new_row()?;
        self.trials += 1;
        self.state = SessionState::InProgress;
        Ok(())
    }

    /// Declines to retry after a failure, ending the play-through.
    pub fn give_up(&mut self) -> Result<(), SessionError> {
        self.ensure_state(SessionState::RowFailed, Command::GiveUp)?;
        self.trials += 1;
        self.state = SessionState::GameOver;
        Ok(())
    }

    fn ensure_state(&self, expected: SessionState, command: Command) -> Result<(), SessionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidStateTransition {
                command,
                state: self.state,
            })
        }
    }
}

/// Applies the provided command to the session and broadcasts what happened.
///
/// Nothing is broadcast when the command is rejected.
pub fn apply(
    session: &mut GameSession,
    command: Command,
    out_events: &mut Vec<Event>,
) -> Result<(), SessionError> {
    debug!(?command, state = ?session.state, "applying command");
    let attempt = session.log.attempt_count();

    match command {
        Command::Move { direction } => {
            let column = session.log.active_row().len();
            let correct = session.step(direction)?;
            out_events.push(Event::MoveRecorded {
                attempt,
                column,
                direction,
                correct,
            });

            match session.state {
                SessionState::RowFailed => {
                    out_events.push(Event::AttemptFailed { attempt, column });
                }
                SessionState::RowComplete => {
                    out_events.push(Event::BridgeCrossed {
                        trials: session.trials,
                    });
                }
                SessionState::InProgress | SessionState::GameOver => {}
            }
        }
        Command::Retry => {
            session.retry()?;
            out_events.push(Event::AttemptStarted {
                attempt: session.log.attempt_count(),
            });
        }
        Command::GiveUp => {
            session.give_up()?;
            out_events.push(Event::GameAbandoned {
                trials: session.trials,
            });
        }
    }

    debug!(state = ?session.state, trials = session.trials, "command applied");
    Ok(())
}

/// Query functions that provide read-only access to the session state.
pub mod query {
    use bridge_crossing_core::{Bridge, MoveMapView, Outcome, SessionState};

    use super::GameSession;

    /// Current lifecycle state of the play-through.
    #[must_use]
    pub fn state(session: &GameSession) -> SessionState {
        session.state
    }

    /// Outcome of the play-through, once it has one.
    #[must_use]
    pub fn outcome(session: &GameSession) -> Option<Outcome> {
        session.state.outcome()
    }

    /// Reports whether the active attempt reached the far side of the bridge.
    #[must_use]
    pub fn is_end(session: &GameSession) -> bool {
        session.map.is_end(session.log.active_row().len()) && !session.log.is_active_row_failed()
    }

    /// Reports whether the active attempt stepped onto an unsafe tile.
    #[must_use]
    pub fn is_failed(session: &GameSession) -> bool {
        session.log.is_active_row_failed()
    }

    /// Number of finished attempt cycles counted so far.
    #[must_use]
    pub fn trial_count(session: &GameSession) -> u32 {
        session.trials
    }

    /// One-based number of the active attempt.
    #[must_use]
    pub fn attempt_number(session: &GameSession) -> usize {
        session.log.attempt_count()
    }

    /// Zero-based column the next move will be checked against.
    #[must_use]
    pub fn next_column(session: &GameSession) -> usize {
        session.log.active_row().len()
    }

    /// Provides read-only access to the hidden bridge.
    #[must_use]
    pub fn bridge(session: &GameSession) -> &Bridge {
        session.map.bridge()
    }

    /// Captures a read-only view of every attempt, oldest first.
    #[must_use]
    pub fn move_map(session: &GameSession) -> MoveMapView {
        session.log.render()
    }
}
