use bridge_crossing_core::{Bridge, Command, Event, Move, Outcome, SessionState, Step, Tile};
use bridge_crossing_world::{self as world, query, GameSession, SessionError};

fn session_over(tiles: &[Tile]) -> GameSession {
    GameSession::new(Bridge::new(tiles.to_vec()).expect("test bridges are non-empty"))
}

fn up_down_up() -> GameSession {
    session_over(&[Tile::Up, Tile::Down, Tile::Up])
}

fn submit(session: &mut GameSession, command: Command) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(session, command, &mut events).expect("command should be accepted");
    events
}

#[test]
fn fail_retry_then_cross_counts_two_trials() {
    let mut session = up_down_up();

    assert_eq!(session.step(Move::Up), Ok(true));
    assert_eq!(query::state(&session), SessionState::InProgress);

    assert_eq!(session.step(Move::Up), Ok(false), "column 1 expects Down");
    assert_eq!(query::state(&session), SessionState::RowFailed);

    session.retry().expect("retry is allowed after a failure");
    assert_eq!(session.step(Move::Up), Ok(true));
    assert_eq!(session.step(Move::Down), Ok(true));
    assert_eq!(session.step(Move::Up), Ok(true));

    assert_eq!(query::state(&session), SessionState::RowComplete);
    assert_eq!(query::outcome(&session), Some(Outcome::Success));
    assert_eq!(query::trial_count(&session), 2);
    assert!(query::is_end(&session));
}

#[test]
fn declining_retry_after_first_column_fails_game() {
    let mut session = up_down_up();

    assert_eq!(session.step(Move::Down), Ok(false));
    session.give_up().expect("giving up is allowed after a failure");

    assert_eq!(query::state(&session), SessionState::GameOver);
    assert_eq!(query::outcome(&session), Some(Outcome::Failure));
    assert_eq!(query::trial_count(&session), 1);

    let view = query::move_map(&session);
    assert_eq!(view.attempts().len(), 1, "only one attempt was played");
    assert_eq!(view.attempts()[0].steps(), &[Step::new(Move::Down, false)]);
}

#[test]
fn active_row_grows_with_each_correct_move() {
    let tiles = [Tile::Down, Tile::Down, Tile::Up, Tile::Up, Tile::Down];
    let mut session = session_over(&tiles);

    for (index, tile) in tiles.iter().enumerate() {
        let direction = match tile {
            Tile::Up => Move::Up,
            Tile::Down => Move::Down,
        };
        assert_eq!(session.step(direction), Ok(true));

        let moves = index + 1;
        assert_eq!(query::next_column(&session), moves);
        let expected = if moves == tiles.len() {
            SessionState::RowComplete
        } else {
            SessionState::InProgress
        };
        assert_eq!(query::state(&session), expected, "after {moves} moves");
    }
}

#[test]
fn failed_attempt_rejects_moves_until_retry() {
    let mut session = up_down_up();
    assert_eq!(session.step(Move::Down), Ok(false));

    for direction in Move::LANES {
        assert_eq!(
            session.step(direction),
            Err(SessionError::InvalidStateTransition {
                command: Command::Move { direction },
                state: SessionState::RowFailed,
            }),
        );
    }

    assert_eq!(query::state(&session), SessionState::RowFailed);
    assert_eq!(query::next_column(&session), 1, "rejected moves are not recorded");
}

#[test]
fn retry_and_give_up_require_failed_attempt() {
    let mut session = up_down_up();

    assert_eq!(
        session.retry(),
        Err(SessionError::InvalidStateTransition {
            command: Command::Retry,
            state: SessionState::InProgress,
        }),
    );
    assert_eq!(
        session.give_up(),
        Err(SessionError::InvalidStateTransition {
            command: Command::GiveUp,
            state: SessionState::InProgress,
        }),
    );
    assert_eq!(query::trial_count(&session), 0);
}

#[test]
fn finished_game_rejects_every_command() {
    let mut session = session_over(&[Tile::Up]);
    assert_eq!(session.step(Move::Up), Ok(true));

    let mut events = Vec::new();
    for command in [
        Command::Move { direction: Move::Up },
        Command::Retry,
        Command::GiveUp,
    ] {
        let result = world::apply(&mut session, command, &mut events);
        assert!(
            matches!(result, Err(SessionError::InvalidStateTransition { .. })),
            "{command:?} must be rejected once the bridge is crossed",
        );
    }
    assert!(events.is_empty(), "rejected commands broadcast nothing");
}

#[test]
fn retry_keeps_bridge_and_adds_one_trial() {
    let mut session = up_down_up();
    let bridge_before = query::bridge(&session).clone();

    assert_eq!(session.step(Move::Down), Ok(false));
    let trials_before = query::trial_count(&session);
    session.retry().expect("retry is allowed after a failure");

    assert_eq!(query::trial_count(&session), trials_before + 1);
    assert_eq!(query::bridge(&session), &bridge_before);
    assert_eq!(query::next_column(&session), 0, "new attempt starts empty");
    assert_eq!(query::attempt_number(&session), 2);
    assert!(!query::is_failed(&session));

    assert_eq!(session.step(Move::Down), Ok(false), "same bridge, same answer");
}

#[test]
fn queries_do_not_change_session() {
    let mut session = up_down_up();
    assert_eq!(session.step(Move::Up), Ok(true));
    assert_eq!(session.step(Move::Up), Ok(false));

    let map_before = query::move_map(&session);
    let trials_before = query::trial_count(&session);
    for _ in 0..3 {
        assert!(query::is_failed(&session));
        assert!(!query::is_end(&session));
        assert_eq!(query::state(&session), SessionState::RowFailed);
    }

    assert_eq!(query::move_map(&session), map_before);
    assert_eq!(query::trial_count(&session), trials_before);
}

#[test]
fn apply_broadcasts_move_and_failure() {
    let mut session = up_down_up();

    let events = submit(&mut session, Command::Move { direction: Move::Up });
    assert_eq!(
        events,
        vec![Event::MoveRecorded {
            attempt: 1,
            column: 0,
            direction: Move::Up,
            correct: true,
        }],
    );

    let events = submit(&mut session, Command::Move { direction: Move::Up });
    assert_eq!(
        events,
        vec![
            Event::MoveRecorded {
                attempt: 1,
                column: 1,
                direction: Move::Up,
                correct: false,
            },
            Event::AttemptFailed {
                attempt: 1,
                column: 1,
            },
        ],
    );
}

#[test]
fn apply_broadcasts_retry_crossing_and_abandonment() {
    let mut session = session_over(&[Tile::Down]);

    let _ = submit(&mut session, Command::Move { direction: Move::Up });
    assert_eq!(
        submit(&mut session, Command::Retry),
        vec![Event::AttemptStarted { attempt: 2 }],
    );

    let events = submit(&mut session, Command::Move { direction: Move::Down });
    assert_eq!(
        events.last(),
        Some(&Event::BridgeCrossed { trials: 2 }),
        "crossing reports the final trial count",
    );

    let mut abandoned = session_over(&[Tile::Down]);
    let _ = submit(&mut abandoned, Command::Move { direction: Move::Up });
    assert_eq!(
        submit(&mut abandoned, Command::GiveUp),
        vec![Event::GameAbandoned { trials: 1 }],
    );
}
