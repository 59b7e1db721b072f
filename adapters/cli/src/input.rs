use std::{io::BufRead, ops::RangeInclusive};

use anyhow::{bail, Context, Result};
use bridge_crossing_core::{Move, RetryChoice};
use bridge_crossing_rendering::{Frame, Prompt, RenderingBackend};
use thiserror::Error;
use tracing::warn;

/// Reasons a line typed by the player was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub(crate) enum InputError {
    /// The bridge length was not a number within the accepted bounds.
    #[error("the bridge length must be a number between {min} and {max}")]
    BridgeSize {
        /// Smallest accepted size.
        min: usize,
        /// Largest accepted size.
        max: usize,
    },
    /// The move was neither `U` nor `D`.
    #[error("choose U to move up or D to move down")]
    Move,
    /// The retry decision was neither `R` nor `Q`.
    #[error("type R to retry or Q to quit")]
    RetryChoice,
    /// The line was not valid UTF-8 text.
    #[error("the input must be plain text")]
    Encoding,
}

/// Prompts until `parse` accepts a line, reporting every rejection to the player.
///
/// Only a closed input stream ends the loop without a value.
pub(crate) fn acquire<T, R, B, P>(
    input: &mut R,
    backend: &mut B,
    prompt: Prompt,
    parse: P,
) -> Result<T>
where
    R: BufRead + ?Sized,
    B: RenderingBackend + ?Sized,
    P: Fn(&str) -> Result<T, InputError>,
{
    let mut raw = Vec::new();
    loop {
        backend.present(&Frame::Prompt(prompt))?;
        raw.clear();
        let read = input
            .read_until(b'\n', &mut raw)
            .context("failed to read player input")?;
        if read == 0 {
            bail!("input closed before a valid value was entered");
        }

        let parsed = std::str::from_utf8(&raw)
            .map_err(|_| InputError::Encoding)
            .and_then(&parse);
        match parsed {
            Ok(value) => return Ok(value),
            Err(error) => {
                let line = String::from_utf8_lossy(&raw);
                warn!(%error, raw = line.trim_end(), "rejected input");
                backend.present(&Frame::Error(&error.to_string()))?;
            }
        }
    }
}

/// Parses a bridge length within `bounds`.
pub(crate) fn parse_bridge_size(
    raw: &str,
    bounds: &RangeInclusive<usize>,
) -> Result<usize, InputError> {
    let rejected = InputError::BridgeSize {
        min: *bounds.start(),
        max: *bounds.end(),
    };
    let size: usize = raw.trim().parse().map_err(|_| rejected.clone())?;
    if bounds.contains(&size) {
        Ok(size)
    } else {
        Err(rejected)
    }
}

/// Parses the lane of the next column.
pub(crate) fn parse_move(raw: &str) -> Result<Move, InputError> {
    single_symbol(raw)
        .and_then(Move::from_symbol)
        .ok_or(InputError::Move)
}

/// Parses the decision taken after a failed attempt.
pub(crate) fn parse_retry_choice(raw: &str) -> Result<RetryChoice, InputError> {
    single_symbol(raw)
        .and_then(RetryChoice::from_symbol)
        .ok_or(InputError::RetryChoice)
}

fn single_symbol(raw: &str) -> Option<char> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Some(symbol),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::terminal::TerminalBackend;

    #[test]
    fn bridge_size_respects_bounds() {
        let bounds = 3..=20;

        assert_eq!(parse_bridge_size("3", &bounds), Ok(3));
        assert_eq!(parse_bridge_size(" 20\n", &bounds), Ok(20));
        for raw in ["2", "21", "-1", "0", "three", "", "4.5"] {
            assert_eq!(
                parse_bridge_size(raw, &bounds),
                Err(InputError::BridgeSize { min: 3, max: 20 }),
                "{raw:?} should be rejected",
            );
        }
    }

    #[test]
    fn moves_accept_single_symbols_only() {
        assert_eq!(parse_move("U\n"), Ok(Move::Up));
        assert_eq!(parse_move("D"), Ok(Move::Down));
        for raw in ["u", "UD", "", "X", "Up"] {
            assert_eq!(parse_move(raw), Err(InputError::Move), "{raw:?}");
        }
    }

    #[test]
    fn retry_choice_accepts_r_and_q() {
        assert_eq!(parse_retry_choice("R"), Ok(RetryChoice::Retry));
        assert_eq!(parse_retry_choice("Q\r\n"), Ok(RetryChoice::Quit));
        assert_eq!(parse_retry_choice("q"), Err(InputError::RetryChoice));
    }

    #[test]
    fn acquire_repeats_until_parse_succeeds() {
        let mut input = Cursor::new("x\n\nUU\nD\nU\n");
        let mut output = Vec::new();

        let value = acquire(
            &mut input,
            &mut TerminalBackend::new(&mut output),
            Prompt::Move,
            parse_move,
        )
        .expect("a valid move is eventually typed");

        assert_eq!(value, Move::Down);
        let text = String::from_utf8(output).expect("output is utf-8");
        assert_eq!(text.matches("Choose the next tile.").count(), 4);
        assert_eq!(
            text.matches("[ERROR] choose U to move up or D to move down")
                .count(),
            3
        );

        let mut rest = String::new();
        let _ = input.read_line(&mut rest).expect("cursor reads");
        assert_eq!(rest, "U\n", "lines after the accepted one stay unread");
    }

    #[test]
    fn acquire_rejects_lines_that_are_not_utf8() {
        let mut input = Cursor::new(b"\xff\nU\n".to_vec());
        let mut output = Vec::new();

        let value = acquire(
            &mut input,
            &mut TerminalBackend::new(&mut output),
            Prompt::Move,
            parse_move,
        )
        .expect("the line after the garbled one is accepted");

        assert_eq!(value, Move::Up);
        let text = String::from_utf8(output).expect("output is utf-8");
        assert_eq!(text.matches("Choose the next tile.").count(), 2);
        assert_eq!(text.matches("[ERROR] the input must be plain text").count(), 1);
    }

    #[test]
    fn acquire_fails_when_input_closes() {
        let mut input = Cursor::new("nope\n");
        let mut output = Vec::new();

        let error = acquire(
            &mut input,
            &mut TerminalBackend::new(&mut output),
            Prompt::Retry,
            parse_retry_choice,
        )
        .expect_err("closed input cannot produce a value");

        assert!(error.to_string().contains("input closed"), "{error:#}");
    }
}
