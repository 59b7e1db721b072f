#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for bridge crossing adapters.
//!
//! Rendering is purely presentational: adapters hand a [`Frame`] to their
//! [`RenderingBackend`] and nothing flows back into the session. The text
//! layout helpers in this crate are pure so every backend prints the same map.

use anyhow::Result as AnyResult;
use bridge_crossing_core::{AttemptView, LaneCell, Move, MoveMapView, Outcome, RetryChoice};

/// Prefix attached to every message reporting a rejected input or a fatal error.
pub const ERROR_PREFIX: &str = "[ERROR]";

const PASSED_MARK: &str = "O";
const FAILED_MARK: &str = "X";
const EMPTY_MARK: &str = " ";
const CELL_SEPARATOR: &str = " | ";
const ATTEMPT_SEPARATOR: &str = "  ";

/// Questions the adapter asks the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// Asks for the number of bridge columns.
    BridgeSize {
        /// Smallest accepted size.
        min: usize,
        /// Largest accepted size.
        max: usize,
    },
    /// Asks for the lane of the next column.
    Move,
    /// Asks whether to retry after a failed attempt.
    Retry,
}

/// Controls how much of the play-through the final map shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapLayout {
    /// Only the last attempt.
    Latest,
    /// Every attempt side by side, oldest on the left.
    #[default]
    History,
}

/// Everything needed to print the end of a play-through.
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    /// Moves of every attempt.
    pub map: &'a MoveMapView,
    /// How the play-through ended.
    pub outcome: Outcome,
    /// Final trial count.
    pub trials: u32,
    /// Portion of the map to print.
    pub layout: MapLayout,
}

/// Unit of output handed to a rendering backend.
#[derive(Clone, Copy, Debug)]
pub enum Frame<'a> {
    /// Greeting shown once when the play-through starts.
    Banner(&'a str),
    /// Question awaiting player input.
    Prompt(Prompt),
    /// Map of the active attempt after a move.
    Progress(&'a AttemptView),
    /// Final result of the play-through.
    Report(Report<'a>),
    /// Rejected input or fatal error message, without the prefix.
    Error(&'a str),
}

/// Rendering backend capable of presenting bridge crossing frames.
pub trait RenderingBackend {
    /// Presents a single frame to the player.
    fn present(&mut self, frame: &Frame<'_>) -> AnyResult<()>;
}

/// Formats one lane of an attempt as `[ O |   | X ]`.
#[must_use]
pub fn lane_line(cells: &[LaneCell]) -> String {
    let marks: Vec<&str> = cells
        .iter()
        .map(|cell| match cell {
            LaneCell::Empty => EMPTY_MARK,
            LaneCell::Passed => PASSED_MARK,
            LaneCell::Failed => FAILED_MARK,
        })
        .collect();
    format!("[ {} ]", marks.join(CELL_SEPARATOR))
}

/// Formats an attempt as its up lane followed by its down lane.
#[must_use]
pub fn attempt_lines(attempt: &AttemptView) -> [String; 2] {
    Move::LANES.map(|lane| lane_line(&attempt.lane(lane)))
}

/// Formats every attempt side by side, oldest first, up lane then down lane.
#[must_use]
pub fn history_lines(map: &MoveMapView) -> [String; 2] {
    Move::LANES.map(|lane| {
        map.attempts()
            .iter()
            .map(|attempt| lane_line(&attempt.lane(lane)))
            .collect::<Vec<_>>()
            .join(ATTEMPT_SEPARATOR)
    })
}

/// Produces the text of a frame; backends terminate it with a single newline.
#[must_use]
pub fn frame_text(frame: &Frame<'_>) -> String {
    match frame {
        Frame::Banner(banner) => (*banner).to_owned(),
        Frame::Prompt(prompt) => prompt_text(*prompt),
        Frame::Progress(attempt) => {
            let [up, down] = attempt_lines(attempt);
            format!("{up}\n{down}\n")
        }
        Frame::Report(report) => report_text(report),
        Frame::Error(message) => format!("{ERROR_PREFIX} {message}"),
    }
}

fn prompt_text(prompt: Prompt) -> String {
    match prompt {
        Prompt::BridgeSize { min, max } => {
            format!("Enter the bridge length ({min}-{max}).")
        }
        Prompt::Move => format!(
            "Choose the next tile. (Up: {}, Down: {})",
            Move::Up.symbol(),
            Move::Down.symbol()
        ),
        Prompt::Retry => format!(
            "Retry the game? (Retry: {}, Quit: {})",
            RetryChoice::Retry.symbol(),
            RetryChoice::Quit.symbol()
        ),
    }
}

fn report_text(report: &Report<'_>) -> String {
    let [up, down] = match report.layout {
        MapLayout::History => history_lines(report.map),
        MapLayout::Latest => report
            .map
            .active()
            .map(attempt_lines)
            .unwrap_or_else(|| attempt_lines(&AttemptView::default())),
    };
    let outcome = match report.outcome {
        Outcome::Success => "Success",
        Outcome::Failure => "Failure",
    };
    format!(
        "Final game result\n{up}\n{down}\n\nGame outcome: {outcome}\nTotal attempts: {}",
        report.trials
    )
}
