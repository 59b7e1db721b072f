#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the bridge crossing game.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative session, and pure systems. Adapters submit [`Command`] values
//! describing the player's intent, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values describing what
//! happened. Nothing outside the world mutates a play-through; everything else
//! observes it through immutable views such as [`MoveMapView`].

use thiserror::Error;

/// Canonical banner emitted when a play-through starts.
pub const WELCOME_BANNER: &str = "Bridge crossing game begins.";

/// The safe tile of a single bridge column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// The upper tile of the column is the safe one.
    Up,
    /// The lower tile of the column is the safe one.
    Down,
}

impl Tile {
    /// Symbol used to print the tile on a terminal.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
        }
    }

    /// Resolves a tile from its terminal symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            _ => None,
        }
    }
}

/// Lane the player steps onto for the current column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Step onto the upper tile.
    Up,
    /// Step onto the lower tile.
    Down,
}

impl Move {
    /// Both lanes in the order they are printed.
    pub const LANES: [Self; 2] = [Self::Up, Self::Down];

    /// Symbol the player types to choose this lane.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
        }
    }

    /// Resolves a move from the symbol typed by the player.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            _ => None,
        }
    }

    /// Reports whether stepping into this lane lands on the provided safe tile.
    #[must_use]
    pub const fn lands_on(self, tile: Tile) -> bool {
        matches!(
            (self, tile),
            (Self::Up, Tile::Up) | (Self::Down, Tile::Down)
        )
    }
}

/// Decision taken by the player after an attempt failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RetryChoice {
    /// Start a new attempt on the same bridge.
    Retry,
    /// Abandon the play-through.
    Quit,
}

impl RetryChoice {
    /// Symbol the player types to select this choice.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Retry => 'R',
            Self::Quit => 'Q',
        }
    }

    /// Resolves a choice from the symbol typed by the player.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'R' => Some(Self::Retry),
            'Q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Reported when a bridge would contain no columns.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("bridge size must be a positive integer (received {size})")]
pub struct InvalidSizeError {
    /// Size that failed validation.
    pub size: usize,
}

/// The hidden, immutable sequence of safe tiles for one play-through.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bridge {
    tiles: Vec<Tile>,
}

impl Bridge {
    /// Creates a bridge from its safe tiles, ordered from the first column.
    pub fn new(tiles: Vec<Tile>) -> Result<Self, InvalidSizeError> {
        if tiles.is_empty() {
            return Err(InvalidSizeError { size: 0 });
        }
        Ok(Self { tiles })
    }

    /// Number of columns that must be crossed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; a bridge has at least one column.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Safe tile of the provided zero-based column, if it exists.
    #[must_use]
    pub fn tile(&self, column: usize) -> Option<Tile> {
        self.tiles.get(column).copied()
    }

    /// All safe tiles ordered from the first column.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

/// Commands that express all permissible session mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Step onto the next column of the bridge.
    Move {
        /// Lane chosen for the next column.
        direction: Move,
    },
    /// Start a new attempt on the same bridge after a failure.
    Retry,
    /// Abandon the play-through after a failure.
    GiveUp,
}

/// Events broadcast by the session after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a move was recorded against the active attempt.
    MoveRecorded {
        /// One-based number of the attempt the move belongs to.
        attempt: usize,
        /// Zero-based column the move was checked against.
        column: usize,
        /// Lane chosen by the player.
        direction: Move,
        /// Whether the move landed on the safe tile.
        correct: bool,
    },
    /// Announces that the active attempt stepped onto an unsafe tile.
    AttemptFailed {
        /// One-based number of the failed attempt.
        attempt: usize,
        /// Zero-based column where the attempt failed.
        column: usize,
    },
    /// Announces that a fresh attempt started on the same bridge.
    AttemptStarted {
        /// One-based number of the attempt that started.
        attempt: usize,
    },
    /// Announces that the active attempt crossed the whole bridge.
    BridgeCrossed {
        /// Final trial count of the play-through.
        trials: u32,
    },
    /// Announces that the player declined to retry.
    GameAbandoned {
        /// Final trial count of the play-through.
        trials: u32,
    },
}

/// Finished result of a play-through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The bridge was crossed.
    Success,
    /// The player gave up after a failed attempt.
    Failure,
}

/// Lifecycle state of a play-through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// The active attempt accepts moves.
    InProgress,
    /// The active attempt stepped onto an unsafe tile and awaits a retry decision.
    RowFailed,
    /// The active attempt crossed the bridge; the play-through ended in success.
    RowComplete,
    /// The player declined to retry; the play-through ended in failure.
    GameOver,
}

impl SessionState {
    /// Outcome of the play-through once it reached a terminal state.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::RowComplete => Some(Outcome::Success),
            Self::GameOver => Some(Outcome::Failure),
            Self::InProgress | Self::RowFailed => None,
        }
    }

    /// Reports whether the play-through is finished.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.outcome().is_some()
    }
}

/// Single recorded move of an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    /// Lane chosen by the player.
    pub direction: Move,
    /// Whether the lane held the safe tile.
    pub correct: bool,
}

impl Step {
    /// Creates a new step descriptor.
    #[must_use]
    pub const fn new(direction: Move, correct: bool) -> Self {
        Self { direction, correct }
    }
}

/// What a single lane shows for one column of an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LaneCell {
    /// The player stepped into the other lane.
    Empty,
    /// The player stepped into this lane and it held.
    Passed,
    /// The player stepped into this lane and fell.
    Failed,
}

/// Read-only view of one attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttemptView {
    steps: Vec<Step>,
}

impl AttemptView {
    /// Creates a view from the ordered steps of an attempt.
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Recorded steps ordered from the first column.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Projects the attempt onto one lane, one cell per attempted column.
    #[must_use]
    pub fn lane(&self, lane: Move) -> Vec<LaneCell> {
        self.steps
            .iter()
            .map(|step| match (step.direction == lane, step.correct) {
                (false, _) => LaneCell::Empty,
                (true, true) => LaneCell::Passed,
                (true, false) => LaneCell::Failed,
            })
            .collect()
    }
}

/// Read-only view of every attempt of a play-through, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveMapView {
    attempts: Vec<AttemptView>,
}

impl MoveMapView {
    /// Creates a view from attempts ordered oldest first.
    #[must_use]
    pub fn new(attempts: Vec<AttemptView>) -> Self {
        Self { attempts }
    }

    /// Every attempt ordered oldest first; the last one is the active attempt.
    #[must_use]
    pub fn attempts(&self) -> &[AttemptView] {
        &self.attempts
    }

    /// The active attempt, if any attempt exists.
    #[must_use]
    pub fn active(&self) -> Option<&AttemptView> {
        self.attempts.last()
    }

    /// Outcomes recorded for one column across all attempts, oldest first.
    ///
    /// Attempts that never reached the column are skipped.
    #[must_use]
    pub fn column(&self, column: usize) -> Vec<Step> {
        self.attempts
            .iter()
            .filter_map(|attempt| attempt.steps.get(column).copied())
            .collect()
    }
}
