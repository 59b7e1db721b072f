use bridge_crossing_core::{AttemptView, Move, MoveMapView, Step};

use crate::SessionError;

/// Moves recorded for a single attempt, ordered from the first column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttemptRow {
    steps: Vec<Step>,
}

impl AttemptRow {
    /// Number of columns attempted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Reports whether no move was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Reports whether any recorded move fell.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.steps.iter().any(|step| !step.correct)
    }

    /// Reports whether every column of a bridge of `bridge_length` was crossed safely.
    #[must_use]
    pub fn is_complete(&self, bridge_length: usize) -> bool {
        self.steps.len() == bridge_length && self.steps.iter().all(|step| step.correct)
    }

    fn is_terminal(&self, bridge_length: usize) -> bool {
        self.is_failed() || self.is_complete(bridge_length)
    }

    fn view(&self) -> AttemptView {
        AttemptView::new(self.steps.clone())
    }
}

/// Every attempt of a play-through; only the active (last) row still grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptLog {
    bridge_length: usize,
    finished: Vec<AttemptRow>,
    active: AttemptRow,
}

impl AttemptLog {
    /// Creates a log holding one empty attempt against a bridge of `bridge_length` columns.
    #[must_use]
    pub fn new(bridge_length: usize) -> Self {
        Self {
            bridge_length,
            finished: Vec::new(),
            active: AttemptRow::default(),
        }
    }

    /// Appends a move to the active attempt.
    pub fn record_move(&mut self, direction: Move, correct: bool) -> Result<(), SessionError> {
        if self.active.is_terminal(self.bridge_length) {
            return Err(SessionError::RowAlreadyTerminal);
        }
        self.active.steps.push(Step::new(direction, correct));
        Ok(())
    }

    /// Reports whether the active attempt fell.
    #[must_use]
    pub fn is_active_row_failed(&self) -> bool {
        self.active.is_failed()
    }

    /// Reports whether the active attempt crossed the whole bridge.
    #[must_use]
    pub fn is_active_row_complete(&self) -> bool {
        self.active.is_complete(self.bridge_length)
    }

    /// Retires the active attempt and opens a fresh, empty one.
    pub fn start_new_row(&mut self) -> Result<(), SessionError> {
        if !self.active.is_terminal(self.bridge_length) {
            return Err(SessionError::RetryBeforeTerminal);
        }
        let retired = std::mem::take(&mut self.active);
        self.finished.push(retired);
        Ok(())
    }

    /// The attempt currently accepting moves.
    #[must_use]
    pub fn active_row(&self) -> &AttemptRow {
        &self.active
    }

    /// Number of attempts recorded, including the active one.
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.finished.len() + 1
    }

    /// Iterates every attempt, oldest first.
    pub fn rows(&self) -> impl Iterator<Item = &AttemptRow> {
        self.finished.iter().chain(std::iter::once(&self.active))
    }

    /// Captures a read-only view of every attempt, oldest first.
    #[must_use]
    pub fn render(&self) -> MoveMapView {
        MoveMapView::new(self.rows().map(AttemptRow::view).collect())
    }
}
