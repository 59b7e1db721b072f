use bridge_crossing_core::{Bridge, Move};

use crate::SessionError;

/// Answers questions about the hidden bridge without ever mutating it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeMap {
    bridge: Bridge,
}

impl BridgeMap {
    /// Takes exclusive ownership of the bridge for the rest of the play-through.
    #[must_use]
    pub fn new(bridge: Bridge) -> Self {
        Self { bridge }
    }

    /// Reports whether `direction` lands on the safe tile of the zero-based `column`.
    pub fn check(&self, direction: Move, column: usize) -> Result<bool, SessionError> {
        let tile = self
            .bridge
            .tile(column)
            .ok_or(SessionError::ColumnOutOfBounds {
                column,
                length: self.bridge.len(),
            })?;
        Ok(direction.lands_on(tile))
    }

    /// Reports whether an attempt of the provided length has reached the far side.
    #[must_use]
    pub fn is_end(&self, attempt_length: usize) -> bool {
        attempt_length == self.bridge.len()
    }

    /// The bridge this map answers for.
    #[must_use]
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }
}
