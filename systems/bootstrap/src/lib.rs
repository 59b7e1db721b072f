#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares a bridge crossing play-through.

use bridge_crossing_core::{InvalidSizeError, WELCOME_BANNER};
use bridge_crossing_system_builder::{BridgeBuilder, TileGenerator};
use bridge_crossing_world::GameSession;
use tracing::info;

/// Produces data required to greet the player and start a play-through.
#[derive(Debug, Default)]
pub struct Bootstrap {
    builder: BridgeBuilder,
}

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner(&self) -> &'static str {
        WELCOME_BANNER
    }

    /// Generates a bridge of `size` columns and opens a session over it.
    ///
    /// Every call yields an independent session; nothing is shared between
    /// play-throughs.
    pub fn start<G>(&self, size: usize, generator: &mut G) -> Result<GameSession, InvalidSizeError>
    where
        G: TileGenerator + ?Sized,
    {
        let bridge = self.builder.build(size, generator)?;
        info!(size, "play-through started");
        Ok(GameSession::new(bridge))
    }
}
