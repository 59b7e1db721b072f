#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system responsible for generating the hidden bridge of a play-through.

use bridge_crossing_core::{Bridge, InvalidSizeError, Tile};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Source of safe tiles, one per call.
pub trait TileGenerator {
    /// Produces the safe tile of the next column.
    fn generate(&mut self) -> Tile;
}

/// Tile generator that picks uniformly between the two lanes.
#[derive(Debug)]
pub struct RandomTileGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomTileGenerator<R> {
    /// Wraps the provided randomness source.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTileGenerator<ChaCha8Rng> {
    /// Creates a generator whose tile stream is fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomTileGenerator<StdRng> {
    /// Creates a generator seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> TileGenerator for RandomTileGenerator<R> {
    fn generate(&mut self) -> Tile {
        match self.rng.gen_range(0..=1u8) {
            1 => Tile::Up,
            _ => Tile::Down,
        }
    }
}

/// Assembles bridges by drawing one tile per column from a generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct BridgeBuilder;

impl BridgeBuilder {
    /// Creates a new builder system instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds a bridge of `size` columns, drawing tiles in column order.
    ///
    /// The generator is not consulted when `size` is zero.
    pub fn build<G>(&self, size: usize, generator: &mut G) -> Result<Bridge, InvalidSizeError>
    where
        G: TileGenerator + ?Sized,
    {
        if size == 0 {
            return Err(InvalidSizeError { size });
        }

        let tiles: Vec<Tile> = (0..size).map(|_| generator.generate()).collect();
        debug!(size, "generated bridge");
        Bridge::new(tiles)
    }
}
