use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Draws random grid cells, retrying until a cell is not forbidden.
#[derive(Debug, Clone)]
pub struct RandomPlacer<R> {
    rng: R,
}

impl<R: Rng> RandomPlacer<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a uniformly drawn cell for which `forbidden` is false.
    ///
    /// Each axis is drawn independently. Retries are unbounded, so callers
    /// must guarantee at least one allowed cell exists.
    pub fn place<F>(&mut self, bounds: GridSize, forbidden: F) -> Position
    where
        F: Fn(Position) -> bool,
    {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        loop {
            let candidate = Position {
                x: self.rng.gen_range(0..i32::from(bounds.width)),
                y: self.rng.gen_range(0..i32::from(bounds.height)),
            };
            if !forbidden(candidate) {
                return candidate;
            }
        }
    }
}
