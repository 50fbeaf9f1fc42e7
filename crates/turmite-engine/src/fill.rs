//! Initial grid contents.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use turmite_core::{Color, GridError};
use turmite_grid::Grid;

/// How a fresh grid is coloured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridFill {
    /// Every cell black, the unvisited baseline.
    #[default]
    Blank,
    /// Every cell the same colour.
    Uniform(Color),
    /// Every cell an independent uniform draw from the four colours.
    ///
    /// Deterministic: the same seed always yields the same grid.
    Scattered {
        /// Seed for the `ChaCha8Rng` stream.
        seed: u64,
    },
}

impl GridFill {
    /// Build a `width × height` grid with this fill.
    pub fn build(self, width: u32, height: u32) -> Result<Grid, GridError> {
        match self {
            GridFill::Blank => Grid::new(width, height),
            GridFill::Uniform(color) => Grid::filled(width, height, color),
            GridFill::Scattered { seed } => {
                let mut grid = Grid::new(width, height)?;
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                for y in 0..height as i64 {
                    for x in 0..width as i64 {
                        grid.paint(x, y, Color::ALL[rng.random_range(0..Color::COUNT)]);
                    }
                }
                Ok(grid)
            }
        }
    }
}
