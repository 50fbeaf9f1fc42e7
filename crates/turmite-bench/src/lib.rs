//! Benchmark profiles for the turmite automaton.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: the 60x40 blank grid with the default start
//! - [`stress_profile`]: 1000x1000 blank grid (1M cells)
//! - [`dash_profile`]: 60x40 scattered grid, so dashes trigger early and often

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use turmite_core::{Heading, Position};
use turmite_engine::{GridFill, SimConfig};

/// The reference setup: 60x40, all black, bot at (30, 20) facing north.
pub fn reference_profile() -> SimConfig {
    SimConfig {
        frame_stride: 1,
        ..SimConfig::default()
    }
}

/// A large blank grid. The bot's footprint stays small, so this mostly
/// measures that stepping cost does not depend on grid size.
pub fn stress_profile() -> SimConfig {
    SimConfig {
        width: 1000,
        height: 1000,
        start: Position::new(500, 500),
        heading: Heading::North,
        frame_stride: 1,
        fill: GridFill::Blank,
        tick_rate_hz: None,
    }
}

/// A scattered 60x40 grid: about a quarter of the cells are yellow.
pub fn dash_profile(seed: u64) -> SimConfig {
    SimConfig {
        frame_stride: 1,
        fill: GridFill::Scattered { seed },
        ..SimConfig::default()
    }
}
