//! Turmite: a four-colour turmite with a countdown dash mode on a torus.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all turmite sub-crates. For most users, adding `turmite` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use turmite::prelude::*;
//!
//! let mut sim = LockstepSim::new(SimConfig::default()).unwrap();
//! let result = sim.step_sync();
//!
//! // Black is the unvisited baseline: repaint to blue, turn left, move.
//! assert_eq!(result.outcome.read, Color::Black);
//! assert_eq!(sim.grid().color_at(30, 20), Color::Blue);
//! assert_eq!(sim.bot().heading(), Heading::West);
//! assert_eq!(sim.bot().position(), Position::new(29, 20));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `turmite-core` | `Color`, `Heading`, `Position`, `GridError` |
//! | [`grid`] | `turmite-grid` | The toroidal `Grid` and fingerprinting |
//! | [`automaton`] | `turmite-automaton` | `Bot`, `Mode`, `Automaton`, `StepOutcome` |
//! | [`engine`] | `turmite-engine` | Lockstep and realtime drivers, config, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`turmite-core`).
pub use turmite_core as types;

/// The toroidal colour grid (`turmite-grid`).
pub use turmite_grid as grid;

/// The bot state machine (`turmite-automaton`).
///
/// [`automaton::Automaton::step`] is the single transition rule; everything
/// else in the workspace drives or observes it.
pub use turmite_automaton as automaton;

/// Simulation drivers (`turmite-engine`).
///
/// [`engine::LockstepSim`] for caller-driven stepping,
/// [`engine::RealtimeSim`] for background ticking at a fixed rate.
pub use turmite_engine as engine;

/// Common imports for typical turmite usage.
///
/// ```rust
/// use turmite::prelude::*;
/// ```
pub mod prelude {
    // Core types and errors
    pub use turmite_core::{Color, GridError, Heading, Position};

    // Grid
    pub use turmite_grid::Grid;

    // Automaton
    pub use turmite_automaton::{Automaton, Bot, Mode, StepOutcome};

    // Engine
    pub use turmite_engine::{
        ConfigError, Control, GridFill, LockstepSim, RealtimeSim, SimConfig, SimSnapshot,
        StepMetrics, StepResult,
    };
}
