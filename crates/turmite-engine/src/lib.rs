//! Drivers for the turmite automaton.
//!
//! The automaton itself only knows how to take one step. This crate adds
//! the surrounding loop: [`LockstepSim`] owns a grid and an automaton and
//! steps them on demand, with frame throttling, pausing, teleporting and
//! restarting; [`RealtimeSim`] runs a `LockstepSim` on a background tick
//! thread and publishes snapshots for a renderer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod fill;
pub mod lockstep;
pub mod metrics;
pub mod realtime;
mod tick_thread;

pub use config::{ConfigError, SimConfig};
pub use fill::GridFill;
pub use lockstep::{LockstepSim, StepResult};
pub use metrics::StepMetrics;
pub use realtime::{Control, ControlError, RealtimeSim, ShutdownReport, SimSnapshot};
