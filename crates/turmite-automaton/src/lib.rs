//! Bot state machine and per-step transition rule for the turmite automaton.
//!
//! The [`Automaton`] owns exactly one [`Bot`] and advances it against a
//! [`Grid`](turmite_grid::Grid) one tick at a time. Each
//! [`step()`](Automaton::step) reads the bot's cell, repaints it to the next
//! colour in the cycle, then either applies the per-colour turning rule or,
//! while a dash is armed, runs the whole dash sub-mode to completion.
//!
//! # Rules
//!
//! | Colour read | Action |
//! |-------------|--------|
//! | Blue   | turn left, move |
//! | Yellow | arm dash, move straight |
//! | Red    | turn right, move |
//! | Black  | turn left, move |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod bot;
pub mod outcome;

pub use automaton::Automaton;
pub use bot::{Bot, Mode};
pub use outcome::StepOutcome;
