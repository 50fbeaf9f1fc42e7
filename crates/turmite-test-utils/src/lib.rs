//! Test utilities for turmite development.
//!
//! Provides a text pattern format for building grids ([`grid_from_rows`],
//! [`grid_to_rows`]) and a [`Trajectory`] recorder for running an
//! automaton and inspecting where it went.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod pattern;
pub mod trajectory;

pub use pattern::{color_glyph, glyph_color, grid_from_rows, grid_to_rows};
pub use trajectory::Trajectory;
