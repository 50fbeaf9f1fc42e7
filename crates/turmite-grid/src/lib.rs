//! Toroidal colour grid for the turmite automaton.
//!
//! [`Grid`] is the sole source of truth for cell state. Every coordinate
//! handed to it is wrapped onto the torus first, so reads and paints are
//! total: there is no edge and no out-of-bounds case once a grid exists.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod hash;
pub mod wrap;

pub use grid::Grid;
pub use hash::grid_fingerprint;
