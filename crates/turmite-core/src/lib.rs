//! Core types for the turmite automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the closed enumerations the automaton is built from ([`Color`] and
//! [`Heading`]), the normalised cell coordinate [`Position`], and the
//! construction-time error type [`GridError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod heading;
pub mod position;

pub use color::Color;
pub use error::GridError;
pub use heading::Heading;
pub use position::Position;
