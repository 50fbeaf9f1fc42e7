//! Per-step report handed back to the caller for redrawing.

use crate::bot::Mode;
use smallvec::SmallVec;
use turmite_core::{Color, Position};

/// What a single [`Automaton::step`](crate::Automaton::step) did.
///
/// `painted` lists every cell repainted during the call in order; together
/// with the bot's new position and heading it is everything a renderer
/// needs to redraw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Where the bot stood when the step began.
    pub start: Position,
    /// Colour read at `start` before repainting.
    pub read: Color,
    /// Mode at the start of the step.
    pub entry_mode: Mode,
    /// Cells repainted, in paint order. `painted[0]` is always `start`.
    pub painted: SmallVec<[Position; 8]>,
    /// Number of single-cell moves made.
    pub moves: u32,
}

impl StepOutcome {
    /// Whether this step ran the dash sub-mode instead of the colour rule.
    pub fn dashed(&self) -> bool {
        self.entry_mode != Mode::Normal
    }

    /// Whether this step armed a dash for the next one.
    pub fn armed_dash(&self) -> bool {
        self.entry_mode == Mode::Normal && self.read == Color::Yellow
    }
}
