//! Record an automaton's path over many steps.

use indexmap::IndexSet;
use turmite_automaton::{Automaton, StepOutcome};
use turmite_core::Position;
use turmite_grid::Grid;

/// The path taken by a bot over a run of steps.
///
/// `positions[0]` is the starting cell and `positions[i]` the bot's cell
/// after step `i`. `visited` holds every cell the bot stood on or passed
/// through, in first-visit order.
#[derive(Clone, Debug, Default)]
pub struct Trajectory {
    pub positions: Vec<Position>,
    pub outcomes: Vec<StepOutcome>,
    pub visited: IndexSet<Position>,
}

impl Trajectory {
    /// Step `automaton` `steps` times over `grid`, recording each outcome.
    pub fn record(automaton: &mut Automaton, grid: &mut Grid, steps: usize) -> Self {
        let start = automaton.bot().position();
        let mut positions = Vec::with_capacity(steps + 1);
        let mut outcomes = Vec::with_capacity(steps);
        let mut visited = IndexSet::new();
        positions.push(start);
        visited.insert(start);

        for _ in 0..steps {
            let outcome = automaton.step(grid);
            for &cell in &outcome.painted {
                visited.insert(cell);
            }
            let pos = automaton.bot().position();
            visited.insert(pos);
            positions.push(pos);
            outcomes.push(outcome);
        }

        Self {
            positions,
            outcomes,
            visited,
        }
    }

    /// Number of steps that ran the dash sub-mode.
    pub fn dash_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.dashed()).count()
    }

    /// Total single-cell moves across the run.
    pub fn total_moves(&self) -> u64 {
        self.outcomes.iter().map(|o| u64::from(o.moves)).sum()
    }
}
