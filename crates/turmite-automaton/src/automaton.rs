//! The per-step transition rule and the dash sub-mode.

use crate::bot::{Bot, Mode};
use crate::outcome::StepOutcome;
use smallvec::smallvec;
use turmite_core::{Color, Heading, Position};
use turmite_grid::Grid;

/// Drives a single [`Bot`] over a [`Grid`].
///
/// The automaton is the bot's exclusive owner. It is strictly synchronous:
/// each [`step()`](Automaton::step) is atomic with respect to the caller,
/// and the dash sub-mode resolves entirely inside one call.
///
/// # Examples
///
/// ```
/// use turmite_automaton::Automaton;
/// use turmite_core::{Color, Heading, Position};
/// use turmite_grid::Grid;
///
/// let mut grid = Grid::new(60, 40).unwrap();
/// let mut automaton = Automaton::default();
///
/// let outcome = automaton.step(&mut grid);
/// assert_eq!(outcome.read, Color::Black);
/// assert_eq!(grid.color_at(30, 20), Color::Blue);
/// assert_eq!(automaton.bot().heading(), Heading::West);
/// assert_eq!(automaton.bot().position(), Position::new(29, 20));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Automaton {
    bot: Bot,
}

impl Automaton {
    /// Wrap an existing bot.
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    /// A fresh bot at `position` facing `heading`.
    pub fn at(position: Position, heading: Heading) -> Self {
        Self::new(Bot::new(position, heading))
    }

    /// Read-only view of the bot.
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Advance the simulation by one tick.
    ///
    /// 1. Read the colour under the bot and remember it as `last_color`.
    /// 2. Repaint that cell to the colour's successor.
    /// 3. If a dash is armed, run it to completion and return.
    /// 4. Otherwise apply the colour rule and move one cell.
    pub fn step(&mut self, grid: &mut Grid) -> StepOutcome {
        let start = self.bot.position;
        let entry_mode = self.bot.mode;
        let read = grid.color_at_pos(start);
        self.bot.last_color = read;
        grid.paint_pos(start, read.advance());

        let mut outcome = StepOutcome {
            start,
            read,
            entry_mode,
            painted: smallvec![start],
            moves: 0,
        };

        match entry_mode {
            Mode::Normal => self.apply_rule(grid, read, &mut outcome),
            Mode::DashEnter | Mode::DashRun => self.dash(grid, &mut outcome),
        }
        outcome
    }

    /// Move the bot to `(x, y)` wrapped onto `grid`. Heading and mode are kept.
    pub fn teleport(&mut self, grid: &Grid, x: i64, y: i64) {
        self.bot.position = grid.wrap(x, y);
    }

    fn apply_rule(&mut self, grid: &Grid, read: Color, outcome: &mut StepOutcome) {
        match read {
            Color::Blue | Color::Black => self.bot.heading = self.bot.heading.turn_left(),
            Color::Red => self.bot.heading = self.bot.heading.turn_right(),
            Color::Yellow => self.bot.mode = Mode::DashEnter,
        }
        self.move_forward(grid, outcome);
    }

    /// Enter (if armed) and run the dash.
    ///
    /// Entering moves one cell and takes the arrival cell's colour index as
    /// the counter without painting it. The run then paints and moves
    /// `counter + 1` times. Every run paint uses the successor of the colour
    /// captured at the start of this step, not the painted cell's own colour.
    fn dash(&mut self, grid: &mut Grid, outcome: &mut StepOutcome) {
        if self.bot.mode == Mode::DashEnter {
            self.move_forward(grid, outcome);
            self.bot.dash_counter = u32::from(grid.color_at_pos(self.bot.position).index());
            self.bot.mode = Mode::DashRun;
        }

        let trail = self.bot.last_color.advance();
        loop {
            grid.paint_pos(self.bot.position, trail);
            outcome.painted.push(self.bot.position);
            self.move_forward(grid, outcome);
            if self.bot.dash_counter == 0 {
                break;
            }
            self.bot.dash_counter -= 1;
        }

        self.bot.mode = Mode::Normal;
        self.bot.dash_counter = 0;
    }

    fn move_forward(&mut self, grid: &Grid, outcome: &mut StepOutcome) {
        self.bot.position = grid.offset(self.bot.position, self.bot.heading);
        outcome.moves += 1;
    }
}
