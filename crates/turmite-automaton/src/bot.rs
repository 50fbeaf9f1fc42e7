//! The mobile agent and its mode.

use turmite_core::{Color, Heading, Position};

/// The bot's control mode.
///
/// Both dash modes are transient: a bot leaves [`Mode::DashEnter`] on the
/// next step, and [`Mode::DashRun`] resolves back to [`Mode::Normal`]
/// inside that same step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Per-colour turning rule applies.
    #[default]
    Normal,
    /// Armed by reading yellow; the next step starts a dash.
    DashEnter,
    /// Running straight for `dash_counter + 1` cells.
    DashRun,
}

/// The single mobile agent of a simulation.
///
/// Fields are read-only outside this crate; the bot is mutated only
/// through [`Automaton`](crate::Automaton).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bot {
    pub(crate) position: Position,
    pub(crate) heading: Heading,
    pub(crate) mode: Mode,
    pub(crate) dash_counter: u32,
    pub(crate) last_color: Color,
}

impl Bot {
    /// Starting position used when none is given.
    pub const DEFAULT_START: Position = Position::new(30, 20);

    /// A bot in [`Mode::Normal`] at `position` facing `heading`.
    pub fn new(position: Position, heading: Heading) -> Self {
        Self {
            position,
            heading,
            mode: Mode::Normal,
            dash_counter: 0,
            last_color: Color::Black,
        }
    }

    /// Current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Remaining dash iterations. Always 0 in [`Mode::Normal`].
    pub fn dash_counter(&self) -> u32 {
        self.dash_counter
    }

    /// The colour read at the start of the most recent step.
    pub fn last_color(&self) -> Color {
        self.last_color
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START, Heading::North)
    }
}
