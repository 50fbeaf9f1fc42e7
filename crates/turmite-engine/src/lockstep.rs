//! Lockstep (synchronous) simulation driver.
//!
//! [`LockstepSim`] is the primary user-facing API. It owns the grid and the
//! automaton outright, so every method takes `&mut self` and no step can be
//! observed half-done. The caller decides when to step: directly through
//! [`step_sync()`](LockstepSim::step_sync), or once per presentation frame
//! through [`advance_frame()`](LockstepSim::advance_frame), which applies
//! the frame stride and the pause flag.

use std::time::Instant;

use turmite_automaton::{Automaton, Bot, StepOutcome};
use turmite_grid::Grid;

use crate::config::{ConfigError, SimConfig};
use crate::metrics::StepMetrics;

// Compile-time assertion: LockstepSim can be moved onto a tick thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LockstepSim>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of one automaton step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepResult {
    /// Tick number after this step (the first step yields 1).
    pub tick: u64,
    /// What the automaton did, for redrawing.
    pub outcome: StepOutcome,
    /// Timing and activity counters.
    pub metrics: StepMetrics,
}

// ── LockstepSim ─────────────────────────────────────────────────

/// Single-threaded simulation driver.
///
/// # Example
///
/// ```
/// use turmite_engine::{LockstepSim, SimConfig};
///
/// let mut sim = LockstepSim::new(SimConfig::default()).unwrap();
/// // Default stride is 3: frames 1 and 2 are idle, frame 3 steps.
/// assert!(sim.advance_frame().is_none());
/// assert!(sim.advance_frame().is_none());
/// let result = sim.advance_frame().unwrap();
/// assert_eq!(result.tick, 1);
/// ```
#[derive(Debug)]
pub struct LockstepSim {
    config: SimConfig,
    grid: Grid,
    automaton: Automaton,
    tick: u64,
    frame: u64,
    paused: bool,
}

impl LockstepSim {
    /// Validate `config` and build the initial grid and bot.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.fill.build(config.width, config.height)?;
        let automaton = Automaton::at(config.start, config.heading);
        Ok(Self {
            config,
            grid,
            automaton,
            tick: 0,
            frame: 0,
            paused: false,
        })
    }

    /// Execute one step now, regardless of frame count or pause state.
    pub fn step_sync(&mut self) -> StepResult {
        let start = Instant::now();
        let outcome = self.automaton.step(&mut self.grid);
        self.tick += 1;
        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            moves: outcome.moves,
            painted: outcome.painted.len() as u32,
            dashed: outcome.dashed(),
        };
        StepResult {
            tick: self.tick,
            outcome,
            metrics,
        }
    }

    /// Count one presentation frame and step if it is due.
    ///
    /// A step runs when the new frame number is a multiple of
    /// `frame_stride` and the simulation is not paused. Frames keep
    /// counting while paused.
    pub fn advance_frame(&mut self) -> Option<StepResult> {
        self.frame += 1;
        if self.paused || !self.frame.is_multiple_of(u64::from(self.config.frame_stride)) {
            return None;
        }
        Some(self.step_sync())
    }

    /// Stop [`advance_frame()`](Self::advance_frame) from stepping.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Let [`advance_frame()`](Self::advance_frame) step again.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip the pause flag and return the new state (`true` = paused).
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Whether frame-driven stepping is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Move the bot to `(x, y)`, wrapped onto the grid. Heading and mode
    /// are kept; no cell is painted.
    pub fn teleport(&mut self, x: i64, y: i64) {
        self.automaton.teleport(&self.grid, x, y);
    }

    /// Restart from the configuration: fresh grid, fresh bot, tick and
    /// frame counters at zero. The pause flag is left as it was.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.grid = self.config.fill.build(self.config.width, self.config.height)?;
        self.automaton = Automaton::at(self.config.start, self.config.heading);
        self.tick = 0;
        self.frame = 0;
        Ok(())
    }

    /// The grid, for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The bot, for rendering.
    pub fn bot(&self) -> &Bot {
        self.automaton.bot()
    }

    /// Steps taken since construction or the last reset.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Frames counted since construction or the last reset.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The configuration this simulation was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Grid fingerprint; equal fingerprints mean equal cell state.
    pub fn fingerprint(&self) -> u64 {
        self.grid.fingerprint()
    }
}
