//! Background-thread driver and the snapshot it publishes.
//!
//! ```text
//! User Thread(s)                  Tick Thread
//!     |                               |
//!     |--send(Control)--------------->| ctrl_rx.try_recv()
//!     |   [ctrl_tx: bounded(64)]      | apply controls
//!     |                               | sim.step_sync()   (unless paused)
//!     |                               | publish snapshot
//!     |<--latest_snapshot()-----------| sleep(budget - elapsed)
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel::TrySendError;
use turmite_automaton::Bot;
use turmite_core::Color;

use crate::config::{ConfigError, SimConfig};
use crate::lockstep::LockstepSim;
use crate::tick_thread::{SnapshotSlot, TickThreadState};

/// Capacity of the control channel.
const CONTROL_CAPACITY: usize = 64;

// ── Control ──────────────────────────────────────────────────────

/// A request applied by the tick thread between ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Stop stepping.
    Pause,
    /// Start stepping again.
    Resume,
    /// Flip the pause flag (key-press equivalent).
    TogglePause,
    /// Move the bot, wrapped onto the grid (pointer-click equivalent).
    Teleport {
        /// Target column, any signed value.
        x: i64,
        /// Target row, any signed value.
        y: i64,
    },
    /// Restart from the configuration: fresh grid and bot, tick 0.
    /// A paused simulation stays paused.
    Reset,
}

/// Error sending a [`Control`] to the tick thread.
#[derive(Debug, PartialEq, Eq)]
pub enum ControlError {
    /// The tick thread has shut down.
    Shutdown,
    /// The control channel is full (back-pressure).
    ChannelFull,
}

impl std::fmt::Display for ControlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shutdown => write!(f, "tick thread has shut down"),
            Self::ChannelFull => write!(f, "control channel full"),
        }
    }
}

impl std::error::Error for ControlError {}

// ── SimSnapshot ──────────────────────────────────────────────────

/// An owned, immutable copy of simulation state for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimSnapshot {
    /// Tick at capture time.
    pub tick: u64,
    /// Whether the simulation was paused at capture time.
    pub paused: bool,
    /// The bot at capture time.
    pub bot: Bot,
    /// Grid columns.
    pub width: u32,
    /// Grid rows.
    pub height: u32,
    /// Row-major cell colours.
    pub cells: Vec<Color>,
}

impl SimSnapshot {
    /// Copy the current state of `sim`.
    pub fn capture(sim: &LockstepSim) -> Self {
        let grid = sim.grid();
        Self {
            tick: sim.tick(),
            paused: sim.is_paused(),
            bot: sim.bot().clone(),
            width: grid.width(),
            height: grid.height(),
            cells: grid.cells().to_vec(),
        }
    }

    /// Colour at `(x, y)`; coordinates wrap like the live grid.
    pub fn color_at(&self, x: i64, y: i64) -> Color {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        self.cells[y * self.width as usize + x]
    }
}

// ── ShutdownReport ───────────────────────────────────────────────

/// Report from [`RealtimeSim::shutdown()`].
#[derive(Debug)]
pub struct ShutdownReport {
    /// Total time spent shutting down.
    pub total_ms: u64,
    /// Whether the tick thread was joined successfully.
    pub tick_joined: bool,
    /// Tick count of the recovered simulation, if any.
    pub final_tick: Option<u64>,
}

// ── RealtimeSim ──────────────────────────────────────────────────

/// Runs a [`LockstepSim`] on a dedicated tick thread at a fixed rate.
///
/// Readers poll [`latest_snapshot()`](Self::latest_snapshot); writers send
/// [`Control`] messages. The simulation is recovered on shutdown, so a
/// realtime run can be inspected or continued in lockstep afterwards.
pub struct RealtimeSim {
    ctrl_tx: Option<crossbeam_channel::Sender<Control>>,
    latest: SnapshotSlot,
    shutdown_flag: Arc<AtomicBool>,
    tick_thread: Option<JoinHandle<LockstepSim>>,
    recovered: Option<LockstepSim>,
}

impl RealtimeSim {
    /// Build a simulation from `config` and start its tick thread.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let tick_rate_hz = config.resolved_tick_rate_hz();
        let sim = LockstepSim::new(config)?;
        Self::spawn(sim, tick_rate_hz)
    }

    /// Move an existing simulation onto a new tick thread.
    pub fn from_lockstep(sim: LockstepSim) -> Result<Self, ConfigError> {
        let tick_rate_hz = sim.config().resolved_tick_rate_hz();
        Self::spawn(sim, tick_rate_hz)
    }

    fn spawn(sim: LockstepSim, tick_rate_hz: f64) -> Result<Self, ConfigError> {
        let initial = Arc::new(SimSnapshot::capture(&sim));
        let latest: SnapshotSlot = Arc::new(Mutex::new(Some(initial)));
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let (ctrl_tx, ctrl_rx) = crossbeam_channel::bounded(CONTROL_CAPACITY);

        let state = TickThreadState::new(
            sim,
            ctrl_rx,
            Arc::clone(&latest),
            Arc::clone(&shutdown_flag),
            tick_rate_hz,
        );
        let tick_thread = thread::Builder::new()
            .name("turmite-tick".into())
            .spawn(move || state.run())
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("tick thread: {e}"),
            })?;

        Ok(Self {
            ctrl_tx: Some(ctrl_tx),
            latest,
            shutdown_flag,
            tick_thread: Some(tick_thread),
            recovered: None,
        })
    }

    /// Queue a control message without blocking.
    pub fn send(&self, ctrl: Control) -> Result<(), ControlError> {
        let tx = self.ctrl_tx.as_ref().ok_or(ControlError::Shutdown)?;
        tx.try_send(ctrl).map_err(|e| match e {
            TrySendError::Full(_) => ControlError::ChannelFull,
            TrySendError::Disconnected(_) => ControlError::Shutdown,
        })
    }

    /// Queue [`Control::Pause`].
    pub fn pause(&self) -> Result<(), ControlError> {
        self.send(Control::Pause)
    }

    /// Queue [`Control::Resume`].
    pub fn resume(&self) -> Result<(), ControlError> {
        self.send(Control::Resume)
    }

    /// Queue [`Control::TogglePause`].
    pub fn toggle_pause(&self) -> Result<(), ControlError> {
        self.send(Control::TogglePause)
    }

    /// Queue [`Control::Teleport`].
    pub fn teleport(&self, x: i64, y: i64) -> Result<(), ControlError> {
        self.send(Control::Teleport { x, y })
    }

    /// The most recently published snapshot.
    ///
    /// Always `Some` while the lock is healthy: a snapshot of the initial
    /// state is published before the tick thread starts.
    pub fn latest_snapshot(&self) -> Option<Arc<SimSnapshot>> {
        self.latest.lock().ok().and_then(|slot| slot.clone())
    }

    /// Whether the tick thread is still running.
    pub fn is_running(&self) -> bool {
        self.tick_thread.is_some()
    }

    /// Stop the tick thread and recover the simulation.
    ///
    /// Idempotent: a second call returns a report with `final_tick` of the
    /// already-recovered simulation.
    pub fn shutdown(&mut self) -> ShutdownReport {
        let start = Instant::now();
        self.shutdown_flag.store(true, Ordering::Release);
        self.ctrl_tx.take();

        let tick_joined = match self.tick_thread.take() {
            Some(handle) => {
                // Wake the thread if it is parked in a budget sleep.
                handle.thread().unpark();
                match handle.join() {
                    Ok(sim) => {
                        self.recovered = Some(sim);
                        true
                    }
                    Err(_) => false,
                }
            }
            None => true,
        };

        ShutdownReport {
            total_ms: start.elapsed().as_millis() as u64,
            tick_joined,
            final_tick: self.recovered.as_ref().map(LockstepSim::tick),
        }
    }

    /// Shut down (if still running) and hand back the simulation.
    ///
    /// Returns `None` only if the tick thread panicked.
    pub fn into_lockstep(mut self) -> Option<LockstepSim> {
        self.shutdown();
        self.recovered.take()
    }
}

impl Drop for RealtimeSim {
    fn drop(&mut self) {
        if self.tick_thread.is_some() {
            self.shutdown();
        }
    }
}
