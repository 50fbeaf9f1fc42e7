//! Tick loop for the realtime driver.
//!
//! The tick thread owns the [`LockstepSim`] exclusively (moved in via
//! `thread::spawn`). Control messages arrive over a bounded crossbeam
//! channel and are applied between ticks; each tick publishes a fresh
//! [`SimSnapshot`] for readers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;

use crate::lockstep::LockstepSim;
use crate::realtime::{Control, SimSnapshot};

/// Most recently published snapshot, shared with readers.
pub(crate) type SnapshotSlot = Arc<Mutex<Option<Arc<SimSnapshot>>>>;

/// State held by the tick thread's main loop.
pub(crate) struct TickThreadState {
    sim: LockstepSim,
    ctrl_rx: Receiver<Control>,
    latest: SnapshotSlot,
    shutdown_flag: Arc<AtomicBool>,
    tick_budget: Duration,
}

impl TickThreadState {
    pub fn new(
        sim: LockstepSim,
        ctrl_rx: Receiver<Control>,
        latest: SnapshotSlot,
        shutdown_flag: Arc<AtomicBool>,
        tick_rate_hz: f64,
    ) -> Self {
        Self {
            sim,
            ctrl_rx,
            latest,
            shutdown_flag,
            tick_budget: Duration::from_secs_f64(1.0 / tick_rate_hz),
        }
    }

    /// Main tick loop. Runs until `shutdown_flag` is set.
    ///
    /// Consumes self and returns the simulation so the owner can recover
    /// it through the `JoinHandle`.
    pub fn run(mut self) -> LockstepSim {
        loop {
            if self.shutdown_flag.load(Ordering::Acquire) {
                break;
            }

            let tick_start = Instant::now();

            // 1. Apply pending controls.
            let changed = self.drain_controls();

            // 2. Step unless paused, then publish.
            if !self.sim.is_paused() {
                self.sim.step_sync();
                self.publish();
            } else if changed {
                self.publish();
            }

            // 3. Sleep off the rest of the budget. park_timeout so that
            //    shutdown() can wake us immediately with unpark().
            let elapsed = tick_start.elapsed();
            if elapsed < self.tick_budget {
                thread::park_timeout(self.tick_budget - elapsed);
            }
        }
        self.sim
    }

    /// Apply every queued control. Returns whether any arrived.
    fn drain_controls(&mut self) -> bool {
        let mut changed = false;
        while let Ok(ctrl) = self.ctrl_rx.try_recv() {
            changed = true;
            self.apply(ctrl);
        }
        changed
    }

    fn apply(&mut self, ctrl: Control) {
        match ctrl {
            Control::Pause => self.sim.pause(),
            Control::Resume => self.sim.resume(),
            Control::TogglePause => {
                self.sim.toggle_pause();
            }
            Control::Teleport { x, y } => self.sim.teleport(x, y),
            Control::Reset => {
                if let Err(_e) = self.sim.reset() {
                    #[cfg(debug_assertions)]
                    eprintln!("turmite: reset failed on tick thread: {_e}");
                }
            }
        }
    }

    fn publish(&self) {
        let snap = Arc::new(SimSnapshot::capture(&self.sim));
        match self.latest.lock() {
            Ok(mut slot) => *slot = Some(snap),
            Err(_) => {
                #[cfg(debug_assertions)]
                eprintln!(
                    "turmite: snapshot slot poisoned, dropping tick {}",
                    self.sim.tick()
                );
            }
        }
    }
}
