//! Per-step metrics for the simulation drivers.

/// Timing and activity counters collected during a single step.
///
/// The driver populates these after each step; consumers (renderers,
/// telemetry) read them from the returned [`StepResult`](crate::StepResult).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the step, in microseconds.
    pub total_us: u64,
    /// Single-cell moves made by the bot.
    pub moves: u32,
    /// Cell paints performed (a cell painted twice counts twice).
    pub painted: u32,
    /// Whether the step ran the dash sub-mode.
    pub dashed: bool,
}
