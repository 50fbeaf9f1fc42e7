//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the builder-input for both drivers. Defaults reproduce
//! the reference setup: a 60×40 blank grid, the bot at (30, 20) facing
//! north, one step every third frame.

use std::error::Error;
use std::fmt;

use turmite_core::{GridError, Heading, Position};
use turmite_grid::Grid;

use crate::fill::GridFill;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Grid(GridError),
    /// The start position lies outside the grid.
    StartOutOfBounds {
        /// The configured start.
        start: Position,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// `frame_stride` is zero.
    ZeroFrameStride,
    /// `tick_rate_hz` is NaN, infinite, zero, or negative.
    InvalidTickRate {
        /// The invalid value.
        value: f64,
    },
    /// The tick thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::StartOutOfBounds {
                start,
                width,
                height,
            } => write!(f, "start {start} outside {width}x{height} grid"),
            Self::ZeroFrameStride => write!(f, "frame_stride must be at least 1"),
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and positive, got {value}")
            }
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Everything needed to (re)start a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid columns. Default: 60.
    pub width: u32,
    /// Grid rows. Default: 40.
    pub height: u32,
    /// Bot start cell. Default: (30, 20).
    pub start: Position,
    /// Bot start heading. Default: north.
    pub heading: Heading,
    /// Step once every this many frames in
    /// [`advance_frame()`](crate::LockstepSim::advance_frame). Default: 3.
    pub frame_stride: u32,
    /// Initial cell colours. Default: [`GridFill::Blank`].
    pub fill: GridFill,
    /// Realtime tick rate. `None` = 60 Hz. Ignored by the lockstep driver.
    pub tick_rate_hz: Option<f64>,
}

impl SimConfig {
    /// Default realtime tick rate.
    pub const DEFAULT_TICK_RATE_HZ: f64 = 60.0;

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Grid::validate_dims(self.width, self.height)?;
        if self.start.x >= self.width || self.start.y >= self.height {
            return Err(ConfigError::StartOutOfBounds {
                start: self.start,
                width: self.width,
                height: self.height,
            });
        }
        if self.frame_stride == 0 {
            return Err(ConfigError::ZeroFrameStride);
        }
        if let Some(hz) = self.tick_rate_hz {
            if !hz.is_finite() || hz <= 0.0 {
                return Err(ConfigError::InvalidTickRate { value: hz });
            }
        }
        Ok(())
    }

    /// Tick rate with the default applied.
    pub fn resolved_tick_rate_hz(&self) -> f64 {
        self.tick_rate_hz.unwrap_or(Self::DEFAULT_TICK_RATE_HZ)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 40,
            start: Position::new(30, 20),
            heading: Heading::North,
            frame_stride: 3,
            fill: GridFill::Blank,
            tick_rate_hz: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_width_is_grid_error() {
        let cfg = SimConfig {
            width: 0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Grid(GridError::EmptyGrid)));
        assert!(cfg.validate().unwrap_err().source().is_some());
    }

    #[test]
    fn zero_height_is_grid_error() {
        let cfg = SimConfig {
            height: 0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Grid(GridError::EmptyGrid)));
    }

    #[test]
    fn start_must_be_inside_grid() {
        let cfg = SimConfig {
            start: Position::new(60, 0),
            ..SimConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::StartOutOfBounds { .. })
        ));
    }

    #[test]
    fn zero_stride_rejected() {
        let cfg = SimConfig {
            frame_stride: 0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroFrameStride));
    }

    #[test]
    fn bad_tick_rates_rejected() {
        for hz in [0.0, -1.0, f64::INFINITY] {
            let cfg = SimConfig {
                tick_rate_hz: Some(hz),
                ..SimConfig::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::InvalidTickRate { .. })
            ));
        }
        let nan = SimConfig {
            tick_rate_hz: Some(f64::NAN),
            ..SimConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn tick_rate_defaults_to_sixty() {
        assert_eq!(SimConfig::default().resolved_tick_rate_hz(), 60.0);
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            ConfigError::ZeroFrameStride.to_string(),
            "frame_stride must be at least 1"
        );
        let e = ConfigError::StartOutOfBounds {
            start: Position::new(60, 0),
            width: 60,
            height: 40,
        };
        assert_eq!(e.to_string(), "start (60, 0) outside 60x40 grid");
    }
}
