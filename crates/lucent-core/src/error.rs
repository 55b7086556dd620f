//! Error taxonomy for the modulation engine.

use thiserror::Error;

use crate::sink::SinkError;
use crate::value::SinkValue;

/// Errors raised while validating or executing a modulation.
///
/// Every variant except [`Error::Write`] is raised before the sink is touched.
/// A `Write` error aborts whatever step sequence was running; it is never
/// retried, because a failed physical write cannot be safely repeated without
/// reading back the true hardware state.
#[derive(Debug, Error)]
pub enum Error {
    /// A power level outside `[0, 100]` (or NaN).
    #[error("power level {0} is out of range (expected 0 to 100)")]
    OutOfRange(f64),

    /// A ramp whose ends are equal or out of bounds.
    #[error("invalid range {begin} -> {end}: {reason}")]
    InvalidRange {
        /// Requested begin level.
        begin: f64,
        /// Requested end level.
        end: f64,
        /// What is wrong with the pair.
        reason: &'static str,
    },

    /// A GPIO line the sink cannot drive.
    #[error("GPIO {0} is not a supported PWM pin")]
    InvalidPin(u8),

    /// A profile name missing from the profile table.
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    /// A non-positive step count or degenerate duration.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// The sink rejected or failed a write.
    #[error("failed to write {value} to GPIO {pin}: {source}")]
    Write {
        /// Pin the write was addressed to.
        pin: u8,
        /// Value that could not be written.
        value: SinkValue,
        /// Underlying sink failure.
        #[source]
        source: SinkError,
    },
}

impl Error {
    /// Create an invalid range error.
    pub fn invalid_range(begin: f64, end: f64, reason: &'static str) -> Self {
        Error::InvalidRange { begin, end, reason }
    }

    /// Returns true if the error was raised before any hardware interaction.
    pub fn is_preflight(&self) -> bool {
        !matches!(self, Error::Write { .. })
    }
}

/// Convenience result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
