//! Typed power levels, sink values, and durations.
//!
//! Levels are requested as a percentage of full power and written to the
//! sink as a fraction in `[0, 1]`:
//!
//! | type        | unit            | range      | resolution |
//! |-------------|-----------------|------------|------------|
//! | [`Percent`] | % of full power | 0 to 100   | as given   |
//! | [`SinkValue`] | duty cycle    | 0 to 1     | 4 decimals |
//! | [`Minutes`] | minutes         | 0 or more  | as given   |
//!
//! A [`SinkValue`] is always derived from the [`Percent`] that produced it,
//! so the two can never drift apart.
//!
//! ```rust
//! use lucent_core::{Percent, SinkValue, to_sink_value};
//!
//! let level = Percent::new(42.42).unwrap();
//! assert_eq!(SinkValue::from_percent(level).get(), 0.4242);
//! assert!(to_sink_value(120.0).is_err());
//! ```

use core::fmt;

use crate::error::{Error, Result};

/// Requested output intensity, 0 = fully off, 100 = fully on.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percent(f64);

impl Percent {
    /// Fully off.
    pub const OFF: Percent = Percent(0.0);
    /// Fully on.
    pub const FULL: Percent = Percent(100.0);

    /// Validate a raw percentage.
    ///
    /// NaN and values outside `[0, 100]` are rejected with
    /// [`Error::OutOfRange`].
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::OutOfRange(value))
        }
    }

    /// Returns the raw percentage.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Native sink unit: the power level divided by 100, rounded to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SinkValue(f64);

impl SinkValue {
    /// Number of decimal digits kept when converting a level.
    pub const DECIMALS: i32 = 4;

    /// Convert a validated level.
    ///
    /// Rounds half away from zero, which is half-up on the valid domain.
    pub fn from_percent(level: Percent) -> Self {
        let scale = 10f64.powi(Self::DECIMALS);
        // percent / 100 * 10^4 == percent * 100
        Self((level.get() * (scale / 100.0)).round() / scale)
    }

    /// Returns the duty cycle in `[0, 1]`.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for SinkValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Percent> for SinkValue {
    fn from(level: Percent) -> Self {
        Self::from_percent(level)
    }
}

/// Convert a raw percentage to the sink's native unit.
///
/// Fails with [`Error::OutOfRange`] when `percent` is outside `[0, 100]`.
pub fn to_sink_value(percent: f64) -> Result<SinkValue> {
    Percent::new(percent).map(SinkValue::from_percent)
}

/// A transition duration in minutes.
///
/// Zero is accepted and means "write every step without pausing".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Minutes(f64);

impl Minutes {
    /// Zero duration.
    pub const ZERO: Minutes = Minutes(0.0);

    /// Validate a raw duration.
    ///
    /// Negative, NaN and infinite durations are rejected with
    /// [`Error::InvalidDuration`].
    pub fn new(minutes: f64) -> Result<Self> {
        if minutes.is_finite() && minutes >= 0.0 {
            Ok(Self(minutes))
        } else {
            Err(Error::InvalidDuration(format!(
                "{minutes} minutes (expected a finite, non-negative number)"
            )))
        }
    }

    /// Returns the raw number of minutes.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns the duration in seconds.
    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0 * 60.0
    }

    /// Split the duration into `parts` equal shares.
    pub fn split(self, parts: usize) -> Result<Self> {
        if parts == 0 {
            return Err(Error::InvalidDuration(
                "cannot split a duration into zero parts".to_string(),
            ));
        }
        Ok(Self(self.0 / parts as f64))
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}
