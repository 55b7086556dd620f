//! Step planning for ramps.
//!
//! A ramp from `begin` to `end` is traversed in increments of one tenth of a
//! percentage point. Both ends are included, so a ramp covering `d` points
//! has `d * 10 + 1` steps:
//!
//! ```text
//! steps(10, 11)  ->  10.0, 10.1, 10.2, ... 10.9, 11.0     (11 steps)
//! steps(81, 80)  ->  81.0, 80.9, 80.8, ... 80.1, 80.0     (11 steps)
//! ```
//!
//! Planning happens in integer tenths, so every element is exactly
//! `tenths / 10` and the sequence never accumulates floating-point error.
//! Inputs with more than one decimal digit are quantized to the nearest
//! tenth; finer precision is not preserved.

use crate::error::{Error, Result};

/// Number of steps per percentage point.
pub const STEPS_PER_PERCENT: f64 = 10.0;

/// Size of one step in percentage points.
pub const STEP_SIZE: f64 = 1.0 / STEPS_PER_PERCENT;

/// Quantize a level to integer tenths.
#[inline]
fn to_tenths(level: f64) -> i64 {
    (level * STEPS_PER_PERCENT).round() as i64
}

/// Validate a pair of ends and quantize them to tenths.
fn tenth_bounds(begin: f64, end: f64) -> Result<(i64, i64)> {
    if begin == end {
        return Err(Error::invalid_range(begin, end, "begin and end are equal"));
    }
    if !begin.is_finite() || !end.is_finite() {
        return Err(Error::invalid_range(begin, end, "levels must be finite"));
    }

    let from = to_tenths(begin);
    let to = to_tenths(end);
    if from == to {
        return Err(Error::invalid_range(
            begin,
            end,
            "begin and end are within one step of each other",
        ));
    }
    Ok((from, to))
}

/// Plan the ordered levels traversed by a ramp from `begin` to `end`.
///
/// The result is strictly monotonic, starts at `begin`, ends at `end` and
/// moves by [`STEP_SIZE`] each step. Fails with [`Error::InvalidRange`] when
/// the two ends are equal, or become equal once quantized to tenths.
pub fn steps(begin: f64, end: f64) -> Result<Vec<f64>> {
    let (from, to) = tenth_bounds(begin, end)?;

    let tenths: Vec<i64> = if to > from {
        (from..=to).collect()
    } else {
        (to..=from).rev().collect()
    };

    Ok(tenths
        .into_iter()
        .map(|t| t as f64 / STEPS_PER_PERCENT)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_one_point() {
        let s = steps(10.0, 11.0).unwrap();
        assert_eq!(
            s,
            vec![10.0, 10.1, 10.2, 10.3, 10.4, 10.5, 10.6, 10.7, 10.8, 10.9, 11.0]
        );
    }

    #[test]
    fn descending_one_point() {
        let s = steps(81.0, 80.0).unwrap();
        assert_eq!(
            s,
            vec![81.0, 80.9, 80.8, 80.7, 80.6, 80.5, 80.4, 80.3, 80.2, 80.1, 80.0]
        );
    }

    #[test]
    fn full_range_length() {
        let s = steps(0.0, 100.0).unwrap();
        assert_eq!(s.len(), 1001);
        assert_eq!(s[0], 0.0);
        assert_eq!(s[1000], 100.0);
    }

    #[test]
    fn equal_ends_rejected() {
        assert!(matches!(steps(42.0, 42.0), Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn sub_step_difference_rejected() {
        assert!(matches!(steps(42.0, 42.04), Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn extra_precision_is_quantized() {
        let s = steps(10.04, 10.26).unwrap();
        assert_eq!(s, vec![10.0, 10.1, 10.2, 10.3]);
    }

    #[test]
    fn step_counts() {
        assert_eq!(steps(10.0, 11.0).unwrap().len(), 11);
        assert_eq!(steps(100.0, 75.0).unwrap().len(), 251);
        assert_eq!(steps(20.0, 75.0).unwrap().len(), 551);
    }

    #[test]
    fn non_finite_rejected() {
        assert!(steps(f64::NAN, 10.0).is_err());
        assert!(steps(0.0, f64::INFINITY).is_err());
    }
}
