//! Pacing: how long to wait between consecutive step writes.
//!
//! The base rule spreads a duration evenly over the steps of a ramp:
//!
//! ```text
//! pause = duration_minutes * 60 / step_count      (seconds)
//! ```
//!
//! [`Pacing::Progressive`] reshapes those pauses so a ramp lingers where it
//! starts and hurries where it finishes, which reads as a more natural
//! sunrise or sunset. The total time is unchanged.

use crate::error::{Error, Result};
use crate::value::Minutes;

/// Uniform inter-step delay in seconds.
///
/// Fails with [`Error::InvalidDuration`] when `step_count` is zero. The
/// duration itself is not checked; a negative duration yields a negative
/// pause, which pacers treat as no wait.
pub fn pause(duration_minutes: f64, step_count: usize) -> Result<f64> {
    if step_count == 0 {
        return Err(Error::InvalidDuration(
            "step count must be positive".to_string(),
        ));
    }
    Ok(duration_minutes * 60.0 / step_count as f64)
}

/// Relative pause weights for the five equal bands of a progressive ramp,
/// from the band nearest `begin` to the band nearest `end`.
pub const PROGRESSIVE_WEIGHTS: [f64; 5] = [3.0, 2.0, 1.0, 0.5, 1.0 / 3.0];

/// How the pauses of a ramp are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Every pause is the same length.
    #[default]
    Uniform,
    /// Pauses shrink band by band from the start of the ramp to its end.
    Progressive,
}

impl Pacing {
    /// Compute the pause that follows each of `step_count` steps.
    ///
    /// The returned pauses always sum to the full duration.
    pub fn pauses(self, duration: Minutes, step_count: usize) -> Result<Vec<f64>> {
        let base = pause(duration.get(), step_count)?;
        match self {
            Pacing::Uniform => Ok(vec![base; step_count]),
            Pacing::Progressive => {
                let weights: Vec<f64> = (0..step_count)
                    .map(|i| progressive_weight(i, step_count))
                    .collect();
                let total: f64 = weights.iter().sum();
                let secs = duration.as_secs();
                Ok(weights.into_iter().map(|w| secs * w / total).collect())
            }
        }
    }
}

fn progressive_weight(index: usize, step_count: usize) -> f64 {
    if step_count < 2 {
        return 1.0;
    }
    let progress = index as f64 / (step_count - 1) as f64;
    let bands = PROGRESSIVE_WEIGHTS.len();
    let band = ((progress * bands as f64) as usize).min(bands - 1);
    PROGRESSIVE_WEIGHTS[band]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_values() {
        assert_eq!(pause(60.0, 500).unwrap(), 7.2);
        assert_eq!(pause(1000.0, 1000).unwrap(), 60.0);
    }

    #[test]
    fn zero_steps_rejected() {
        assert!(matches!(pause(1.0, 0), Err(Error::InvalidDuration(_))));
    }

    #[test]
    fn negative_duration_passes_through() {
        assert_eq!(pause(-1.0, 60).unwrap(), -1.0);
    }

    #[test]
    fn uniform_pauses_are_equal() {
        let pauses = Pacing::Uniform
            .pauses(Minutes::new(1.0).unwrap(), 11)
            .unwrap();
        assert_eq!(pauses.len(), 11);
        assert!(pauses.iter().all(|&p| p == 60.0 / 11.0));
    }

    #[test]
    fn progressive_pauses_keep_total_duration() {
        let pauses = Pacing::Progressive
            .pauses(Minutes::new(10.0).unwrap(), 1001)
            .unwrap();
        let total: f64 = pauses.iter().sum();
        assert!((total - 600.0).abs() < 1e-6, "total was {total}");
    }

    #[test]
    fn progressive_pauses_shrink_toward_end() {
        let pauses = Pacing::Progressive
            .pauses(Minutes::new(10.0).unwrap(), 1001)
            .unwrap();
        assert!(pauses[0] > pauses[500]);
        assert!(pauses[500] > pauses[1000]);
        assert!((pauses[0] / pauses[1000] - 9.0).abs() < 1e-9);
    }

    #[test]
    fn progressive_single_step_takes_whole_duration() {
        let pauses = Pacing::Progressive
            .pauses(Minutes::new(1.0).unwrap(), 1)
            .unwrap();
        assert_eq!(pauses, vec![60.0]);
    }
}
