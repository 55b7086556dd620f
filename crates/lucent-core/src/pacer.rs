//! Time source for the waits between steps.

use std::time::Duration;

/// Blocks the engine between consecutive step writes.
pub trait Pacer {
    /// Wait for `seconds`. Zero, negative and NaN values must not block.
    fn pause(&mut self, seconds: f64);
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, seconds: f64) {
        (**self).pause(seconds);
    }
}

impl<P: Pacer + ?Sized> Pacer for Box<P> {
    fn pause(&mut self, seconds: f64) {
        (**self).pause(seconds);
    }
}

/// Pacer that sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl ThreadPacer {
    /// How long a requested wait actually sleeps, if at all.
    ///
    /// Waits too long for a [`Duration`] (including infinity) saturate to
    /// [`Duration::MAX`] instead of being skipped.
    pub fn sleep_duration(seconds: f64) -> Option<Duration> {
        if seconds.is_nan() || seconds <= 0.0 {
            return None;
        }
        let duration = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX);
        (!duration.is_zero()).then_some(duration)
    }
}

impl Pacer for ThreadPacer {
    fn pause(&mut self, seconds: f64) {
        if let Some(duration) = Self::sleep_duration(seconds) {
            std::thread::sleep(duration);
        }
    }
}

/// Pacer that never blocks and only records the requested waits.
///
/// Used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    pauses: Vec<f64>,
}

impl RecordingPacer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every wait requested so far, in order.
    pub fn pauses(&self) -> &[f64] {
        &self.pauses
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, seconds: f64) {
        self.pauses.push(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn thread_pacer_skips_degenerate_waits() {
        let start = Instant::now();
        let mut pacer = ThreadPacer;
        pacer.pause(-5.0);
        pacer.pause(f64::NAN);
        pacer.pause(0.0);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn oversized_waits_saturate() {
        assert_eq!(ThreadPacer::sleep_duration(5.99e298), Some(Duration::MAX));
        assert_eq!(ThreadPacer::sleep_duration(f64::INFINITY), Some(Duration::MAX));
        assert_eq!(ThreadPacer::sleep_duration(f64::MAX), Some(Duration::MAX));
    }

    #[test]
    fn sleep_duration_of_ordinary_waits() {
        assert_eq!(ThreadPacer::sleep_duration(1.5), Some(Duration::from_millis(1500)));
        assert_eq!(ThreadPacer::sleep_duration(0.0), None);
        assert_eq!(ThreadPacer::sleep_duration(-5.0), None);
        assert_eq!(ThreadPacer::sleep_duration(f64::NEG_INFINITY), None);
        assert_eq!(ThreadPacer::sleep_duration(f64::NAN), None);
    }

    #[test]
    fn thread_pacer_sleeps() {
        let start = Instant::now();
        ThreadPacer.pause(0.02);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn recording_pacer_keeps_order() {
        let mut pacer = RecordingPacer::new();
        pacer.pause(1.5);
        pacer.pause(0.5);
        assert_eq!(pacer.pauses(), &[1.5, 0.5]);
    }
}
