//! Observer hooks for engine progress.
//!
//! The engine reports what it does through a [`ModulationObserver`] handed
//! to it at construction. All methods default to doing nothing, so an
//! observer only implements the events it cares about.
//!
//! With the `tracing` feature enabled, [`TracingObserver`] forwards every
//! event to the `tracing` macros.

use crate::engine::EngineState;
use crate::error::Error;
use crate::profile::{Profile, Ramp};
use crate::value::{Percent, SinkValue};

/// Receives engine events as they happen.
pub trait ModulationObserver {
    /// The engine moved to a new state.
    fn on_state(&mut self, _state: EngineState) {}

    /// A profile run is starting with the given ramps.
    fn on_profile_start(&mut self, _profile: &Profile, _ramps: &[Ramp]) {}

    /// A ramp is starting. `pause` is the first inter-step wait in seconds.
    fn on_ramp_start(&mut self, _ramp: &Ramp, _step_count: usize, _pause: f64) {}

    /// Step `index` (0-based) of `step_count` was written.
    fn on_step(&mut self, _index: usize, _step_count: usize, _level: Percent, _value: SinkValue) {}

    /// A ramp finished all of its steps.
    fn on_ramp_done(&mut self, _ramp: &Ramp) {}

    /// An operation failed.
    fn on_error(&mut self, _error: &Error) {}
}

impl<O: ModulationObserver + ?Sized> ModulationObserver for &mut O {
    fn on_state(&mut self, state: EngineState) {
        (**self).on_state(state);
    }
    fn on_profile_start(&mut self, profile: &Profile, ramps: &[Ramp]) {
        (**self).on_profile_start(profile, ramps);
    }
    fn on_ramp_start(&mut self, ramp: &Ramp, step_count: usize, pause: f64) {
        (**self).on_ramp_start(ramp, step_count, pause);
    }
    fn on_step(&mut self, index: usize, step_count: usize, level: Percent, value: SinkValue) {
        (**self).on_step(index, step_count, level, value);
    }
    fn on_ramp_done(&mut self, ramp: &Ramp) {
        (**self).on_ramp_done(ramp);
    }
    fn on_error(&mut self, error: &Error) {
        (**self).on_error(error);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ModulationObserver for NoopObserver {}

/// Observer that logs through `tracing`.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl ModulationObserver for TracingObserver {
    fn on_state(&mut self, state: EngineState) {
        tracing::trace!(?state, "engine state");
    }

    fn on_profile_start(&mut self, profile: &Profile, ramps: &[Ramp]) {
        tracing::info!(
            profile = profile.name,
            ramps = ramps.len(),
            "starting profile"
        );
    }

    fn on_ramp_start(&mut self, ramp: &Ramp, step_count: usize, pause: f64) {
        tracing::info!(
            begin = ramp.begin,
            end = ramp.end,
            minutes = ramp.duration.get(),
            steps = step_count,
            pause_secs = pause,
            "starting ramp"
        );
    }

    fn on_step(&mut self, index: usize, step_count: usize, level: Percent, value: SinkValue) {
        tracing::debug!(
            step = index + 1,
            of = step_count,
            level = level.get(),
            value = value.get(),
            "step"
        );
    }

    fn on_ramp_done(&mut self, ramp: &Ramp) {
        tracing::info!(end = ramp.end, "ramp complete");
    }

    fn on_error(&mut self, error: &Error) {
        tracing::error!(%error, "modulation failed");
    }
}
