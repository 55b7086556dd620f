//! The modulation engine: validated, paced step sequences on one channel.
//!
//! Every operation runs through the same small state machine:
//!
//! ```text
//!   Idle ──► Validating ──► Stepping ──► Done
//!                 │             │
//!                 └─────────────┴──────► Failed
//! ```
//!
//! Validation failures never touch the channel. A write failure while
//! stepping aborts the remaining steps immediately; nothing is retried and
//! the output is not rolled back, so the light stays at the last level that
//! was written successfully.
//!
//! # Example
//!
//! ```rust
//! use lucent_core::{Channel, Minutes, ModulationEngine, NoopObserver, Percent, Pin,
//!                   RecordingPacer, Sink, SinkError};
//!
//! #[derive(Default)]
//! struct Lines(Vec<String>);
//!
//! impl Sink for Lines {
//!     fn write_record(&mut self, record: &str) -> Result<(), SinkError> {
//!         self.0.push(record.to_string());
//!         Ok(())
//!     }
//! }
//!
//! let channel = Channel::new(Pin::new(18).unwrap(), Lines::default(), Percent::OFF);
//! let mut engine = ModulationEngine::with_parts(channel, RecordingPacer::new(), NoopObserver);
//!
//! engine.modulate(10.0, 11.0, Minutes::new(1.0).unwrap()).unwrap();
//! assert_eq!(engine.channel().current().get(), 11.0);
//! assert_eq!(engine.channel().sink().0.len(), 11);
//! ```

use crate::channel::Channel;
use crate::error::{Error, Result};
use crate::observer::{ModulationObserver, NoopObserver};
use crate::pace::Pacing;
use crate::pacer::{Pacer, ThreadPacer};
use crate::profile::{self, Ramp};
use crate::sink::Sink;
use crate::steps::steps;
use crate::value::{Minutes, Percent, SinkValue};

/// Lifecycle of a single engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// No operation has run yet.
    #[default]
    Idle,
    /// Inputs are being checked; the channel has not been touched.
    Validating,
    /// Steps are being written.
    Stepping,
    /// The last operation completed.
    Done,
    /// The last operation failed.
    Failed,
}

/// A ramp with its steps and pauses computed.
#[derive(Debug)]
struct RampPlan {
    ramp: Ramp,
    steps: Vec<f64>,
    pauses: Vec<f64>,
}

/// Check that a ramp's ends are distinct and within `[0, 100]`.
fn validate_ramp(begin: f64, end: f64) -> Result<()> {
    if begin == end {
        return Err(Error::invalid_range(begin, end, "begin and end are equal"));
    }
    if !(0.0..=100.0).contains(&begin) {
        return Err(Error::invalid_range(begin, end, "begin must be between 0 and 100"));
    }
    if !(0.0..=100.0).contains(&end) {
        return Err(Error::invalid_range(begin, end, "end must be between 0 and 100"));
    }
    Ok(())
}

fn plan_ramp(begin: f64, end: f64, duration: Minutes, pacing: Pacing) -> Result<RampPlan> {
    validate_ramp(begin, end)?;
    let steps = steps(begin, end)?;
    let pauses = pacing.pauses(duration, steps.len())?;
    Ok(RampPlan {
        ramp: Ramp {
            begin,
            end,
            duration,
        },
        steps,
        pauses,
    })
}

/// Drives one [`Channel`] through immediate sets, ramps and profiles.
///
/// The pacer and observer are injected so tests and dry runs can replace
/// real sleeps and logging.
#[derive(Debug)]
pub struct ModulationEngine<S, P = ThreadPacer, O = NoopObserver> {
    channel: Channel<S>,
    pacer: P,
    observer: O,
    state: EngineState,
}

impl<S: Sink> ModulationEngine<S> {
    /// Engine with real sleeps and no observer.
    pub fn new(channel: Channel<S>) -> Self {
        Self::with_parts(channel, ThreadPacer, NoopObserver)
    }
}

impl<S: Sink, P: Pacer, O: ModulationObserver> ModulationEngine<S, P, O> {
    /// Engine with an explicit pacer and observer.
    pub fn with_parts(channel: Channel<S>, pacer: P, observer: O) -> Self {
        Self {
            channel,
            pacer,
            observer,
            state: EngineState::Idle,
        }
    }

    /// State reached by the most recent operation.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The driven channel.
    pub fn channel(&self) -> &Channel<S> {
        &self.channel
    }

    /// The injected pacer.
    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// The injected observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn transition(&mut self, state: EngineState) {
        self.state = state;
        self.observer.on_state(state);
    }

    fn fail(&mut self, error: Error) -> Error {
        self.transition(EngineState::Failed);
        self.observer.on_error(&error);
        error
    }

    /// Write `percent` once, without a ramp.
    ///
    /// Out-of-range input fails with [`Error::OutOfRange`] before anything
    /// is written.
    pub fn set_immediate(&mut self, percent: f64) -> Result<()> {
        self.transition(EngineState::Validating);
        let level = Percent::new(percent).map_err(|e| self.fail(e))?;

        self.transition(EngineState::Stepping);
        self.channel.set(level).map_err(|e| self.fail(e))?;
        self.observer.on_step(0, 1, level, SinkValue::from_percent(level));

        self.transition(EngineState::Done);
        Ok(())
    }

    /// Switch fully on.
    pub fn on(&mut self) -> Result<()> {
        self.set_immediate(Percent::FULL.get())
    }

    /// Switch fully off.
    pub fn off(&mut self) -> Result<()> {
        self.set_immediate(Percent::OFF.get())
    }

    /// Ramp from `begin` to `end` over `duration` with uniform pauses.
    ///
    /// Fails with [`Error::InvalidRange`] when the ends are equal or outside
    /// `[0, 100]`. On success the channel holds `end`.
    pub fn modulate(&mut self, begin: f64, end: f64, duration: Minutes) -> Result<()> {
        self.modulate_with(begin, end, duration, Pacing::Uniform)
    }

    /// Ramp from `begin` to `end` over `duration` with the given pacing.
    pub fn modulate_with(
        &mut self,
        begin: f64,
        end: f64,
        duration: Minutes,
        pacing: Pacing,
    ) -> Result<()> {
        self.transition(EngineState::Validating);
        let plan = plan_ramp(begin, end, duration, pacing).map_err(|e| self.fail(e))?;
        self.run_plan(&plan)
    }

    fn run_plan(&mut self, plan: &RampPlan) -> Result<()> {
        self.transition(EngineState::Stepping);

        let step_count = plan.steps.len();
        let first_pause = plan.pauses.first().copied().unwrap_or(0.0);
        self.observer.on_ramp_start(&plan.ramp, step_count, first_pause);

        for (index, (&step, &pause)) in plan.steps.iter().zip(&plan.pauses).enumerate() {
            let level = Percent::new(step).map_err(|e| self.fail(e))?;
            self.channel.set(level).map_err(|e| self.fail(e))?;
            self.observer
                .on_step(index, step_count, level, SinkValue::from_percent(level));

            if index + 1 < step_count {
                self.pacer.pause(pause);
            }
        }

        self.observer.on_ramp_done(&plan.ramp);
        self.transition(EngineState::Done);
        Ok(())
    }

    /// Run a named profile over `total`.
    ///
    /// Each ramp of the profile gets an equal share of `total` and runs as an
    /// independent [`modulate`](Self::modulate). The first failure aborts the
    /// remaining ramps.
    pub fn run_profile(&mut self, name: &str, total: Minutes) -> Result<()> {
        self.transition(EngineState::Validating);
        let profile = profile::lookup(name).map_err(|e| self.fail(e))?;
        let ramps = profile.ramps(total).map_err(|e| self.fail(e))?;

        self.observer.on_profile_start(profile, &ramps);
        for ramp in &ramps {
            self.modulate(ramp.begin, ramp.end, ramp.duration)?;
        }
        Ok(())
    }

    /// Ramp from fully off to fully on.
    pub fn ramp_up(&mut self, duration: Minutes) -> Result<()> {
        self.modulate(Percent::OFF.get(), Percent::FULL.get(), duration)
    }

    /// Ramp from fully on to fully off.
    pub fn ramp_down(&mut self, duration: Minutes) -> Result<()> {
        self.modulate(Percent::FULL.get(), Percent::OFF.get(), duration)
    }

    /// Full-range rise that lingers in the dark before brightening.
    pub fn sunrise(&mut self, duration: Minutes) -> Result<()> {
        self.modulate_with(
            Percent::OFF.get(),
            Percent::FULL.get(),
            duration,
            Pacing::Progressive,
        )
    }

    /// Full-range fall that lingers near full brightness before darkening.
    pub fn sunset(&mut self, duration: Minutes) -> Result<()> {
        self.modulate_with(
            Percent::FULL.get(),
            Percent::OFF.get(),
            duration,
            Pacing::Progressive,
        )
    }
}
