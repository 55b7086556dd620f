//! Terminal progress for running ramps.

use indicatif::{ProgressBar, ProgressStyle};
use lucent_core::{
    EngineState, Error, ModulationObserver, Percent, Profile, Ramp, SinkValue, TracingObserver,
};

/// Logs engine events and draws one progress bar per ramp.
pub struct ProgressObserver {
    log: TracingObserver,
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ProgressObserver {
    /// Create an observer; with `enabled` false only logging happens.
    pub fn new(enabled: bool) -> Self {
        Self {
            log: TracingObserver,
            enabled,
            bar: None,
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.yellow/blue}] {pos}/{len} {msg} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-")
    }
}

impl ModulationObserver for ProgressObserver {
    fn on_state(&mut self, state: EngineState) {
        self.log.on_state(state);
    }

    fn on_profile_start(&mut self, profile: &Profile, ramps: &[Ramp]) {
        self.log.on_profile_start(profile, ramps);
    }

    fn on_ramp_start(&mut self, ramp: &Ramp, step_count: usize, pause: f64) {
        self.log.on_ramp_start(ramp, step_count, pause);
        if self.enabled {
            let bar = ProgressBar::new(step_count as u64);
            bar.set_style(Self::style());
            self.bar = Some(bar);
        }
    }

    fn on_step(&mut self, index: usize, step_count: usize, level: Percent, value: SinkValue) {
        self.log.on_step(index, step_count, level, value);
        if let Some(bar) = &self.bar {
            bar.set_position(index as u64 + 1);
            bar.set_message(level.to_string());
        }
    }

    fn on_ramp_done(&mut self, ramp: &Ramp) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        self.log.on_ramp_done(ramp);
    }

    fn on_error(&mut self, error: &Error) {
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
        self.log.on_error(error);
    }
}
