//! Integration tests for lucent-core.
//!
//! Tests cover complete engine runs against in-memory sinks, write-failure
//! escalation, profile decomposition, and the device-file sink.

use lucent_core::{
    Channel, DeviceFileSink, EngineState, Error, Minutes, ModulationEngine, ModulationObserver,
    Percent, Pin, Profile, Ramp, RecordingPacer, Sink, SinkError, SinkValue,
};
use tempfile::NamedTempFile;

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

/// Sink that records every write and can be told to fail on the k-th one.
#[derive(Default)]
struct ScriptedSink {
    records: Vec<String>,
    attempts: usize,
    fail_on: Option<usize>,
}

impl ScriptedSink {
    fn failing_on(attempt: usize) -> Self {
        Self {
            fail_on: Some(attempt),
            ..Default::default()
        }
    }
}

impl Sink for ScriptedSink {
    fn write_record(&mut self, record: &str) -> Result<(), SinkError> {
        self.attempts += 1;
        if self.fail_on == Some(self.attempts) {
            return Err(SinkError::Rejected("device went away".to_string()));
        }
        self.records.push(record.to_string());
        Ok(())
    }
}

/// Observer that keeps the ramps it was told about.
#[derive(Default)]
struct RampLog {
    profiles: Vec<(&'static str, usize)>,
    started: Vec<Ramp>,
    finished: usize,
    errors: usize,
}

impl ModulationObserver for RampLog {
    fn on_profile_start(&mut self, profile: &Profile, ramps: &[Ramp]) {
        self.profiles.push((profile.name, ramps.len()));
    }

    fn on_ramp_start(&mut self, ramp: &Ramp, _step_count: usize, _pause: f64) {
        self.started.push(*ramp);
    }

    fn on_ramp_done(&mut self, _ramp: &Ramp) {
        self.finished += 1;
    }

    fn on_error(&mut self, _error: &Error) {
        self.errors += 1;
    }
}

type TestEngine = ModulationEngine<ScriptedSink, RecordingPacer, RampLog>;

fn engine_with(sink: ScriptedSink) -> TestEngine {
    let channel = Channel::new(Pin::new(18).unwrap(), sink, Percent::OFF);
    ModulationEngine::with_parts(channel, RecordingPacer::new(), RampLog::default())
}

fn minutes(m: f64) -> Minutes {
    Minutes::new(m).unwrap()
}

// ---------------------------------------------------------------------------
// Ramps
// ---------------------------------------------------------------------------

#[test]
fn completed_ramp_leaves_channel_at_end() {
    for (begin, end) in [(0.0, 20.0), (75.0, 20.0), (10.0, 11.0), (81.0, 80.0)] {
        let mut engine = engine_with(ScriptedSink::default());
        engine.modulate(begin, end, minutes(0.5)).unwrap();

        assert_eq!(engine.channel().current().get(), end);
        assert_eq!(engine.state(), EngineState::Done);
    }
}

#[test]
fn descending_ramp_records() {
    let mut engine = engine_with(ScriptedSink::default());
    engine.modulate(81.0, 80.0, minutes(1.0)).unwrap();

    let records = &engine.channel().sink().records;
    assert_eq!(
        records,
        &[
            "18=0.81", "18=0.809", "18=0.808", "18=0.807", "18=0.806", "18=0.805", "18=0.804",
            "18=0.803", "18=0.802", "18=0.801", "18=0.8",
        ]
    );
}

#[test]
fn ramp_pacing_matches_duration() {
    let mut engine = engine_with(ScriptedSink::default());
    engine.modulate(0.0, 50.0, minutes(60.0)).unwrap();

    // 501 steps, 500 waits of 3600 / 501 seconds each
    let pacer = engine.pacer();
    assert_eq!(pacer.pauses().len(), 500);
    assert!(pacer.pauses().iter().all(|&p| p == 3600.0 / 501.0));
}

// ---------------------------------------------------------------------------
// Failure escalation
// ---------------------------------------------------------------------------

#[test]
fn write_error_halts_ramp_at_step_k() {
    let k = 4;
    let mut engine = engine_with(ScriptedSink::failing_on(k));

    let err = engine.modulate(10.0, 11.0, minutes(1.0)).unwrap_err();

    let sink = engine.channel().sink();
    assert_eq!(sink.attempts, k, "set must be called exactly k times");
    assert_eq!(sink.records.len(), k - 1);
    assert_eq!(engine.state(), EngineState::Failed);
    assert_eq!(engine.observer().errors, 1);
    assert_eq!(engine.observer().finished, 0);

    match err {
        Error::Write { pin, value, .. } => {
            assert_eq!(pin, 18);
            // fourth step of 10.0 -> 11.0 is 10.3
            assert_eq!(value, SinkValue::from_percent(Percent::new(10.3).unwrap()));
        }
        other => panic!("expected write error, got {other:?}"),
    }

    // No rollback: the channel reports the last successful write
    assert_eq!(engine.channel().current().get(), 10.2);
}

#[test]
fn write_error_on_first_step() {
    let mut engine = engine_with(ScriptedSink::failing_on(1));
    let err = engine.modulate(0.0, 20.0, minutes(1.0)).unwrap_err();

    assert!(matches!(err, Error::Write { .. }));
    assert_eq!(engine.channel().sink().attempts, 1);
    assert!(engine.pacer().pauses().is_empty());
    assert_eq!(engine.channel().current(), Percent::OFF);
}

#[test]
fn write_error_aborts_profile() {
    // noon = 75 -> 100 -> 75; fail inside the first ramp (251 steps)
    let mut engine = engine_with(ScriptedSink::failing_on(100));

    let err = engine.run_profile("noon", minutes(4.0)).unwrap_err();

    assert!(matches!(err, Error::Write { .. }));
    assert_eq!(engine.channel().sink().attempts, 100);
    assert_eq!(engine.observer().started.len(), 1, "second ramp must not start");
    assert_eq!(engine.state(), EngineState::Failed);
}

#[test]
fn set_immediate_write_error_is_reported() {
    let mut engine = engine_with(ScriptedSink::failing_on(1));
    let err = engine.set_immediate(40.0).unwrap_err();
    assert!(!err.is_preflight());
    assert_eq!(engine.state(), EngineState::Failed);
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[test]
fn noon_profile_runs_two_ramps_of_equal_share() {
    let mut engine = engine_with(ScriptedSink::default());
    engine.run_profile("noon", minutes(4.0)).unwrap();

    let log = engine.observer();
    assert_eq!(log.profiles, vec![("noon", 2)]);
    assert_eq!(
        log.started,
        vec![
            Ramp {
                begin: 75.0,
                end: 100.0,
                duration: minutes(2.0)
            },
            Ramp {
                begin: 100.0,
                end: 75.0,
                duration: minutes(2.0)
            },
        ]
    );
    assert_eq!(log.finished, 2);

    // Each ramp writes 251 steps and waits between them
    let sink = &engine.channel().sink().records;
    assert_eq!(sink.len(), 502);
    assert_eq!(sink[250], "18=1");
    assert_eq!(sink[251], "18=1");
    assert_eq!(sink.last().unwrap(), "18=0.75");
    assert_eq!(engine.pacer().pauses().len(), 500);
    assert!(
        engine
            .pacer()
            .pauses()
            .iter()
            .all(|&p| p == 120.0 / 251.0)
    );
    assert_eq!(engine.channel().current().get(), 75.0);
}

#[test]
fn single_ramp_profiles_use_full_duration() {
    for (name, begin, end) in [
        ("dawn", 0.0, 20.0),
        ("sunrise", 20.0, 75.0),
        ("sunset", 75.0, 20.0),
        ("dusk", 20.0, 0.0),
    ] {
        let mut engine = engine_with(ScriptedSink::default());
        engine.run_profile(name, minutes(30.0)).unwrap();

        let log = engine.observer();
        assert_eq!(log.started.len(), 1, "{name}");
        assert_eq!(log.started[0].begin, begin);
        assert_eq!(log.started[0].end, end);
        assert_eq!(log.started[0].duration, minutes(30.0));
        assert_eq!(engine.channel().current().get(), end);
    }
}

// ---------------------------------------------------------------------------
// Device file sink
// ---------------------------------------------------------------------------

#[test]
fn engine_drives_device_file() {
    let device = NamedTempFile::new().unwrap();
    let channel = Channel::new(
        Pin::new(23).unwrap(),
        DeviceFileSink::new(device.path()),
        Percent::OFF,
    );
    let mut engine = ModulationEngine::with_parts(
        channel,
        RecordingPacer::new(),
        lucent_core::NoopObserver,
    );

    engine.set_immediate(42.42).unwrap();
    engine.modulate(10.0, 10.3, Minutes::ZERO).unwrap();
    engine.off().unwrap();

    let content = std::fs::read_to_string(device.path()).unwrap();
    assert_eq!(
        content,
        "23=0.4242\n23=0.1\n23=0.101\n23=0.102\n23=0.103\n23=0\n"
    );
}

#[test]
fn missing_device_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let channel = Channel::new(
        Pin::new(18).unwrap(),
        DeviceFileSink::new(dir.path().join("missing")),
        Percent::OFF,
    );
    let mut engine = ModulationEngine::with_parts(
        channel,
        RecordingPacer::new(),
        lucent_core::NoopObserver,
    );

    let err = engine.modulate(0.0, 100.0, minutes(10.0)).unwrap_err();

    assert!(matches!(
        err,
        Error::Write {
            source: SinkError::Io { .. },
            ..
        }
    ));
    assert!(engine.pacer().pauses().is_empty());
}
