//! Lucent Core - PWM modulation engine for dimmable lights
//!
//! This crate turns requested light transitions into deterministic, paced
//! sequences of output writes on a single PWM channel.
//!
//! # Core Abstractions
//!
//! ## Values
//!
//! - [`Percent`] - Validated power level in `[0, 100]`
//! - [`SinkValue`] - Duty cycle in `[0, 1]`, rounded to 4 decimals
//! - [`Minutes`] - Validated transition duration
//!
//! ## Planning
//!
//! - [`steps()`] - Levels traversed by a ramp, 0.1 points apart
//! - [`pause()`] / [`Pacing`] - Waits between consecutive steps
//! - [`profile`] - Named day-cycle profiles (dawn, sunrise, noon, sunset, dusk)
//!
//! ## Output
//!
//! - [`Channel`] - Validated [`Pin`] plus a [`Sink`], remembers the last level
//! - [`DeviceFileSink`] - pi-blaster style device file
//! - [`ModulationEngine`] - Runs immediate sets, ramps and profiles
//!
//! # Example
//!
//! ```rust,no_run
//! use lucent_core::{Channel, DeviceFileSink, Minutes, ModulationEngine, Percent, Pin};
//!
//! let pin = Pin::new(18)?;
//! let channel = Channel::new(pin, DeviceFileSink::default(), Percent::OFF);
//! let mut engine = ModulationEngine::new(channel);
//!
//! // Fade from 20% to 75% over 30 minutes
//! engine.modulate(20.0, 75.0, Minutes::new(30.0)?)?;
//!
//! // Or run a whole profile
//! engine.run_profile("noon", Minutes::new(240.0)?)?;
//! # Ok::<(), lucent_core::Error>(())
//! ```
//!
//! # Features
//!
//! - `tracing` - enables [`TracingObserver`], which logs engine events

pub mod channel;
pub mod engine;
pub mod error;
pub mod observer;
pub mod pace;
pub mod pacer;
pub mod profile;
pub mod sink;
pub mod steps;
pub mod value;

// Re-export main types at crate root
pub use channel::{Channel, Pin, SUPPORTED_PINS, format_record};
pub use engine::{EngineState, ModulationEngine};
pub use error::{Error, Result};
pub use observer::{ModulationObserver, NoopObserver};
#[cfg(feature = "tracing")]
pub use observer::TracingObserver;
pub use pace::{PROGRESSIVE_WEIGHTS, Pacing, pause};
pub use pacer::{Pacer, RecordingPacer, ThreadPacer};
pub use profile::{PROFILES, Profile, Ramp};
pub use sink::{DEFAULT_DEVICE, DeviceFileSink, Sink, SinkError};
pub use steps::{STEP_SIZE, steps};
pub use value::{Minutes, Percent, SinkValue, to_sink_value};
