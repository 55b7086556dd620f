//! A single addressed PWM output line.
//!
//! [`Channel`] pairs a validated [`Pin`] with a [`Sink`] and remembers the
//! last level it commanded. It never reads state back from the sink, so
//! [`Channel::current`] reflects what was asked for, not what the hardware
//! reports.

use core::fmt;

use crate::error::{Error, Result};
use crate::sink::Sink;
use crate::value::{Percent, SinkValue};

/// GPIO lines the pi-blaster daemon drives out of the box.
pub const SUPPORTED_PINS: [u8; 9] = [4, 17, 18, 21, 22, 23, 24, 25, 27];

/// A validated GPIO line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pin(u8);

impl Pin {
    /// Validate a GPIO number against [`SUPPORTED_PINS`].
    pub fn new(id: u8) -> Result<Self> {
        if SUPPORTED_PINS.contains(&id) {
            Ok(Self(id))
        } else {
            Err(Error::InvalidPin(id))
        }
    }

    /// Returns the raw GPIO number.
    #[inline]
    pub const fn id(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format the record that sets `pin` to `value`.
pub fn format_record(pin: Pin, value: SinkValue) -> String {
    format!("{pin}={value}")
}

/// One output line and the sink that drives it.
#[derive(Debug)]
pub struct Channel<S> {
    pin: Pin,
    sink: S,
    current: Percent,
}

impl<S: Sink> Channel<S> {
    /// Create a channel. `initial` is what [`current`](Self::current)
    /// reports until the first successful write; nothing is written here.
    pub fn new(pin: Pin, sink: S, initial: Percent) -> Self {
        Self {
            pin,
            sink,
            current: initial,
        }
    }

    /// Write `level` to the sink exactly once.
    ///
    /// On failure the last known level is left unchanged and the error
    /// carries the pin and the value that could not be written.
    pub fn set(&mut self, level: Percent) -> Result<()> {
        let value = SinkValue::from_percent(level);
        let record = format_record(self.pin, value);
        self.sink
            .write_record(&record)
            .map_err(|source| Error::Write {
                pin: self.pin.id(),
                value,
                source,
            })?;
        self.current = level;
        Ok(())
    }

    /// Last level commanded through this channel.
    #[inline]
    pub fn current(&self) -> Percent {
        self.current
    }

    /// The addressed pin.
    #[inline]
    pub fn pin(&self) -> Pin {
        self.pin
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
