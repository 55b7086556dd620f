//! Output sinks: where formatted `pin=value` records are delivered.
//!
//! The engine only requires that a write is accepted atomically or fails
//! visibly. [`DeviceFileSink`] targets a pi-blaster style device file, where
//! every line written sets the duty cycle of one GPIO:
//!
//! ```text
//! $ echo "18=0.4242" > /dev/pi-blaster
//! ```
//!
//! Other backends (a mock for tests, a logging-only dry run) implement
//! [`Sink`] directly.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default device file of the pi-blaster daemon.
pub const DEFAULT_DEVICE: &str = "/dev/pi-blaster";

/// Failure reported by a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The device could not be opened or written.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Device path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backend refused the record.
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// Destination for formatted output records.
pub trait Sink {
    /// Deliver one record (without trailing newline).
    ///
    /// Implementations must either accept the whole record or return an
    /// error; partial writes are not allowed to look like success.
    fn write_record(&mut self, record: &str) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_record(&mut self, record: &str) -> Result<(), SinkError> {
        (**self).write_record(record)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_record(&mut self, record: &str) -> Result<(), SinkError> {
        (**self).write_record(record)
    }
}

/// Sink writing newline-terminated records to a device file.
///
/// The file is opened in append mode for every record and closed again,
/// so the daemon sees exactly one line per write. The file must already
/// exist; it is never created.
#[derive(Debug, Clone)]
pub struct DeviceFileSink {
    path: PathBuf,
}

impl DeviceFileSink {
    /// Create a sink for the given device path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the device file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for DeviceFileSink {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE)
    }
}

impl Sink for DeviceFileSink {
    fn write_record(&mut self, record: &str) -> Result<(), SinkError> {
        let io_err = |source| SinkError::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        // Single write_all so the line reaches the device in one piece.
        file.write_all(format!("{record}\n").as_bytes())
            .map_err(io_err)?;
        file.flush().map_err(io_err)
    }
}
