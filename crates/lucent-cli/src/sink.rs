//! Dry-run output.

use lucent_core::{Sink, SinkError};

/// Prints each record to stdout instead of writing a device.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_record(&mut self, record: &str) -> Result<(), SinkError> {
        println!("{record}");
        Ok(())
    }
}
