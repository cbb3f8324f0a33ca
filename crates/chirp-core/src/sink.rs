//! Destinations for rendered records.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Receives every rendered record, one synchronous call per record.
pub trait Sink: Send + Sync {
    fn write_record(&self, record: &str) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_record(&self, record: &str) -> io::Result<()> {
        (**self).write_record(record)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_record(&self, record: &str) -> io::Result<()> {
        (**self).write_record(record)
    }
}

/// Standard output, one record per line.
///
/// Records that do not already end in a newline (JSON) get one appended
/// under the same stdout lock, so concurrent records never interleave.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Sink for Stdout {
    fn write_record(&self, record: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(record.as_bytes())?;
        if !record.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

/// Collects records in memory, for tests and for forwarding to other outputs.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record written so far.
    pub fn records(&self) -> Vec<String> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_record(&self, record: &str) -> io::Result<()> {
        self.records.lock().push(record.to_string());
        Ok(())
    }
}
