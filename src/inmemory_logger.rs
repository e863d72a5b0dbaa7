// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Logger
//!
//! An in-memory [`Logger`] for tests and for embedders that want to inspect output
//! programmatically rather than read it off stderr.
//!
//! Records are kept uncolored, exactly as the formatter built them, so assertions can
//! compare message content directly.
//!
//! ```rust
//! use linelog::{Dispatcher, InMemoryLogger};
//! use std::sync::Arc;
//!
//! let logger = Arc::new(InMemoryLogger::new());
//! let dispatcher = Dispatcher::new().with_logger(logger.clone());
//! dispatcher.info("Test message %v", &[&42]);
//!
//! let logs = logger.drain_logs();
//! assert!(logs.contains("Test message 42"));
//! ```

use crate::log_record::LogRecord;
use crate::logger::Logger;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A logger that keeps every record it receives.
///
/// Thread-safe; share it with `Arc` between the code under test and the assertions.
#[derive(Debug)]
pub struct InMemoryLogger {
    records: Mutex<Vec<LogRecord>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: required by Logger
// - Default: empty buffer
// - Clone: NOT implemented - two loggers silently splitting one capture is a trap
// - PartialEq/Eq/Hash: NOT implemented - comparing mutex state is meaningless
// - Send/Sync: automatic via Mutex

impl Default for InMemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLogger {
    pub const fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        // a panicking writer can't leave a half-pushed record behind
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drains all records into one string, one line per record, clearing the buffer.
    ///
    /// ```rust
    /// use linelog::{Dispatcher, InMemoryLogger};
    /// use std::sync::Arc;
    ///
    /// let logger = Arc::new(InMemoryLogger::new());
    /// let dispatcher = Dispatcher::new().with_logger(logger.clone());
    /// dispatcher.info("First message", &[]);
    /// dispatcher.warn(None, "Second message", &[]);
    ///
    /// let logs = logger.drain_logs();
    /// assert!(logs.contains("First message"));
    /// assert!(logs.contains("Second message"));
    /// assert_eq!(logger.drain_logs(), "");
    /// ```
    pub fn drain_logs(&self) -> String {
        let records = std::mem::take(&mut *self.lock());
        records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drains all records, clearing the buffer.
    pub fn drain_records(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Writes all held records to stderr (the browser console on wasm32), clearing the buffer.
    pub fn drain_to_console(&self) {
        for record in self.drain_records() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&record.to_string().into());
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{record}");
        }
    }
}

impl Logger for InMemoryLogger {
    fn finish_log_record(&self, record: LogRecord) {
        self.lock().push(record);
    }

    fn finish_log_record_async<'s>(
        &'s self,
        record: LogRecord,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 's>> {
        Box::pin(async move {
            self.finish_log_record(record);
        })
    }

    fn prepare_to_die(&self) {
        // nothing buffered outside memory
    }
}
