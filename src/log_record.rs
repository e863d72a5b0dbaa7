// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for linelog.
//!
//! A [`LogRecord`] holds the pieces of exactly one log line while it is being built and
//! handed to a [`Logger`](crate::Logger).  Records are never buffered or retained by the
//! crate; each one lives for a single formatting call.
//!
//! The record stores its parts separately and only joins them for output.  Loggers get
//! the uncolored text from [`Display`]; color is a concern of the sink.
//!
//! ```rust
//! use linelog::{LogRecord, Level};
//!
//! let mut record = LogRecord::new(Level::Info);
//! record.log("Processing request ");
//! record.log_owned(format!("#{}", 42));
//! assert_eq!(record.to_string(), "Processing request #42");
//! ```

use crate::Level;
use chrono::{DateTime, Utc};
use std::fmt::Display;

/// `strftime` pattern of the header timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/**
A log record.

1.  Create a new [LogRecord].
2.  Progressively write to the [LogRecord].
3.  Hand the [LogRecord] to a [crate::Logger].
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    pub(crate) parts: Vec<String>,
    level: Level,
}

impl LogRecord {
    pub fn new(level: Level) -> Self {
        Self {
            parts: Vec::new(),
            level,
        }
    }

    /**
    Append the message to the record.

    This is called in the case that a message is not already owned.
    */
    pub fn log(&mut self, message: &str) {
        self.parts.push(message.to_string());
    }

    /**
    Append the message to the record, taking ownership of the message.
    */
    pub fn log_owned(&mut self, message: String) {
        self.parts.push(message);
    }

    /**
    Log `at` as a UTC wall-clock timestamp, `YYYY/MM/DD HH:MM:SS`.
    */
    pub fn log_timestamp(&mut self, at: DateTime<Utc>) {
        self.log_owned(at.format(TIMESTAMP_FORMAT).to_string());
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogRecord {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            f.write_str(part)?;
        }
        Ok(())
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug, Clone: the global dispatcher hands a clone to a sink when it has to
- PartialEq/Eq/Hash: comparing captured records in tests
- Default: Info level, no parts
- Display: the finished, uncolored line

NOT IMPLEMENTED:
- Copy: owns heap data
- Ord: no meaningful ordering between lines
- From<String>: a record without a level is not a record
*/

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn timestamp_is_utc_and_zero_padded() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut record = LogRecord::new(Level::Warn);
        record.log_timestamp(at);
        assert_eq!(record.to_string(), "2024/01/02 03:04:05");
        assert_eq!(record.level(), Level::Warn);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn parts_join_without_separator() {
        let mut record = LogRecord::default();
        record.log("a");
        record.log_owned("b".to_string());
        assert_eq!(record.to_string(), "ab");
        assert_eq!(record.level(), Level::Info);
    }
}
