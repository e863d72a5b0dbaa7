// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns a level, a template, its values and an optional error into one finished line.
//!
//! The line has the shape
//!
//! ```text
//! <Tag> | <YYYY/MM/DD HH:MM:SS> | <message>[<error block>]
//! ```
//!
//! where the error block is [`wrap_error_text`] of the error's `Display` output.  An absent
//! error adds nothing.  Formatting does no I/O and touches no shared state; the only
//! impure input is the wall clock, which [`Formatter::format_at`] lets you pin.
//!
//! ```rust
//! use linelog::{Formatter, FormatConfig, Level};
//!
//! let formatter = Formatter::new(FormatConfig::new().with_timestamp(false));
//! let line = formatter.format(Level::Warn, "disk at %d%%", &[&92], None);
//! assert_eq!(line, "Warn  | disk at 92%");
//! ```

use crate::level::COLOR_RESET;
use crate::log_record::LogRecord;
use crate::template::interpolate;
use crate::wrap::wrap_error_text;
use crate::Level;
use chrono::{DateTime, Utc};
use std::fmt::Display;

const SEPARATOR: &str = " | ";

/// Explicit formatting options, handed to [`Formatter::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatConfig {
    timestamp: bool,
}

impl FormatConfig {
    /// The default configuration: timestamps on.
    pub const fn new() -> Self {
        Self { timestamp: true }
    }

    /// Include (or leave out) the `YYYY/MM/DD HH:MM:SS |` header column.
    pub const fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub const fn timestamp(&self) -> bool {
        self.timestamp
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds log lines.  Cheap to copy and safe to share between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub const fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> FormatConfig {
        self.config
    }

    /// Builds the record for one line, stamped with the current UTC time.
    pub fn record(
        &self,
        level: Level,
        template: &str,
        args: &[&dyn Display],
        error: Option<&dyn Display>,
    ) -> LogRecord {
        self.record_at(level, template, args, error, Utc::now())
    }

    /// Builds the record for one line, stamped with `at`.
    pub fn record_at(
        &self,
        level: Level,
        template: &str,
        args: &[&dyn Display],
        error: Option<&dyn Display>,
        at: DateTime<Utc>,
    ) -> LogRecord {
        let mut record = LogRecord::new(level);
        record.log(level.tag());
        record.log(SEPARATOR);
        if self.config.timestamp {
            record.log_timestamp(at);
            record.log(SEPARATOR);
        }
        record.log_owned(interpolate(template, args));
        if let Some(error) = error {
            record.log_owned(wrap_error_text(&error.to_string()));
        }
        record
    }

    /// Formats one uncolored line, stamped with the current UTC time.
    pub fn format(
        &self,
        level: Level,
        template: &str,
        args: &[&dyn Display],
        error: Option<&dyn Display>,
    ) -> String {
        self.record(level, template, args, error).to_string()
    }

    /// Formats one uncolored line, stamped with `at`.
    pub fn format_at(
        &self,
        level: Level,
        template: &str,
        args: &[&dyn Display],
        error: Option<&dyn Display>,
        at: DateTime<Utc>,
    ) -> String {
        self.record_at(level, template, args, error, at).to_string()
    }
}

/// Wraps `text` in the level's color start and reset codes.
pub fn colorize(level: Level, text: &str) -> String {
    let color = level.color_code();
    let mut out = String::with_capacity(color.len() + text.len() + COLOR_RESET.len());
    out.push_str(color);
    out.push_str(text);
    out.push_str(COLOR_RESET);
    out
}
