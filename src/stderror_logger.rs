// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::formatter::colorize;
use crate::log_record::LogRecord;
use crate::logger::Logger;
use std::str::FromStr;

/// When [StdErrorLogger] wraps lines in ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Color when stderr is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

/// Returned when a string names no [ColorMode].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorModeError(String);

impl std::fmt::Display for ParseColorModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown color mode {:?}, expected auto, always or never",
            self.0
        )
    }
}

impl std::error::Error for ParseColorModeError {}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else if s.eq_ignore_ascii_case("always") {
            Ok(Self::Always)
        } else if s.eq_ignore_ascii_case("never") {
            Ok(Self::Never)
        } else {
            Err(ParseColorModeError(s.to_string()))
        }
    }
}

/**
The default logger.  Writes each line to stderr.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StdErrorLogger {
    color: ColorMode,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Clone/Copy: one small enum of state
// - PartialEq/Eq/Hash: two loggers with the same color mode behave identically
// - Default: ColorMode::Auto
// - Display: NOT implemented - no meaningful string representation
// - Send/Sync: automatic

impl StdErrorLogger {
    pub const fn new() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }

    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    pub const fn color(&self) -> ColorMode {
        self.color
    }

    /// Whether this logger colors its output right now.
    pub fn uses_color(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::detect_color(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn detect_color() -> bool {
        use std::io::IsTerminal;
        std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
    }

    #[cfg(target_arch = "wasm32")]
    fn detect_color() -> bool {
        // the browser console does not render ANSI
        false
    }

    /// The text this logger writes for `record`, without the trailing newline.
    pub fn render(&self, record: &LogRecord) -> String {
        let text = record.to_string();
        if self.uses_color() {
            colorize(record.level(), &text)
        } else {
            text
        }
    }
}

impl Logger for StdErrorLogger {
    fn finish_log_record(&self, record: LogRecord) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut line = self.render(&record);
            line.push('\n');
            let mut lock = std::io::stderr().lock();
            // a closed stderr is not worth dying over
            let _ = lock.write_all(line.as_bytes());
        }
        #[cfg(target_arch = "wasm32")]
        {
            use crate::Level;
            let msg = self.render(&record);
            match record.level() {
                Level::Trace => web_sys::console::debug_1(&msg.into()),
                Level::Info => web_sys::console::info_1(&msg.into()),
                Level::Warn => web_sys::console::warn_1(&msg.into()),
                Level::Error => web_sys::console::error_1(&msg.into()),
            }
        }
    }

    fn finish_log_record_async<'s>(
        &'s self,
        record: LogRecord,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + 's>> {
        Box::pin(async move { self.finish_log_record(record) })
    }

    fn prepare_to_die(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let _ = std::io::stderr().flush();
        }
    }
}
