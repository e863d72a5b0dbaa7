// SPDX-License-Identifier: MIT OR Apache-2.0

/// ANSI sequence that ends a colored span.
pub const COLOR_RESET: &str = "\x1b[0m";

/// Severity of a log line.
///
/// Fatal is not a separate level; an [Level::Error] line is always followed by the
/// dispatcher's [OnFatal](crate::OnFatal) action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Detailed debugging
    Trace,
    /// Informational
    Info,
    /// Suspicious condition, never terminates
    Warn,
    /// Unrecoverable condition, terminates after the line is written
    Error,
}

impl Level {
    /// Fixed-width display tag used in the line header.
    ///
    /// ```
    /// use linelog::Level;
    /// assert_eq!(Level::Warn.tag(), "Warn ");
    /// assert_eq!(Level::Error.tag().len(), Level::Info.tag().len());
    /// ```
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Trace => "Trace",
            Level::Info => "Info ",
            Level::Warn => "Warn ",
            Level::Error => "Error",
        }
    }

    /// ANSI color that starts a colored line of this level.
    pub const fn color_code(self) -> &'static str {
        match self {
            Level::Trace => "\x1b[34m",
            Level::Info => "\x1b[0m",
            Level::Warn => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    /// Whether a line of this level ends the process once written.
    pub const fn is_fatal(self) -> bool {
        matches!(self, Level::Error)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag().trim_end())
    }
}
