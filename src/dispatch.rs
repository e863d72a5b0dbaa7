// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity rules and delivery of finished lines to a sink.
//!
//! A [`Dispatcher`] bundles the three explicit pieces of configuration a log call needs:
//!
//! * the [`Formatter`] that builds the line,
//! * the [`Logger`] that receives it,
//! * the [`OnFatal`] strategy run after an error line.
//!
//! Severity behavior:
//!
//! | Level   | Writes                           | Then                 |
//! |---------|----------------------------------|----------------------|
//! | trace   | always                           | returns              |
//! | info    | always                           | returns              |
//! | warn    | always; error block if supplied  | returns              |
//! | error   | always; error block if supplied  | runs [`OnFatal`]     |
//!
//! The free functions at the crate root ([`crate::info`] and friends) use the
//! [global dispatcher](crate::global_dispatcher).

use crate::Level;
use crate::emitter::EmitterHandle;
use crate::fatal::OnFatal;
use crate::formatter::Formatter;
use crate::log_record::LogRecord;
use crate::logger::Logger;
use crate::stderror_logger::StdErrorLogger;
use crate::sys::Duration;
use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Formats lines and sends them to one sink.
///
/// Cloning is cheap: the sink is shared through an `Arc`.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    formatter: Formatter,
    logger: Arc<dyn Logger>,
    on_fatal: OnFatal,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Timestamped lines to stderr, exiting with status 1 after an error line.
    pub fn new() -> Self {
        Self {
            formatter: Formatter::default(),
            logger: Arc::new(StdErrorLogger::new()),
            on_fatal: OnFatal::default(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_on_fatal(mut self, on_fatal: OnFatal) -> Self {
        self.on_fatal = on_fatal;
        self
    }

    pub fn formatter(&self) -> Formatter {
        self.formatter
    }

    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    pub fn on_fatal(&self) -> OnFatal {
        self.on_fatal
    }

    fn submit(
        &self,
        level: Level,
        template: &str,
        args: &[&dyn Display],
        error: Option<&dyn Display>,
    ) -> LogRecord {
        let record = self.formatter.record(level, template, args, error);
        self.logger.finish_log_record(record.clone());
        record
    }

    fn submit_async(
        &self,
        level: Level,
        template: &str,
        args: &[&dyn Display],
        error: Option<&dyn Display>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
        let record = self.formatter.record(level, template, args, error);
        let logger = self.logger.clone();
        Box::pin(async move { logger.finish_log_record_async(record).await })
    }

    pub fn trace(&self, template: &str, args: &[&dyn Display]) {
        self.submit(Level::Trace, template, args, None);
    }

    pub fn info(&self, template: &str, args: &[&dyn Display]) {
        self.submit(Level::Info, template, args, None);
    }

    /// Writes a warning.  Without an error this is just the header line.
    pub fn warn(&self, error: Option<&dyn Display>, template: &str, args: &[&dyn Display]) {
        self.submit(Level::Warn, template, args, error);
    }

    /**
    Writes an error line, then terminates according to [OnFatal].

    The line is written whether or not `error` is present.
    */
    pub fn error(&self, error: Option<&dyn Display>, template: &str, args: &[&dyn Display]) -> ! {
        let record = self.submit(Level::Error, template, args, error);
        self.on_fatal.terminate(self.logger.as_ref(), record.to_string())
    }

    /**
    Unwraps `result`, or writes `message` as an error line annotated with the error and terminates.

    ```rust,no_run
    # let dispatcher = linelog::Dispatcher::new();
    let config = dispatcher.handle_error("reading config", std::fs::read_to_string("app.toml"));
    ```
    */
    pub fn handle_error<T, E: Display>(&self, message: &str, result: Result<T, E>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => self.error(Some(&err), "%s", &[&message]),
        }
    }

    pub fn trace_async(
        &self,
        template: &str,
        args: &[&dyn Display],
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
        self.submit_async(Level::Trace, template, args, None)
    }

    pub fn info_async(
        &self,
        template: &str,
        args: &[&dyn Display],
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
        self.submit_async(Level::Info, template, args, None)
    }

    /// The line is formatted immediately; only the hand-off to the sink is deferred.
    pub fn warn_async(
        &self,
        error: Option<&dyn Display>,
        template: &str,
        args: &[&dyn Display],
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
        self.submit_async(Level::Warn, template, args, error)
    }

    /// Starts writing `message` at info level every `interval`.  See [crate::every].
    #[must_use = "dropping the handle cancels the emitter; call detach() to keep it running"]
    pub fn every(&self, message: impl Into<String>, interval: Duration) -> EmitterHandle {
        EmitterHandle::start(self.clone(), message.into(), interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fatal::FatalLog;
    use crate::formatter::FormatConfig;
    use crate::InMemoryLogger;
    use std::io;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use test_executors::async_test;

    fn capture() -> (Arc<InMemoryLogger>, Dispatcher) {
        let logger = Arc::new(InMemoryLogger::new());
        let dispatcher = Dispatcher::new()
            .with_logger(logger.clone())
            .with_formatter(Formatter::new(FormatConfig::new().with_timestamp(false)))
            .with_on_fatal(OnFatal::Panic);
        (logger, dispatcher)
    }

    #[test]
    fn trace_and_info_write_one_line_each() {
        let (logger, dispatcher) = capture();
        dispatcher.trace("%s", &[&"blue"]);
        dispatcher.info("%s", &[&"default"]);
        let records = logger.drain_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level(), Level::Trace);
        assert_eq!(records[0].to_string(), "Trace | blue");
        assert_eq!(records[1].to_string(), "Info  | default");
    }

    #[test]
    fn warn_with_and_without_error() {
        let (logger, dispatcher) = capture();
        dispatcher.warn(None, "%s", &[&"yellow"]);
        let err = io::Error::other("error message");
        dispatcher.warn(Some(&err), "%s", &[&"yellow"]);
        assert_eq!(
            logger.drain_logs(),
            "Warn  | yellow\nWarn  | yellow\n      | error message"
        );
    }

    #[test]
    fn error_without_error_still_writes_and_terminates() {
        let (logger, dispatcher) = capture();
        let caught = catch_unwind(AssertUnwindSafe(|| dispatcher.error(None, "%s", &[&"red"])))
            .unwrap_err();
        assert_eq!(caught.downcast_ref::<FatalLog>().unwrap().line(), "Error | red");
        assert_eq!(logger.drain_logs(), "Error | red");
    }

    #[test]
    fn error_with_error_writes_block_then_terminates() {
        let (logger, dispatcher) = capture();
        let err = io::Error::other("error message");
        let caught = catch_unwind(AssertUnwindSafe(|| {
            dispatcher.error(Some(&err), "%s", &[&"red"])
        }))
        .unwrap_err();
        let expected = "Error | red\n      | error message";
        assert_eq!(caught.downcast_ref::<FatalLog>().unwrap().line(), expected);
        assert_eq!(logger.drain_logs(), expected);
    }

    #[test]
    fn handle_error_passes_values_through() {
        let (logger, dispatcher) = capture();
        let value: Result<u8, io::Error> = Ok(7);
        assert_eq!(dispatcher.handle_error("loading", value), 7);
        assert!(logger.is_empty());
    }

    #[test]
    fn handle_error_terminates_on_err() {
        let (logger, dispatcher) = capture();
        let failed: Result<u8, io::Error> = Err(io::Error::other("no such file"));
        let caught = catch_unwind(AssertUnwindSafe(|| dispatcher.handle_error("loading", failed)))
            .unwrap_err();
        assert!(caught.downcast_ref::<FatalLog>().is_some());
        assert_eq!(logger.drain_logs(), "Error | loading\n      | no such file");
    }

    #[async_test]
    async fn async_variants_reach_the_sink() {
        let (logger, dispatcher) = capture();
        dispatcher.trace_async("a%d", &[&1]).await;
        dispatcher.info_async("b%d", &[&2]).await;
        dispatcher.warn_async(None, "c%d", &[&3]).await;
        assert_eq!(logger.drain_logs(), "Trace | a1\nInfo  | b2\nWarn  | c3");
    }

    #[test]
    fn defaults() {
        let dispatcher = Dispatcher::default();
        assert_eq!(dispatcher.on_fatal(), OnFatal::Exit(1));
        assert!(dispatcher.formatter().config().timestamp());
    }
}
