// SPDX-License-Identifier: MIT OR Apache-2.0

#[cfg(test)]
mod tests {
    use linelog::{
        Dispatcher, FatalLog, FormatConfig, Formatter, InMemoryLogger, Level, OnFatal,
        WRAP_AFTER, WRAP_PREFIX, set_global_dispatcher,
    };
    use std::io;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
    use test_executors::async_test;

    static TEST_LOGGER_GUARD: Mutex<()> = Mutex::new(());

    /// Installs a capturing global dispatcher for the duration of one test.
    struct Capture {
        logger: Arc<InMemoryLogger>,
        previous: Option<Dispatcher>,
        _guard: MutexGuard<'static, ()>,
    }

    impl Capture {
        fn install() -> Self {
            let guard = TEST_LOGGER_GUARD
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let logger = Arc::new(InMemoryLogger::new());
            let previous = set_global_dispatcher(
                Dispatcher::new()
                    .with_logger(logger.clone())
                    .with_formatter(Formatter::new(FormatConfig::new().with_timestamp(false)))
                    .with_on_fatal(OnFatal::Panic),
            );
            Self {
                logger,
                previous: Some(previous),
                _guard: guard,
            }
        }
    }

    impl Drop for Capture {
        fn drop(&mut self) {
            if let Some(previous) = self.previous.take() {
                set_global_dispatcher(previous);
            }
        }
    }

    /// Small deterministic generator so the long-error tests are reproducible.
    struct Words(u64);

    impl Words {
        fn next(&mut self, bound: u64) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (self.0 >> 33) % bound
        }

        fn sentence(&mut self, word_count: usize, max_word_length: u64) -> String {
            let mut sentence = String::new();
            for _ in 0..word_count {
                let length = 1 + self.next(max_word_length);
                for _ in 0..length {
                    sentence.push((b'a' + self.next(26) as u8) as char);
                }
                sentence.push(' ');
            }
            sentence
        }
    }

    #[test]
    fn trace_macro() {
        let capture = Capture::install();
        linelog::trace!("%s", "blue");
        let records = capture.logger.drain_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level(), Level::Trace);
        assert_eq!(records[0].to_string(), "Trace | blue");
    }

    #[test]
    fn info_macro() {
        let capture = Capture::install();
        linelog::info!("%s", "default");
        assert_eq!(capture.logger.drain_logs(), "Info  | default");
    }

    #[test]
    fn warn_without_err() {
        let capture = Capture::install();
        linelog::warn!("%s", "yellow");
        assert_eq!(capture.logger.drain_logs(), "Warn  | yellow");
    }

    #[test]
    fn warn_with_err() {
        let capture = Capture::install();
        let err = io::Error::other("error message");
        linelog::warn!(err = err, "%s", "yellow");
        assert_eq!(
            capture.logger.drain_logs(),
            "Warn  | yellow\n      | error message"
        );
    }

    #[test]
    fn warn_with_long_err() {
        let capture = Capture::install();
        let text = Words(7).sentence(20, 10);
        let err = io::Error::other(text.clone());
        linelog::warn!(err = err, "%s", "yellow");

        let logs = capture.logger.drain_logs();
        let (header, block) = logs.split_at(logs.find('\n').unwrap());
        assert_eq!(header, "Warn  | yellow");
        assert_eq!(block.replace(WRAP_PREFIX, ""), text, "error text must survive intact");

        let lines: Vec<&str> = block[1..].split('\n').collect();
        assert!(lines.len() > 1, "a 20-word error should wrap");
        for line in &lines[..lines.len() - 1] {
            let body = line.strip_prefix("      | ").unwrap();
            assert!(body.ends_with(' '), "breaks only land after a space: {body:?}");
            let chars = body.chars().count();
            assert!(chars > WRAP_AFTER, "broke too early: {body:?}");
            // the break is at the first space past the limit
            assert!(!body[..chars - 1].chars().skip(WRAP_AFTER).any(|c| c == ' '));
        }
    }

    #[test]
    fn error_without_err() {
        let capture = Capture::install();
        let caught = catch_unwind(AssertUnwindSafe(|| linelog::error!("%s", "red"))).unwrap_err();
        assert_eq!(caught.downcast_ref::<FatalLog>().unwrap().line(), "Error | red");
        assert_eq!(capture.logger.drain_logs(), "Error | red");
    }

    #[test]
    fn error_with_err() {
        let capture = Capture::install();
        let err = io::Error::other("error message");
        let caught = catch_unwind(AssertUnwindSafe(|| linelog::error!(err = err, "%s", "red")))
            .unwrap_err();
        assert!(caught.downcast_ref::<FatalLog>().is_some());
        assert_eq!(
            capture.logger.drain_logs(),
            "Error | red\n      | error message"
        );
    }

    #[test]
    fn error_with_long_err() {
        let capture = Capture::install();
        let text = Words(11).sentence(20, 10);
        let err = io::Error::other(text.clone());
        let caught = catch_unwind(AssertUnwindSafe(|| linelog::error!(err = err, "%s", "red")))
            .unwrap_err();
        let line = caught.downcast_ref::<FatalLog>().unwrap().line().to_string();
        assert!(line.starts_with("Error | red\n      | "));
        assert_eq!(line.replacen("Error | red", "", 1).replace(WRAP_PREFIX, ""), text);
        assert_eq!(capture.logger.drain_logs(), line);
    }

    #[test]
    fn handle_error_function() {
        let capture = Capture::install();
        let ok: Result<&str, io::Error> = Ok("fine");
        assert_eq!(linelog::handle_error("reading", ok), "fine");
        assert!(capture.logger.is_empty());

        let failed: Result<&str, io::Error> = Err(io::Error::other("permission denied"));
        let caught = catch_unwind(AssertUnwindSafe(|| linelog::handle_error("reading", failed)));
        assert!(caught.is_err());
        assert_eq!(
            capture.logger.drain_logs(),
            "Error | reading\n      | permission denied"
        );
    }

    #[test]
    fn substitution_mismatch_never_panics() {
        let capture = Capture::install();
        linelog::info!("%d and %d", 1);
        linelog::info!("plain", 1, 2);
        assert_eq!(
            capture.logger.drain_logs(),
            "Info  | 1 and %!d(MISSING)\nInfo  | plain%!(EXTRA 1, 2)"
        );
    }

    #[async_test]
    async fn async_functions() {
        let capture = Capture::install();
        let err = io::Error::other("e");
        // lines are formatted at call time; only the hand-off is awaited
        let pending = [
            linelog::trace_async("%s", &[&"t"]),
            linelog::info_async("%s", &[&"i"]),
            linelog::warn_async(Some(&err), "%s", &[&"w"]),
        ];
        let logger = capture.logger.clone();
        drop(capture);

        for future in pending {
            future.await;
        }
        assert_eq!(logger.drain_logs(), "Trace | t\nInfo  | i\nWarn  | w\n      | e");
    }
}
