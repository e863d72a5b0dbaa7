// SPDX-License-Identifier: MIT OR Apache-2.0
#![cfg(not(target_arch = "wasm32"))]

#[cfg(test)]
mod tests {
    use linelog::{ColorMode, Dispatcher, OnFatal, StdErrorLogger};
    use std::io;
    use std::process::Command;
    use std::sync::Arc;

    const CHILD_ENV: &str = "LINELOG_FATAL_CHILD";

    /// Body of the child process; a no-op in the normal test run.
    #[test]
    fn child_writes_then_exits() {
        if std::env::var_os(CHILD_ENV).is_none() {
            return;
        }
        let dispatcher = Dispatcher::new()
            .with_logger(Arc::new(StdErrorLogger::new().with_color(ColorMode::Never)))
            .with_on_fatal(OnFatal::Exit(3));
        let err = io::Error::other("cannot continue");
        dispatcher.error(Some(&err), "giving up after %d attempts", &[&3]);
    }

    #[test]
    fn error_line_is_written_before_the_process_exits() {
        let output = Command::new(std::env::current_exe().unwrap())
            .args(["--exact", "tests::child_writes_then_exits", "--nocapture"])
            .env(CHILD_ENV, "1")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        let line = stderr
            .lines()
            .position(|line| line.starts_with("Error | "))
            .map(|at| stderr.lines().skip(at).take(2).collect::<Vec<_>>())
            .unwrap_or_else(|| panic!("no error line in child stderr: {stderr}"));
        assert!(line[0].ends_with(" | giving up after 3 attempts"), "{line:?}");
        assert_eq!(line[1], "      | cannot continue");
        assert!(!stderr.contains('\x1b'), "color was switched off");
    }
}
