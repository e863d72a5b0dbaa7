// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
What happens after an [Level::Error](crate::Level::Error) line has been written.

Error lines are "log and crash": the line is written first, then the process ends.
How it ends is a value on the [Dispatcher](crate::Dispatcher) rather than a second code
path, so tests can swap the exit for a panic they can catch.

```rust
use linelog::{Dispatcher, FatalLog, InMemoryLogger, OnFatal};
use std::sync::Arc;

let logger = Arc::new(InMemoryLogger::new());
let dispatcher = Dispatcher::new()
    .with_logger(logger.clone())
    .with_on_fatal(OnFatal::Panic);

let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    dispatcher.error(None, "out of %s", &[&"disk"]);
}))
.unwrap_err();

let fatal = caught.downcast_ref::<FatalLog>().unwrap();
assert!(fatal.line().ends_with("out of disk"));
assert!(logger.drain_logs().ends_with("out of disk"));
```
*/

use crate::logger::Logger;

/// Termination strategy for error lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnFatal {
    /// Flush the sink, then exit the process with this status.
    Exit(i32),
    /// Flush the sink, then panic with a [FatalLog] payload.
    Panic,
}

impl Default for OnFatal {
    fn default() -> Self {
        OnFatal::Exit(1)
    }
}

impl OnFatal {
    pub(crate) fn terminate(self, logger: &dyn Logger, line: String) -> ! {
        logger.prepare_to_die();
        match self {
            OnFatal::Exit(code) => std::process::exit(code),
            OnFatal::Panic => std::panic::panic_any(FatalLog { line }),
        }
    }
}

/// Panic payload raised by [OnFatal::Panic].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FatalLog {
    line: String,
}

impl FatalLog {
    /// The uncolored line that was written before terminating.
    pub fn line(&self) -> &str {
        &self.line
    }
}

impl std::fmt::Display for FatalLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fatal log line: {}", self.line)
    }
}

impl std::error::Error for FatalLog {}
