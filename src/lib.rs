//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# linelog

linelog writes leveled, human-readable log lines for a person watching a console.

```text
Info  | 2024/03/01 12:00:00 | server listening on :8080
Warn  | 2024/03/01 12:00:03 | disk at 92%
Error | 2024/03/01 12:00:09 | something failed
      | because of a downstream condition that was too long
      | to fit on one line
```

# Levels

| Name  | Usecase                       | Then                                    |
|-------|-------------------------------|-----------------------------------------|
| trace | detailed debugging            | returns                                 |
| info  | what the program is doing     | returns                                 |
| warn  | suspicious, optionally with an error | returns                          |
| error | unrecoverable, optionally with an error | terminates the process        |

There is no level filtering: every call writes a line.

# The API

```rust
# use linelog::{Dispatcher, InMemoryLogger, set_global_dispatcher};
# use std::sync::Arc;
# let previous = set_global_dispatcher(Dispatcher::new().with_logger(Arc::new(InMemoryLogger::new())));
let percent = 92;
linelog::warn!("disk at %d%%", percent);

let err = std::io::Error::other("connection reset");
linelog::warn!(err = err, "retrying %s", "upstream");
# set_global_dispatcher(previous);
```

Templates use `%` verbs filled positionally; see [interpolate] for the rules, including
what happens when verbs and values don't line up (it never panics).

An attached error is rendered below the header as an indented block, broken between
words; see [wrap_error_text].

# Repeating a line

[every] writes a message on a timer until the returned [EmitterHandle] is cancelled:

```rust
# use linelog::{Dispatcher, InMemoryLogger, set_global_dispatcher};
# use std::sync::Arc;
# let previous = set_global_dispatcher(Dispatcher::new().with_logger(Arc::new(InMemoryLogger::new())));
let waiting = linelog::every("waiting for the database", linelog::Duration::from_secs(5));
// ... connect ...
waiting.cancel();
# set_global_dispatcher(previous);
```

# Configuration

Nothing is configured through globals or the environment.  A [Dispatcher] carries an
explicit [Formatter] (with its [FormatConfig]), a [Logger] sink and an [OnFatal]
strategy; the crate-root functions use whichever dispatcher was installed with
[set_global_dispatcher].
*/

mod dispatch;
mod emitter;
mod fatal;
mod formatter;
mod global_dispatcher;
mod inmemory_logger;
mod level;
mod log_record;
mod logger;
mod macros;
mod spinlock;
mod stderror_logger;
mod sys;
mod template;
mod wrap;

pub use dispatch::Dispatcher;
pub use emitter::{EmitterHandle, MIN_INTERVAL, every};
pub use fatal::{FatalLog, OnFatal};
pub use formatter::{FormatConfig, Formatter, colorize};
pub use global_dispatcher::{global_dispatcher, set_global_dispatcher};
pub use inmemory_logger::InMemoryLogger;
pub use level::{COLOR_RESET, Level};
pub use log_record::{LogRecord, TIMESTAMP_FORMAT};
pub use logger::Logger;
pub use macros::{error, handle_error, info, info_async, trace, trace_async, warn, warn_async};
pub use stderror_logger::{ColorMode, ParseColorModeError, StdErrorLogger};
pub use template::interpolate;
pub use wrap::{WRAP_AFTER, WRAP_PREFIX, wrap_error_text};

pub use sys::Duration;
