// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default [`Dispatcher`].
//!
//! The crate-root functions ([`crate::trace`], [`crate::info`], [`crate::warn`],
//! [`crate::error`], [`crate::every`]) and the macros all go through this dispatcher.
//! There is no hidden configuration beyond it: everything the free functions do is
//! whatever the installed [`Dispatcher`] value says.
//!
//! # Default behavior
//!
//! Until something else is installed, the global dispatcher writes timestamped,
//! auto-colored lines to stderr and exits with status 1 after an error line.
//!
//! # Replacing it
//!
//! ```
//! use linelog::{Dispatcher, InMemoryLogger, OnFatal, set_global_dispatcher};
//! use std::sync::Arc;
//!
//! let logger = Arc::new(InMemoryLogger::new());
//! let previous = set_global_dispatcher(
//!     Dispatcher::new()
//!         .with_logger(logger.clone())
//!         .with_on_fatal(OnFatal::Panic),
//! );
//!
//! linelog::info("captured %s", &[&"in memory"]);
//! assert!(logger.drain_logs().ends_with("captured in memory"));
//!
//! set_global_dispatcher(previous);
//! ```
//!
//! # Implementation notes
//!
//! The dispatcher sits behind a [`Spinlock`] rather than a `std::sync::Mutex` because
//! the wasm main thread cannot block.  Each access clones or swaps the `Dispatcher`,
//! which is an `Arc` increment, so the lock is only ever held for a moment.
//!
//! A log call clones the dispatcher before formatting.  Replacing the global dispatcher
//! while another thread is mid-call is therefore safe: that call finishes against the
//! dispatcher it started with.

use crate::dispatch::Dispatcher;
use crate::spinlock::Spinlock;
use std::sync::OnceLock;

static GLOBAL_DISPATCHER: OnceLock<Spinlock<Dispatcher>> = OnceLock::new();

fn slot() -> &'static Spinlock<Dispatcher> {
    GLOBAL_DISPATCHER.get_or_init(|| Spinlock::new(Dispatcher::new()))
}

/// Returns a clone of the current global dispatcher.
///
/// ```
/// let dispatcher = linelog::global_dispatcher();
/// println!("logging to {:?}", dispatcher.logger());
/// ```
pub fn global_dispatcher() -> Dispatcher {
    slot().with(Dispatcher::clone)
}

/// Installs `dispatcher` as the global dispatcher, returning the one it replaces.
///
/// Emitters that are already running keep the dispatcher they were started with.
pub fn set_global_dispatcher(dispatcher: Dispatcher) -> Dispatcher {
    slot().replace(dispatcher)
}
