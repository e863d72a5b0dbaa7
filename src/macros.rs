// SPDX-License-Identifier: MIT OR Apache-2.0

//! Crate-root logging functions and their macro front-ends.
//!
//! The functions take the substitution values as a slice of `&dyn Display`; the macros
//! build that slice for you:
//!
//! ```rust
//! # use linelog::{Dispatcher, InMemoryLogger, set_global_dispatcher};
//! # use std::sync::Arc;
//! # let logger = Arc::new(InMemoryLogger::new());
//! # let previous = set_global_dispatcher(Dispatcher::new().with_logger(logger.clone()));
//! let copied = 12;
//! linelog::info!("copied %d files", copied);
//! linelog::info("copied %d files", &[&copied]);
//!
//! let err = std::io::Error::other("disk full");
//! linelog::warn!(err = err, "could not copy %s", "notes.txt");
//! linelog::warn!("no error attached");
//! # assert_eq!(logger.len(), 4);
//! # set_global_dispatcher(previous);
//! ```
//!
//! All of these go through the [global dispatcher](crate::global_dispatcher).

use crate::global_dispatcher::global_dispatcher;
use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;

/// Writes a trace line through the global dispatcher.
pub fn trace(template: &str, args: &[&dyn Display]) {
    global_dispatcher().trace(template, args);
}

/// Writes an info line through the global dispatcher.
pub fn info(template: &str, args: &[&dyn Display]) {
    global_dispatcher().info(template, args);
}

/// Writes a warning through the global dispatcher, with `error` appended as a wrapped block.
pub fn warn(error: Option<&dyn Display>, template: &str, args: &[&dyn Display]) {
    global_dispatcher().warn(error, template, args);
}

/// Writes an error line through the global dispatcher, then terminates.
///
/// By default the process exits with status 1; see [OnFatal](crate::OnFatal).
pub fn error(error: Option<&dyn Display>, template: &str, args: &[&dyn Display]) -> ! {
    global_dispatcher().error(error, template, args)
}

/// Unwraps `result`, or writes `message` with the error and terminates.
///
/// See [Dispatcher::handle_error].
pub fn handle_error<T, E: Display>(message: &str, result: Result<T, E>) -> T {
    global_dispatcher().handle_error(message, result)
}

pub fn trace_async(
    template: &str,
    args: &[&dyn Display],
) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
    global_dispatcher().trace_async(template, args)
}

pub fn info_async(
    template: &str,
    args: &[&dyn Display],
) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
    global_dispatcher().info_async(template, args)
}

pub fn warn_async(
    error: Option<&dyn Display>,
    template: &str,
    args: &[&dyn Display],
) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
    global_dispatcher().warn_async(error, template, args)
}

/// Writes a trace line: `trace!("template %v", values...)`.
#[macro_export]
macro_rules! trace {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::trace($template, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Writes an info line: `info!("template %v", values...)`.
#[macro_export]
macro_rules! info {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::info($template, &[$(&$arg as &dyn ::core::fmt::Display),*])
    };
}

/// Writes a warning: `warn!("template", values...)` or `warn!(err = e, "template", values...)`.
#[macro_export]
macro_rules! warn {
    (err = $err:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::warn(
            ::core::option::Option::Some(&$err as &dyn ::core::fmt::Display),
            $template,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::warn(
            ::core::option::Option::None,
            $template,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
}

/// Writes an error line and terminates: `error!("template", values...)` or
/// `error!(err = e, "template", values...)`.
#[macro_export]
macro_rules! error {
    (err = $err:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::error(
            ::core::option::Option::Some(&$err as &dyn ::core::fmt::Display),
            $template,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::error(
            ::core::option::Option::None,
            $template,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
}
