// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use std::fmt::Debug;

/**
A destination for finished log lines.

Implementations must tolerate concurrent calls: the emitter thread and the main line of
control may write at the same time.  Serializing physical writes is the sink's job.
*/
pub trait Logger: Debug + Send + Sync {
    /**
    Writes one finished line.

    The record is already formatted and uncolored; its `Display` output has no trailing
    newline.  The record's [level](LogRecord::level) is available for sinks that color
    or route by severity.
    */
    fn finish_log_record(&self, record: LogRecord);

    /**
    Writes one finished line from an async context.

    The line was formatted before this was called, so the returned future only performs
    the write.  A sink with no async path can do the write synchronously and return a
    ready future.
    */
    fn finish_log_record_async<'s>(
        &'s self,
        record: LogRecord,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + 's>>;

    /**
    Called by the fatal strategy after the Error line is written and before the process
    exits or panics.  Flush anything buffered.
    */
    fn prepare_to_die(&self);
}

/*
Boilerplate notes for Logger.

A sink is an endpoint (stderr, the console, a capture buffer), shared by every
Dispatcher clone through Arc<dyn Logger>.  Nothing value-like is implemented:

- Clone: a Dispatcher clones the Arc, never the sink
- PartialEq/Hash: two stderr sinks write to the same place; comparing them says nothing
- Default: not part of the trait; a sink that needs a destination cannot have one
- Send + Sync: required, the emitter thread writes through the same sink
*/
