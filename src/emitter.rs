// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Repeats a log line on a timer until cancelled.

Each call to [every](crate::every) starts one background thread that loops:

1.  if cancellation has been requested, stop;
2.  write the message at info level;
3.  wait up to `interval` for a stop signal.

The wait is a timed receive on a channel, so cancelling wakes a sleeping emitter right
away instead of letting it sleep out the rest of the interval.  The cancellation flag is
checked before every write, so once the emitter has observed the cancel it writes nothing
more.  A write racing with the cancel call itself may still land.

Emitters are independent of each other: each has its own thread, flag and channel.
*/

use crate::dispatch::Dispatcher;
use crate::sys::{Duration, Instant, JoinHandle, spawn_named};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use wasm_safe_mutex::mpsc;

static EMITTER_ID: AtomicU64 = AtomicU64::new(1);

/// Longest single wait; an `interval` past the end of `Instant` is clamped to this.
const FAR_FUTURE: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Shortest wait between two lines; shorter intervals, zero included, are raised to this.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

enum Signal {
    Stop,
}

#[derive(Debug, Default)]
struct State {
    cancelled: AtomicBool,
    finished: AtomicBool,
}

/**
Handle to one running emitter.

Created by [every](crate::every) or [Dispatcher::every].  Cancelling is idempotent and
irreversible.  Dropping the handle cancels too, unless it was [detached](Self::detach).
A handle discarded at the call site (`linelog::every(..);` as a bare statement) is
dropped right away, so the emitter stops before it writes anything; bind it, or call
[detach](Self::detach) for a process-lifetime emitter.

```rust
use linelog::{Dispatcher, InMemoryLogger, Duration};
use std::sync::Arc;

let logger = Arc::new(InMemoryLogger::new());
let dispatcher = Dispatcher::new().with_logger(logger.clone());

let handle = dispatcher.every("still working", Duration::from_millis(5));
std::thread::sleep(Duration::from_millis(20));
handle.stop();

let count = logger.len();
assert!(count >= 1);
std::thread::sleep(Duration::from_millis(20));
assert_eq!(logger.len(), count);
```
*/
#[must_use = "dropping the handle cancels the emitter; call detach() to keep it running"]
pub struct EmitterHandle {
    id: u64,
    message: Arc<str>,
    interval: Duration,
    state: Arc<State>,
    sender: mpsc::Sender<Signal>,
    thread: Option<JoinHandle>,
    detached: bool,
}

impl EmitterHandle {
    pub(crate) fn start(dispatcher: Dispatcher, message: String, interval: Duration) -> Self {
        let id = EMITTER_ID.fetch_add(1, Ordering::Relaxed);
        let message: Arc<str> = message.into();
        let interval = interval.max(MIN_INTERVAL);
        let state = Arc::new(State::default());
        let (sender, receiver) = mpsc::channel();

        let spawned = {
            let dispatcher = dispatcher.clone();
            let message = message.clone();
            let state = state.clone();
            // the thread keeps a sender so a detached emitter never sees a disconnect
            let keepalive = sender.clone();
            spawn_named(&format!("linelog-every-{id}"), move || {
                emit_loop(&dispatcher, &message, interval, &state, &receiver);
                state.finished.store(true, Ordering::Release);
                drop(keepalive);
            })
        };

        let thread = match spawned {
            Ok(thread) => Some(thread),
            Err(err) => {
                state.cancelled.store(true, Ordering::Release);
                state.finished.store(true, Ordering::Release);
                dispatcher.warn(Some(&err), "could not start emitter for %q", &[&message]);
                None
            }
        };

        Self {
            id,
            message,
            interval,
            state,
            sender,
            thread,
            detached: false,
        }
    }

    /// Requests the emitter to stop.  Returns immediately; calling again does nothing.
    pub fn cancel(&self) {
        if !self.state.cancelled.swap(true, Ordering::AcqRel) {
            // Ignore send failures: a finished thread has nothing left to wake.
            let _ = self.sender.send_sync(Signal::Stop);
        }
    }

    /// Cancels, then waits for the background thread to exit.
    pub fn stop(mut self) {
        self.cancel();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }

    /// Lets the emitter run for the rest of the process.
    pub fn detach(mut self) {
        self.detached = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::Acquire)
    }

    /// Whether the background thread has left its loop.
    pub fn is_finished(&self) -> bool {
        self.state.finished.load(Ordering::Acquire)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for EmitterHandle {
    fn drop(&mut self) {
        if !self.detached {
            self.cancel();
        }
    }
}

impl std::fmt::Debug for EmitterHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmitterHandle")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("interval", &self.interval)
            .field("cancelled", &self.is_cancelled())
            .field("finished", &self.is_finished())
            .field("detached", &self.detached)
            .finish()
    }
}

/*
boilerplate notes.

1.  Clone, no.  Two handles to one emitter would make "dropping cancels" ambiguous.
2.  PartialEq, Hash, Ord: no, handles are identities, not values.
3.  Default: no, there is nothing to run.
4.  Send/Sync: yes, so a handle can be cancelled from another thread.
 */

fn emit_loop(
    dispatcher: &Dispatcher,
    message: &str,
    interval: Duration,
    state: &State,
    receiver: &mpsc::Receiver<Signal>,
) {
    loop {
        if state.cancelled.load(Ordering::Acquire) {
            break;
        }
        dispatcher.info("%s", &[&message]);

        let now = Instant::now();
        let deadline = now
            .checked_add(interval)
            .unwrap_or_else(|| now + FAR_FUTURE);
        match receiver.recv_sync_timeout(deadline) {
            Ok(Signal::Stop) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => { /* next tick */ }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
}

/**
Writes `message` at info level every `interval` until the returned handle is cancelled.

The first line is written right away.  The message is written verbatim; it is not a
template.  Uses the [global dispatcher](crate::global_dispatcher) as it is when `every`
is called.  An `interval` below [MIN_INTERVAL], zero included, is raised to it.

The emitter runs until the handle is cancelled or dropped.  To keep it running for the
life of the process, call [EmitterHandle::detach].

```rust
use linelog::Duration;

let handle = linelog::every("waiting for the database", Duration::from_secs(5));
// ... later
handle.cancel();
```
*/
#[must_use = "dropping the handle cancels the emitter; call detach() to keep it running"]
pub fn every(message: impl Into<String>, interval: Duration) -> EmitterHandle {
    crate::global_dispatcher().every(message, interval)
}
