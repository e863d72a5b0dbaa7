// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform-specific time and thread types.
//!
//! On native platforms these come from `std`; on WebAssembly, `Instant` comes from
//! `web_time` and threads from `wasm_thread`.  The [`Duration`] type is re-exported at
//! the crate root for use with [`every`](crate::every).

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};
#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};

#[cfg(not(target_arch = "wasm32"))]
pub type JoinHandle = std::thread::JoinHandle<()>;
#[cfg(target_arch = "wasm32")]
pub type JoinHandle = wasm_thread::JoinHandle<()>;

/// Spawns a named background thread.
pub fn spawn_named<F>(name: &str, f: F) -> std::io::Result<JoinHandle>
where
    F: FnOnce() + Send + 'static,
{
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::thread::Builder::new().name(name.to_string()).spawn(f)
    }
    #[cfg(target_arch = "wasm32")]
    {
        wasm_thread::Builder::new().name(name.to_string()).spawn(f)
    }
}
