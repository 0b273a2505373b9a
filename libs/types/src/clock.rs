//! Monotonic timestamp source
//!
//! Trade timestamps are nanoseconds since process start, taken from the
//! OS monotonic clock. Values are comparable within a process run only;
//! they are monotonic within a thread and never go backwards.

use std::sync::OnceLock;
use std::time::Instant;

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Nanoseconds since the first call in this process.
pub fn monotonic_nanos() -> u64 {
    let epoch = *EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_nanos() as u64
}
