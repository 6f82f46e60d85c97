pub use core::time::Duration;

// `std::time::SystemTime::now()` panics on `wasm32-unknown-unknown`;
// `web-time` backs it with `Date.now()` in the browser.
#[cfg(target_arch = "wasm32")]
use web_time::{SystemTime, UNIX_EPOCH};

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock milliseconds since the Unix epoch (0 if the clock is before it).
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[inline]
pub fn millis(ms: u32) -> Duration {
    Duration::from_millis(ms as u64)
}
