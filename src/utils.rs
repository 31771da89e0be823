//! Utility functions and the time source abstraction

/// Get the current timestamp in seconds since the Unix epoch.
///
/// Saturates at `u32::MAX` since the wire format carries a 32-bit timestamp.
pub fn current_timestamp() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs();
    secs.min(u64::from(u32::MAX)) as u32
}

/// Wall-clock abstraction used by the codec.
///
/// Default timestamps on encode and TTL checks on decode both read the clock
/// through this trait, so tests can pin time to a fixed value instead of
/// racing the system clock.
pub trait Clock {
    /// Current time in seconds since the Unix epoch
    fn now(&self) -> u32;
}

/// The system wall clock, used unless another [`Clock`] is injected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u32 {
        current_timestamp()
    }
}
