//! Time utility functions

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current Unix time
pub trait Clock {
  /// Seconds since the Unix epoch
  fn now_secs(&self) -> i64;
}

/// Wall clock backed by `SystemTime`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now_secs(&self) -> i64 {
    now_secs()
  }
}

/// Clock pinned to a single instant
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

#[cfg(test)]
impl Clock for FixedClock {
  fn now_secs(&self) -> i64 {
    self.0
  }
}

/// Get the current timestamp in seconds
///
/// A system clock set before the epoch reads as 0.
pub fn now_secs() -> i64 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_secs() as i64)
    .unwrap_or_default()
}
