// bluetick/src/services/order_ids.rs

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out `VIP-<6 digits>` order ids from the wall clock.
///
/// Each call reads a millisecond value strictly greater than the previous
/// one, so ids from the same process never repeat within a million
/// milliseconds of each other.
#[derive(Debug, Default)]
pub struct OrderIdGenerator {
  last_millis: AtomicI64,
}

impl OrderIdGenerator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn next_id(&self) -> String {
    let now = Utc::now().timestamp_millis();
    let mut prev = self.last_millis.load(Ordering::Relaxed);
    let stamp = loop {
      let candidate = now.max(prev + 1);
      match self
        .last_millis
        .compare_exchange_weak(prev, candidate, Ordering::AcqRel, Ordering::Relaxed)
      {
        Ok(_) => break candidate,
        Err(actual) => prev = actual,
      }
    };
    format_order_id(stamp)
  }
}

pub fn format_order_id(millis: i64) -> String {
  format!("VIP-{:06}", millis.rem_euclid(1_000_000))
}
