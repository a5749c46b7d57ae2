//! Id assignment for user-submitted products.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::model::ProductId;

/// Hands out time-based product ids (milliseconds since the epoch).
///
/// Ids are strictly increasing across calls, and each one is above the largest id
/// the caller reports as already present, so two submissions in the same
/// millisecond, or a clock behind the seeded ids, still get unique ids.
#[derive(Debug)]
pub struct ProductIdGenerator {
    last: AtomicU64,
    clock: fn() -> u64,
}

impl Default for ProductIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductIdGenerator {
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    /// A generator reading time from `clock`.
    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self {
            last: AtomicU64::new(0),
            clock,
        }
    }

    /// Next id, greater than every id issued before and than `existing_max`.
    pub fn next(&self, existing_max: Option<ProductId>) -> ProductId {
        let floor = existing_max.map_or(0, |id| id.0.saturating_add(1));
        let candidate = (self.clock)().max(floor);
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(candidate.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        ProductId(candidate.max(previous.saturating_add(1)))
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
