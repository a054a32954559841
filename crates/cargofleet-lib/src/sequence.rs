//! Injectable number sequences used for container serials and ship names.
//!
//! Identifiers only need to be unique within the lifetime of a sequence, so
//! callers own the sequence and pass it to constructors. Tests build a fresh
//! [`Counter`] (optionally seeded) instead of relying on hidden global state.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of monotonically increasing identifiers.
pub trait Sequence {
    /// Return the next value and advance the sequence.
    fn next_value(&self) -> u64;
}

/// Thread-safe counter starting at 1 unless seeded otherwise.
#[derive(Debug)]
pub struct Counter {
    next: AtomicU64,
}

impl Counter {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a counter whose first value is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Value the next call to [`Sequence::next_value`] will return.
    #[cfg(test)]
    pub(crate) fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequence for Counter {
    fn next_value(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
