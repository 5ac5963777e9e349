//! Creation bookkeeping for aliens.
//!
//! Every [`Alien`](crate::Alien) records itself in [`ALIENS_CREATED`] when it
//! is built. The count only ever grows, except through an explicit
//! [`reset_aliens_created`] used to isolate tests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic tally of constructed entities.
#[derive(Debug, Default)]
pub struct CreationCounter {
    total: AtomicU64,
}

impl CreationCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: AtomicU64::new(0),
        }
    }

    /// Records one construction and returns the updated total.
    pub fn record(&self) -> u64 {
        self.total.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of constructions recorded since creation or the last reset.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Sets the tally back to zero.
    pub fn reset(&self) {
        self.total.store(0, Ordering::Relaxed);
    }
}

/// Process-wide count of every alien ever constructed.
pub static ALIENS_CREATED: CreationCounter = CreationCounter::new();

/// Returns how many aliens have been constructed in this process.
#[must_use]
pub fn aliens_created() -> u64 {
    ALIENS_CREATED.total()
}

/// Zeroes the process-wide alien tally.
///
/// Only meant for test isolation; callers relying on exact counts afterwards
/// must not race other constructors.
pub fn reset_aliens_created() {
    ALIENS_CREATED.reset();
}
