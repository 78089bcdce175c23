//! Round-robin selection.

use std::sync::atomic::{AtomicU64, Ordering};

/// Round-robin selector.
/// Stores an internal counter to rotate through a fixed list.
///
/// The counter only moves through a single `fetch_add`, so concurrent
/// callers never observe the same ticket and never block.
#[derive(Debug, Default)]
pub struct RoundRobin {
    counter: AtomicU64,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the next item.
    ///
    /// Lists with a single entry return it without advancing the counter.
    pub fn next<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        match items.len() {
            0 => None,
            1 => items.first(),
            len => {
                let ticket = self.counter.fetch_add(1, Ordering::Relaxed);
                items.get((ticket % len as u64) as usize)
            }
        }
    }

    /// Number of selections made so far.
    #[cfg(test)]
    pub(crate) fn position(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}
