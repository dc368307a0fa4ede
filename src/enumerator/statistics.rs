// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters recording how much work the enumerator has done. They are
//! bumped internally by each enumeration step and exposed read-only;
//! they never influence the sequence itself.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The counters tracked by the enumerator.
#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// Numbers popped from the frontier and returned to the caller.
    Emitted,
    /// Candidates pushed onto the frontier (first sighting of a vector).
    Enqueued,
    /// Candidates skipped because their vector was already in the
    /// visited set (reached earlier via a different parent).
    DuplicatesSkipped,
}

/// Fixed array of counters, indexed by [`Counters`].
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::Emitted), 0);
        assert_eq!(stats.get(Counters::Enqueued), 0);
        assert_eq!(stats.get(Counters::DuplicatesSkipped), 0);
    }

    #[test]
    fn test_increment() {
        let mut stats = Statistics::new();
        stats.increment(Counters::Enqueued);
        stats.increment(Counters::Enqueued);
        stats.increment(Counters::Emitted);
        assert_eq!(stats.get(Counters::Enqueued), 2);
        assert_eq!(stats.get(Counters::Emitted), 1);
        assert_eq!(stats.get(Counters::DuplicatesSkipped), 0);
    }
}
