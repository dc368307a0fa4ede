// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The smooth-number enumerator.
//!
//! This module implements the core algorithm: a lazy, duplicate-free
//! enumeration of smooth numbers in strictly increasing order, using a
//! min-heap frontier of candidates plus a visited set of exponent vectors.
//!
//! # Algorithm
//!
//! The enumerator is seeded with the number 1 (the all-zero exponent
//! vector). Each call to [`SmoothEnumerator::next_number`]:
//!
//! 1. Pops the minimum-value candidate from the frontier.
//! 2. For each basis coordinate `i`, forms the child vector with
//!    coordinate `i` incremented by one. If that vector has never been
//!    seen, it is recorded in the visited set and its number (parent
//!    value × basis prime, one multiplication) is pushed onto the
//!    frontier.
//! 3. Returns the popped number.
//!
//! # Invariants
//!
//! - The visited set contains the vector of every number ever pushed
//!   onto the frontier, popped or not.
//! - The frontier is exactly the boundary of the emitted region: vectors
//!   one increment away from an emitted vector, not yet emitted.
//! - Pop order is the smooth-number sequence: strictly increasing, no
//!   gaps, no repeats.
//!
//! The frontier can never drain: incrementing any coordinate of the
//! largest frontier element always yields a vector no earlier pop can
//! have visited, so every pop pushes at least one child whenever the
//! enumeration is still ahead of it. An empty frontier is therefore
//! reported as a defect ([`EnumeratorError::ExhaustedFrontier`]), never
//! silently worked around.
//!
//! # Concurrency
//!
//! Strictly single-threaded. `next_number` takes `&mut self`, so safe
//! Rust already rules out unsynchronized concurrent advancement; callers
//! that want to share an enumerator must wrap it in a lock.

pub mod errors;
pub mod statistics;

pub use errors::EnumeratorError;
pub use statistics::{Counters, Statistics};

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, trace};

use crate::basis::PrimeBasis;
use crate::number::{ExponentVector, SmoothNumber};

/// Produces smooth numbers over a fixed basis, smallest first, on demand.
///
/// Construction requires an already-validated [`PrimeBasis`], so an
/// enumerator over an empty or malformed basis cannot exist. Two
/// enumerators built from the same basis yield identical sequences.
#[derive(Debug)]
pub struct SmoothEnumerator {
    /// The fixed, ordered prime basis (read-only).
    basis: PrimeBasis,

    /// Min-heap of not-yet-emitted candidates, ordered by value.
    /// Ties cannot occur: distinct exponent vectors over distinct primes
    /// always have distinct values.
    frontier: BinaryHeap<Reverse<SmoothNumber>>,

    /// Every exponent vector ever pushed onto the frontier. Grows
    /// monotonically; the de-duplication contract requires the full
    /// history, so nothing is ever evicted.
    visited: HashSet<ExponentVector>,

    /// Count of numbers returned so far.
    emitted: u64,

    /// Work counters (emitted / enqueued / duplicates skipped).
    statistics: Statistics,
}

impl SmoothEnumerator {
    /// Create an enumerator seeded with the number 1.
    pub fn new(basis: PrimeBasis) -> Self {
        let one = SmoothNumber::one(&basis);
        let mut visited = HashSet::new();
        visited.insert(one.exponents().clone());
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse(one));

        debug!(primes = ?basis.primes(), "seeded enumerator with 1");

        Self {
            basis,
            frontier,
            visited,
            emitted: 0,
            statistics: Statistics::new(),
        }
    }

    /// Produce the next smooth number in ascending order.
    ///
    /// Each call advances the enumeration by exactly one number. The
    /// first call returns 1, the second returns the smallest basis
    /// prime, and so on with no gaps and no repeats.
    ///
    /// # Errors
    ///
    /// [`EnumeratorError::ExhaustedFrontier`] if the frontier is empty.
    /// This cannot happen for a validated basis; see the module docs.
    pub fn next_number(&mut self) -> Result<SmoothNumber, EnumeratorError> {
        let Reverse(current) = self
            .frontier
            .pop()
            .ok_or(EnumeratorError::ExhaustedFrontier {
                emitted: self.emitted,
            })?;

        for i in 0..self.basis.len() {
            let child = current.child(&self.basis, i);
            if self.visited.contains(child.exponents()) {
                self.statistics.increment(Counters::DuplicatesSkipped);
                continue;
            }
            self.visited.insert(child.exponents().clone());
            self.frontier.push(Reverse(child));
            self.statistics.increment(Counters::Enqueued);
        }

        self.emitted += 1;
        self.statistics.increment(Counters::Emitted);
        trace!(
            rank = self.emitted,
            frontier = self.frontier.len(),
            visited = self.visited.len(),
            "emitted smooth number"
        );
        Ok(current)
    }

    /// Advance the enumeration to `rank` and return the rank-th number
    /// (1-indexed: `nth(1)` is 1).
    ///
    /// Ranks are counted from the enumerator's current position, so
    /// consecutive calls continue the sequence rather than restarting it.
    ///
    /// # Errors
    ///
    /// [`EnumeratorError::ZeroRank`] if `rank` is 0, and anything
    /// `next_number` can return.
    pub fn nth(&mut self, rank: u64) -> Result<SmoothNumber, EnumeratorError> {
        if rank == 0 {
            return Err(EnumeratorError::ZeroRank);
        }
        let mut current = self.next_number()?;
        for _ in 1..rank {
            current = self.next_number()?;
        }
        debug!(
            emitted = self.emitted,
            frontier = self.frontier.len(),
            visited = self.visited.len(),
            enqueued = self.statistics.get(Counters::Enqueued),
            duplicates_skipped = self.statistics.get(Counters::DuplicatesSkipped),
            "enumeration state"
        );
        Ok(current)
    }

    /// The basis this enumerator runs over.
    pub fn basis(&self) -> &PrimeBasis {
        &self.basis
    }

    /// How many numbers have been emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Current frontier size (the boundary of the emitted region).
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Total distinct exponent vectors seen (emitted + frontier).
    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Work counters.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

/// The enumeration as an iterator.
///
/// The sequence is infinite for any validated basis, so `next` only
/// returns `None` if the internal frontier invariant is broken; the
/// `Result`-returning [`SmoothEnumerator::next_number`] is the surface
/// that distinguishes that defect.
impl Iterator for SmoothEnumerator {
    type Item = SmoothNumber;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_number().ok()
    }
}
