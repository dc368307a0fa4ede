// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ordered enumeration of smooth numbers over a fixed prime basis.
//!
//! A *smooth number* (for our purposes) is a positive integer whose prime
//! factorization uses only primes drawn from a fixed, ordered basis; the
//! default basis is {2, 3, 5, 7, 11, 13, 17, 19}, i.e. "no prime factor
//! greater than 20". This is the classic Hamming/regular-number problem
//! generalized from three primes to eight.
//!
//! # Architecture
//!
//! The crate is a thin shell around one algorithm:
//!
//! - [`PrimeBasis`]: the validated, immutable, ordered set of allowed
//!   primes. Constructing one is the only fallible configuration step;
//!   every other type builds on an already-valid basis.
//! - [`ExponentVector`]: one exponent per basis prime, with structural
//!   equality and hashing. The all-zero vector represents the value 1.
//! - [`SmoothNumber`]: an exponent vector paired with its exact
//!   arbitrary-precision value, ordered by value.
//! - [`SmoothEnumerator`]: the core: a min-heap frontier of candidate
//!   numbers plus a visited set of exponent vectors. Each step pops the
//!   smallest candidate, pushes its not-yet-seen successors (one exponent
//!   incremented by one), and yields the popped number. Pop order is
//!   exactly the smooth-number sequence: strictly increasing, no gaps,
//!   no repeats.
//!
//! The `smooth` binary drives the enumerator to a requested rank
//! (1,000,000 by default) and reports the value, its factorization, and
//! the elapsed wall-clock time.
//!
//! # Why a priority queue
//!
//! The two- and three-prime Hamming sequences are usually produced with
//! explicit merge pointers, one per prime. With eight primes the pointer
//! bookkeeping becomes error-prone; a frontier heap generalizes to any
//! basis size, and the visited set (keyed on exponent vectors, not on
//! values) prevents the same number from being enqueued via two different
//! parents without ever comparing big integers for equality.

pub mod basis;
pub mod enumerator;
pub mod number;
pub mod report;

// Re-export commonly used types
pub use basis::PrimeBasis;
pub use enumerator::{EnumeratorError, SmoothEnumerator};
pub use number::{ExponentVector, SmoothNumber};
