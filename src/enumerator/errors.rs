// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the smooth-number enumerator.
//!
//! There are only two real failure classes, and neither is recoverable:
//!
//! - **Invalid configuration** (`EmptyBasis`, `NotPrime`, `DuplicatePrime`,
//!   `DimensionMismatch`, `ZeroRank`): detected at construction or at the
//!   call boundary, always a caller mistake, always fatal.
//! - **Internal consistency** (`ExhaustedFrontier`): the frontier can never
//!   drain for a non-empty basis (every popped number contributes at least
//!   one never-before-seen child), so hitting this is a defect in the
//!   enumerator itself, not a condition to recover from.
//!
//! There are no transient failures: the arithmetic is unbounded-precision
//! (no overflow) and the enumerator performs no I/O.

use thiserror::Error;

/// Errors produced by basis construction and the enumerator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumeratorError {
    /// The prime basis has no elements.
    #[error("prime basis is empty")]
    EmptyBasis,

    /// A basis element is not a prime number.
    #[error("basis element {0} is not prime")]
    NotPrime(u64),

    /// A basis element occurs more than once.
    #[error("basis element {0} occurs more than once")]
    DuplicatePrime(u64),

    /// An exponent vector's length does not match the basis length.
    /// Internal misuse; cannot arise through the public `next_number` path.
    #[error("exponent vector has {actual} components but the basis has {expected} primes")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A rank of 0 was requested; the sequence is 1-indexed.
    #[error("rank must be at least 1 (the sequence is 1-indexed)")]
    ZeroRank,

    /// The frontier was empty when a number was requested. Unreachable for
    /// any validated basis; reaching it means the enumerator is defective.
    #[error("frontier exhausted after {emitted} numbers; this is a bug in the enumerator")]
    ExhaustedFrontier { emitted: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EnumeratorError::EmptyBasis.to_string(),
            "prime basis is empty"
        );
        assert_eq!(
            EnumeratorError::NotPrime(15).to_string(),
            "basis element 15 is not prime"
        );
        assert_eq!(
            EnumeratorError::DimensionMismatch {
                expected: 8,
                actual: 2
            }
            .to_string(),
            "exponent vector has 2 components but the basis has 8 primes"
        );
        assert_eq!(
            EnumeratorError::ExhaustedFrontier { emitted: 42 }.to_string(),
            "frontier exhausted after 42 numbers; this is a bug in the enumerator"
        );
    }
}
