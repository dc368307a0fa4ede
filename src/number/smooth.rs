// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A smooth number: an exponent vector plus its exact integer value.
//!
//! The value is derived from the exponents once, at construction, and
//! cached; it is never recomputed. Children of a frontier element are
//! built incrementally, with one multiplication by the incremented basis
//! prime, rather than by re-evaluating the whole product.
//!
//! All arithmetic is exact, unbounded-precision integer arithmetic
//! (`num::BigUint`); no overflow is possible and no floating point is
//! used in value computation or comparison.

use std::cmp::Ordering;

use num::{BigUint, One};

use crate::basis::PrimeBasis;
use crate::enumerator::EnumeratorError;
use crate::number::ExponentVector;

/// A positive integer whose factorization uses only basis primes.
///
/// Ordering, equality and hashing all go through the cached value. By
/// uniqueness of prime factorization, distinct exponent vectors over a
/// valid basis always have distinct values, so value ordering is total
/// over the numbers the enumerator produces and ties never arise.
#[derive(Debug, Clone)]
pub struct SmoothNumber {
    exponents: ExponentVector,
    value: BigUint,
}

impl SmoothNumber {
    /// The smooth number 1: the all-zero exponent vector.
    ///
    /// This is the unique seed of the enumeration.
    pub fn one(basis: &PrimeBasis) -> Self {
        Self {
            exponents: ExponentVector::zeros(basis.len()),
            value: BigUint::one(),
        }
    }

    /// Build a smooth number from explicit exponents, evaluating the full
    /// product Π basisᵢ^exponentsᵢ.
    ///
    /// This is the slow path; the enumerator itself only ever multiplies
    /// incrementally, one prime at a time. It is the honest way to
    /// cross-check a factorization, and tests rely on it.
    ///
    /// # Errors
    ///
    /// [`EnumeratorError::DimensionMismatch`] if the vector length does
    /// not equal the basis length. This can only arise from internal
    /// misuse, never through the enumerator, so callers should treat it
    /// as a programming error.
    pub fn from_exponents(
        basis: &PrimeBasis,
        exponents: ExponentVector,
    ) -> Result<Self, EnumeratorError> {
        if exponents.len() != basis.len() {
            return Err(EnumeratorError::DimensionMismatch {
                expected: basis.len(),
                actual: exponents.len(),
            });
        }
        let mut value = BigUint::one();
        for (i, &e) in exponents.exponents().iter().enumerate() {
            value *= BigUint::from(basis.prime(i)).pow(e);
        }
        Ok(Self { exponents, value })
    }

    /// The child with basis coordinate `i` incremented by one.
    ///
    /// The value is updated with a single multiplication by `basis.prime(i)`
    /// instead of a full recomputation over all exponents. The child gets a
    /// fresh exponent vector; the parent is not touched.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range for the basis.
    pub(crate) fn child(&self, basis: &PrimeBasis, i: usize) -> Self {
        Self {
            exponents: self.exponents.bumped(i),
            value: &self.value * basis.prime(i),
        }
    }

    /// The exact integer value.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The exponent vector (sole source of truth for the factorization).
    pub fn exponents(&self) -> &ExponentVector {
        &self.exponents
    }

    /// Consume the number, keeping only its value.
    pub fn into_value(self) -> BigUint {
        self.value
    }
}

impl PartialEq for SmoothNumber {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for SmoothNumber {}

impl PartialOrd for SmoothNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmoothNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one() {
        let basis = PrimeBasis::default_basis();
        let one = SmoothNumber::one(&basis);
        assert_eq!(one.value(), &BigUint::one());
        assert!(one.exponents().is_zero());
        assert_eq!(one.exponents().len(), 8);
    }

    #[test]
    fn test_from_exponents() {
        let basis = PrimeBasis::default_basis();
        // 2^3 * 3^1 * 19^2 = 8 * 3 * 361 = 8664
        let v = ExponentVector::from_exponents(vec![3, 1, 0, 0, 0, 0, 0, 2]);
        let n = SmoothNumber::from_exponents(&basis, v).unwrap();
        assert_eq!(n.value(), &BigUint::from(8664u32));
    }

    #[test]
    fn test_from_exponents_dimension_mismatch() {
        let basis = PrimeBasis::default_basis();
        let v = ExponentVector::zeros(3);
        assert_eq!(
            SmoothNumber::from_exponents(&basis, v).unwrap_err(),
            EnumeratorError::DimensionMismatch {
                expected: 8,
                actual: 3
            }
        );
    }

    #[test]
    fn test_child_incremental_value() {
        let basis = PrimeBasis::default_basis();
        let one = SmoothNumber::one(&basis);
        let two = one.child(&basis, 0);
        let six = two.child(&basis, 1);
        assert_eq!(two.value(), &BigUint::from(2u32));
        assert_eq!(six.value(), &BigUint::from(6u32));
        assert_eq!(six.exponents().exponents(), &[1, 1, 0, 0, 0, 0, 0, 0]);
        // Parent untouched
        assert_eq!(one.value(), &BigUint::one());
        assert!(one.exponents().is_zero());
    }

    #[test]
    fn test_child_matches_full_recomputation() {
        let basis = PrimeBasis::default_basis();
        let mut n = SmoothNumber::one(&basis);
        for i in [0, 3, 3, 7, 1, 0] {
            n = n.child(&basis, i);
        }
        let recomputed =
            SmoothNumber::from_exponents(&basis, n.exponents().clone()).unwrap();
        assert_eq!(n.value(), recomputed.value());
    }

    #[test]
    fn test_ordering_by_value() {
        let basis = PrimeBasis::default_basis();
        let one = SmoothNumber::one(&basis);
        let two = one.child(&basis, 0);
        let three = one.child(&basis, 1);
        assert!(one < two);
        assert!(two < three);
        assert_eq!(two.cmp(&three), Ordering::Less);
    }
}
