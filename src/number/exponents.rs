// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exponent vectors: the factorization half of a smooth number.
//!
//! An exponent vector assigns a non-negative exponent to each basis prime,
//! by position. Two vectors are equal iff every component matches; the
//! comparison is positional, not multiset. The all-zero vector represents
//! the value 1 and seeds the enumeration.
//!
//! Vectors are immutable once built. Candidate generation goes through
//! [`ExponentVector::bumped`], which allocates a fresh vector rather than
//! mutating in place, so a candidate can never alias the storage of a
//! vector already held by the frontier or the visited set.

use std::fmt;

/// An ordered sequence of per-prime exponents.
///
/// Derived `Eq` and `Hash` give the structural, order-sensitive semantics
/// the visited set needs; no object identity is involved anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExponentVector(Box<[u32]>);

impl ExponentVector {
    /// The all-zero vector of dimension `len` (the number 1).
    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len].into_boxed_slice())
    }

    /// Build a vector from explicit exponents.
    pub fn from_exponents(exponents: Vec<u32>) -> Self {
        Self(exponents.into_boxed_slice())
    }

    /// Dimensionality (must equal the basis length to be meaningful).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-dimensional vector.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The exponent at basis index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn exponent(&self, i: usize) -> u32 {
        self.0[i]
    }

    /// All exponents, in basis order.
    pub fn exponents(&self) -> &[u32] {
        &self.0
    }

    /// True iff every component is zero (the vector for the value 1).
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// A fresh vector equal to `self` with component `i` incremented by 1.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn bumped(&self, i: usize) -> Self {
        assert!(i < self.0.len(), "exponent index out of range: {}", i);
        let mut exponents = self.0.to_vec();
        exponents[i] += 1;
        Self(exponents.into_boxed_slice())
    }
}

impl fmt::Display for ExponentVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, e) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, ")")
    }
}
