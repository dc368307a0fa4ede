// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The prime basis: the fixed, ordered set of allowed prime factors.
//!
//! Every exponent vector and smooth number in the crate is interpreted
//! relative to one [`PrimeBasis`]. The basis is validated once, at
//! construction, and is immutable afterwards, so the rest of the crate
//! never has to re-check it.
//!
//! Validation is deliberately strict: the basis is exposed on the command
//! line, and a composite or repeated element would silently break the
//! enumeration (two distinct exponent vectors could then share a value,
//! and the heap ordering would no longer be duplicate-free).

use crate::enumerator::EnumeratorError;

/// The default basis: all primes below 20.
///
/// "Not divisible by any prime greater than 20" is equivalent to "has a
/// prime factorization containing only these eight primes".
pub const DEFAULT_PRIMES: [u64; 8] = [2, 3, 5, 7, 11, 13, 17, 19];

/// An ordered, validated, immutable sequence of distinct primes.
///
/// The basis fixes the dimensionality of every [`ExponentVector`]: index
/// `i` of a vector is the exponent of `basis.prime(i)`.
///
/// [`ExponentVector`]: crate::number::ExponentVector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeBasis {
    primes: Vec<u64>,
}

impl PrimeBasis {
    /// Create a basis from the given primes, preserving their order.
    ///
    /// # Errors
    ///
    /// - [`EnumeratorError::EmptyBasis`] if `primes` is empty.
    /// - [`EnumeratorError::NotPrime`] if any element is composite, 0 or 1.
    /// - [`EnumeratorError::DuplicatePrime`] if any element repeats.
    pub fn new(primes: Vec<u64>) -> Result<Self, EnumeratorError> {
        if primes.is_empty() {
            return Err(EnumeratorError::EmptyBasis);
        }
        for (i, &p) in primes.iter().enumerate() {
            if !is_prime(p) {
                return Err(EnumeratorError::NotPrime(p));
            }
            if primes[..i].contains(&p) {
                return Err(EnumeratorError::DuplicatePrime(p));
            }
        }
        Ok(Self { primes })
    }

    /// The default eight-prime basis {2, 3, 5, 7, 11, 13, 17, 19}.
    pub fn default_basis() -> Self {
        // DEFAULT_PRIMES is valid by inspection; the constructor cannot fail.
        Self {
            primes: DEFAULT_PRIMES.to_vec(),
        }
    }

    /// Number of primes in the basis (the exponent-vector dimensionality).
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Always false for a validated basis; derived from the data rather
    /// than hard-coded so it stays honest if validation ever changes.
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// The prime at basis index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn prime(&self, i: usize) -> u64 {
        self.primes[i]
    }

    /// All primes, in basis order.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }
}

impl Default for PrimeBasis {
    fn default() -> Self {
        Self::default_basis()
    }
}

/// Deterministic Miller-Rabin primality test for `u64`.
///
/// Basis primes are command-line input and may be anything up to
/// `u64::MAX`, so trial division is not an option (the square root of a
/// 64-bit prime is two billion candidate divisors). The witness set
/// {2, 325, 9375, 28178, 450775, 9780504, 1795265022} is known to be
/// exact for all 64-bit integers, so this is a proof, not a
/// probabilistic check.
fn is_prime(n: u64) -> bool {
    const SMALL_PRIMES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
    const WITNESSES: [u64; 7] = [2, 325, 9375, 28178, 450775, 9780504, 1795265022];

    if n < 2 {
        return false;
    }
    for p in SMALL_PRIMES {
        if n % p == 0 {
            return n == p;
        }
    }

    // n is odd and > 37. Write n - 1 = d * 2^s with d odd.
    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for a in WITNESSES {
        let a = a % n;
        if a == 0 {
            continue;
        }
        let mut x = mod_pow(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// `(a * b) % m` without overflow: the product is taken in `u128`.
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// `base^exp % m` by square-and-multiply.
fn mod_pow(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut acc = 1u64;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..25).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23]);
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(!is_prime(49));
        assert!(is_prime(97));
    }

    #[test]
    fn test_is_prime_large() {
        // Strong pseudoprime to bases 2, 3, 5 and 7
        assert!(!is_prime(3_215_031_751));
        // Carmichael number
        assert!(!is_prime(41_041));
        // u64::MAX = 3 * 5 * 17 * 257 * 641 * 65537 * 6700417
        assert!(!is_prime(u64::MAX));
        // The largest 64-bit prime
        assert!(is_prime(18_446_744_073_709_551_557));
        assert!(is_prime(4_294_967_291)); // largest 32-bit prime
        assert!(!is_prime(4_294_967_291 * 3)); // 12884901873
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(2, 10, 1_000_000), 1024);
        assert_eq!(mod_pow(2, 64, u64::MAX), 1); // 2^64 ≡ 1 (mod 2^64 - 1)
        assert_eq!(mod_pow(7, 0, 13), 1);
    }

    #[test]
    fn test_huge_prime_basis_element() {
        // Validation must accept primes anywhere in u64 range without
        // overflowing or stalling
        let basis = PrimeBasis::new(vec![2, 18_446_744_073_709_551_557]).unwrap();
        assert_eq!(basis.prime(1), 18_446_744_073_709_551_557);
        assert_eq!(
            PrimeBasis::new(vec![u64::MAX]).unwrap_err(),
            EnumeratorError::NotPrime(u64::MAX)
        );
    }

    #[test]
    fn test_default_basis() {
        let basis = PrimeBasis::default_basis();
        assert_eq!(basis.len(), 8);
        assert_eq!(basis.primes(), &DEFAULT_PRIMES);
        assert_eq!(basis.prime(0), 2);
        assert_eq!(basis.prime(7), 19);
    }

    #[test]
    fn test_new_preserves_order() {
        let basis = PrimeBasis::new(vec![5, 2, 3]).unwrap();
        assert_eq!(basis.primes(), &[5, 2, 3]);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            PrimeBasis::new(vec![]).unwrap_err(),
            EnumeratorError::EmptyBasis
        );
    }

    #[test]
    fn test_new_rejects_composite() {
        assert_eq!(
            PrimeBasis::new(vec![2, 3, 4]).unwrap_err(),
            EnumeratorError::NotPrime(4)
        );
        assert_eq!(
            PrimeBasis::new(vec![1]).unwrap_err(),
            EnumeratorError::NotPrime(1)
        );
    }

    #[test]
    fn test_new_rejects_duplicate() {
        assert_eq!(
            PrimeBasis::new(vec![2, 3, 2]).unwrap_err(),
            EnumeratorError::DuplicatePrime(2)
        );
    }
}
