// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use smooth_search::PrimeBasis;

/// Brute-force generator: every product of basis-prime powers up to
/// `limit`, sorted ascending.
///
/// Deliberately structured nothing like the enumerator under test (no
/// heap, no visited set): for each prime in turn, every number found so
/// far is multiplied by successive powers of that prime while it stays
/// under the limit. Unique factorization guarantees no duplicates.
pub fn smooth_numbers_up_to(primes: &[u64], limit: u128) -> Vec<u128> {
    let mut found: Vec<u128> = vec![1];
    for &p in primes {
        let mut extended = Vec::new();
        for &v in &found {
            let mut m = v;
            loop {
                m = match m.checked_mul(p as u128) {
                    Some(m) if m <= limit => m,
                    _ => break,
                };
                extended.push(m);
            }
        }
        found.extend(extended);
    }
    found.sort_unstable();
    found
}

/// A small basis for exhaustive cross-checks.
pub fn four_prime_basis() -> PrimeBasis {
    PrimeBasis::new(vec![2, 3, 5, 7]).unwrap()
}
