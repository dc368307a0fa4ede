// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Result formatting for the driver.
//!
//! The output contract is fixed (and covered by tests): the decimal value
//! on its own line, then the factorization as `(2^e0 * 3^e1 * ... )` in
//! basis order, then the elapsed time in milliseconds. The rank is
//! rendered with thousands separators and an English ordinal suffix, as
//! in "The 1,000,000th number is:".

use crate::basis::PrimeBasis;
use crate::number::ExponentVector;

/// Render a rank with thousands separators and an ordinal suffix:
/// 1 → "1st", 42 → "42nd", 1_000_000 → "1,000,000th".
pub fn ordinal(rank: u64) -> String {
    let digits = group_digits(rank);
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", digits, suffix)
}

/// Insert thousands separators: 1234567 → "1,234,567".
pub fn group_digits(n: u64) -> String {
    let raw = n.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    let lead = raw.len() % 3;
    for (i, c) in raw.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render a factorization in basis order: `2^9 * 3^3 * ... * 19^0`.
///
/// Every basis prime appears, including those with exponent zero; the
/// exponent vector is the full factorization, so the output is too.
pub fn factorization(basis: &PrimeBasis, exponents: &ExponentVector) -> String {
    let mut out = String::new();
    for (i, &p) in basis.primes().iter().enumerate() {
        if i != 0 {
            out.push_str(" * ");
        }
        out.push_str(&format!("{}^{}", p, exponents.exponent(i)));
    }
    out
}
