// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Value types for smooth numbers.
//!
//! - [`ExponentVector`]: one exponent per basis prime, with structural
//!   equality and hashing (the visited-set key).
//! - [`SmoothNumber`]: an exponent vector paired with its exact
//!   arbitrary-precision value (the frontier element, ordered by value).

pub mod exponents;
pub mod smooth;

// Re-export for convenience
pub use exponents::ExponentVector;
pub use smooth::SmoothNumber;
