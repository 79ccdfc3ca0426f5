//! Widening modular multiplication

/// Computes `(a * b) mod m` exactly for all 64-bit operands.
///
/// The product is formed in 128 bits before reduction, so there is no
/// overflow even when `a` and `b` are both `2^64 - 1`.
///
/// # Panics
///
/// Panics if `m == 0`. A zero modulus is a precondition violation, not a
/// recoverable condition: the kernel layers reject it before any arithmetic
/// runs, and this function fails fast rather than returning a defined-but-
/// wrong value.
#[inline]
pub const fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}
