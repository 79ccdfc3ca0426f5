//! Square-and-multiply exponentiation and the per-worker kernel body

use crate::mulmod::mul_mod;

/// Sequential square-and-multiply: `base^exponent mod modulus`.
///
/// This is the reference semantics every parallel backend must reproduce
/// bit-for-bit. Exponent bits are consumed least-significant first; the
/// running base is squared once per bit position.
///
/// Degenerate inputs follow the usual conventions: `pow_mod(b, 0, m)` is
/// `1 mod m` (so 0 when `m == 1`), and `pow_mod(0, e, m)` is 0 for `e > 0`.
///
/// # Panics
///
/// Panics if `modulus == 0` (see [`mul_mod`](crate::mul_mod)).
pub const fn pow_mod(base: u64, exponent: u64, modulus: u64) -> u64 {
    let mut base = base % modulus;
    let mut exponent = exponent;
    let mut result = 1 % modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        exponent >>= 1;
        base = mul_mod(base, base, modulus);
    }
    result
}

/// Partial product over one worker's assigned bit positions.
///
/// This is the kernel body each worker runs with purely private state. For
/// every assigned index `i` (visited in ascending order) the worker derives
/// `base^(2^i) mod modulus` by replaying the squaring chain forward from the
/// original `base`, and multiplies it into a local accumulator when bit `i`
/// of `exponent` is set. The modular product of all workers' outputs equals
/// [`pow_mod`] for any partition that covers each index exactly once.
///
/// The squaring chain is re-derived per worker rather than threaded between
/// workers: restarting the local base at `base` and squaring up to each
/// owned index is correct for every partition shape, where carrying a shared
/// running square is only correct for contiguous-prefix splits.
///
/// `indices` must yield strictly ascending values below
/// [`EXPONENT_BITS`](crate::EXPONENT_BITS); partitions uphold this by
/// construction and it is checked in debug builds.
///
/// # Panics
///
/// Panics if `modulus == 0`.
pub fn partial_product<I>(base: u64, exponent: u64, modulus: u64, indices: I) -> u64
where
    I: IntoIterator<Item = u32>,
{
    let mut local_base = base % modulus;
    let mut local_result = 1 % modulus;
    let mut position = 0u32;
    for index in indices {
        debug_assert!(index < u64::BITS, "bit index {index} out of range");
        debug_assert!(
            index >= position,
            "bit indices must be visited in ascending order"
        );
        while position < index {
            local_base = mul_mod(local_base, local_base, modulus);
            position += 1;
        }
        if exponent >> index & 1 == 1 {
            local_result = mul_mod(local_result, local_base, modulus);
        }
    }
    local_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::Partition;

    #[test]
    fn test_known_values() {
        assert_eq!(pow_mod(2, 10, 1_000_000), 1024);
        assert_eq!(pow_mod(2, 8, 10), 6);
        assert_eq!(pow_mod(5, 2, 25), 0);
        // Fermat: 3^(p-1) ≡ 1 (mod p) for prime p
        assert_eq!(pow_mod(3, 16, 17), 1);
        // 5^117 = 1 (mod 19): the classic smoke-test triple
        assert_eq!(pow_mod(5, 117, 19), 1);
    }

    #[test]
    fn test_degenerate_exponent() {
        assert_eq!(pow_mod(12345, 0, 67), 1);
        assert_eq!(pow_mod(12345, 0, 1), 0);
    }

    #[test]
    fn test_zero_base() {
        assert_eq!(pow_mod(0, 5, 97), 0);
        assert_eq!(pow_mod(0, 0, 97), 1);
    }

    #[test]
    fn test_large_operands() {
        // 2^63 mod (2^61 - 1): 2^61 ≡ 1, so 2^63 ≡ 4
        let mersenne61 = (1u64 << 61) - 1;
        assert_eq!(pow_mod(2, 63, mersenne61), 4);
        assert_eq!(pow_mod(u64::MAX, 2, u64::MAX - 1), 1);
    }

    #[test]
    fn test_full_range_partial_equals_pow_mod() {
        // A single worker owning every index is exactly square-and-multiply.
        for &(base, exponent, modulus) in &[(5u64, 117u64, 19u64), (7, u64::MAX, 1_000_003), (2, 64, 97)] {
            let full = partial_product(base, exponent, modulus, 0..u64::BITS);
            assert_eq!(full, pow_mod(base, exponent, modulus));
        }
    }

    #[test]
    fn test_partials_recombine_for_every_split() {
        let cases = [
            (5u64, 117u64, 19u64),
            (0, 12, 7),
            (123_456_789, 987_654_321, 1_000_000_007),
            (u64::MAX, u64::MAX, (1 << 61) - 1),
        ];
        for &(base, exponent, modulus) in &cases {
            let expected = pow_mod(base, exponent, modulus);
            for partition in [Partition::Striped, Partition::Blocked] {
                for workers in [1u32, 2, 3, 4, 8, 64] {
                    let combined = (0..workers)
                        .map(|w| partial_product(base, exponent, modulus, partition.indices(w, workers)))
                        .fold(1 % modulus, |acc, p| mul_mod(acc, p, modulus));
                    assert_eq!(
                        combined, expected,
                        "{partition}/{workers} drifted from reference for ({base}, {exponent}, {modulus})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_index_set_is_multiplicative_identity() {
        assert_eq!(partial_product(5, 117, 19, std::iter::empty()), 1);
        assert_eq!(partial_product(5, 117, 1, std::iter::empty()), 0);
    }
}
