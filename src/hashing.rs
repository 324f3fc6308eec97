//! Polynomial rolling hash used to address buckets.
//!
//! The key is treated as the coefficients of a polynomial in [`PRIME_MULTIPLIER`], evaluated
//! with Horner's rule. Reduction happens after every step, so intermediate values stay below
//! the modulus and the resulting index depends on the bucket count it was computed for.

use std::num::NonZeroUsize;

/// Multiplier of the rolling hash.
pub const PRIME_MULTIPLIER: u128 = 31;

/// Maps `key` into `[0, modulus)`.
///
/// Character codes are the UTF-16 code units of the key.
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use chained_table::hashing::polynomial_index;
///
/// let sixteen = NonZeroUsize::new(16).unwrap();
/// assert_eq!(polynomial_index("a", sixteen), 97 % 16);
/// ```
#[must_use]
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub fn polynomial_index(key: &str, modulus: NonZeroUsize) -> usize {
    // `usize` is at most 128 bits wide on every supported target, and `hash < modulus` holds
    // after every step, so `PRIME_MULTIPLIER * hash + unit` cannot overflow `u128` and the
    // final cast back to `usize` is lossless.
    let modulus = modulus.get() as u128;
    let hash = key
        .encode_utf16()
        .fold(0_u128, |hash, unit| (PRIME_MULTIPLIER * hash + u128::from(unit)) % modulus);
    hash as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn modulus(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap_or(NonZeroUsize::MIN)
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(polynomial_index("", modulus(16)), 0);
    }

    #[test]
    fn test_known_values() {
        // (31 * 1 + 98) % 16
        assert_eq!(polynomial_index("ab", modulus(16)), 1);
        // 'd' = 100 -> 4, (31 * 4 + 'o' = 111) % 16 = 11, (31 * 11 + 'g' = 103) % 16 = 12
        assert_eq!(polynomial_index("dog", modulus(16)), 12);
        assert_eq!(polynomial_index("anything", modulus(1)), 0);
    }

    #[test]
    fn test_depends_on_modulus() {
        assert_eq!(polynomial_index("a", modulus(16)), 1);
        assert_eq!(polynomial_index("a", modulus(32)), 1);
        assert_eq!(polynomial_index("a", modulus(64)), 33);
    }

    #[test]
    fn test_uses_utf16_code_units() {
        // U+1F600 encodes as the surrogate pair 0xD83D 0xDE00.
        let expected = (31 * (0xD83D % 1000) + 0xDE00) % 1000;
        assert_eq!(polynomial_index("\u{1F600}", modulus(1000)), expected);
    }

    #[test]
    fn test_huge_modulus() {
        let index = polynomial_index("overflow check", modulus(usize::MAX));
        assert!(index < usize::MAX);
    }

    proptest! {
        #[test]
        fn index_is_in_range(key in ".*", size in 1_usize..10_000) {
            prop_assert!(polynomial_index(&key, modulus(size)) < size);
        }
    }
}
