//! Search-space size and worst-case guessing time.

use num_bigint::BigUint;

/// Counts above `2^OVERFLOW_BITS` are past `f64::MAX` with room to spare
/// for `log2` error.
const OVERFLOW_BITS: f64 = 1026.0;

/// Seconds needed to try every password of `length` characters drawn from
/// `alphabet_size` symbols at `rate` guesses per second.
///
/// Exhaustive worst case, no averaging. Very long passwords overflow to
/// `f64::INFINITY`, which the formatter reports as incalculable.
///
/// The count is rounded to `f64` once, from its exact value.
pub fn estimate(length: usize, alphabet_size: usize, rate: f64) -> f64 {
    if length == 0 {
        return 0.0;
    }
    if alphabet_size > 1 && (alphabet_size as f64).log2() * length as f64 > OVERFLOW_BITS {
        return f64::INFINITY;
    }
    let count = combinations(length, alphabet_size)
        .to_str_radix(10)
        .parse::<f64>()
        .unwrap_or(f64::INFINITY);
    count / rate
}

/// Exact number of candidate passwords, `alphabet_size ^ length`.
pub fn combinations(length: usize, alphabet_size: usize) -> BigUint {
    let exponent = u32::try_from(length).unwrap_or(u32::MAX);
    BigUint::from(alphabet_size).pow(exponent)
}

/// Insert `,` between every group of three digits: `1234567` -> `1,234,567`.
pub fn group_digits(value: &BigUint) -> String {
    let s = value.to_str_radix(10);
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
