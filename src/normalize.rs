//! Reduction of raw numerator/denominator pairs to canonical form
//!
//! Arithmetic cross-multiplies in `i128` so that no product of two `i64`
//! operands can overflow. The helpers here take those widened values,
//! reduce them and narrow the result back to `i64`.

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(0, n) == n` and `gcd(n, 0) == n`, so `gcd(0, 0) == 0`. The sign of
/// the result follows the remainder sequence and is not forced positive;
/// callers fix the sign up after dividing.
pub(crate) fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        // `wrapping_rem` only differs from `%` for `i128::MIN % -1`, where the
        // mathematical remainder is 0 anyway.
        (a, b) = (b, a.wrapping_rem(b));
    }
    a
}

/// Reduce `numerator/denominator` to lowest terms with a positive denominator.
///
/// A zero denominator always yields the canonical NaN pair `(0, 0)`.
/// Returns `None` when the reduced pair does not fit in `i64`.
pub(crate) fn normalize(numerator: i128, denominator: i128) -> Option<(i64, i64)> {
    if denominator == 0 {
        return Some((0, 0));
    }

    // Non-zero because the denominator is non-zero.
    let divisor = gcd(numerator, denominator);
    let mut numerator = numerator.checked_div(divisor)?;
    let mut denominator = denominator.checked_div(divisor)?;

    if denominator < 1 {
        numerator = numerator.checked_neg()?;
        denominator = denominator.checked_neg()?;
    }

    Some((
        i64::try_from(numerator).ok()?,
        i64::try_from(denominator).ok()?,
    ))
}
