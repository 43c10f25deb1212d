//! Floor-semantics integer division.
//!
//! Native `/` and `%` truncate toward zero; every calendar computation in
//! this crate instead needs rounding toward negative infinity so that
//! pre-epoch (negative) timestamps land in the correct day, era and
//! fractional remainder.

/// Divides `dividend` by `divisor`, rounding toward negative infinity.
///
/// Differs from `/` whenever the operands disagree in sign and the
/// division is inexact: `floor_div(-1, 86400)` is `-1`, while
/// `-1 / 86400` is `0`.
///
/// `divisor` must be non-zero. Every call site in this crate passes a
/// positive compile-time constant (a power of ten or a seconds-per-unit
/// value).
#[inline]
pub const fn floor_div(dividend: i64, divisor: i64) -> i64 {
    let quot = dividend / divisor;
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        quot - 1
    } else {
        quot
    }
}

/// Remainder matching [`floor_div`]: the unique value in `[0, divisor)`
/// congruent to `dividend` modulo `divisor`, for positive `divisor`.
///
/// Unlike `%`, never negative: `unsigned_mod(-1, 1000)` is `999`.
#[inline]
pub const fn unsigned_mod(dividend: i64, divisor: i64) -> i64 {
    dividend - floor_div(dividend, divisor) * divisor
}
