//! Date-add dispatch, sub-second precision adaptation and null-sentinel
//! propagation.

use crate::calendar::MonthDaySecond;
use crate::field::DateAddField;
use crate::floor_math::{floor_div, unsigned_mod};
use crate::{
    MONTHS_PER_CENTURY, MONTHS_PER_DECADE, MONTHS_PER_MILLENNIUM, MONTHS_PER_QUARTER,
    MONTHS_PER_YEAR, SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE, SECS_PER_WEEK,
};

/// Value returned by [`SentinelFatal`] when dispatch reaches an invalid
/// field on a device target.
///
/// `-1` is itself a representable timestamp (1969-12-31T23:59:59Z), so
/// callers must treat it as "cannot occur for valid input" rather than a
/// legitimate result. It stays `-1` for compatibility with the engine's
/// device-side contract.
pub const DEVICE_FATAL_SENTINEL: i64 = -1;

/// Scale factors for fixed-point sub-second timestamps. Populated only at
/// the valid precision dimensions 0, 3, 6 and 9.
const POW10: [i64; 10] = [1, 0, 0, 1_000, 0, 0, 1_000_000, 0, 0, 1_000_000_000];

/// How the dispatcher reports a field that is invalid for its entry point.
///
/// These kernels compile both as ordinary host code and into device-side
/// generated plans. A sub-second field reaching the whole-second
/// dispatcher means the upstream codegen emitted a broken plan: on the
/// host the only safe response is to stop before fabricating query
/// results, while a device kernel cannot terminate the process and
/// signals with a sentinel instead. The divergence between the two
/// targets is deliberate; do not unify it.
pub trait FatalStrategy {
    /// Called when dispatch reaches a field with no valid delta.
    fn invalid_field(field: DateAddField) -> i64;
}

/// Host-target strategy: panics. The engine builds its runtime with
/// `panic = "abort"`, so this terminates the process.
pub struct AbortFatal;

impl FatalStrategy for AbortFatal {
    fn invalid_field(field: DateAddField) -> i64 {
        panic!("date_add dispatched on invalid field '{field}'");
    }
}

/// Device-target strategy: returns [`DEVICE_FATAL_SENTINEL`].
pub struct SentinelFatal;

impl FatalStrategy for SentinelFatal {
    fn invalid_field(_field: DateAddField) -> i64 {
        DEVICE_FATAL_SENTINEL
    }
}

/// Adds `number` units of `field` to an epoch-second timestamp.
///
/// Fixed-length units are a single multiply-add; calendar-length units go
/// through the [`MonthDaySecond`] triple so that day-of-month clamping
/// follows the deferred rule. Sub-second fields take the `F` fatal path.
///
/// Overflow of the intermediate products is the caller's responsibility,
/// as with all kernels in this crate.
pub fn date_add_with<F: FatalStrategy>(field: DateAddField, number: i64, timeval: i64) -> i64 {
    match field {
        DateAddField::Second => timeval + number,
        DateAddField::Minute => timeval + number * SECS_PER_MINUTE,
        DateAddField::Hour => timeval + number * SECS_PER_HOUR,
        DateAddField::Day | DateAddField::WeekDay | DateAddField::DayOfYear => {
            timeval + number * SECS_PER_DAY
        }
        DateAddField::Week => timeval + number * SECS_PER_WEEK,
        DateAddField::Month => MonthDaySecond::new(timeval).add_months(number).unixtime(),
        DateAddField::Quarter => MonthDaySecond::new(timeval)
            .add_months(number * MONTHS_PER_QUARTER)
            .unixtime(),
        DateAddField::Year => MonthDaySecond::new(timeval)
            .add_months(number * MONTHS_PER_YEAR)
            .unixtime(),
        DateAddField::Decade => MonthDaySecond::new(timeval)
            .add_months(number * MONTHS_PER_DECADE)
            .unixtime(),
        DateAddField::Century => MonthDaySecond::new(timeval)
            .add_months(number * MONTHS_PER_CENTURY)
            .unixtime(),
        DateAddField::Millennium => MonthDaySecond::new(timeval)
            .add_months(number * MONTHS_PER_MILLENNIUM)
            .unixtime(),
        DateAddField::Milli | DateAddField::Micro | DateAddField::Nano => F::invalid_field(field),
    }
}

/// Host-target date-add over an epoch-second timestamp.
pub fn date_add(field: DateAddField, number: i64, timeval: i64) -> i64 {
    date_add_with::<AbortFatal>(field, number, timeval)
}

/// Adds `number` units of `field` to a fixed-point timestamp carrying
/// `dim` fractional decimal digits. The result keeps the input precision.
///
/// For sub-second fields the added quantity is rescaled by the gap
/// between `dim` and the field's own digit count, floor-dividing when the
/// timestamp is coarser than the unit. For whole-second-and-larger fields
/// the timestamp is split into integer seconds and a fractional remainder
/// (always in `[0, scale)`, including for negative timestamps); the
/// remainder passes through the addition unmodified.
///
/// `dim` must be one of 0, 3, 6 or 9: the scale table is only populated
/// at those indices, and other values are a precondition violation rather
/// than a defended contract.
pub fn date_add_high_precision_with<F: FatalStrategy>(
    field: DateAddField,
    number: i64,
    timeval: i64,
    dim: i32,
) -> i64 {
    match field.sub_second_digits() {
        Some(field_digits) => {
            let adj = dim - field_digits as i32;
            if adj < 0 {
                timeval + floor_div(number, POW10[(-adj) as usize])
            } else {
                timeval + number * POW10[adj as usize]
            }
        }
        None => {
            let scale = POW10[dim as usize];
            date_add_with::<F>(field, number, floor_div(timeval, scale)) * scale
                + unsigned_mod(timeval, scale)
        }
    }
}

/// Host-target date-add over a fixed-point sub-second timestamp.
pub fn date_add_high_precision(field: DateAddField, number: i64, timeval: i64, dim: i32) -> i64 {
    date_add_high_precision_with::<AbortFatal>(field, number, timeval, dim)
}

/// Null-propagating [`date_add`]: a timestamp equal to the storage
/// layer's null sentinel is returned unchanged, before any arithmetic
/// that could misbehave on the sentinel bit pattern.
pub fn date_add_nullable(field: DateAddField, number: i64, timeval: i64, null_val: i64) -> i64 {
    if timeval == null_val {
        return null_val;
    }
    date_add(field, number, timeval)
}

/// Null-propagating [`date_add_high_precision`].
pub fn date_add_high_precision_nullable(
    field: DateAddField,
    number: i64,
    timeval: i64,
    dim: i32,
    null_val: i64,
) -> i64 {
    if timeval == null_val {
        return null_val;
    }
    date_add_high_precision(field, number, timeval, dim)
}
