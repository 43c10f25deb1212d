//! Epoch-timestamp arithmetic kernels for the Quiver query engine.
//!
//! The functions in this crate are invoked per row while evaluating
//! `DATE_ADD`-style expressions, so they are pure integer math: no
//! allocation, no I/O, no shared state, and no library calls that would
//! prevent the same source from being compiled into a device-side
//! generated plan.

pub mod calendar;
pub mod date_add;
pub mod field;
pub mod floor_math;


pub const SECS_PER_MINUTE: i64 = 60;
pub const SECS_PER_HOUR: i64 = SECS_PER_MINUTE * 60;
pub const SECS_PER_DAY: i64 = SECS_PER_HOUR * 24;
pub const SECS_PER_WEEK: i64 = SECS_PER_DAY * 7;

/// Days in the repeating 400-year Gregorian cycle.
pub const DAYS_PER_400_YEARS: i64 = 146097;
/// Days from 1970-01-01 to 2000-03-01, the month-counting reference.
/// 2000-03-01 sits on a 400-year era boundary and puts February at the
/// end of the March-anchored year, so leap-day handling only ever touches
/// the final month of a cycle.
pub const EPOCH_ADJUSTED_DAYS: i64 = 11017;

pub const MONTHS_PER_QUARTER: i64 = 3;
pub const MONTHS_PER_YEAR: i64 = 12;
pub const MONTHS_PER_DECADE: i64 = 120;
pub const MONTHS_PER_CENTURY: i64 = 1200;
pub const MONTHS_PER_MILLENNIUM: i64 = 12000;

use thiserror::Error;

/// Boundary-layer failures. The kernels themselves are infallible; these
/// errors only arise when translating external input (unit names from a
/// parsed plan, precision dimensions from a tool invocation) into kernel
/// arguments.
#[derive(Debug, Error)]
pub enum DateMathError {
    #[error("unrecognized date field unit '{0}'")]
    UnknownField(String),

    #[error("unsupported timestamp precision {0}: expected 0, 3, 6 or 9 fractional digits")]
    InvalidDimension(i32),
}

pub use date_add::{
    AbortFatal, DEVICE_FATAL_SENTINEL, FatalStrategy, SentinelFatal, date_add,
    date_add_high_precision, date_add_high_precision_nullable, date_add_high_precision_with,
    date_add_nullable, date_add_with,
};
pub use field::DateAddField;
