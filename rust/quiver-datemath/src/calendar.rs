//! Month/day/second calendar representation.
//!
//! [`MonthDaySecond`] maps an epoch-second timestamp to a
//! `(months since 2000-03-01, day-of-month, second-of-day)` triple and
//! back, using closed-form integer formulas over the 146097-day Gregorian
//! era instead of loops or month tables. Anchoring years at March 1 puts
//! February last in the 12-month cycle, so leap-day handling is confined
//! to a single arm of the day clamp.

use crate::floor_math::floor_div;
use crate::{DAYS_PER_400_YEARS, EPOCH_ADJUSTED_DAYS, SECS_PER_DAY};

/// Max day-of-month (0-based) for March..January; February is computed
/// from the leap rule.
const MAX_DAYS: [u32; 11] = [30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 30];

const MONTHS_PER_ERA: i64 = 400 * 12;

/// Calendar triple used for month-granularity arithmetic.
///
/// The triple is a plain value: construction, [`add_months`] and
/// [`unixtime`] are its only operations, and day-of-month clamping happens
/// exclusively on conversion back to a timestamp. Deferring the clamp
/// keeps repeated month additions from compounding: Jan 31 + 1 month
/// clamps to the end of February, while Jan 31 + 2 months is March 31
/// rather than a re-expanded February 28.
///
/// [`add_months`]: MonthDaySecond::add_months
/// [`unixtime`]: MonthDaySecond::unixtime
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MonthDaySecond {
    /// Months since 2000-03-01. Unbounded; may be negative.
    months: i64,
    /// Day-of-month, 0-based. Interpreted (and clamped) by `unixtime`.
    dom: u32,
    /// Second-of-day, `0..86400`. Floor semantics keep this non-negative
    /// for pre-epoch timestamps.
    sod: u32,
}

impl MonthDaySecond {
    /// Breaks an epoch-second timestamp into the calendar triple.
    ///
    /// The era (400-year cycle index), year-of-era, day-of-year and month
    /// are all recovered algebraically; the formulas are exact for the
    /// entire range where the intermediate products stay within `i64`.
    pub fn new(timeval: i64) -> MonthDaySecond {
        let day = floor_div(timeval, SECS_PER_DAY);
        let era = floor_div(day - EPOCH_ADJUSTED_DAYS, DAYS_PER_400_YEARS);
        let sod = (timeval - day * SECS_PER_DAY) as u32;
        let doe = (day - EPOCH_ADJUSTED_DAYS - era * DAYS_PER_400_YEARS) as u32;
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let moy = (5 * doy + 2) / 153;
        let dom = doy - (153 * moy + 2) / 5;
        let months = (era * 400 + yoe as i64) * 12 + moy as i64;
        MonthDaySecond { months, dom, sod }
    }

    /// Shifts the month counter. Day-of-month and second-of-day are left
    /// untouched; any clamping is deferred to [`unixtime`].
    ///
    /// [`unixtime`]: MonthDaySecond::unixtime
    #[must_use]
    pub const fn add_months(mut self, months: i64) -> MonthDaySecond {
        self.months += months;
        self
    }

    /// Converts back to seconds since 1970-01-01, clamping the stored
    /// day-of-month to the last day of the target month.
    pub fn unixtime(&self) -> i64 {
        let era = floor_div(self.months, MONTHS_PER_ERA);
        let moe = (self.months - era * MONTHS_PER_ERA) as u32;
        let yoe = moe / 12;
        let moy = moe % 12;
        let doy = (153 * moy + 2) / 5 + clamp_dom(yoe, moy, self.dom);
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        (EPOCH_ADJUSTED_DAYS + era * DAYS_PER_400_YEARS + doe as i64) * SECS_PER_DAY
            + self.sod as i64
    }
}

/// Clamps a 0-based day-of-month to the last day of month `moy`
/// (March = 0 .. February = 11) in year-of-era `yoe`.
///
/// February closes the March-anchored year, so its leap test applies to
/// the *following* year-of-era; `yoe == 400` rather than `yoe % 400 == 0`
/// suffices because the incremented value stays in `1..=400`.
fn clamp_dom(yoe: u32, moy: u32, dom: u32) -> u32 {
    if dom < 28 {
        // No Gregorian month is shorter than 28 days.
        dom
    } else {
        let max_day = if moy == 11 {
            let yoe = yoe + 1;
            27 + u32::from(yoe % 4 == 0 && (yoe % 100 != 0 || yoe == 400))
        } else {
            MAX_DAYS[moy as usize]
        };
        dom.min(max_day)
    }
}
