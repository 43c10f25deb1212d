//! Field units for date-add dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DateMathError;

/// The granularity of a date-add operation.
///
/// `Day`, `WeekDay` and `DayOfYear` perform identical calendar-day
/// arithmetic; they exist as distinct tags because the surrounding type
/// system distinguishes them for value extraction.
///
/// `Milli`, `Micro` and `Nano` are only meaningful for fixed-point
/// sub-second timestamps and must go through the high-precision entry
/// points; the whole-second dispatcher treats them as a contract
/// violation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DateAddField {
    Second,
    Minute,
    Hour,
    Day,
    WeekDay,
    DayOfYear,
    Week,
    Month,
    Quarter,
    Year,
    Decade,
    Century,
    Millennium,
    Milli,
    Micro,
    Nano,
}

impl DateAddField {
    /// All supported units, in dispatch order.
    pub const ALL: [DateAddField; 16] = [
        DateAddField::Second,
        DateAddField::Minute,
        DateAddField::Hour,
        DateAddField::Day,
        DateAddField::WeekDay,
        DateAddField::DayOfYear,
        DateAddField::Week,
        DateAddField::Month,
        DateAddField::Quarter,
        DateAddField::Year,
        DateAddField::Decade,
        DateAddField::Century,
        DateAddField::Millennium,
        DateAddField::Milli,
        DateAddField::Micro,
        DateAddField::Nano,
    ];

    /// Fractional decimal digits of a sub-second unit, or `None` for
    /// whole-second-and-larger units.
    pub const fn sub_second_digits(&self) -> Option<u32> {
        match self {
            DateAddField::Milli => Some(3),
            DateAddField::Micro => Some(6),
            DateAddField::Nano => Some(9),
            _ => None,
        }
    }

    /// Whether addition in this unit depends on the calendar (variable
    /// month lengths, leap years) rather than a fixed seconds multiplier.
    pub const fn is_calendar_unit(&self) -> bool {
        matches!(
            self,
            DateAddField::Month
                | DateAddField::Quarter
                | DateAddField::Year
                | DateAddField::Decade
                | DateAddField::Century
                | DateAddField::Millennium
        )
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            DateAddField::Second => "second",
            DateAddField::Minute => "minute",
            DateAddField::Hour => "hour",
            DateAddField::Day => "day",
            DateAddField::WeekDay => "weekday",
            DateAddField::DayOfYear => "dayofyear",
            DateAddField::Week => "week",
            DateAddField::Month => "month",
            DateAddField::Quarter => "quarter",
            DateAddField::Year => "year",
            DateAddField::Decade => "decade",
            DateAddField::Century => "century",
            DateAddField::Millennium => "millennium",
            DateAddField::Milli => "millisecond",
            DateAddField::Micro => "microsecond",
            DateAddField::Nano => "nanosecond",
        }
    }
}

impl fmt::Display for DateAddField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateAddField {
    type Err = DateMathError;

    /// Parses SQL-style unit spellings, case-insensitively, tolerating
    /// plural forms and the common abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "second" | "seconds" | "sec" => Ok(DateAddField::Second),
            "minute" | "minutes" | "min" => Ok(DateAddField::Minute),
            "hour" | "hours" => Ok(DateAddField::Hour),
            "day" | "days" => Ok(DateAddField::Day),
            "weekday" | "dow" => Ok(DateAddField::WeekDay),
            "dayofyear" | "doy" => Ok(DateAddField::DayOfYear),
            "week" | "weeks" => Ok(DateAddField::Week),
            "month" | "months" => Ok(DateAddField::Month),
            "quarter" | "quarters" => Ok(DateAddField::Quarter),
            "year" | "years" => Ok(DateAddField::Year),
            "decade" | "decades" => Ok(DateAddField::Decade),
            "century" | "centuries" => Ok(DateAddField::Century),
            "millennium" | "millennia" => Ok(DateAddField::Millennium),
            "millisecond" | "milliseconds" | "milli" | "ms" => Ok(DateAddField::Milli),
            "microsecond" | "microseconds" | "micro" | "us" => Ok(DateAddField::Micro),
            "nanosecond" | "nanoseconds" | "nano" | "ns" => Ok(DateAddField::Nano),
            _ => Err(DateMathError::UnknownField(s.to_string())),
        }
    }
}
