//! elapsed.rs
//!
//! Elapsed-time-since-birth calculation in a chart-friendly unit:
//!     days | weeks | months | years
//!
//! Calendar units are non-uniform (months vary in length, a year is not
//! exactly 365 days), so each unit gets its own policy rather than one
//! shared millisecond division:
//!   • days: millisecond scaling with rounding, which also absorbs the
//!     ±1h daylight-saving skew as noise
//!   • weeks: anchored to birthday boundaries so the running count stays
//!     in step with a chart that budgets exactly 52 cells per year,
//!     instead of drifting (a calendar year is ~52.18 weeks)
//!   • months: scaling by the average Gregorian month length
//!   • years: the epoch-reinterpretation trick, which reuses the
//!     calendar's own leap-year bookkeeping
//!
//! Everything here is pure: `now` is an injected argument, never a global
//! clock read.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Average Gregorian month length in days (365.25 / 12). A deliberate
/// approximation: month counts can be one day off near month boundaries.
const AVG_DAYS_PER_MONTH: f64 = 30.4375;

/// The chart allocates exactly this many week cells per year of life.
const WEEK_CELLS_PER_YEAR: i64 = 52;

/// A birth date built from the three form fields. Day values that overflow
/// the month roll forward into the next one (so month 3, day 31 becomes
/// May 1), matching standard Gregorian date normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    /// `month_index` is zero-based (January = 0), as the form's month
    /// selector supplies it. Returns `None` only for a day of 0 or a year
    /// outside the supported calendar range; the form layer screens both
    /// out before calling this.
    pub fn from_fields(year: i32, month_index: u32, day: u32) -> Option<Self> {
        let first_of_month = NaiveDate::from_ymd_opt(year, month_index + 1, 1)?;
        let offset = day.checked_sub(1)?;
        let date = first_of_month.checked_add_days(Days::new(u64::from(offset)))?;
        Some(Self(date))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// The birth instant used for millisecond diffs: local midnight.
    pub fn midnight(self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }
}

/// Which chart the count feeds. Parsed from the unit selector's text;
/// an unrecognized string is a hard error, never a silent fallback to a
/// raw millisecond diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Days,
    Weeks,
    Months,
    Years,
}

impl FromStr for Unit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "days" => Ok(Self::Days),
            "weeks" => Ok(Self::Weeks),
            "months" => Ok(Self::Months),
            "years" => Ok(Self::Years),
            other => Err(anyhow::anyhow!(
                "unrecognized unit {other:?} (expected days, weeks, months or years)"
            )),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
        })
    }
}

/// Returns the elapsed time between `birth` and `now` as a whole number of
/// `unit`s. The result is signed: a birth date in the future yields a
/// value at or below zero, and callers clamp for display.
pub fn compute_elapsed(birth: DateOfBirth, now: NaiveDateTime, unit: Unit) -> i64 {
    let diff_ms = now.signed_duration_since(birth.midnight()).num_milliseconds();

    match unit {
        Unit::Days => (diff_ms as f64 / MILLIS_PER_DAY).round() as i64,
        Unit::Weeks => weeks_anchored(birth.date(), now.date()),
        Unit::Months => (diff_ms as f64 / (MILLIS_PER_DAY * AVG_DAYS_PER_MONTH)).floor() as i64,
        Unit::Years => years_by_epoch_shift(diff_ms),
    }
}

/// Week count anchored to birthday boundaries: 52 per whole elapsed year,
/// plus whole weeks since the most recent birthday. Because the remainder
/// resets on each birthday, the count can never run ahead of the chart's
/// 52-cells-per-year budget, unlike plain scaling by 7-day weeks.
fn weeks_anchored(birth: NaiveDate, today: NaiveDate) -> i64 {
    let mut years = i64::from(today.year() - birth.year());
    // Comparing (month, day) pairs sidesteps constructing this year's
    // birthday just to order it against `today`; it also treats a Feb 29
    // birthday as reached on Mar 1 of non-leap years, consistent with
    // `anniversary_in` below.
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    let last_birthday = anniversary_in(birth, birth.year() + years as i32);
    let days_since = today.signed_duration_since(last_birthday).num_days();
    years * WEEK_CELLS_PER_YEAR + days_since / 7
}

/// The birthday anniversary falling in `year`. Feb 29 rolls to Mar 1 when
/// `year` is not a leap year.
fn anniversary_in(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        // `year` sits between two in-range dates, so construction cannot
        // actually fail; fall back to the birth date rather than panic.
        .unwrap_or(birth)
}

/// Reinterprets the elapsed milliseconds as an absolute instant since the
/// Unix epoch and reads its UTC year: the offset from 1970 is the whole
/// number of elapsed years, with leap years accounted for by the calendar
/// itself. UTC on both sides keeps timezones from shifting the year.
fn years_by_epoch_shift(diff_ms: i64) -> i64 {
    let shifted = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::milliseconds(diff_ms);
    i64::from(shifted.year()) - 1970
}
