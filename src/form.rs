//! Form-side plumbing: raw field text → range-checked integers → a
//! constructible birth date. Mirrors the input form's own validation, so
//! the calculator only ever sees dates it can work with.

use anyhow::{Context, Result};

use crate::elapsed::DateOfBirth;

pub const YEAR_MIN: i32 = 1;
pub const YEAR_MAX: i32 = 9999;

/// The three date fields as entered, month as a zero-based selector index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFields {
    pub year: i32,
    pub month_index: u32,
    pub day: u32,
}

impl DateFields {
    pub fn parse(year: &str, month: &str, day: &str) -> Result<Self> {
        Ok(Self {
            year: year
                .trim()
                .parse()
                .with_context(|| format!("invalid year field {year:?}"))?,
            month_index: month
                .trim()
                .parse()
                .with_context(|| format!("invalid month field {month:?}"))?,
            day: day
                .trim()
                .parse()
                .with_context(|| format!("invalid day field {day:?}"))?,
        })
    }

    /// Same ranges the form enforces: 4-digit-or-less positive year, month
    /// index 0–11, day 1–31. Day/month fit is left to date normalization.
    pub fn is_valid(self) -> bool {
        (YEAR_MIN..=YEAR_MAX).contains(&self.year)
            && self.month_index <= 11
            && (1..=31).contains(&self.day)
    }

    /// The validated fields as a calculator input, `None` when out of range.
    pub fn date_of_birth(self) -> Option<DateOfBirth> {
        if !self.is_valid() {
            return None;
        }
        DateOfBirth::from_fields(self.year, self.month_index, self.day)
    }
}

/// Direction of an arrow-key adjustment on a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

/// One arrow-key press on a numeric field.
pub fn step_field(value: i32, step: Step) -> i32 {
    match step {
        Step::Up => value + 1,
        Step::Down => value - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_trimmed_field_text() {
        let fields = DateFields::parse(" 1992 ", "5", "14").unwrap();
        assert_eq!(
            fields,
            DateFields {
                year: 1992,
                month_index: 5,
                day: 14
            }
        );
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert!(DateFields::parse("199x", "5", "14").is_err());
        assert!(DateFields::parse("1992", "", "14").is_err());
    }

    #[test]
    fn range_checks_match_the_form() {
        let ok = DateFields {
            year: 1992,
            month_index: 11,
            day: 31,
        };
        assert!(ok.is_valid());
        assert!(!DateFields { year: 0, ..ok }.is_valid());
        assert!(!DateFields { year: 10_000, ..ok }.is_valid());
        assert!(!DateFields { month_index: 12, ..ok }.is_valid());
        assert!(!DateFields { day: 0, ..ok }.is_valid());
        assert!(!DateFields { day: 32, ..ok }.is_valid());
    }

    #[test]
    fn invalid_fields_produce_no_birth_date() {
        let fields = DateFields {
            year: 1992,
            month_index: 12,
            day: 1,
        };
        assert_eq!(fields.date_of_birth(), None);
    }

    #[test]
    fn valid_fields_bridge_to_a_normalized_date() {
        let fields = DateFields {
            year: 2019,
            month_index: 1,
            day: 30,
        };
        let birth = fields.date_of_birth().unwrap();
        assert_eq!(birth.date(), NaiveDate::from_ymd_opt(2019, 3, 2).unwrap());
    }

    #[test]
    fn arrow_keys_step_by_one() {
        assert_eq!(step_field(1992, Step::Up), 1993);
        assert_eq!(step_field(1992, Step::Down), 1991);
    }
}
