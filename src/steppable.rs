// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The capability a value needs to be walked by a [`StepRange`](crate::StepRange).
//!
//! A steppable value is linearly ordered, can measure the whole number of
//! units separating it from another value, and can be advanced by a signed
//! number of units.  Implementations are provided for `chrono`'s naive
//! calendar types and for [`WallClockTime`](crate::WallClockTime).

use crate::{ChronoUnit, Result, TemporalError};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta};

/// Ordered values that can be measured and advanced in [`ChronoUnit`]s.
pub trait Steppable: Ord + Clone {
    /// Whether [`between`](Self::between) and [`plus`](Self::plus) accept `unit`.
    fn supports_unit(unit: ChronoUnit) -> bool;

    /// Whole units from `self` to `end`, truncated toward zero.
    ///
    /// Negative when `end` precedes `self`.
    fn between(&self, end: &Self, unit: ChronoUnit) -> Result<i64>;

    /// `self` advanced by `amount` units (backwards when negative).
    ///
    /// Returns `None` when the result is not representable.  Unsupported
    /// units also yield `None`; callers are expected to have checked
    /// [`supports_unit`](Self::supports_unit) first.
    fn plus(&self, amount: i64, unit: ChronoUnit) -> Option<Self>;
}

// ── calendar helpers ──────────────────────────────────────────────────────

/// Months since year 0, January.
#[inline]
fn proleptic_month(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Completed months from `start` to `end`.
///
/// Packs the day of month below the month count so that a month is only
/// counted once its day has been reached.
fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let packed_start = proleptic_month(start) * 32 + i64::from(start.day());
    let packed_end = proleptic_month(end) * 32 + i64::from(end.day());
    (packed_end - packed_start) / 32
}

fn shift_days(date: NaiveDate, amount: i64) -> Option<NaiveDate> {
    let days = Days::new(amount.unsigned_abs());
    if amount >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

fn shift_months(date: NaiveDate, amount: i64) -> Option<NaiveDate> {
    let months = Months::new(u32::try_from(amount.unsigned_abs()).ok()?);
    if amount >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Shifts a date by a date-based unit; `None` for time-based units.
fn shift_date(date: NaiveDate, amount: i64, unit: ChronoUnit) -> Option<NaiveDate> {
    match unit {
        ChronoUnit::Days => shift_days(date, amount),
        ChronoUnit::Weeks => shift_days(date, amount.checked_mul(7)?),
        ChronoUnit::Months => shift_months(date, amount),
        ChronoUnit::Years => shift_months(date, amount.checked_mul(12)?),
        ChronoUnit::Minutes | ChronoUnit::Hours | ChronoUnit::HalfDays => None,
    }
}

// ── NaiveDate ─────────────────────────────────────────────────────────────

impl Steppable for NaiveDate {
    #[inline]
    fn supports_unit(unit: ChronoUnit) -> bool {
        unit.is_date_based()
    }

    fn between(&self, end: &Self, unit: ChronoUnit) -> Result<i64> {
        let days = end.signed_duration_since(*self).num_days();
        match unit {
            ChronoUnit::Days => Ok(days),
            ChronoUnit::Weeks => Ok(days / 7),
            ChronoUnit::Months => Ok(months_between(*self, *end)),
            ChronoUnit::Years => Ok(months_between(*self, *end) / 12),
            other => Err(TemporalError::UnsupportedUnit(other)),
        }
    }

    #[inline]
    fn plus(&self, amount: i64, unit: ChronoUnit) -> Option<Self> {
        shift_date(*self, amount, unit)
    }
}

// ── NaiveDateTime ─────────────────────────────────────────────────────────

impl Steppable for NaiveDateTime {
    #[inline]
    fn supports_unit(_unit: ChronoUnit) -> bool {
        true
    }

    fn between(&self, end: &Self, unit: ChronoUnit) -> Result<i64> {
        let elapsed = end.signed_duration_since(*self);
        let units = match unit {
            ChronoUnit::Minutes => elapsed.num_minutes(),
            ChronoUnit::Hours => elapsed.num_hours(),
            ChronoUnit::HalfDays => elapsed.num_hours() / 12,
            ChronoUnit::Days => elapsed.num_days(),
            ChronoUnit::Weeks => elapsed.num_days() / 7,
            ChronoUnit::Months | ChronoUnit::Years => {
                // The last calendar day only counts once its time of day is reached.
                let start_date = self.date();
                let mut end_date = end.date();
                if end_date > start_date && end.time() < self.time() {
                    end_date = shift_days(end_date, -1).unwrap_or(end_date);
                } else if end_date < start_date && end.time() > self.time() {
                    end_date = shift_days(end_date, 1).unwrap_or(end_date);
                }
                let months = months_between(start_date, end_date);
                if unit == ChronoUnit::Months {
                    months
                } else {
                    months / 12
                }
            }
        };
        Ok(units)
    }

    fn plus(&self, amount: i64, unit: ChronoUnit) -> Option<Self> {
        match unit {
            ChronoUnit::Minutes => self.checked_add_signed(TimeDelta::try_minutes(amount)?),
            ChronoUnit::Hours => self.checked_add_signed(TimeDelta::try_hours(amount)?),
            ChronoUnit::HalfDays => {
                self.checked_add_signed(TimeDelta::try_hours(amount.checked_mul(12)?)?)
            }
            date_unit => shift_date(self.date(), amount, date_unit).map(|d| d.and_time(self.time())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn date_days_between_is_signed() {
        let a = date(2019, 1, 1);
        let b = date(2019, 1, 21);
        assert_eq!(a.between(&b, ChronoUnit::Days), Ok(20));
        assert_eq!(b.between(&a, ChronoUnit::Days), Ok(-20));
        assert_eq!(a.between(&b, ChronoUnit::Weeks), Ok(2));
        assert_eq!(b.between(&a, ChronoUnit::Weeks), Ok(-2));
    }

    #[test]
    fn date_months_count_only_completed_months() {
        let start = date(2019, 1, 31);
        assert_eq!(start.between(&date(2019, 2, 28), ChronoUnit::Months), Ok(0));
        assert_eq!(start.between(&date(2019, 3, 31), ChronoUnit::Months), Ok(2));
        assert_eq!(start.between(&date(2021, 1, 30), ChronoUnit::Years), Ok(1));
        assert_eq!(date(2019, 3, 31).between(&start, ChronoUnit::Months), Ok(-2));
    }

    #[test]
    fn date_rejects_time_units() {
        let a = date(2019, 1, 1);
        assert_eq!(
            a.between(&a, ChronoUnit::Hours),
            Err(TemporalError::UnsupportedUnit(ChronoUnit::Hours))
        );
        assert_eq!(a.plus(1, ChronoUnit::Minutes), None);
        assert!(!NaiveDate::supports_unit(ChronoUnit::HalfDays));
    }

    #[test]
    fn date_plus_months_clamps_to_month_end() {
        assert_eq!(date(2019, 1, 31).plus(1, ChronoUnit::Months), Some(date(2019, 2, 28)));
        assert_eq!(date(2020, 2, 29).plus(1, ChronoUnit::Years), Some(date(2021, 2, 28)));
        assert_eq!(date(2019, 3, 1).plus(-1, ChronoUnit::Days), Some(date(2019, 2, 28)));
        assert_eq!(date(2019, 1, 1).plus(-2, ChronoUnit::Weeks), Some(date(2018, 12, 18)));
    }

    #[test]
    fn date_plus_overflow_is_none() {
        assert_eq!(NaiveDate::MAX.plus(1, ChronoUnit::Days), None);
        assert_eq!(date(2019, 1, 1).plus(i64::MAX, ChronoUnit::Weeks), None);
    }

    #[test]
    fn datetime_time_units_truncate() {
        let a = datetime(2019, 1, 1, 10, 0);
        let b = datetime(2019, 1, 2, 9, 59);
        assert_eq!(a.between(&b, ChronoUnit::Minutes), Ok(23 * 60 + 59));
        assert_eq!(a.between(&b, ChronoUnit::Hours), Ok(23));
        assert_eq!(a.between(&b, ChronoUnit::HalfDays), Ok(1));
        assert_eq!(a.between(&b, ChronoUnit::Days), Ok(0));
    }

    #[test]
    fn datetime_months_respect_time_of_day() {
        let a = datetime(2019, 1, 15, 12, 0);
        assert_eq!(a.between(&datetime(2019, 2, 15, 11, 59), ChronoUnit::Months), Ok(0));
        assert_eq!(a.between(&datetime(2019, 2, 15, 12, 0), ChronoUnit::Months), Ok(1));
        let later = datetime(2019, 2, 15, 12, 0);
        assert_eq!(later.between(&datetime(2019, 1, 15, 12, 1), ChronoUnit::Months), Ok(0));
        assert_eq!(later.between(&a, ChronoUnit::Months), Ok(-1));
    }

    #[test]
    fn datetime_plus_keeps_time_for_date_units() {
        let a = datetime(2019, 1, 31, 8, 30);
        assert_eq!(a.plus(1, ChronoUnit::Months), Some(datetime(2019, 2, 28, 8, 30)));
        assert_eq!(a.plus(3, ChronoUnit::HalfDays), Some(datetime(2019, 2, 1, 20, 30)));
        assert_eq!(a.plus(-45, ChronoUnit::Minutes), Some(datetime(2019, 1, 31, 7, 45)));
    }
}
