// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-date (`StepRange<NaiveDate>`) specific constructors.

use chrono::NaiveDate;

use crate::{ChronoUnit, Result, StepRange};

/// A range of calendar dates.
///
/// This is a type alias for [`StepRange<NaiveDate>`].
pub type DateRange = StepRange<NaiveDate>;

impl StepRange<NaiveDate> {
    /// Every day from `start` up to, but excluding, `end_exclusive`.
    ///
    /// When `end_exclusive` precedes `start` use [`StepRange::new`] with a
    /// negative step instead.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tempora::DateRange;
    ///
    /// let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2019, 1, 8).unwrap();
    /// assert_eq!(DateRange::days(start, end).unwrap().iter().count(), 7);
    /// ```
    #[inline]
    pub fn days(start: NaiveDate, end_exclusive: NaiveDate) -> Result<Self> {
        Self::new(start, end_exclusive, 1, ChronoUnit::Days)
    }

    /// The same weekday, week after week.
    #[inline]
    pub fn weeks(start: NaiveDate, end_exclusive: NaiveDate) -> Result<Self> {
        Self::new(start, end_exclusive, 1, ChronoUnit::Weeks)
    }

    /// The same day of the month, clamped to shorter months.
    #[inline]
    pub fn months(start: NaiveDate, end_exclusive: NaiveDate) -> Result<Self> {
        Self::new(start, end_exclusive, 1, ChronoUnit::Months)
    }
}
