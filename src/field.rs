// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-of-day fields queried through [`WallClockTime::get`](crate::WallClockTime::get).

use crate::{Result, TemporalError};
use std::fmt;

/// A named component of a time of day.
///
/// [`WallClockTime`](crate::WallClockTime) works at minute precision, so the
/// second and nanosecond fields exist only to be reported as unsupported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeField {
    /// Hour of the day, 0 - 23.
    HourOfDay,
    /// Minute within the hour, 0 - 59.
    MinuteOfHour,
    /// Minutes since midnight, 0 - 1439.
    MinuteOfDay,
    /// Hour within the half day, 0 - 11.
    HourOfAmPm,
    /// Hour on a 24-hour clock face, 1 - 24 (midnight reads 24).
    ClockHourOfDay,
    /// Hour on a 12-hour clock face, 1 - 12 (midnight and noon read 12).
    ClockHourOfAmPm,
    /// 0 before noon, 1 from noon on.
    AmPmOfDay,
    SecondOfMinute,
    SecondOfDay,
    NanoOfSecond,
}

impl TimeField {
    /// Inclusive `(min, max)` of the values this field can take.
    pub const fn range(self) -> (i64, i64) {
        match self {
            TimeField::HourOfDay => (0, 23),
            TimeField::MinuteOfHour => (0, 59),
            TimeField::MinuteOfDay => (0, 1_439),
            TimeField::HourOfAmPm => (0, 11),
            TimeField::ClockHourOfDay => (1, 24),
            TimeField::ClockHourOfAmPm => (1, 12),
            TimeField::AmPmOfDay => (0, 1),
            TimeField::SecondOfMinute => (0, 59),
            TimeField::SecondOfDay => (0, 86_399),
            TimeField::NanoOfSecond => (0, 999_999_999),
        }
    }

    /// Returns `value` unchanged when it lies within [`range`](Self::range).
    pub fn check_valid(self, value: i64) -> Result<i64> {
        let (min, max) = self.range();
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(TemporalError::InvalidField {
                field: self,
                value,
                min,
                max,
            })
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
