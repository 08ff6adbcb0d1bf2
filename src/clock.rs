// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Collaborators that feed [`WallClockTime`](crate::WallClockTime).
//!
//! - [`Clock`] supplies the current instant and the zone offset in force at
//!   that instant.  [`SystemClock`] reads the host clock and local zone;
//!   [`FixedClock`] always answers the same instant and offset.
//! - [`TemporalAccessor`] is implemented by anything that can report a
//!   minute of the day.

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Timelike, Utc,
};

/// Source of the current instant and zone offset.
pub trait Clock {
    /// The current instant.
    fn instant(&self) -> DateTime<Utc>;

    /// Offset from UTC in force at `instant`.
    fn offset(&self, instant: &DateTime<Utc>) -> FixedOffset;
}

/// The host clock, read in the host's local time zone.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn instant(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset(&self, instant: &DateTime<Utc>) -> FixedOffset {
        Local.offset_from_utc_datetime(&instant.naive_utc()).fix()
    }
}

/// A clock stopped at one instant with one offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub const fn new(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { instant, offset }
    }

    /// A fixed clock on UTC.
    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self::new(instant, Utc.fix())
    }
}

impl Clock for FixedClock {
    #[inline]
    fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    #[inline]
    fn offset(&self, _instant: &DateTime<Utc>) -> FixedOffset {
        self.offset
    }
}

/// A value that may carry a time of day.
pub trait TemporalAccessor {
    /// Minutes since midnight, or `None` when the value has no time of day.
    fn minute_of_day(&self) -> Option<i64>;
}

impl TemporalAccessor for NaiveTime {
    #[inline]
    fn minute_of_day(&self) -> Option<i64> {
        Some(i64::from(self.num_seconds_from_midnight() / 60))
    }
}

impl TemporalAccessor for NaiveDateTime {
    #[inline]
    fn minute_of_day(&self) -> Option<i64> {
        self.time().minute_of_day()
    }
}

impl<Tz: TimeZone> TemporalAccessor for DateTime<Tz> {
    /// Minute of the day in the value's own zone.
    #[inline]
    fn minute_of_day(&self) -> Option<i64> {
        self.time().minute_of_day()
    }
}

impl TemporalAccessor for NaiveDate {
    #[inline]
    fn minute_of_day(&self) -> Option<i64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_answers_its_instant() {
        let instant = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let offset = FixedOffset::east_opt(3_600).unwrap();
        let clock = FixedClock::new(instant, offset);
        assert_eq!(clock.instant(), instant);
        assert_eq!(clock.offset(&instant), offset);
        assert_eq!(FixedClock::utc(instant).offset(&instant).local_minus_utc(), 0);
    }

    #[test]
    fn system_clock_offset_is_within_a_day() {
        let clock = SystemClock;
        let now = clock.instant();
        assert!(clock.offset(&now).local_minus_utc().abs() < 86_400);
    }

    #[test]
    fn accessors_report_minute_of_day() {
        let time = NaiveTime::from_hms_opt(13, 45, 59).unwrap();
        assert_eq!(time.minute_of_day(), Some(13 * 60 + 45));

        let date = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        assert_eq!(date.and_time(time).minute_of_day(), Some(825));
        assert_eq!(date.minute_of_day(), None);

        let zoned = FixedOffset::east_opt(2 * 3_600)
            .unwrap()
            .from_utc_datetime(&date.and_time(time));
        assert_eq!(zoned.minute_of_day(), Some(15 * 60 + 45));
    }
}
