// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock time of day at minute precision.
//!
//! [`WallClockTime`] is an hour and a minute with no date and no zone.  The
//! minute of the day (`hour·60 + minute`) is the single ordering key: it
//! drives comparison, hashing and all arithmetic, which wraps around
//! midnight.
//!
//! ```
//! use tempora::WallClockTime;
//!
//! let t = WallClockTime::of(10, 30).unwrap();
//! assert_eq!(t.plus_hours(3), WallClockTime::of(13, 30).unwrap());
//! assert_eq!(WallClockTime::of(9, 5).unwrap().to_string(), "09:05");
//! ```

use crate::clock::{Clock, TemporalAccessor};
use crate::{ChronoUnit, Result, Steppable, TemporalError, TimeField};
use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike, Utc};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::debug;

const HOURS_PER_DAY: i64 = 24;
const HOURS_PER_HALF_DAY: i64 = 12;
const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_HALF_DAY: i64 = MINUTES_PER_HOUR * HOURS_PER_HALF_DAY;
const MINUTES_PER_DAY: i64 = MINUTES_PER_HOUR * HOURS_PER_DAY;
const SECONDS_PER_DAY: i64 = 86_400;

/// One value per whole hour, built at compile time.
const WHOLE_HOURS: [WallClockTime; HOURS_PER_DAY as usize] = {
    let mut table = [WallClockTime::new_unchecked(0, 0); HOURS_PER_DAY as usize];
    let mut hour = 0;
    while hour < HOURS_PER_DAY as usize {
        table[hour] = WallClockTime::new_unchecked(hour as u8, 0);
        hour += 1;
    }
    table
};

/// A time of day: hour `0..=23` and minute `0..=59`.
///
/// Values are `Copy` and never mutated; every adjusting method returns a new
/// value.  Ordering is lexicographic on `(hour, minute)`, which is the same
/// as ordering by [`to_minute_of_day`](Self::to_minute_of_day).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct WallClockTime {
    hour: u8,
    minute: u8,
}

impl WallClockTime {
    /// `00:00`.
    pub const MIDNIGHT: Self = WHOLE_HOURS[0];
    /// `12:00`.
    pub const NOON: Self = WHOLE_HOURS[HOURS_PER_HALF_DAY as usize];
    /// The earliest time of day, `00:00`.
    pub const MIN: Self = Self::MIDNIGHT;
    /// The latest time of day, `23:59`.
    pub const MAX: Self = Self::new_unchecked(23, 59);

    const fn new_unchecked(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Builds from fields already known to be in range.
    #[inline]
    fn create(hour: u8, minute: u8) -> Self {
        if minute == 0 {
            WHOLE_HOURS[hour as usize]
        } else {
            Self::new_unchecked(hour, minute)
        }
    }

    // ── constructors ──────────────────────────────────────────────────

    /// Creates a time from an hour (`0..=23`) and a minute (`0..=59`).
    pub fn of(hour: u32, minute: u32) -> Result<Self> {
        let hour = TimeField::HourOfDay.check_valid(i64::from(hour))?;
        if minute == 0 {
            return Ok(WHOLE_HOURS[hour as usize]);
        }
        let minute = TimeField::MinuteOfHour.check_valid(i64::from(minute))?;
        Ok(Self::new_unchecked(hour as u8, minute as u8))
    }

    /// Creates a time from minutes since midnight.
    ///
    /// Out-of-range input wraps around the day instead of failing, so
    /// `1440` is midnight and `-1` is `23:59`.
    pub fn of_minute_of_day(minute_of_day: i64) -> Self {
        let wrapped = minute_of_day.rem_euclid(MINUTES_PER_DAY);
        Self::create(
            (wrapped / MINUTES_PER_HOUR) as u8,
            (wrapped % MINUTES_PER_HOUR) as u8,
        )
    }

    /// The wall-clock time at `instant` in a zone `offset` from UTC.
    pub fn of_instant(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        let local_second = instant.timestamp() + i64::from(offset.local_minus_utc());
        let second_of_day = local_second.rem_euclid(SECONDS_PER_DAY);
        Self::of_minute_of_day(second_of_day / 60)
    }

    /// The current time read from `clock`.
    pub fn now(clock: &impl Clock) -> Self {
        let instant = clock.instant();
        Self::of_instant(instant, clock.offset(&instant))
    }

    /// The current time in `zone`, read from the host clock.
    pub fn now_in<Tz: TimeZone>(zone: &Tz) -> Self {
        let instant = Utc::now();
        let offset = zone.offset_from_utc_datetime(&instant.naive_utc()).fix();
        Self::of_instant(instant, offset)
    }

    /// Extracts the time of day from any [`TemporalAccessor`].
    ///
    /// Fails with [`TemporalError::UnsupportedSource`] when the source has
    /// no time of day (a plain date, for instance).
    pub fn from_temporal<A: TemporalAccessor + ?Sized>(source: &A) -> Result<Self> {
        match source.minute_of_day() {
            Some(minute_of_day) => Ok(Self::of_minute_of_day(minute_of_day)),
            None => {
                let type_name = std::any::type_name::<A>();
                debug!(type_name, "source exposes no time of day");
                Err(TemporalError::UnsupportedSource { type_name })
            }
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour as u32
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute as u32
    }

    /// Minutes since midnight, `0..=1439`.
    #[inline]
    pub const fn to_minute_of_day(&self) -> u32 {
        self.hour as u32 * MINUTES_PER_HOUR as u32 + self.minute as u32
    }

    pub fn is_supported_field(field: TimeField) -> bool {
        matches!(
            field,
            TimeField::HourOfDay
                | TimeField::MinuteOfHour
                | TimeField::MinuteOfDay
                | TimeField::HourOfAmPm
                | TimeField::ClockHourOfDay
                | TimeField::ClockHourOfAmPm
                | TimeField::AmPmOfDay
        )
    }

    /// Reads `field`.
    pub fn get(&self, field: TimeField) -> Result<i64> {
        let hour = i64::from(self.hour);
        let value = match field {
            TimeField::HourOfDay => hour,
            TimeField::MinuteOfHour => i64::from(self.minute),
            TimeField::MinuteOfDay => i64::from(self.to_minute_of_day()),
            TimeField::HourOfAmPm => hour % HOURS_PER_HALF_DAY,
            TimeField::ClockHourOfDay => {
                if hour == 0 {
                    HOURS_PER_DAY
                } else {
                    hour
                }
            }
            TimeField::ClockHourOfAmPm => match hour % HOURS_PER_HALF_DAY {
                0 => HOURS_PER_HALF_DAY,
                clock_hour => clock_hour,
            },
            TimeField::AmPmOfDay => hour / HOURS_PER_HALF_DAY,
            unsupported => return Err(TemporalError::UnsupportedField(unsupported)),
        };
        Ok(value)
    }

    // ── adjusters ─────────────────────────────────────────────────────

    /// Same minute, different hour.
    pub fn with_hour(self, hour: u32) -> Result<Self> {
        if hour == self.hour() {
            return Ok(self);
        }
        let hour = TimeField::HourOfDay.check_valid(i64::from(hour))?;
        Ok(Self::create(hour as u8, self.minute))
    }

    /// Same hour, different minute.
    pub fn with_minute(self, minute: u32) -> Result<Self> {
        if minute == self.minute() {
            return Ok(self);
        }
        let minute = TimeField::MinuteOfHour.check_valid(i64::from(minute))?;
        Ok(Self::create(self.hour, minute as u8))
    }

    /// Sets `field` to `value`.
    ///
    /// Only [`TimeField::HourOfDay`], [`TimeField::MinuteOfHour`] and
    /// [`TimeField::MinuteOfDay`] can be set.
    pub fn with(self, field: TimeField, value: i64) -> Result<Self> {
        match field {
            TimeField::HourOfDay => self.with_hour(field.check_valid(value)? as u32),
            TimeField::MinuteOfHour => self.with_minute(field.check_valid(value)? as u32),
            TimeField::MinuteOfDay => Ok(Self::of_minute_of_day(field.check_valid(value)?)),
            unsupported => Err(TemporalError::UnsupportedField(unsupported)),
        }
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Adds hours, wrapping around midnight.
    pub fn plus_hours(self, hours: i64) -> Self {
        if hours == 0 {
            return self;
        }
        let hour = (i64::from(self.hour) + hours % HOURS_PER_DAY).rem_euclid(HOURS_PER_DAY);
        Self::create(hour as u8, self.minute)
    }

    /// Adds minutes, wrapping around midnight.
    pub fn plus_minutes(self, minutes: i64) -> Self {
        if minutes == 0 {
            return self;
        }
        let current = i64::from(self.to_minute_of_day());
        let shifted = (current + minutes % MINUTES_PER_DAY).rem_euclid(MINUTES_PER_DAY);
        if shifted == current {
            self
        } else {
            Self::of_minute_of_day(shifted)
        }
    }

    #[inline]
    pub fn minus_hours(self, hours: i64) -> Self {
        self.plus_hours(-(hours % HOURS_PER_DAY))
    }

    #[inline]
    pub fn minus_minutes(self, minutes: i64) -> Self {
        self.plus_minutes(-(minutes % MINUTES_PER_DAY))
    }

    /// Adds `amount` of a time-based `unit`.
    ///
    /// Half days only flip between morning and afternoon: `(amount % 2)`
    /// half days are applied.
    pub fn plus(self, amount: i64, unit: ChronoUnit) -> Result<Self> {
        match unit {
            ChronoUnit::Minutes => Ok(self.plus_minutes(amount)),
            ChronoUnit::Hours => Ok(self.plus_hours(amount)),
            ChronoUnit::HalfDays => Ok(self.plus_hours((amount % 2) * HOURS_PER_HALF_DAY)),
            other => Err(TemporalError::UnsupportedUnit(other)),
        }
    }

    /// Whole units from `self` to `end` within the same day.
    ///
    /// Negative when `end` is earlier in the day.
    pub fn until(&self, end: &Self, unit: ChronoUnit) -> Result<i64> {
        let minutes = i64::from(end.to_minute_of_day()) - i64::from(self.to_minute_of_day());
        match unit {
            ChronoUnit::Minutes => Ok(minutes),
            ChronoUnit::Hours => Ok(minutes / MINUTES_PER_HOUR),
            ChronoUnit::HalfDays => Ok(minutes / MINUTES_PER_HALF_DAY),
            other => Err(TemporalError::UnsupportedUnit(other)),
        }
    }

    // ── comparison ────────────────────────────────────────────────────

    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    #[inline]
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    // ── chrono interop ────────────────────────────────────────────────

    /// The same time of day as a `chrono::NaiveTime` with zero seconds.
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or_default()
    }

    /// `datetime` with its hour and minute replaced by this time.
    ///
    /// Seconds and fractions of a second are kept.
    pub fn adjust_into(self, datetime: NaiveDateTime) -> NaiveDateTime {
        datetime
            .with_hour(self.hour())
            .and_then(|adjusted| adjusted.with_minute(self.minute()))
            .unwrap_or(datetime)
    }
}

impl Default for WallClockTime {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl Hash for WallClockTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let minute_of_day = self.to_minute_of_day();
        (minute_of_day ^ (minute_of_day << 8)).hash(state);
    }
}

impl fmt::Display for WallClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for WallClockTime {
    type Err = TemporalError;

    /// Parses exactly `HH:MM`, zero padded, 24-hour.
    fn from_str(text: &str) -> Result<Self> {
        let invalid = || TemporalError::InvalidText {
            text: text.to_owned(),
        };
        let bytes = text.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let two_digits = |hi: u8, lo: u8| -> Option<u32> {
            (hi.is_ascii_digit() && lo.is_ascii_digit())
                .then(|| u32::from(hi - b'0') * 10 + u32::from(lo - b'0'))
        };
        let hour = two_digits(bytes[0], bytes[1]).ok_or_else(invalid)?;
        let minute = two_digits(bytes[3], bytes[4]).ok_or_else(invalid)?;
        Self::of(hour, minute)
    }
}

impl From<WallClockTime> for NaiveTime {
    #[inline]
    fn from(time: WallClockTime) -> Self {
        time.to_naive_time()
    }
}

impl TemporalAccessor for WallClockTime {
    #[inline]
    fn minute_of_day(&self) -> Option<i64> {
        Some(i64::from(self.to_minute_of_day()))
    }
}

impl Steppable for WallClockTime {
    #[inline]
    fn supports_unit(unit: ChronoUnit) -> bool {
        unit.is_time_based()
    }

    #[inline]
    fn between(&self, end: &Self, unit: ChronoUnit) -> Result<i64> {
        self.until(end, unit)
    }

    #[inline]
    fn plus(&self, amount: i64, unit: ChronoUnit) -> Option<Self> {
        WallClockTime::plus(*self, amount, unit).ok()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for WallClockTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WallClockTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
