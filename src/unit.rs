// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Step units.
//!
//! A [`ChronoUnit`] names the granularity by which a
//! [`StepRange`](crate::StepRange) advances.  Whether a given unit can be
//! applied to a value is decided by the value's
//! [`Steppable`](crate::Steppable) implementation.
//!
//! | Unit | Nominal length |
//! |------|----------------|
//! | [`ChronoUnit::Minutes`] | 60 s |
//! | [`ChronoUnit::Hours`] | 3 600 s |
//! | [`ChronoUnit::HalfDays`] | 43 200 s |
//! | [`ChronoUnit::Days`] | 86 400 s |
//! | [`ChronoUnit::Weeks`] | 7 days |
//! | [`ChronoUnit::Months`] | 1/12 of a Gregorian year |
//! | [`ChronoUnit::Years`] | 365.2425 days |

use qtty::Seconds;
use std::fmt;

/// Seconds in one mean Gregorian year (365.2425 days).
const SECONDS_PER_GREGORIAN_YEAR: f64 = 365.2425 * 86_400.0;

/// Granularity of a temporal step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChronoUnit {
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
}

impl ChronoUnit {
    /// Every unit, shortest first.
    pub const ALL: [ChronoUnit; 7] = [
        ChronoUnit::Minutes,
        ChronoUnit::Hours,
        ChronoUnit::HalfDays,
        ChronoUnit::Days,
        ChronoUnit::Weeks,
        ChronoUnit::Months,
        ChronoUnit::Years,
    ];

    /// Estimated length of one unit.
    ///
    /// Exact for the time-based units and for days and weeks on a calendar
    /// without leap seconds; months and years use the mean Gregorian year.
    pub fn nominal_duration(self) -> Seconds {
        let seconds = match self {
            ChronoUnit::Minutes => 60.0,
            ChronoUnit::Hours => 3_600.0,
            ChronoUnit::HalfDays => 43_200.0,
            ChronoUnit::Days => 86_400.0,
            ChronoUnit::Weeks => 7.0 * 86_400.0,
            ChronoUnit::Months => SECONDS_PER_GREGORIAN_YEAR / 12.0,
            ChronoUnit::Years => SECONDS_PER_GREGORIAN_YEAR,
        };
        Seconds::new(seconds)
    }

    /// Units measured along the calendar (days and longer).
    #[inline]
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            ChronoUnit::Days | ChronoUnit::Weeks | ChronoUnit::Months | ChronoUnit::Years
        )
    }

    /// Units measured along the clock (shorter than a day).
    #[inline]
    pub const fn is_time_based(self) -> bool {
        !self.is_date_based()
    }
}

impl fmt::Display for ChronoUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChronoUnit::Minutes => "Minutes",
            ChronoUnit::Hours => "Hours",
            ChronoUnit::HalfDays => "HalfDays",
            ChronoUnit::Days => "Days",
            ChronoUnit::Weeks => "Weeks",
            ChronoUnit::Months => "Months",
            ChronoUnit::Years => "Years",
        };
        f.write_str(name)
    }
}
