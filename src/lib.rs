// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar stepping primitives.
//!
//! This crate provides two independent building blocks for calendar and
//! time-of-day arithmetic on top of `chrono`.
//!
//! # Core types
//!
//! - [`StepRange<T>`]: lazy, end-exclusive, evenly spaced sequence over any
//!   [`Steppable`] value, iterable from both ends and splittable for
//!   parallel consumption.
//! - [`DateRange`]: type alias for `StepRange<NaiveDate>`.
//! - [`WallClockTime`]: an hour and a minute, with modular arithmetic and a
//!   fixed `HH:MM` rendering.
//! - [`Steppable`]: trait for values that can be measured and advanced in
//!   [`ChronoUnit`]s.
//!
//! # Steppable values
//!
//! | Type | Units |
//! |------|-------|
//! | `chrono::NaiveDate` | days, weeks, months, years |
//! | `chrono::NaiveDateTime` | all units |
//! | [`WallClockTime`] | minutes, hours, half days |
//!
//! # Collaborators
//!
//! [`WallClockTime::now`] reads a [`Clock`]; [`WallClockTime::from_temporal`]
//! reads any [`TemporalAccessor`].
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`WallClockTime`] (as its
//!   `HH:MM` text), [`ChronoUnit`] and [`TimeField`].

mod clock;
mod date_range;
mod error;
mod field;
mod range;
mod steppable;
mod unit;
mod wall_clock;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock, TemporalAccessor};
pub use date_range::DateRange;
pub use error::{Result, TemporalError};
pub use field::TimeField;
pub use range::{RangeIter, RangeSplitter, StepRange, StepRangeBuilder};
pub use steppable::Steppable;
pub use unit::ChronoUnit;
pub use wall_clock::WallClockTime;
