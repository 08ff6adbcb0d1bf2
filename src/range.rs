// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lazy, splittable ranges over steppable values.
//!
//! A [`StepRange<T>`] describes the values `start`, `start + step`,
//! `start + 2·step`, … (in [`ChronoUnit`]s) up to, but excluding, an end
//! point.  The range itself is immutable; every pass over it goes through a
//! fresh cursor:
//!
//! - [`RangeIter`]: a double-ended, exact-size iterator.
//! - [`RangeSplitter`]: a cursor that can hand off the back half of its
//!   remaining extent, so disjoint parts can be consumed on separate threads.
//!
//! Every element is computed from a single origin as `origin.plus(offset)`,
//! never by chaining steps, so month-end clamping cannot accumulate and a
//! split range yields exactly the values of the unsplit one.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tempora::{ChronoUnit, StepRange};
//!
//! let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2019, 1, 21).unwrap();
//! let range = StepRange::new(start, end, 1, ChronoUnit::Days).unwrap();
//!
//! assert_eq!(range.len(), 20);
//! assert_eq!(range.iter().next(), Some(start));
//! ```

use crate::{ChronoUnit, Result, Steppable, TemporalError};
use qtty::Seconds;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Whether a cursor at `current` has reached or passed `end` moving by `step`.
#[inline]
fn reached(current: i64, end: i64, step: i64) -> bool {
    if step > 0 {
        current >= end
    } else if step < 0 {
        current <= end
    } else {
        true
    }
}

/// Elements left between offsets `current` (inclusive) and `end` (exclusive).
#[inline]
fn elements_between(current: i64, end: i64, step: i64) -> u64 {
    if reached(current, end, step) {
        0
    } else {
        end.abs_diff(current).div_ceil(step.unsigned_abs())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// StepRange
// ═══════════════════════════════════════════════════════════════════════════

/// An evenly spaced, end-exclusive sequence of `T` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRange<T: Steppable> {
    /// Value all offsets are measured from.
    origin: T,
    /// First element, i.e. `origin` advanced by `first`.
    start: T,
    first: i64,
    length: i64,
    step: i64,
    unit: ChronoUnit,
}

impl<T: Steppable> StepRange<T> {
    /// Creates the range `[start, end_exclusive)` advancing `step` units per
    /// element.
    ///
    /// The step must point from `start` towards `end_exclusive`: a range
    /// whose end lies on the other side, whose end equals its start, or
    /// whose step is zero is rejected with [`TemporalError::InvalidRange`].
    /// A unit `T` cannot step by yields [`TemporalError::UnsupportedUnit`].
    pub fn new(start: T, end_exclusive: T, step: i64, unit: ChronoUnit) -> Result<Self> {
        if !T::supports_unit(unit) {
            return Err(TemporalError::UnsupportedUnit(unit));
        }
        let length = start.between(&end_exclusive, unit)?;
        let direction = start.cmp(&end_exclusive) as i64;
        if direction * step.signum() >= 0 {
            debug!(length, step, %unit, "rejecting endless step range");
            return Err(TemporalError::InvalidRange { length, step });
        }
        let range = Self::with_length(start.clone(), start, 0, length, step, unit);
        trace!(
            length,
            step,
            %unit,
            span_secs = range.nominal_span().value(),
            "step range created"
        );
        Ok(range)
    }

    /// Creates a range from a precomputed unit length, skipping validation.
    ///
    /// `start` must be `origin` advanced by `first` units, and `length` and
    /// `step` must agree in sign (or `length` must be zero).
    pub(crate) fn with_length(
        origin: T,
        start: T,
        first: i64,
        length: i64,
        step: i64,
        unit: ChronoUnit,
    ) -> Self {
        Self {
            origin,
            start,
            first,
            length,
            step,
            unit,
        }
    }

    /// Starts a [`StepRangeBuilder`].
    pub fn builder() -> StepRangeBuilder<T> {
        StepRangeBuilder::default()
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The first element (inclusive).
    #[inline]
    pub fn start(&self) -> &T {
        &self.start
    }

    /// Units advanced per element.
    #[inline]
    pub fn step(&self) -> i64 {
        self.step
    }

    #[inline]
    pub fn unit(&self) -> ChronoUnit {
        self.unit
    }

    /// Signed unit distance from the first element to the exclusive end.
    #[inline]
    pub fn length(&self) -> i64 {
        self.length
    }

    /// The exclusive end point, or `None` if it is not representable.
    pub fn end(&self) -> Option<T> {
        self.origin.plus(self.first.checked_add(self.length)?, self.unit)
    }

    /// Number of elements the range produces.
    #[inline]
    pub fn len(&self) -> u64 {
        elements_between(self.first, self.first + self.length, self.step)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Approximate wall time covered from the first element to the end,
    /// using [`ChronoUnit::nominal_duration`].
    pub fn nominal_span(&self) -> Seconds {
        Seconds::new(self.unit.nominal_duration().value() * self.length.unsigned_abs() as f64)
    }

    /// Whether iterating the range would produce `value`.
    pub fn contains(&self, value: &T) -> bool {
        if self.step == 0 {
            return false;
        }
        let Ok(offset) = self.origin.between(value, self.unit) else {
            return false;
        };
        // Month-end clamping can leave the measured distance one unit short.
        (offset.saturating_sub(1)..=offset.saturating_add(1)).any(|candidate| {
            let relative = candidate - self.first;
            let in_bounds = if self.step > 0 {
                relative >= 0 && relative < self.length
            } else {
                relative <= 0 && relative > self.length
            };
            in_bounds
                && relative % self.step == 0
                && self.origin.plus(candidate, self.unit).as_ref() == Some(value)
        })
    }

    // ── cursors ───────────────────────────────────────────────────────

    /// A fresh cursor over every element.
    pub fn iter(&self) -> RangeIter<T> {
        RangeIter {
            origin: self.origin.clone(),
            unit: self.unit,
            step: self.step,
            front: self.first,
            remaining: self.len(),
        }
    }

    /// A fresh splittable cursor over every element.
    pub fn splitter(&self) -> RangeSplitter<T> {
        RangeSplitter {
            origin: self.origin.clone(),
            unit: self.unit,
            step: self.step,
            current: self.first,
            end: self.first + self.length,
        }
    }

    /// Splits the range at the midpoint of its elements.
    ///
    /// Returns the range unchanged and `None` when fewer than two elements
    /// exist.  Otherwise the two halves are disjoint, cover every element
    /// and, consumed head first, yield the same sequence as `self`.
    pub fn split(self) -> (Self, Option<Self>) {
        let mut head = self.splitter();
        let Some(tail) = head.try_split() else {
            return (self, None);
        };
        match (head.into_range(), tail.into_range()) {
            (Some(head), Some(tail)) => (head, Some(tail)),
            _ => (self, None),
        }
    }

    /// Divides the range into at most `parts` disjoint, ordered splitters.
    ///
    /// The largest remaining part is halved until `parts` is reached or no
    /// part can be split further.
    pub fn splitters(&self, parts: usize) -> Vec<RangeSplitter<T>> {
        let mut splitters = vec![self.splitter()];
        while splitters.len() < parts.max(1) {
            let Some(largest) = splitters
                .iter()
                .enumerate()
                .max_by_key(|(_, part)| part.remaining_elements())
                .map(|(index, _)| index)
            else {
                break;
            };
            match splitters[largest].try_split() {
                Some(tail) => splitters.insert(largest + 1, tail),
                None => break,
            }
        }
        splitters
    }
}

impl<T: Steppable + Send> StepRange<T> {
    /// Calls `f` on every element, spreading the work over up to `workers`
    /// scoped threads.
    ///
    /// Elements are visited in order within each worker; no order holds
    /// across workers.
    pub fn par_for_each<F>(&self, workers: usize, f: F)
    where
        F: Fn(T) + Sync,
    {
        let f = &f;
        std::thread::scope(|scope| {
            for part in self.splitters(workers) {
                scope.spawn(move || part.for_each(f));
            }
        });
    }

    /// Collects every element in order, producing the parts on up to
    /// `workers` scoped threads.
    pub fn collect_parallel(&self, workers: usize) -> Vec<T> {
        std::thread::scope(|scope| {
            let handles: Vec<_> = self
                .splitters(workers)
                .into_iter()
                .map(|part| scope.spawn(move || part.collect::<Vec<T>>()))
                .collect();
            let mut values = Vec::new();
            for handle in handles {
                match handle.join() {
                    Ok(part) => values.extend(part),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
            values
        })
    }
}

impl<'a, T: Steppable> IntoIterator for &'a StepRange<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Steppable> IntoIterator for StepRange<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// StepRangeBuilder
// ═══════════════════════════════════════════════════════════════════════════

/// Incremental construction of a [`StepRange`].
///
/// `start`, `end` and `unit` are required; `step` defaults to `1`.
#[derive(Debug, Clone)]
pub struct StepRangeBuilder<T: Steppable> {
    start: Option<T>,
    end: Option<T>,
    step: i64,
    unit: Option<ChronoUnit>,
}

impl<T: Steppable> Default for StepRangeBuilder<T> {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            step: 1,
            unit: None,
        }
    }
}

impl<T: Steppable> StepRangeBuilder<T> {
    pub fn start(mut self, start: T) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end_exclusive: T) -> Self {
        self.end = Some(end_exclusive);
        self
    }

    pub fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    pub fn unit(mut self, unit: ChronoUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Validates like [`StepRange::new`], after checking that every required
    /// argument was supplied.
    pub fn build(self) -> Result<StepRange<T>> {
        let start = self
            .start
            .ok_or(TemporalError::MissingArgument { name: "start" })?;
        let end = self
            .end
            .ok_or(TemporalError::MissingArgument { name: "end" })?;
        let unit = self
            .unit
            .ok_or(TemporalError::MissingArgument { name: "unit" })?;
        StepRange::new(start, end, self.step, unit)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RangeIter
// ═══════════════════════════════════════════════════════════════════════════

/// Double-ended cursor over a [`StepRange`].
#[derive(Debug, Clone)]
pub struct RangeIter<T: Steppable> {
    origin: T,
    unit: ChronoUnit,
    step: i64,
    /// Offset of the next front element.
    front: i64,
    remaining: u64,
}

impl<T: Steppable> RangeIter<T> {
    /// Like [`Iterator::next`], but reports exhaustion as
    /// [`TemporalError::Exhausted`].
    pub fn try_next(&mut self) -> Result<T> {
        self.next().ok_or(TemporalError::Exhausted)
    }

    fn value_at(&mut self, offset: i64) -> Option<T> {
        let value = self.origin.plus(offset, self.unit);
        if value.is_none() {
            self.remaining = 0;
        }
        value
    }
}

impl<T: Steppable> Iterator for RangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let offset = self.front;
        self.front = self.front.saturating_add(self.step);
        self.remaining -= 1;
        self.value_at(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl<T: Steppable> DoubleEndedIterator for RangeIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let offset = self.front + self.remaining as i64 * self.step;
        self.value_at(offset)
    }
}

impl<T: Steppable> ExactSizeIterator for RangeIter<T> {}

impl<T: Steppable> FusedIterator for RangeIter<T> {}

// ═══════════════════════════════════════════════════════════════════════════
// RangeSplitter
// ═══════════════════════════════════════════════════════════════════════════

/// Splittable cursor over the offsets `[current, end)` of a [`StepRange`].
///
/// Sizes are reported two ways: [`exact_size`](Self::exact_size) is the
/// remaining unit distance, [`remaining_elements`](Self::remaining_elements)
/// the number of values still to be produced.  They agree for unit steps.
#[derive(Debug, Clone)]
pub struct RangeSplitter<T: Steppable> {
    origin: T,
    unit: ChronoUnit,
    step: i64,
    current: i64,
    end: i64,
}

impl<T: Steppable> RangeSplitter<T> {
    /// Remaining distance in units, `0` once exhausted.
    #[inline]
    pub fn exact_size(&self) -> u64 {
        if reached(self.current, self.end, self.step) {
            0
        } else {
            self.end.abs_diff(self.current)
        }
    }

    /// Same as [`exact_size`](Self::exact_size); the extent is always known.
    #[inline]
    pub fn estimate_size(&self) -> u64 {
        self.exact_size()
    }

    #[inline]
    pub fn remaining_elements(&self) -> u64 {
        elements_between(self.current, self.end, self.step)
    }

    /// Hands off the back half of the remaining elements.
    ///
    /// `self` keeps the front half, so consuming `self` and then the
    /// returned splitter preserves order.  Returns `None` when fewer than
    /// two elements remain.
    pub fn try_split(&mut self) -> Option<Self> {
        let remaining = self.remaining_elements();
        if remaining < 2 {
            return None;
        }
        let mid = self.current + (remaining / 2) as i64 * self.step;
        trace!(current = self.current, mid, end = self.end, "split step range");
        let tail = Self {
            origin: self.origin.clone(),
            unit: self.unit,
            step: self.step,
            current: mid,
            end: self.end,
        };
        self.end = mid;
        Some(tail)
    }

    /// The remaining extent as a standalone range, or `None` if its first
    /// element is not representable.
    pub fn into_range(self) -> Option<StepRange<T>> {
        let start = self.origin.plus(self.current, self.unit)?;
        Some(StepRange::with_length(
            self.origin,
            start,
            self.current,
            self.end - self.current,
            self.step,
            self.unit,
        ))
    }
}

impl<T: Steppable> Iterator for RangeSplitter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if reached(self.current, self.end, self.step) {
            return None;
        }
        let offset = self.current;
        self.current = self.current.saturating_add(self.step);
        let value = self.origin.plus(offset, self.unit);
        if value.is_none() {
            self.current = self.end;
        }
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining_elements()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl<T: Steppable> FusedIterator for RangeSplitter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use tracing_test::traced_test;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january() -> StepRange<NaiveDate> {
        StepRange::new(date(2019, 1, 1), date(2019, 1, 21), 1, ChronoUnit::Days).unwrap()
    }

    #[test]
    fn iterates_every_day_in_order() {
        let days: Vec<u32> = january().iter().map(|d| d.day()).collect();
        assert_eq!(days, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn day_of_month_sum_matches_integer_sum() {
        let actual: u32 = january().iter().map(|d| d.day()).sum();
        assert_eq!(actual, (1..21).sum());
    }

    #[test]
    fn each_cursor_is_independent() {
        let range = january();
        let mut first = range.iter();
        first.next();
        first.next();
        assert_eq!(range.iter().next(), Some(date(2019, 1, 1)));
        assert_eq!(first.next(), Some(date(2019, 1, 3)));
    }

    #[test]
    fn wrong_direction_is_rejected() {
        assert_eq!(
            StepRange::new(date(2019, 1, 1), date(2019, 1, 21), -1, ChronoUnit::Days),
            Err(TemporalError::InvalidRange {
                length: 20,
                step: -1
            })
        );
        assert!(
            StepRange::new(date(2019, 1, 21), date(2019, 1, 1), 1, ChronoUnit::Days).is_err()
        );
    }

    #[test]
    fn zero_step_and_empty_span_are_rejected() {
        assert!(StepRange::new(date(2019, 1, 1), date(2019, 1, 5), 0, ChronoUnit::Days).is_err());
        assert!(StepRange::new(date(2019, 1, 1), date(2019, 1, 1), 1, ChronoUnit::Days).is_err());
    }

    #[test]
    fn unsupported_unit_is_rejected() {
        assert_eq!(
            StepRange::new(date(2019, 1, 1), date(2019, 1, 5), 1, ChronoUnit::Hours),
            Err(TemporalError::UnsupportedUnit(ChronoUnit::Hours))
        );
    }

    #[test]
    #[traced_test]
    fn rejection_is_logged() {
        let _ = StepRange::new(date(2019, 1, 5), date(2019, 1, 1), 1, ChronoUnit::Days);
        assert!(logs_contain("rejecting endless step range"));
    }

    #[test]
    fn backwards_range_counts_down() {
        let range =
            StepRange::new(date(2019, 1, 10), date(2019, 1, 1), -3, ChronoUnit::Days).unwrap();
        let days: Vec<u32> = range.iter().map(|d| d.day()).collect();
        assert_eq!(days, vec![10, 7, 4]);
        assert_eq!(range.len(), 3);
        assert_eq!(range.length(), -9);
    }

    #[test]
    fn uneven_step_stops_before_end() {
        let range =
            StepRange::new(date(2019, 1, 1), date(2019, 1, 11), 3, ChronoUnit::Days).unwrap();
        let days: Vec<u32> = range.iter().map(|d| d.day()).collect();
        assert_eq!(days, vec![1, 4, 7, 10]);
        assert_eq!(range.iter().len(), 4);
    }

    #[test]
    fn iterates_from_both_ends() {
        let range =
            StepRange::new(date(2019, 1, 1), date(2019, 1, 11), 3, ChronoUnit::Days).unwrap();
        let mut iter = range.iter();
        assert_eq!(iter.next_back(), Some(date(2019, 1, 10)));
        assert_eq!(iter.next(), Some(date(2019, 1, 1)));
        assert_eq!(iter.next_back(), Some(date(2019, 1, 7)));
        assert_eq!(iter.next(), Some(date(2019, 1, 4)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn try_next_reports_exhaustion() {
        let range = StepRange::new(date(2019, 1, 1), date(2019, 1, 2), 1, ChronoUnit::Days).unwrap();
        let mut iter = range.iter();
        assert_eq!(iter.try_next(), Ok(date(2019, 1, 1)));
        assert_eq!(iter.try_next(), Err(TemporalError::Exhausted));
    }

    #[test]
    fn months_do_not_accumulate_clamping() {
        let range =
            StepRange::new(date(2019, 1, 31), date(2019, 6, 1), 1, ChronoUnit::Months).unwrap();
        let values: Vec<NaiveDate> = range.iter().collect();
        assert_eq!(
            values,
            vec![
                date(2019, 1, 31),
                date(2019, 2, 28),
                date(2019, 3, 31),
                date(2019, 4, 30),
            ]
        );
        let (head, tail) = range.clone().split();
        let rejoined: Vec<NaiveDate> = head.iter().chain(tail.unwrap().iter()).collect();
        assert_eq!(rejoined, values);
        assert!(range.contains(&date(2019, 2, 28)));
        assert!(!range.contains(&date(2019, 2, 27)));
        assert!(!range.contains(&date(2019, 5, 31)));
    }

    #[test]
    fn splitter_sizes_are_unit_distances() {
        let mut splitter = january().splitter();
        assert_eq!(splitter.estimate_size(), 20);
        assert_eq!(splitter.exact_size(), 20);

        let tail = splitter.try_split().unwrap();
        assert_eq!(splitter.exact_size() + tail.exact_size(), 20);
        assert_eq!(splitter.exact_size(), 10);

        splitter.next();
        assert_eq!(splitter.exact_size(), 9);
        assert_eq!(splitter.estimate_size(), 9);
    }

    #[test]
    fn single_element_does_not_split() {
        let range = StepRange::new(date(2019, 1, 1), date(2019, 1, 2), 1, ChronoUnit::Days).unwrap();
        assert!(range.splitter().try_split().is_none());
        let (same, none) = range.clone().split();
        assert_eq!(same, range);
        assert!(none.is_none());
    }

    #[test]
    fn split_halves_concatenate_to_original() {
        let range =
            StepRange::new(date(2019, 1, 21), date(2019, 1, 1), -2, ChronoUnit::Days).unwrap();
        let expected: Vec<NaiveDate> = range.iter().collect();
        let (head, tail) = range.split();
        let tail = tail.unwrap();
        assert_eq!(head.len() + tail.len(), expected.len() as u64);
        let rejoined: Vec<NaiveDate> = head.into_iter().chain(tail).collect();
        assert_eq!(rejoined, expected);
    }

    #[test]
    fn splitters_cover_range_in_order() {
        let range = january();
        let parts = range.splitters(4);
        assert_eq!(parts.len(), 4);
        let joined: Vec<NaiveDate> = parts.into_iter().flatten().collect();
        assert_eq!(joined, range.iter().collect::<Vec<_>>());
    }

    #[test]
    fn parallel_consumption_sees_every_element() {
        use std::sync::atomic::{AtomicU64, Ordering};

        let range = january();
        let total = AtomicU64::new(0);
        range.par_for_each(4, |d| {
            total.fetch_add(u64::from(d.day()), Ordering::Relaxed);
        });
        assert_eq!(total.into_inner(), (1..21).sum());
        assert_eq!(range.collect_parallel(3), range.iter().collect::<Vec<_>>());
    }

    #[test]
    fn contains_matches_iteration() {
        let range =
            StepRange::new(date(2019, 1, 1), date(2019, 1, 11), 3, ChronoUnit::Days).unwrap();
        for day in 1..=12 {
            let value = date(2019, 1, day);
            assert_eq!(range.contains(&value), range.iter().any(|d| d == value));
        }
    }

    #[test]
    fn end_recomputes_exclusive_bound() {
        assert_eq!(january().end(), Some(date(2019, 1, 21)));
    }

    #[test]
    fn len_counts_elements_not_units() {
        let range =
            StepRange::new(date(2019, 1, 1), date(2019, 1, 11), 3, ChronoUnit::Days).unwrap();
        assert_eq!(range.len(), 4);
        assert_eq!(range.length(), 10);
        assert!(!range.is_empty());
        assert_eq!(range.len(), range.iter().count() as u64);
    }

    #[test]
    fn split_tail_keeps_the_original_origin() {
        let range =
            StepRange::new(date(2019, 1, 31), date(2019, 7, 1), 1, ChronoUnit::Months).unwrap();
        let (head, tail) = range.split();
        let tail = tail.unwrap();
        assert_eq!(head.start(), &date(2019, 1, 31));
        assert_eq!(head.end(), Some(date(2019, 3, 31)));
        assert_eq!(tail.start(), &date(2019, 3, 31));
        assert_eq!(tail.length(), 3);
        assert_eq!(tail.end(), Some(date(2019, 6, 30)));
        assert_eq!(
            tail.iter().collect::<Vec<_>>(),
            vec![date(2019, 3, 31), date(2019, 4, 30), date(2019, 5, 31)]
        );
    }

    #[test]
    fn nominal_span_scales_with_length() {
        use qtty::{Day, Days};

        let span = january().nominal_span().to::<Day>();
        assert!((span - Days::new(20.0)).abs() < Days::new(1e-9));

        let backwards =
            StepRange::new(date(2019, 1, 21), date(2019, 1, 1), -1, ChronoUnit::Days).unwrap();
        assert_eq!(
            backwards.nominal_span().value(),
            january().nominal_span().value()
        );
    }

    #[test]
    fn builder_requires_arguments() {
        let missing = StepRange::<NaiveDate>::builder()
            .start(date(2019, 1, 1))
            .unit(ChronoUnit::Days)
            .build();
        assert_eq!(missing, Err(TemporalError::MissingArgument { name: "end" }));

        let built = StepRange::builder()
            .start(date(2019, 1, 1))
            .end(date(2019, 1, 21))
            .unit(ChronoUnit::Days)
            .build()
            .unwrap();
        assert_eq!(built, january());
    }
}
