// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible operation of the crate.

use crate::{ChronoUnit, TimeField};
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TemporalError>;

/// Failures raised while building ranges, stepping through them, or
/// constructing and adjusting [`WallClockTime`](crate::WallClockTime) values.
///
/// Every failure is synchronous: it is returned by the call that caused it
/// and never deferred to a later operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemporalError {
    /// A required builder argument was never supplied.
    #[error("missing required argument `{name}`")]
    MissingArgument { name: &'static str },

    /// The step points away from the end point (or the end point equals the
    /// start), so iteration would never terminate.
    #[error("endless range: a step of {step} never reaches an end {length} units away")]
    InvalidRange { length: i64, step: i64 },

    /// A cursor was asked for an element after producing its last one.
    #[error("sequence exhausted")]
    Exhausted,

    /// A field value outside its valid range.
    #[error("invalid value for {field}: {value} (valid values {min} - {max})")]
    InvalidField {
        field: TimeField,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The field is not part of the value's supported set.
    #[error("unsupported field: {0}")]
    UnsupportedField(TimeField),

    /// The unit is not part of the value's supported set.
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(ChronoUnit),

    /// The source value exposes no time of day.
    #[error("unable to obtain a wall-clock time from a value of type {type_name}")]
    UnsupportedSource { type_name: &'static str },

    /// Text that is not a two-digit `HH:MM` rendering.
    #[error("text '{text}' could not be parsed as HH:MM")]
    InvalidText { text: String },
}
