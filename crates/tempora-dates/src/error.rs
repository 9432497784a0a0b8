//! Error types for the tempora-dates codec.

use thiserror::Error;

use crate::calendar::{Calendar, YearMonthDay};

/// Why a date failed validation. Each message names the offending field and
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
  #[error("calendar must be one of AM, J, A; received {0:?}")]
  UnknownCalendar(String),

  #[error("year_end {end} is before year_begin {begin}")]
  YearRangeReversed { begin: i32, end: i32 },

  #[error("month must be a full English month name; received {0:?}")]
  UnknownMonth(String),

  #[error("{field} {month} does not exist in calendar {calendar}")]
  MonthOutOfRange {
    field:    &'static str,
    calendar: Calendar,
    month:    u8,
  },

  #[error(
    "month_end {end} is before month_begin {begin} with only year {year} \
     given"
  )]
  MonthRangeReversed { year: i32, begin: u8, end: u8 },

  #[error("{field} {day} out of bounds for year-month {year}-{month} (1..={max})")]
  DayOutOfRange {
    field: &'static str,
    day:   u8,
    year:  i32,
    month: u8,
    max:   u8,
  },

  #[error("known limit must be one of TPQ, TAQ; received {0:?}")]
  UnknownKnownLimit(String),

  #[error("begin {begin} is after end {end}")]
  BeginAfterEnd {
    begin: YearMonthDay,
    end:   YearMonthDay,
  },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// The string does not decompose into the positional date grammar.
  #[error("malformed date string {raw:?}: {reason}")]
  Malformed { raw: String, reason: &'static str },

  #[error("missing required field {0}")]
  MissingField(&'static str),

  /// A sub-token could not be read as the expected type.
  #[error("cannot read {field} from {value:?}")]
  Coercion { field: &'static str, value: String },

  #[error("invalid date: {0}")]
  Invalid(#[from] InvalidDate),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
