//! The date entry model.
//!
//! Construction happens in two passes:
//!
//!   RawDateFields          (optional strings, straight from the parser)
//!     └─ normalize()    → DateCandidate   (typed, not yet cross-checked)
//!          └─ validate() → DateEntry       (defaults filled, invariants hold)
//!
//! `validate` is the single place where cross-field rules live.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
  calendar::{
    Calendar, EPAGOMENAL_MONTH, JulianDayInterval, YearMonthDay, days_in_month,
  },
  error::{Error, InvalidDate, Result},
};

/// Full English month names, indexed from January. Matching is exact and
/// case-sensitive: these are the spellings source spreadsheets use.
pub const MONTH_NAMES: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December",
];

/// Month number (1..=12) for a full English month name.
pub fn month_from_name(name: &str) -> Result<u8, InvalidDate> {
  MONTH_NAMES
    .iter()
    .position(|m| *m == name)
    .map(|i| i as u8 + 1)
    .ok_or_else(|| InvalidDate::UnknownMonth(name.to_string()))
}

// ─── Known limit ─────────────────────────────────────────────────────────────

/// Marks a date as one side of an open-ended bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownLimit {
  /// Terminus post quem: the true date is no earlier than this.
  #[serde(rename = "TPQ")]
  Tpq,
  /// Terminus ante quem: the true date is no later than this.
  #[serde(rename = "TAQ")]
  Taq,
}

impl KnownLimit {
  pub fn code(self) -> &'static str {
    match self {
      Self::Tpq => "TPQ",
      Self::Taq => "TAQ",
    }
  }
}

impl FromStr for KnownLimit {
  type Err = InvalidDate;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "TPQ" => Ok(Self::Tpq),
      "TAQ" => Ok(Self::Taq),
      other => Err(InvalidDate::UnknownKnownLimit(other.to_string())),
    }
  }
}

impl fmt::Display for KnownLimit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

// ─── Raw fields ──────────────────────────────────────────────────────────────

/// Untyped date fields as they appear in source data. `None` means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDateFields {
  pub calendar:    Option<String>,
  pub year_begin:  Option<String>,
  pub year_end:    Option<String>,
  pub month_begin: Option<String>,
  pub month_end:   Option<String>,
  pub day_begin:   Option<String>,
  pub day_end:     Option<String>,
  pub known_limit: Option<String>,
}

fn coerce<T: FromStr>(field: &'static str, value: &str) -> Result<T> {
  value.parse().map_err(|_| Error::Coercion {
    field,
    value: value.to_string(),
  })
}

impl RawDateFields {
  /// Field-normalization pass: type every field, check vocabularies, and
  /// nothing else.
  pub fn normalize(&self) -> Result<DateCandidate> {
    let calendar: Calendar = self
      .calendar
      .as_deref()
      .ok_or(Error::MissingField("calendar"))?
      .parse()?;
    let year_begin = coerce(
      "year_begin",
      self
        .year_begin
        .as_deref()
        .ok_or(Error::MissingField("year_begin"))?,
    )?;
    let year_end = self
      .year_end
      .as_deref()
      .map(|v| coerce("year_end", v))
      .transpose()?;
    let month_begin = self
      .month_begin
      .as_deref()
      .map(month_from_name)
      .transpose()?;
    let month_end = self.month_end.as_deref().map(month_from_name).transpose()?;
    let day_begin = self
      .day_begin
      .as_deref()
      .map(|v| coerce("day_begin", v))
      .transpose()?;
    let day_end = self
      .day_end
      .as_deref()
      .map(|v| coerce("day_end", v))
      .transpose()?;
    let known_limit = self
      .known_limit
      .as_deref()
      .map(KnownLimit::from_str)
      .transpose()?;

    Ok(DateCandidate {
      calendar,
      year_begin,
      year_end,
      month_begin,
      month_end,
      day_begin,
      day_end,
      known_limit,
    })
  }
}

// ─── Candidate ───────────────────────────────────────────────────────────────

/// Typed but unchecked date fields; `None` means "use the default".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCandidate {
  pub calendar:    Calendar,
  pub year_begin:  i32,
  pub year_end:    Option<i32>,
  pub month_begin: Option<u8>,
  pub month_end:   Option<u8>,
  pub day_begin:   Option<u8>,
  pub day_end:     Option<u8>,
  pub known_limit: Option<KnownLimit>,
}

impl DateCandidate {
  /// A candidate with only the required fields set.
  pub fn new(calendar: Calendar, year_begin: i32) -> Self {
    Self {
      calendar,
      year_begin,
      year_end: None,
      month_begin: None,
      month_end: None,
      day_begin: None,
      day_end: None,
      known_limit: None,
    }
  }

  /// Whole-object validation. Checks run in this order and the first failure
  /// is returned:
  ///
  /// 1. `year_end >= year_begin`.
  /// 2. Months exist in the calendar.
  /// 3. `month_end >= month_begin` unless an explicit `year_end` is given.
  /// 4. Defaults, in order: `year_end ← year_begin`;
  ///    `month_end ← month_begin`, else 12 (13 for Armenian);
  ///    `day_end ← day_begin`, else 5 in the epagomenal month, else 30 for
  ///    Armenian, else the length of `(year_end, month_end)`;
  ///    `month_begin ← 1`; `day_begin ← 1`.
  /// 5. Each day lies within its own resolved year and month.
  /// 6. `(year, month, day)` begin `<=` end, lexicographically.
  ///
  /// A year range with no month range therefore spans whole years: January 1
  /// of the first through the last day of the final month of the last.
  pub fn validate(self) -> Result<DateEntry, InvalidDate> {
    let Self {
      calendar,
      year_begin,
      year_end,
      month_begin,
      month_end,
      day_begin,
      day_end,
      known_limit,
    } = self;

    if let Some(end) = year_end
      && end < year_begin
    {
      return Err(InvalidDate::YearRangeReversed {
        begin: year_begin,
        end,
      });
    }

    for (field, month) in [("month_begin", month_begin), ("month_end", month_end)]
    {
      if let Some(month) = month
        && !(1..=calendar.last_month()).contains(&month)
      {
        return Err(InvalidDate::MonthOutOfRange {
          field,
          calendar,
          month,
        });
      }
    }

    if let (Some(begin), Some(end)) = (month_begin, month_end)
      && end < begin
      && year_end.is_none()
    {
      return Err(InvalidDate::MonthRangeReversed {
        year: year_begin,
        begin,
        end,
      });
    }

    // Day defaults depend on the resolved end year and month, so the order
    // below is significant.
    let year_end = year_end.unwrap_or(year_begin);
    let month_end = month_end
      .or(month_begin)
      .unwrap_or_else(|| calendar.last_month());
    let day_end = match day_end.or(day_begin) {
      Some(day) => day,
      None => default_day_end(calendar, year_end, month_end)?,
    };
    let month_begin = month_begin.unwrap_or(1);
    let day_begin = day_begin.unwrap_or(1);

    check_day("day_begin", calendar, year_begin, month_begin, day_begin)?;
    check_day("day_end", calendar, year_end, month_end, day_end)?;

    let begin = YearMonthDay::new(year_begin, month_begin, day_begin);
    let end = YearMonthDay::new(year_end, month_end, day_end);
    if begin > end {
      return Err(InvalidDate::BeginAfterEnd { begin, end });
    }

    Ok(DateEntry {
      calendar,
      begin,
      end,
      known_limit,
    })
  }
}

fn default_day_end(
  calendar: Calendar,
  year: i32,
  month: u8,
) -> Result<u8, InvalidDate> {
  if month == EPAGOMENAL_MONTH {
    return Ok(5);
  }
  if calendar == Calendar::Armenian {
    return Ok(30);
  }
  days_in_month(calendar, year, month).ok_or(InvalidDate::MonthOutOfRange {
    field: "month_end",
    calendar,
    month,
  })
}

fn check_day(
  field: &'static str,
  calendar: Calendar,
  year: i32,
  month: u8,
  day: u8,
) -> Result<(), InvalidDate> {
  let max = days_in_month(calendar, year, month).unwrap_or(0);
  if day == 0 || day > max {
    return Err(InvalidDate::DayOutOfRange {
      field,
      day,
      year,
      month,
      max,
    });
  }
  Ok(())
}

// ─── DateEntry ───────────────────────────────────────────────────────────────

/// A validated, fully defaulted date entry. Immutable once built.
///
/// Invariant: `begin() <= end()` in (year, month, day) order, and both lie
/// within the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateEntry {
  calendar:    Calendar,
  begin:       YearMonthDay,
  end:         YearMonthDay,
  known_limit: Option<KnownLimit>,
}

impl DateEntry {
  /// Normalize and validate raw fields in one go.
  pub fn from_fields(fields: &RawDateFields) -> Result<Self> {
    Ok(fields.normalize()?.validate()?)
  }

  pub fn calendar(&self) -> Calendar { self.calendar }

  pub fn year_begin(&self) -> i32 { self.begin.year }

  pub fn year_end(&self) -> i32 { self.end.year }

  pub fn month_begin(&self) -> u8 { self.begin.month }

  pub fn month_end(&self) -> u8 { self.end.month }

  pub fn day_begin(&self) -> u8 { self.begin.day }

  pub fn day_end(&self) -> u8 { self.end.day }

  pub fn known_limit(&self) -> Option<KnownLimit> { self.known_limit }

  pub fn begin(&self) -> YearMonthDay { self.begin }

  pub fn end(&self) -> YearMonthDay { self.end }

  /// Begin and end as calendar-relative triples, before conversion.
  pub fn raw_duration(&self) -> (YearMonthDay, YearMonthDay) {
    (self.begin, self.end)
  }

  /// Begin and end as Julian Days in this entry's calendar.
  pub fn jd_duration(&self) -> JulianDayInterval {
    JulianDayInterval {
      begin: self.calendar.to_julian_day(self.begin),
      end:   self.calendar.to_julian_day(self.end),
    }
  }
}
