//! Historical date codec for tempora.
//!
//! Parses compact date strings in the Anno Mundi (`AM`), Julian (`J`) and
//! Armenian (`A`) calendars into validated [`DateEntry`] values and converts
//! them to Julian Day intervals. Pure synchronous; no I/O.
//!
//! # Quick start
//!
//! ```no_run
//! use tempora_dates::parse;
//!
//! let parsed = parse("J 1200/1205 March/April 10").unwrap();
//! let jd = parsed.jd_duration();
//! println!("{} .. {} ({} days)", jd.begin, jd.end, jd.days());
//! ```

pub mod calendar;
pub mod entry;
pub mod error;
mod parse;

pub use calendar::{Calendar, JulianDayInterval, YearMonthDay, to_julian_day};
pub use entry::{DateCandidate, DateEntry, KnownLimit, RawDateFields};
pub use error::{Error, InvalidDate, Result};
use serde::Serialize;

// ─── Public types ────────────────────────────────────────────────────────────

/// A validated date together with the string it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDate {
  raw:   String,
  entry: DateEntry,
}

impl ParsedDate {
  /// The original input, unchanged; used as the human-readable label.
  pub fn raw(&self) -> &str { &self.raw }

  pub fn entry(&self) -> &DateEntry { &self.entry }

  /// Begin and end as calendar-relative triples.
  pub fn raw_duration(&self) -> (YearMonthDay, YearMonthDay) {
    self.entry.raw_duration()
  }

  /// Begin and end as Julian Days.
  pub fn jd_duration(&self) -> JulianDayInterval { self.entry.jd_duration() }
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Parse a single date string.
pub fn parse(raw: &str) -> Result<ParsedDate> { parse::parse_one(raw) }

/// Split a date string into untyped fields without validating them.
pub fn split_fields(raw: &str) -> Result<RawDateFields> {
  parse::split_fields(raw)
}

/// Parse each input independently; a bad input yields `Err(…)` in its own
/// position without affecting the rest.
pub fn parse_many<'a, I>(inputs: I) -> Vec<Result<ParsedDate>>
where
  I: IntoIterator<Item = &'a str>,
{
  inputs.into_iter().map(parse::parse_one).collect()
}


#[cfg(test)]
mod parse_many_tests {
  use super::*;

  #[test]
  fn bad_line_does_not_stop_the_rest() {
    let results = parse_many(["J 1200", "J 1200 Marchh", "A 600 June 3"]);
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(
      results[1],
      Err(Error::Invalid(InvalidDate::UnknownMonth(_)))
    ));
    assert_eq!(results[2].as_ref().unwrap().raw(), "A 600 June 3");
  }
}
