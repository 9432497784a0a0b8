//! Calendar arithmetic: (calendar, year, month, day) → Julian Day.
//!
//! All converters return the Julian Day at 00:00 of the civil day, floored to
//! an integer (one less than the astronomical noon-based Julian Day Number).
//! The three calendars share this convention, so intervals computed in
//! different calendars compare directly.
//!
//! Inputs are assumed normalized; range checks happen in
//! [`crate::entry::DateCandidate::validate`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::InvalidDate;

/// Month number of the five Armenian epagomenal days.
pub const EPAGOMENAL_MONTH: u8 = 13;

/// Days between the Anno Mundi and Julian year numberings:
/// `5509 * 365 + floor(5509 / 4) + 1`.
pub const BYZANTINE_EPOCH_OFFSET: i64 = 5509 * 365 + 5509 / 4 + 1;

/// Floored Julian Day of Armenian year 0, month 1, day 0.
const ARMENIAN_EPOCH: i64 = 1_922_501;

// ─── Calendar ────────────────────────────────────────────────────────────────

/// A supported calendar system, identified in source data by its code.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Calendar {
  /// Byzantine world era (`AM`).
  #[serde(rename = "AM")]
  AnnoMundi,
  /// Proleptic Julian calendar (`J`).
  #[serde(rename = "J")]
  Julian,
  /// Armenian calendar (`A`): 12 × 30 days plus 5 epagomenal days.
  #[serde(rename = "A")]
  Armenian,
}

impl Calendar {
  pub const ALL: [Calendar; 3] =
    [Calendar::AnnoMundi, Calendar::Julian, Calendar::Armenian];

  /// The code used in date strings.
  pub fn code(self) -> &'static str {
    match self {
      Self::AnnoMundi => "AM",
      Self::Julian => "J",
      Self::Armenian => "A",
    }
  }

  /// Highest month number this calendar has.
  pub fn last_month(self) -> u8 {
    match self {
      Self::Armenian => EPAGOMENAL_MONTH,
      Self::AnnoMundi | Self::Julian => 12,
    }
  }

  pub fn to_julian_day(self, date: YearMonthDay) -> i64 {
    to_julian_day(self, date.year, date.month, date.day)
  }
}

impl FromStr for Calendar {
  type Err = InvalidDate;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|c| c.code() == s)
      .ok_or_else(|| InvalidDate::UnknownCalendar(s.to_string()))
  }
}

impl fmt::Display for Calendar {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

// ─── Dates and intervals ─────────────────────────────────────────────────────

/// A calendar-relative date; ordered lexicographically by (year, month, day).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
pub struct YearMonthDay {
  pub year:  i32,
  pub month: u8,
  pub day:   u8,
}

impl YearMonthDay {
  pub fn new(year: i32, month: u8, day: u8) -> Self { Self { year, month, day } }
}

impl fmt::Display for YearMonthDay {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {}, {})", self.year, self.month, self.day)
  }
}

/// An absolute, calendar-independent day range with `begin <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JulianDayInterval {
  pub begin: i64,
  pub end:   i64,
}

impl JulianDayInterval {
  /// A single day: the interval starts and ends on the same Julian Day.
  pub fn is_position(&self) -> bool { self.begin == self.end }

  /// Number of days covered, counting both ends.
  pub fn days(&self) -> i64 { self.end - self.begin + 1 }
}

// ─── Converters ──────────────────────────────────────────────────────────────

/// Proleptic Julian calendar date → floored Julian Day.
///
/// Integer form of the Meeus algorithm with `B = 0`; January and February are
/// counted as months 13 and 14 of the preceding year.
pub fn julian_to_jd(year: i32, month: u8, day: u8) -> i64 {
  let (y, m) = if month <= 2 {
    (i64::from(year) - 1, i64::from(month) + 12)
  } else {
    (i64::from(year), i64::from(month))
  };
  (1461 * (y + 4716)).div_euclid(4) + (306 * (m + 1)) / 10 + i64::from(day)
    - 1525
}

/// Armenian date → floored Julian Day. Year 1, month 1, day 1 falls on
/// Julian 552-07-11.
pub fn armenian_to_jd(year: i32, month: u8, day: u8) -> i64 {
  ARMENIAN_EPOCH
    + 365 * i64::from(year)
    + 30 * (i64::from(month) - 1)
    + i64::from(day)
}

/// Anno Mundi date → floored Julian Day.
///
/// The AM date is read as a Julian calendar date and shifted back by the
/// fixed [`BYZANTINE_EPOCH_OFFSET`]; existing data depends on this exact
/// formula.
pub fn byzantine_to_jd(year: i32, month: u8, day: u8) -> i64 {
  julian_to_jd(year, month, day) - BYZANTINE_EPOCH_OFFSET
}

pub fn to_julian_day(calendar: Calendar, year: i32, month: u8, day: u8) -> i64 {
  match calendar {
    Calendar::AnnoMundi => byzantine_to_jd(year, month, day),
    Calendar::Julian => julian_to_jd(year, month, day),
    Calendar::Armenian => armenian_to_jd(year, month, day),
  }
}

// ─── Month lengths ───────────────────────────────────────────────────────────

pub fn is_julian_leap_year(year: i32) -> bool { year.rem_euclid(4) == 0 }

/// Days in `month` of `year`, or `None` if the calendar has no such month.
///
/// Anno Mundi years follow the Julian leap rule applied to the AM year number,
/// matching [`byzantine_to_jd`].
pub fn days_in_month(calendar: Calendar, year: i32, month: u8) -> Option<u8> {
  match (calendar, month) {
    (Calendar::Armenian, 1..=12) => Some(30),
    (Calendar::Armenian, EPAGOMENAL_MONTH) => Some(5),
    (Calendar::Armenian, _) => None,
    (Calendar::AnnoMundi | Calendar::Julian, 2) => {
      Some(if is_julian_leap_year(year) { 29 } else { 28 })
    }
    (Calendar::AnnoMundi | Calendar::Julian, 4 | 6 | 9 | 11) => Some(30),
    (Calendar::AnnoMundi | Calendar::Julian, 1 | 3 | 5 | 7 | 8 | 10 | 12) => {
      Some(31)
    }
    (Calendar::AnnoMundi | Calendar::Julian, _) => None,
  }
}

#[cfg(test)]
mod tests {
  use chrono::{Datelike, NaiveDate};

  use super::*;

  /// Floored Julian Day of a proleptic Gregorian date.
  fn gregorian_jd(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + 1_721_424
  }

  // ── Julian ────────────────────────────────────────────────────────────────

  #[test]
  fn julian_known_values() {
    // Day before the Gregorian reform: Julian 1582-10-04 = Gregorian 10-14.
    assert_eq!(julian_to_jd(1582, 10, 4), 2_299_159);
    assert_eq!(julian_to_jd(1582, 10, 5), 2_299_160);
    // Julian 1999-12-19 = Gregorian 2000-01-01 (JDN 2451545).
    assert_eq!(julian_to_jd(1999, 12, 19), 2_451_544);
  }

  #[test]
  fn julian_matches_gregorian_where_calendars_agree() {
    // Both calendars name the same days from 200-03-01 to 300-02-28.
    let mut date = NaiveDate::from_ymd_opt(200, 3, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(300, 2, 28).unwrap();
    while date <= last {
      assert_eq!(
        julian_to_jd(date.year(), date.month() as u8, date.day() as u8),
        gregorian_jd(date),
        "{date}"
      );
      date = date.succ_opt().unwrap();
    }
  }

  #[test]
  fn julian_leap_day_is_counted() {
    assert!(is_julian_leap_year(1200));
    assert!(is_julian_leap_year(1300));
    assert!(!is_julian_leap_year(1201));
    assert_eq!(julian_to_jd(1300, 3, 1) - julian_to_jd(1300, 2, 28), 2);
    assert_eq!(julian_to_jd(1301, 3, 1) - julian_to_jd(1301, 2, 28), 1);
  }

  // ── Armenian ──────────────────────────────────────────────────────────────

  #[test]
  fn armenian_epoch_is_552_07_11_julian() {
    assert_eq!(armenian_to_jd(1, 1, 1), julian_to_jd(552, 7, 11));
  }

  #[test]
  fn armenian_year_is_365_days() {
    assert_eq!(armenian_to_jd(501, 1, 1) - armenian_to_jd(500, 1, 1), 365);
    // Last epagomenal day is the day before the next new year.
    assert_eq!(armenian_to_jd(501, 1, 1) - armenian_to_jd(500, 13, 5), 1);
  }

  // ── Anno Mundi ────────────────────────────────────────────────────────────

  #[test]
  fn byzantine_offset_constant() {
    assert_eq!(BYZANTINE_EPOCH_OFFSET, 2_012_163);
    assert_eq!(
      byzantine_to_jd(6500, 3, 1),
      julian_to_jd(6500, 3, 1) - 2_012_163
    );
  }

  #[test]
  fn byzantine_5509_aligns_with_julian_year_zero() {
    // AM 5509-01-01 lands on Julian 1 BC (year 0) January 1, a leap year
    // before Julian 1-01-01.
    assert_eq!(byzantine_to_jd(5509, 1, 1), julian_to_jd(0, 1, 1));
    assert_eq!(julian_to_jd(1, 1, 1) - byzantine_to_jd(5509, 1, 1), 366);
  }

  #[test]
  fn dispatch_by_calendar() {
    assert_eq!(
      to_julian_day(Calendar::Julian, 1200, 3, 10),
      julian_to_jd(1200, 3, 10)
    );
    assert_eq!(
      to_julian_day(Calendar::AnnoMundi, 6700, 9, 1),
      byzantine_to_jd(6700, 9, 1)
    );
    assert_eq!(
      to_julian_day(Calendar::Armenian, 600, 13, 5),
      armenian_to_jd(600, 13, 5)
    );
  }

  // ── Month lengths ─────────────────────────────────────────────────────────

  #[test]
  fn month_lengths() {
    assert_eq!(days_in_month(Calendar::Julian, 1200, 2), Some(29));
    assert_eq!(days_in_month(Calendar::Julian, 1201, 2), Some(28));
    assert_eq!(days_in_month(Calendar::AnnoMundi, 6500, 2), Some(29));
    assert_eq!(days_in_month(Calendar::Julian, 1201, 4), Some(30));
    assert_eq!(days_in_month(Calendar::Julian, 1201, 12), Some(31));
    assert_eq!(days_in_month(Calendar::Julian, 1201, 13), None);
    assert_eq!(days_in_month(Calendar::Armenian, 500, 2), Some(30));
    assert_eq!(days_in_month(Calendar::Armenian, 500, 13), Some(5));
    assert_eq!(days_in_month(Calendar::Armenian, 500, 0), None);
  }

  #[test]
  fn calendar_codes_round_trip() {
    for cal in Calendar::ALL {
      assert_eq!(cal.code().parse::<Calendar>().unwrap(), cal);
    }
    assert_eq!(
      "G".parse::<Calendar>(),
      Err(InvalidDate::UnknownCalendar("G".to_string()))
    );
    assert!("am".parse::<Calendar>().is_err());
  }
}
