//! Date-string parser.
//!
//! Grammar (whitespace-separated, trailing fields optional):
//!
//! ```text
//! <calendar> <year-part> <month-part> <day-part> [<TAG>]
//! part := <begin> | <begin>/<end> | <begin>-<end>
//! ```
//!
//! Pipeline:
//!   raw &str
//!     └─ strip_known_limit()  → (body, Option<tag>)
//!          └─ split_part() ×3  → RawDateFields
//!               └─ DateEntry::from_fields()

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
  ParsedDate,
  entry::{DateEntry, RawDateFields},
  error::{Error, Result},
};

/// `begin`, optionally followed by `/end` or `-end`.
static PART_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^(\w+)(?:[/-](\w+))?$").expect("valid date part regex")
});

/// A bracketed tag at the very end of the string, e.g. `[TPQ]`.
static KNOWN_LIMIT_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\[(\w*)\]\s*$").expect("valid known-limit regex"));

const POSITIONAL_FIELDS: usize = 4;

fn malformed(raw: &str, reason: &'static str) -> Error {
  Error::Malformed {
    raw: raw.to_string(),
    reason,
  }
}

/// Split off a trailing `[TAG]`, returning the remaining text and the tag.
fn strip_known_limit(raw: &str) -> (&str, Option<String>) {
  match KNOWN_LIMIT_RE.captures(raw) {
    Some(caps) => {
      let whole = caps.get(0).map_or(raw.len(), |m| m.start());
      (&raw[..whole], caps.get(1).map(|m| m.as_str().to_string()))
    }
    None => (raw, None),
  }
}

/// Split one positional part into its begin and optional end.
fn split_part(
  raw: &str,
  part: &str,
) -> Result<(Option<String>, Option<String>)> {
  let caps = PART_RE
    .captures(part)
    .ok_or_else(|| malformed(raw, "date part is not <begin>, <begin>/<end> or <begin>-<end>"))?;
  Ok((
    caps.get(1).map(|m| m.as_str().to_string()),
    caps.get(2).map(|m| m.as_str().to_string()),
  ))
}

/// Decompose `raw` into untyped fields without validating any values.
pub fn split_fields(raw: &str) -> Result<RawDateFields> {
  let (body, known_limit) = strip_known_limit(raw);

  if body.contains(['[', ']']) {
    return Err(malformed(raw, "known-limit tag must end the string"));
  }

  let tokens: Vec<&str> = body.split_whitespace().collect();
  if tokens.is_empty() {
    return Err(malformed(raw, "no calendar given"));
  }
  if tokens.len() > POSITIONAL_FIELDS {
    return Err(malformed(raw, "too many fields"));
  }

  let part = |i: usize| -> Result<(Option<String>, Option<String>)> {
    match tokens.get(i) {
      Some(t) => split_part(raw, t),
      None => Ok((None, None)),
    }
  };
  let (year_begin, year_end) = part(1)?;
  let (month_begin, month_end) = part(2)?;
  let (day_begin, day_end) = part(3)?;

  Ok(RawDateFields {
    calendar: Some(tokens[0].to_string()),
    year_begin,
    year_end,
    month_begin,
    month_end,
    day_begin,
    day_end,
    known_limit,
  })
}

/// Parse and validate a single date string.
pub fn parse_one(raw: &str) -> Result<ParsedDate> {
  let fields = split_fields(raw)?;
  let entry = DateEntry::from_fields(&fields)?;
  Ok(ParsedDate {
    raw: raw.to_string(),
    entry,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    calendar::{Calendar, YearMonthDay},
    entry::KnownLimit,
    error::InvalidDate,
  };

  fn fields(raw: &str) -> RawDateFields { split_fields(raw).unwrap() }

  // ── Splitting ─────────────────────────────────────────────────────────────

  #[test]
  fn slash_and_hyphen_both_mark_ranges() {
    let f = fields("J 1200/1205 March-April 10");
    assert_eq!(f.year_begin.as_deref(), Some("1200"));
    assert_eq!(f.year_end.as_deref(), Some("1205"));
    assert_eq!(f.month_begin.as_deref(), Some("March"));
    assert_eq!(f.month_end.as_deref(), Some("April"));
    assert_eq!(f.day_begin.as_deref(), Some("10"));
    assert_eq!(f.day_end, None);
  }

  #[test]
  fn missing_trailing_fields_are_unset() {
    let f = fields("A 500");
    assert_eq!(f.calendar.as_deref(), Some("A"));
    assert_eq!(f.month_begin, None);
    assert_eq!(f.day_begin, None);
    assert_eq!(f.known_limit, None);
  }

  #[test]
  fn known_limit_is_stripped_before_splitting() {
    let f = fields("AM 6500 [TPQ]");
    assert_eq!(f.known_limit.as_deref(), Some("TPQ"));
    assert_eq!(f.month_begin, None);

    let f = fields("J 1200 March 3[TAQ]");
    assert_eq!(f.known_limit.as_deref(), Some("TAQ"));
    assert_eq!(f.day_begin.as_deref(), Some("3"));
  }

  #[test]
  fn empty_tag_is_kept_for_validation() {
    let f = fields("J 1200 []");
    assert_eq!(f.known_limit.as_deref(), Some(""));
  }

  #[test]
  fn structural_errors() {
    for raw in [
      "",
      "   ",
      "J 1200 March 10 extra",
      "J 1200/ March",
      "J 1200/1201/1202",
      "J 12.00",
      "J [TPQ] 1200",
    ] {
      assert!(
        matches!(split_fields(raw), Err(Error::Malformed { .. })),
        "{raw:?}"
      );
    }
  }

  // ── Full parse ────────────────────────────────────────────────────────────

  #[test]
  fn julian_ranges_with_single_day() {
    let p = parse_one("J 1200/1205 March/April 10").unwrap();
    let e = p.entry();
    assert_eq!(e.calendar(), Calendar::Julian);
    assert_eq!((e.year_begin(), e.year_end()), (1200, 1205));
    assert_eq!((e.month_begin(), e.month_end()), (3, 4));
    assert_eq!((e.day_begin(), e.day_end()), (10, 10));
  }

  #[test]
  fn anno_mundi_year_with_tpq() {
    let p = parse_one("AM 6500 [TPQ]").unwrap();
    assert_eq!(p.entry().known_limit(), Some(KnownLimit::Tpq));
    assert_eq!(
      p.raw_duration(),
      (YearMonthDay::new(6500, 1, 1), YearMonthDay::new(6500, 12, 31))
    );
    assert!(!p.jd_duration().is_position());
  }

  #[test]
  fn single_day_is_position() {
    let p = parse_one("AM 6500 March 3 [TPQ]").unwrap();
    let jd = p.jd_duration();
    assert!(jd.is_position());
    assert_eq!(jd.begin, crate::calendar::byzantine_to_jd(6500, 3, 3));
  }

  #[test]
  fn invalid_month_name() {
    let err = parse_one("J 1200 Marchh 10").unwrap_err();
    assert_eq!(
      err,
      Error::Invalid(InvalidDate::UnknownMonth("Marchh".to_string()))
    );
  }

  #[test]
  fn day_past_end_of_february() {
    let err = parse_one("J 1200 February 30").unwrap_err();
    assert!(matches!(
      err,
      Error::Invalid(InvalidDate::DayOutOfRange { day: 30, max: 29, .. })
    ));
    let err = parse_one("J 1201 February 29").unwrap_err();
    assert!(matches!(
      err,
      Error::Invalid(InvalidDate::DayOutOfRange { day: 29, max: 28, .. })
    ));
  }

  #[test]
  fn unknown_tag_rejected() {
    let err = parse_one("J 1200 [circa]").unwrap_err();
    assert_eq!(
      err,
      Error::Invalid(InvalidDate::UnknownKnownLimit("circa".to_string()))
    );
  }

  #[test]
  fn raw_string_preserved() {
    let p = parse_one("A 600 June 3").unwrap();
    assert_eq!(p.raw(), "A 600 June 3");
  }
}
