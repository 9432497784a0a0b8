//! Temporal-assertion policy: which CRM bound properties a date gets.
//!
//! | extent   | known limit | assertions                          |
//! |----------|-------------|-------------------------------------|
//! | position | none        | P82 at `begin`                      |
//! | position | TAQ         | P82b at `begin`                     |
//! | position | TPQ         | P82a at `begin`                     |
//! | duration | none        | P82a at `begin`, P82b at `end`      |
//! | duration | TAQ         | P81b at `begin`, P82b at `end`      |
//! | duration | TPQ         | P82a at `begin`, P81a at `end`      |

use serde::Serialize;
use tempora_core::{Iri, vocab::crm};
use tempora_dates::{JulianDayInterval, KnownLimit};

use crate::error::{Error, Result};

/// Whether an interval is a single day or spans several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
  Position(i64),
  Duration { begin: i64, end: i64 },
}

impl Extent {
  pub fn from_interval(interval: JulianDayInterval) -> Result<Self> {
    let JulianDayInterval { begin, end } = interval;
    match begin.cmp(&end) {
      std::cmp::Ordering::Equal => Ok(Self::Position(begin)),
      std::cmp::Ordering::Less => Ok(Self::Duration { begin, end }),
      std::cmp::Ordering::Greater => {
        Err(Error::InvertedInterval { begin, end })
      }
    }
  }
}

/// One of the six time-span assertion shapes, carrying its Julian Days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum TemporalShape {
  /// Accurate single day.
  Position { at_some_time_within: i64 },
  /// Single day that is an upper bound.
  PositionTaq { end_of_the_end: i64 },
  /// Single day that is a lower bound.
  PositionTpq { begin_of_the_begin: i64 },
  /// Accurate span.
  Duration {
    begin_of_the_begin: i64,
    end_of_the_end:     i64,
  },
  /// Span within which the upper bound lies.
  DurationTaq {
    begin_of_the_end: i64,
    end_of_the_end:   i64,
  },
  /// Span within which the lower bound lies.
  DurationTpq {
    begin_of_the_begin: i64,
    end_of_the_begin:   i64,
  },
}

impl TemporalShape {
  pub fn classify(
    interval: JulianDayInterval,
    known_limit: Option<KnownLimit>,
  ) -> Result<Self> {
    use KnownLimit::{Taq, Tpq};

    let shape = match (Extent::from_interval(interval)?, known_limit) {
      (Extent::Position(jd), None) => Self::Position {
        at_some_time_within: jd,
      },
      (Extent::Position(jd), Some(Taq)) => Self::PositionTaq { end_of_the_end: jd },
      (Extent::Position(jd), Some(Tpq)) => Self::PositionTpq {
        begin_of_the_begin: jd,
      },
      (Extent::Duration { begin, end }, None) => Self::Duration {
        begin_of_the_begin: begin,
        end_of_the_end:     end,
      },
      (Extent::Duration { begin, end }, Some(Taq)) => Self::DurationTaq {
        begin_of_the_end: begin,
        end_of_the_end:   end,
      },
      (Extent::Duration { begin, end }, Some(Tpq)) => Self::DurationTpq {
        begin_of_the_begin: begin,
        end_of_the_begin:   end,
      },
    };
    Ok(shape)
  }

  /// `(CRM property, Julian Day)` pairs to assert on the time-span.
  pub fn assertions(&self) -> Vec<(Iri, i64)> {
    match *self {
      Self::Position {
        at_some_time_within,
      } => vec![(crm::p82_at_some_time_within(), at_some_time_within)],
      Self::PositionTaq { end_of_the_end } => {
        vec![(crm::p82b_end_of_the_end(), end_of_the_end)]
      }
      Self::PositionTpq { begin_of_the_begin } => {
        vec![(crm::p82a_begin_of_the_begin(), begin_of_the_begin)]
      }
      Self::Duration {
        begin_of_the_begin,
        end_of_the_end,
      } => vec![
        (crm::p82a_begin_of_the_begin(), begin_of_the_begin),
        (crm::p82b_end_of_the_end(), end_of_the_end),
      ],
      Self::DurationTaq {
        begin_of_the_end,
        end_of_the_end,
      } => vec![
        (crm::p81b_begin_of_the_end(), begin_of_the_end),
        (crm::p82b_end_of_the_end(), end_of_the_end),
      ],
      Self::DurationTpq {
        begin_of_the_begin,
        end_of_the_begin,
      } => vec![
        (crm::p82a_begin_of_the_begin(), begin_of_the_begin),
        (crm::p81a_end_of_the_begin(), end_of_the_begin),
      ],
    }
  }

  pub fn is_position(&self) -> bool {
    matches!(
      self,
      Self::Position { .. } | Self::PositionTaq { .. } | Self::PositionTpq { .. }
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn interval(begin: i64, end: i64) -> JulianDayInterval {
    JulianDayInterval { begin, end }
  }

  fn properties(shape: TemporalShape) -> Vec<(String, i64)> {
    shape
      .assertions()
      .into_iter()
      .map(|(p, jd)| {
        let local = p.as_str().rsplit('/').next().unwrap_or_default();
        (local.to_string(), jd)
      })
      .collect()
  }

  #[test]
  fn position_shapes() {
    let p = interval(10, 10);
    assert_eq!(
      properties(TemporalShape::classify(p, None).unwrap()),
      vec![("P82_at_some_time_within".to_string(), 10)]
    );
    assert_eq!(
      properties(TemporalShape::classify(p, Some(KnownLimit::Taq)).unwrap()),
      vec![("P82b_end_of_the_end".to_string(), 10)]
    );
    assert_eq!(
      properties(TemporalShape::classify(p, Some(KnownLimit::Tpq)).unwrap()),
      vec![("P82a_begin_of_the_begin".to_string(), 10)]
    );
  }

  #[test]
  fn duration_shapes() {
    let d = interval(10, 20);
    assert_eq!(
      properties(TemporalShape::classify(d, None).unwrap()),
      vec![
        ("P82a_begin_of_the_begin".to_string(), 10),
        ("P82b_end_of_the_end".to_string(), 20),
      ]
    );
    assert_eq!(
      properties(TemporalShape::classify(d, Some(KnownLimit::Taq)).unwrap()),
      vec![
        ("P81b_begin_of_the_end".to_string(), 10),
        ("P82b_end_of_the_end".to_string(), 20),
      ]
    );
    assert_eq!(
      properties(TemporalShape::classify(d, Some(KnownLimit::Tpq)).unwrap()),
      vec![
        ("P82a_begin_of_the_begin".to_string(), 10),
        ("P81a_end_of_the_begin".to_string(), 20),
      ]
    );
  }

  #[test]
  fn inverted_interval_is_an_error() {
    let err = TemporalShape::classify(interval(20, 10), None).unwrap_err();
    assert!(matches!(err, Error::InvertedInterval { begin: 20, end: 10 }));
  }

  #[test]
  fn shape_serializes_with_tag() {
    let shape =
      TemporalShape::classify(interval(1, 2), Some(KnownLimit::Tpq)).unwrap();
    let json = serde_json::to_value(shape).unwrap();
    assert_eq!(json["shape"], "duration_tpq");
    assert_eq!(json["end_of_the_begin"], 2);
    assert!(!shape.is_position());
  }
}
