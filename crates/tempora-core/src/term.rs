//! RDF terms — the values a time-span assertion is built from.
//!
//! Only what the generators need is modelled: IRIs, plain and datatyped
//! literals, and triples whose subject is always an IRI. Blank nodes never
//! occur in the output.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── IRI ─────────────────────────────────────────────────────────────────────

/// An absolute IRI, stored without the surrounding angle brackets.
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Iri(String);

/// Characters that may not appear in an IRI reference (RFC 3987 `iprivate`
/// aside); the same set N-Triples rejects inside `<…>`.
const FORBIDDEN: &[char] = &['<', '>', '"', '{', '}', '|', '^', '`', '\\'];

impl Iri {
  /// Validate and wrap `value`.
  ///
  /// The value must be non-empty, carry a scheme (`scheme:`), and contain no
  /// whitespace or characters forbidden in N-Triples IRI references.
  pub fn new(value: impl Into<String>) -> Result<Self> {
    let value = value.into();
    let has_scheme = value
      .split_once(':')
      .is_some_and(|(scheme, _)| {
        !scheme.is_empty()
          && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
          && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
      });
    let clean = !value
      .chars()
      .any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN.contains(&c));

    if has_scheme && clean {
      Ok(Self(value))
    } else {
      Err(Error::InvalidIri(value))
    }
  }

  /// Wrap a vocabulary constant that is known to be valid.
  pub(crate) fn from_static(value: &'static str) -> Self {
    debug_assert!(Self::new(value).is_ok(), "bad vocabulary IRI {value}");
    Self(value.to_string())
  }

  /// Append `local` to this IRI, treating `self` as a namespace.
  pub fn join(&self, local: &str) -> Result<Self> {
    Self::new(format!("{}{local}", self.0))
  }

  /// Mint a fresh resource IRI in `namespace` from a random UUID.
  pub fn mint(namespace: &Iri) -> Self {
    // A hyphenated UUID never contains a forbidden character.
    Self(format!("{}{}", namespace.0, Uuid::new_v4()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for Iri {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> { Self::new(value) }
}

impl From<Iri> for String {
  fn from(iri: Iri) -> Self { iri.0 }
}

impl AsRef<str> for Iri {
  fn as_ref(&self) -> &str { &self.0 }
}

// ─── Literal ─────────────────────────────────────────────────────────────────

/// A literal object value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Literal {
  /// A simple string literal (`xsd:string`), e.g. an `rdfs:label`.
  Plain(String),
  /// A literal with an explicit datatype IRI.
  Typed { lexical: String, datatype: Iri },
}

impl Literal {
  pub fn plain(value: impl Into<String>) -> Self { Self::Plain(value.into()) }

  /// An integer literal under `datatype`, e.g. a Julian Day number.
  pub fn integer(value: i64, datatype: &Iri) -> Self {
    Self::Typed {
      lexical:  value.to_string(),
      datatype: datatype.clone(),
    }
  }

  /// The lexical form, without quotes or datatype.
  pub fn lexical(&self) -> &str {
    match self {
      Self::Plain(s) => s,
      Self::Typed { lexical, .. } => lexical,
    }
  }

  pub fn datatype(&self) -> Option<&Iri> {
    match self {
      Self::Plain(_) => None,
      Self::Typed { datatype, .. } => Some(datatype),
    }
  }
}

// ─── Term ────────────────────────────────────────────────────────────────────

/// The object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Term {
  Iri(Iri),
  Literal(Literal),
}

impl Term {
  pub fn as_literal(&self) -> Option<&Literal> {
    match self {
      Self::Literal(l) => Some(l),
      Self::Iri(_) => None,
    }
  }

  pub fn as_iri(&self) -> Option<&Iri> {
    match self {
      Self::Iri(i) => Some(i),
      Self::Literal(_) => None,
    }
  }
}

impl From<Iri> for Term {
  fn from(iri: Iri) -> Self { Self::Iri(iri) }
}

impl From<Literal> for Term {
  fn from(literal: Literal) -> Self { Self::Literal(literal) }
}

// ─── Triple ──────────────────────────────────────────────────────────────────

/// A single `(subject, predicate, object)` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
  pub subject:   Iri,
  pub predicate: Iri,
  pub object:    Term,
}

impl Triple {
  pub fn new(subject: Iri, predicate: Iri, object: impl Into<Term>) -> Self {
    Self {
      subject,
      predicate,
      object: object.into(),
    }
  }
}

/// Build one triple per `(predicate, object)` pair, all about `subject`.
pub fn about<I, O>(subject: &Iri, pairs: I) -> Vec<Triple>
where
  I: IntoIterator<Item = (Iri, O)>,
  O: Into<Term>,
{
  pairs
    .into_iter()
    .map(|(p, o)| Triple::new(subject.clone(), p, o))
    .collect()
}
