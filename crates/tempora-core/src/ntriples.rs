//! N-Triples rendering.
//!
//! Every [`Triple`] renders as one statement terminated by ` .`; IRIs are
//! wrapped in `<…>` and literal lexical forms are escaped per the N-Triples
//! `STRING_LITERAL_QUOTE` production.

use std::fmt;

use crate::term::{Iri, Literal, Term, Triple};

/// Escape `\`, `"`, LF and CR inside a quoted literal.
fn escape_literal(s: &str) -> String {
  s.replace('\\', "\\\\")
   .replace('"', "\\\"")
   .replace('\n', "\\n")
   .replace('\r', "\\r")
}

impl fmt::Display for Iri {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<{}>", self.as_str())
  }
}

impl fmt::Display for Literal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Literal::Plain(s) => write!(f, "\"{}\"", escape_literal(s)),
      Literal::Typed { lexical, datatype } => {
        write!(f, "\"{}\"^^{}", escape_literal(lexical), datatype)
      }
    }
  }
}

impl fmt::Display for Term {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Term::Iri(i) => i.fmt(f),
      Term::Literal(l) => l.fmt(f),
    }
  }
}

impl fmt::Display for Triple {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
  }
}

/// Render `triples` as an N-Triples document (LF-terminated lines).
pub fn to_ntriples(triples: &[Triple]) -> String {
  let mut out = String::new();
  for triple in triples {
    out.push_str(&triple.to_string());
    out.push('\n');
  }
  out
}
