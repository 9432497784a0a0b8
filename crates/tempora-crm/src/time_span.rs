//! Time-span triple generation.
//!
//! Every date value becomes an `E52_Time-Span` resource with its raw string
//! as `rdfs:label`. When the string parses, the resource additionally gets
//! the bound assertions chosen by [`TemporalShape`]; when it does not, a
//! [`Diagnostic`] goes to the sink and only the label is emitted.

use tempora_core::{
  Iri, Literal, Triple,
  term::about,
  vocab::{self, crm, rdf, rdfs, time},
};
use tempora_dates::ParsedDate;

use crate::{
  config::Vocabulary,
  diagnostics::{CountingSink, Diagnostic, DiagnosticSink},
  error::Result,
  policy::TemporalShape,
};

/// Type and label triples; emitted for every date value, parsed or not.
pub fn base_triples(subject: &Iri, raw: &str) -> Vec<Triple> {
  vec![
    Triple::new(subject.clone(), rdf::type_(), crm::e52_time_span()),
    Triple::new(subject.clone(), rdfs::label(), Literal::plain(raw)),
  ]
}

/// Base triples followed by the bound assertions for a parsed date.
pub fn temporal_triples(
  subject: &Iri,
  date: &ParsedDate,
  vocab: &Vocabulary,
) -> Result<Vec<Triple>> {
  let shape =
    TemporalShape::classify(date.jd_duration(), date.entry().known_limit())?;
  let mut triples = base_triples(subject, date.raw());
  triples.extend(about(
    subject,
    shape
      .assertions()
      .into_iter()
      .map(|(property, jd)| (property, Literal::integer(jd, &vocab.julian_day))),
  ));
  Ok(triples)
}

/// All triples for one date value.
///
/// Parse and validation failures degrade to [`base_triples`] plus a
/// diagnostic. Errors from the assertion policy are returned.
pub fn time_span_triples<S>(
  subject: &Iri,
  raw: &str,
  sink: &mut S,
  vocab: &Vocabulary,
) -> Result<Vec<Triple>>
where
  S: DiagnosticSink + ?Sized,
{
  match tempora_dates::parse(raw) {
    Ok(date) => temporal_triples(subject, &date, vocab),
    Err(err) => {
      sink.warn(Diagnostic {
        subject: subject.clone(),
        raw:     raw.to_string(),
        reason:  err.to_string(),
      });
      Ok(base_triples(subject, raw))
    }
  }
}

/// Declares the Julian Day datatype as a temporal reference system.
pub fn julian_day_definition(vocab: &Vocabulary) -> Vec<Triple> {
  about(&vocab.julian_day, [
    (rdf::type_(), time::trs()),
    (rdf::type_(), rdfs::datatype()),
    (rdfs::is_defined_by(), vocab::wikidata_julian_day()),
  ])
}

/// The Julian Day definition, then the triples for every `(subject, raw)`
/// row.
///
/// A row that fails to parse contributes its label and a diagnostic; the
/// rest of the batch is unaffected.
pub fn convert_batch<'a, I, S>(
  rows: I,
  sink: &mut S,
  vocab: &Vocabulary,
) -> Result<Vec<Triple>>
where
  I: IntoIterator<Item = (Iri, &'a str)>,
  S: DiagnosticSink + ?Sized,
{
  let span = tracing::debug_span!("convert_batch");
  let _guard = span.enter();

  let mut sink = CountingSink::new(sink);
  let mut triples = julian_day_definition(vocab);
  let mut rows_seen = 0usize;
  for (subject, raw) in rows {
    triples.extend(time_span_triples(&subject, raw, &mut sink, vocab)?);
    rows_seen += 1;
  }

  tracing::debug!(
    rows = rows_seen,
    degraded = sink.count,
    triples = triples.len(),
    "time-span batch converted"
  );
  Ok(triples)
}
