//! Diagnostics emitted when a date value has to be degraded.
//!
//! The generators never log on their own; the caller hands in a
//! [`DiagnosticSink`] and decides where warnings go.

use serde::Serialize;
use tempora_core::Iri;

/// A date value that could not be turned into bound assertions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
  /// The time-span resource that received only a label.
  pub subject: Iri,
  /// The original date string, unchanged.
  pub raw:     String,
  /// Why parsing or validation failed.
  pub reason:  String,
}

pub trait DiagnosticSink {
  fn warn(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in memory.
impl DiagnosticSink for Vec<Diagnostic> {
  fn warn(&mut self, diagnostic: Diagnostic) { self.push(diagnostic); }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
  fn warn(&mut self, diagnostic: Diagnostic) { (**self).warn(diagnostic); }
}

/// Forwards diagnostics to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
  fn warn(&mut self, diagnostic: Diagnostic) {
    tracing::warn!(
      subject = %diagnostic.subject,
      raw = %diagnostic.raw,
      reason = %diagnostic.reason,
      "could not parse date value; emitting label only"
    );
  }
}

/// Wraps a sink and counts what passes through it.
pub(crate) struct CountingSink<'s, S: ?Sized> {
  inner:     &'s mut S,
  pub count: usize,
}

impl<'s, S: DiagnosticSink + ?Sized> CountingSink<'s, S> {
  pub fn new(inner: &'s mut S) -> Self { Self { inner, count: 0 } }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for CountingSink<'_, S> {
  fn warn(&mut self, diagnostic: Diagnostic) {
    self.count += 1;
    self.inner.warn(diagnostic);
  }
}
