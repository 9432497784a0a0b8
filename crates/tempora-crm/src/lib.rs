//! CIDOC-CRM time-span generation for tempora.
//!
//! Turns historical date strings into `E52_Time-Span` triples whose bounds
//! are Julian Day literals. Unparseable dates degrade to a labelled
//! time-span and a [`Diagnostic`]; they never abort a batch.
//!
//! ```no_run
//! use tempora_core::ntriples::to_ntriples;
//! use tempora_crm::{TracingSink, Vocabulary, time_span_triples};
//!
//! let vocab = Vocabulary::default();
//! let subject = vocab.mint();
//! let triples =
//!   time_span_triples(&subject, "J 1200 March 10", &mut TracingSink, &vocab)
//!     .unwrap();
//! print!("{}", to_ntriples(&triples));
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod policy;
pub mod time_span;

pub use config::{TemporalConfig, Vocabulary};
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use error::{Error, Result};
pub use policy::{Extent, TemporalShape};
pub use time_span::{
  base_triples, convert_batch, julian_day_definition, temporal_triples,
  time_span_triples,
};
