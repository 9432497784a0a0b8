//! The fixed vocabulary used by time-span assertions.
//!
//! Only the terms the generators emit are listed here; this is not a general
//! namespace manager.

use crate::term::Iri;

pub const CRM: &str = "http://www.cidoc-crm.org/cidoc-crm/";
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const TIME: &str = "http://www.w3.org/2006/time#";

/// Default namespace for minted resources and the Julian Day datatype.
pub const RESOURCE: &str = "https://r11.eu/rdf/resource/";

/// Wikidata item for "Julian day"; the `rdfs:isDefinedBy` target of the
/// Julian Day datatype.
pub const WIKIDATA_JULIAN_DAY: &str = "https://www.wikidata.org/entity/Q14267";

// ─── CIDOC-CRM ───────────────────────────────────────────────────────────────

pub mod crm {
  use super::{CRM, Iri};

  macro_rules! crm_terms {
    ($($(#[$doc:meta])* $fn_name:ident => $local:literal),* $(,)?) => {
      $(
        $(#[$doc])*
        pub fn $fn_name() -> Iri { Iri::from_static(concat!("http://www.cidoc-crm.org/cidoc-crm/", $local)) }
      )*

      /// Every CRM term known to this module, as `(local name, IRI)`.
      pub fn all() -> Vec<(&'static str, Iri)> {
        vec![$(($local, $fn_name())),*]
      }
    };
  }

  crm_terms! {
    e52_time_span => "E52_Time-Span",
    /// A time span falls somewhere within this (position) value.
    p82_at_some_time_within => "P82_at_some_time_within",
    /// Earliest possible start of the time span.
    p82a_begin_of_the_begin => "P82a_begin_of_the_begin",
    /// Latest possible end of the time span.
    p82b_end_of_the_end => "P82b_end_of_the_end",
    /// Latest possible start of the time span.
    p81a_end_of_the_begin => "P81a_end_of_the_begin",
    /// Earliest possible end of the time span.
    p81b_begin_of_the_end => "P81b_begin_of_the_end",
  }

  /// True if `iri` lies in the CRM namespace.
  pub fn contains(iri: &Iri) -> bool { iri.as_str().starts_with(CRM) }
}

// ─── W3C ─────────────────────────────────────────────────────────────────────

pub mod rdf {
  use super::Iri;

  pub fn type_() -> Iri {
    Iri::from_static("http://www.w3.org/1999/02/22-rdf-syntax-ns#type")
  }
}

pub mod rdfs {
  use super::Iri;

  pub fn label() -> Iri {
    Iri::from_static("http://www.w3.org/2000/01/rdf-schema#label")
  }

  pub fn datatype() -> Iri {
    Iri::from_static("http://www.w3.org/2000/01/rdf-schema#Datatype")
  }

  pub fn is_defined_by() -> Iri {
    Iri::from_static("http://www.w3.org/2000/01/rdf-schema#isDefinedBy")
  }
}

pub mod time {
  use super::Iri;

  /// `time:TRS` — temporal reference system.
  pub fn trs() -> Iri { Iri::from_static("http://www.w3.org/2006/time#TRS") }
}

/// The default resource namespace as an [`Iri`].
pub fn resource_namespace() -> Iri { Iri::from_static(RESOURCE) }

/// The default Julian Day datatype, `<RESOURCE>JulianDay`.
pub fn julian_day() -> Iri {
  Iri::from_static("https://r11.eu/rdf/resource/JulianDay")
}

pub fn wikidata_julian_day() -> Iri { Iri::from_static(WIKIDATA_JULIAN_DAY) }
