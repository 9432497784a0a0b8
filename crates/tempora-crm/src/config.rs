//! Configuration for time-span generation.
//!
//! Defaults reproduce the IRIs existing graphs were built with; override them
//! from a TOML file or `TEMPORA_*` environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tempora_core::{Iri, vocab};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalConfig {
  /// Namespace for minted time-span resources and the Julian Day datatype.
  #[serde(default = "default_resource_namespace")]
  pub resource_namespace:  String,
  /// Datatype IRI for Julian Day literals. Defaults to
  /// `<resource_namespace>JulianDay`.
  #[serde(default)]
  pub julian_day_datatype: Option<String>,
}

fn default_resource_namespace() -> String { vocab::RESOURCE.to_string() }

impl Default for TemporalConfig {
  fn default() -> Self {
    Self {
      resource_namespace:  default_resource_namespace(),
      julian_day_datatype: None,
    }
  }
}

impl TemporalConfig {
  /// Read `path` (if given and present), then `TEMPORA_*` environment
  /// variables, over the defaults.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
      builder = builder.add_source(config::File::from(path).required(false));
    }
    let settings = builder
      .add_source(config::Environment::with_prefix("TEMPORA"))
      .build()?;
    Ok(settings.try_deserialize()?)
  }

  /// `local` under the configured resource namespace.
  pub fn resource_iri(&self, local: &str) -> Result<Iri> {
    Ok(Iri::new(self.resource_namespace.as_str())?.join(local)?)
  }

  /// Datatype IRI for Julian Day literals.
  pub fn julian_day_iri(&self) -> Result<Iri> {
    match &self.julian_day_datatype {
      Some(iri) => Ok(Iri::new(iri.as_str())?),
      None => self.resource_iri("JulianDay"),
    }
  }

  /// Validate the configured IRIs.
  pub fn resolve(&self) -> Result<Vocabulary> {
    Ok(Vocabulary {
      resource_namespace: Iri::new(self.resource_namespace.as_str())?,
      julian_day:         self.julian_day_iri()?,
    })
  }
}

/// Validated, ready-to-use IRIs derived from a [`TemporalConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
  pub resource_namespace: Iri,
  /// Datatype of every Julian Day literal.
  pub julian_day:         Iri,
}

impl Vocabulary {
  /// A fresh IRI for a new time-span resource.
  pub fn mint(&self) -> Iri { Iri::mint(&self.resource_namespace) }
}

impl Default for Vocabulary {
  fn default() -> Self {
    Self {
      resource_namespace: vocab::resource_namespace(),
      julian_day:         vocab::julian_day(),
    }
  }
}
