//! Error type for `tempora-crm`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A Julian Day interval ended before it began. Validated entries never
  /// produce one, so reaching this is a logic defect, not bad input.
  #[error("inverted Julian Day interval {begin}..{end}")]
  InvertedInterval { begin: i64, end: i64 },

  #[error("iri error: {0}")]
  Iri(#[from] tempora_core::Error),

  #[error("config error: {0}")]
  Config(#[from] config::ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
