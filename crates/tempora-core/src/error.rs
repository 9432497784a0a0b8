//! Error types for `tempora-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid IRI: {0:?}")]
  InvalidIri(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
