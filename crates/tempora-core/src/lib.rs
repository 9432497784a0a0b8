//! Core RDF types for the tempora workspace.
//!
//! This crate is deliberately free of date logic and I/O. It holds the small
//! term model that the time-span generators emit, the fixed vocabulary they
//! use, and an N-Triples renderer.

pub mod error;
pub mod ntriples;
pub mod term;
pub mod vocab;

pub use error::{Error, Result};
pub use term::{Iri, Literal, Term, Triple};
