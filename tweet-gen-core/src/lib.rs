//! Word-level Markov chain text generation library.
//!
//! This crate provides:
//! - A deduplicated store of words with weighted transition lists
//! - Single-pass ingestion of whitespace-separated corpora
//! - Randomized, seedable generation of bounded-length sentences
//!
//! The model is built once, then only read while generating.

/// Markov chain model, sampling and generation.
pub mod model;

/// Corpus reading helpers (file loading, whitespace splitting).
pub mod io;

/// Error type shared by the whole crate.
pub mod error;

pub use error::{ChainError, Result};
pub use model::generation_input::GenerationInput;
pub use model::generator::{Termination, Tweet};
pub use model::markov_chain::{IngestStats, MarkovChain};
