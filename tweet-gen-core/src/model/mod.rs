//! Top-level module for the word-level Markov chain.
//!
//! This module provides:
//! - Distinct words and their frequency lists (`Node`, `FrequencyList`)
//! - The deduplicated arena owning every word (`NodeStore`)
//! - Randomized start/next selection (`sampler`)
//! - Bounded random walks (`generator`)
//! - Ingestion and a high-level tweet interface (`MarkovChain`)
//! - Generation configuration (`GenerationInput`)

/// A distinct word of the corpus and its identifier.
pub mod node;

/// Weighted outgoing transitions of a single word.
///
/// Tracks how often each successor was observed and maps uniform draws
/// onto those weights.
pub mod frequency_list;

/// Deduplicated arena of nodes, in insertion order.
pub mod node_store;

/// Uniform start-word selection and weighted next-word selection.
///
/// Both algorithms draw from an injected `RandomSource`.
pub mod sampler;

/// Bounded random walk producing a tweet.
pub mod generator;

/// Single-pass ingestion driver and high-level generation interface.
pub mod markov_chain;

/// Generation parameters: seed, number of tweets, length cap and
/// ingestion limit.
pub mod generation_input;
