use std::path::Path;

use tracing::debug;

use super::generation_input::GenerationInput;
use super::generator::{Tweet, generate};
use super::node::{NodeId, is_terminal};
use super::node_store::NodeStore;
use super::sampler::{RandomSource, pick_start};
use crate::error::{ChainError, Result};
use crate::io::read_words;

/// Summary of one ingestion pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestStats {
	/// Words consumed from the input, repeated words included.
	pub words_read: usize,
	/// Distinct words in the store after ingestion.
	pub distinct_words: usize,
	/// Distinct edges in the store after ingestion.
	pub transitions: usize,
}

/// A word-level Markov chain.
///
/// Built in a single ingestion pass, then only read during generation.
///
/// This struct manages:
/// - `store`: every distinct word and its frequency list
#[derive(Clone, Debug, Default)]
pub struct MarkovChain {
	store: NodeStore,
}

impl MarkovChain {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a chain from the words of a text file.
	///
	/// # Parameters
	/// - `filepath`: The corpus, split on whitespace.
	/// - `word_limit`: Maximum number of words to ingest; `None` or `Some(0)`
	///   ingests the whole file.
	///
	/// # Errors
	/// - [`ChainError::Io`] if the file cannot be read
	/// - [`ChainError::Allocation`] if the model cannot grow
	pub fn from_file<P: AsRef<Path>>(filepath: P, word_limit: Option<usize>) -> Result<Self> {
		let path = filepath.as_ref();
		let words = read_words(path).map_err(|source| ChainError::Io {
			path: path.to_path_buf(),
			source,
		})?;

		let mut chain = Self::new();
		chain.ingest(&words, word_limit)?;
		Ok(chain)
	}

	/// Feeds words, in document order, into the chain.
	///
	/// # Parameters
	/// - `words`: The words to ingest.
	/// - `word_limit`: Stops after that many words; `None` or `Some(0)`
	///   consumes everything.
	///
	/// # Behavior
	/// - Each word gets (or reuses) its node in the store.
	/// - The transition from the previous word is recorded, unless the
	///   previous word ended a sentence.
	/// - Empty words are skipped and not counted.
	///
	/// # Errors
	/// Returns the first allocation error. The chain must then be dropped:
	/// it may hold a part of the input only.
	pub fn ingest<I, S>(&mut self, words: I, word_limit: Option<usize>) -> Result<IngestStats>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let word_limit = word_limit.filter(|&limit| limit > 0);
		let mut previous: Option<NodeId> = None;
		let mut words_read = 0;

		for word in words {
			let word = word.as_ref();
			if word.is_empty() {
				continue;
			}
			if word_limit.is_some_and(|limit| words_read >= limit) {
				break;
			}

			let current = self.store.get_or_create(word)?;
			if let Some(previous) = previous {
				self.store.record_transition(previous, current)?;
			}
			previous = if is_terminal(word) { None } else { Some(current) };
			words_read += 1;
		}

		let stats = IngestStats {
			words_read,
			distinct_words: self.store.len(),
			transitions: self.store.edge_count(),
		};
		debug!(
			words_read = stats.words_read,
			distinct_words = stats.distinct_words,
			transitions = stats.transitions,
			"ingestion finished"
		);
		Ok(stats)
	}

	/// Read-only access to the underlying store.
	pub fn store(&self) -> &NodeStore {
		&self.store
	}

	/// Picks a random start word and walks the chain from it.
	///
	/// # Errors
	/// - [`ChainError::EmptyStore`] if nothing was ingested
	/// - [`ChainError::NoStartCandidate`] if every word ends a sentence
	pub fn random_tweet<R: RandomSource + ?Sized>(&self, max_words: usize, rng: &mut R) -> Result<Tweet<'_>> {
		let start = pick_start(&self.store, rng)?;
		generate(&self.store, start, max_words, rng)
	}

	/// Lazily generates `input.tweets` tweets from a random source seeded
	/// with `input.seed`.
	///
	/// Each tweet is only built when the iterator is advanced, so callers can
	/// write it out before the next one exists.
	pub fn tweets<'a>(&'a self, input: &GenerationInput) -> impl Iterator<Item = Result<Tweet<'a>>> + use<'a> {
		let mut rng = input.rng();
		let max_words = input.max_words();
		(0..input.tweets).map(move |_| self.random_tweet(max_words, &mut rng))
	}
}
