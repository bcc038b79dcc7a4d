use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{ChainError, Result};

/// Default maximum number of words in a generated tweet.
pub const DEFAULT_MAX_WORDS: usize = 20;

/// Parameters controlling ingestion and tweet generation.
///
/// # Responsibilities
/// - Track how much of the corpus is ingested (`word_limit`)
/// - Track how many tweets are generated and how long they may be
/// - Own the seed from which the random source is built
///
/// # Invariants
/// - `max_words` is always >= 1
pub struct GenerationInput {
	/// Seed of the random source. Identical seeds over identical corpora
	/// produce identical tweets.
	pub seed: u64,

	/// Number of tweets to generate.
	pub tweets: usize,

	/// Maximum number of words read from the corpus. `None` or `Some(0)`
	/// reads everything.
	pub word_limit: Option<usize>,

	/// Maximum number of words per tweet.
	max_words: usize,
}

impl GenerationInput {
	/// Creates an input generating a single tweet of at most
	/// [`DEFAULT_MAX_WORDS`] words from the whole corpus.
	pub fn new(seed: u64) -> Self {
		Self { seed, tweets: 1, word_limit: None, max_words: DEFAULT_MAX_WORDS }
	}

	/// Returns the current maximum tweet length.
	pub fn max_words(&self) -> usize {
		self.max_words
	}

	/// Sets the maximum tweet length.
	///
	/// # Errors
	/// Returns an error if `max_words` is 0.
	pub fn set_max_words(&mut self, max_words: usize) -> Result<()> {
		if max_words == 0 {
			return Err(ChainError::InvalidArgument("max_words must be at least 1".to_owned()));
		}
		self.max_words = max_words;
		Ok(())
	}

	/// Builds the random source for this input.
	pub fn rng(&self) -> StdRng {
		StdRng::seed_from_u64(self.seed)
	}
}
