use std::fmt;

use serde::Serialize;
use tracing::trace;

use super::node::NodeId;
use super::node_store::NodeStore;
use super::sampler::{RandomSource, pick_next};
use crate::error::Result;

/// Why a walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
	/// The last word ends a sentence.
	Period,
	/// `max_words` words were emitted.
	Length,
	/// The last word has no recorded successor.
	DeadEnd,
}

/// Words produced by one walk, borrowed from the store that generated them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tweet<'a> {
	words: Vec<&'a str>,
	termination: Termination,
}

impl<'a> Tweet<'a> {
	pub fn words(&self) -> &[&'a str] {
		&self.words
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn termination(&self) -> Termination {
		self.termination
	}
}

impl fmt::Display for Tweet<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.words.join(" "))
	}
}

/// Walks the chain from `start`, following weighted edges.
///
/// # Parameters
/// - `store`: The store owning `start` and every node reachable from it.
/// - `start`: First word of the walk, emitted unconditionally.
/// - `max_words`: Upper bound on the number of emitted words.
/// - `rng`: Source of the weighted draws.
///
/// # Behavior
/// - Emits `start`, then keeps calling [`pick_next`] while fewer than
///   `max_words` words were emitted and the current word does not end a
///   sentence.
/// - Stops on a terminal word, on the length cap or on a dead end.
/// - A `max_words` of 0 yields an empty tweet.
///
/// # Errors
/// Returns [`ChainError::InvalidReference`](crate::error::ChainError::InvalidReference)
/// if `start` is foreign to `store`.
pub fn generate<'a, R: RandomSource + ?Sized>(
	store: &'a NodeStore,
	start: NodeId,
	max_words: usize,
	rng: &mut R,
) -> Result<Tweet<'a>> {
	let first = store.get(start)?;
	if max_words == 0 {
		return Ok(Tweet { words: Vec::new(), termination: Termination::Length });
	}

	let mut words = vec![first.text()];
	let mut current = start;
	let termination = loop {
		if store.get(current)?.is_terminal() {
			break Termination::Period;
		}
		if words.len() >= max_words {
			break Termination::Length;
		}
		match pick_next(store, current, rng)? {
			Some(next) => {
				trace!(from = %current, to = %next, "step");
				words.push(store.text(next)?);
				current = next;
			}
			None => break Termination::DeadEnd,
		}
	};

	Ok(Tweet { words, termination })
}
