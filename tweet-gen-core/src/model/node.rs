use std::fmt;

use super::frequency_list::FrequencyList;
use crate::error::Result;

/// Character marking the end of a sentence.
pub const TERMINAL_MARKER: char = '.';

/// Returns `true` if `word` closes a sentence (ends with [`TERMINAL_MARKER`]).
pub fn is_terminal(word: &str) -> bool {
	word.ends_with(TERMINAL_MARKER)
}

/// Index of a node inside its [`NodeStore`](super::node_store::NodeStore).
///
/// Ids are only meaningful for the store that handed them out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
	/// Position of the node in store insertion order.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// One distinct word of the corpus.
///
/// A `Node` owns its text and the frequency list of words observed right
/// after it. Conceptually, this is a state of the Markov chain whose outgoing
/// edges are weighted by their number of observations.
///
/// ## Invariants
/// - `text` never changes after creation
/// - `frequency_list` holds at most one edge per successor
#[derive(Clone, Debug)]
pub struct Node {
	text: String,
	frequency_list: FrequencyList,
}

impl Node {
	/// Creates a node holding an owned copy of `word`.
	///
	/// # Errors
	/// Returns [`ChainError::Allocation`](crate::error::ChainError::Allocation)
	/// if the text buffer cannot be allocated.
	pub(crate) fn new(word: &str) -> Result<Self> {
		let mut text = String::new();
		text.try_reserve_exact(word.len())?;
		text.push_str(word);
		Ok(Self { text, frequency_list: FrequencyList::new() })
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn is_terminal(&self) -> bool {
		is_terminal(&self.text)
	}

	pub fn frequency_list(&self) -> &FrequencyList {
		&self.frequency_list
	}

	pub(crate) fn frequency_list_mut(&mut self) -> &mut FrequencyList {
		&mut self.frequency_list
	}
}
