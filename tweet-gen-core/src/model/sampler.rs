use rand::Rng;
use tracing::trace;

use super::node::NodeId;
use super::node_store::NodeStore;
use crate::error::{ChainError, Result};

/// Source of uniform integers, injected into every sampling call.
///
/// Any [`rand::Rng`] is a `RandomSource`; tests may plug in scripted
/// sequences instead.
pub trait RandomSource {
	/// Returns a uniformly distributed value in `[0, bound)`.
	///
	/// `bound` is always strictly positive.
	fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
	fn next_index(&mut self, bound: usize) -> usize {
		self.random_range(0..bound)
	}
}

/// Picks a uniformly random node that may start a walk.
///
/// Draws indices over the whole store with replacement and rejects every
/// terminal word until a non-terminal one comes up.
///
/// # Errors
/// - [`ChainError::EmptyStore`] if the store holds no node
/// - [`ChainError::NoStartCandidate`] if every node is terminal; checked up
///   front so the rejection loop always has something to find
pub fn pick_start<R: RandomSource + ?Sized>(store: &NodeStore, rng: &mut R) -> Result<NodeId> {
	if store.is_empty() {
		return Err(ChainError::EmptyStore);
	}
	if store.non_terminal_len() == 0 {
		return Err(ChainError::NoStartCandidate);
	}

	let mut attempts = 0usize;
	loop {
		attempts += 1;
		let id = NodeId(rng.next_index(store.len()));
		if !store.get(id)?.is_terminal() {
			trace!(%id, attempts, "start node");
			return Ok(id);
		}
	}
}

/// Picks the successor of `node`, weighted by edge counts.
///
/// Draws a value in `[0, total)` and walks the frequency list accumulating
/// counts until the running sum exceeds the draw.
///
/// Returns `Ok(None)` when `node` has no outgoing edge (dead end).
///
/// # Errors
/// Returns [`ChainError::InvalidReference`] if `node` is foreign to `store`.
pub fn pick_next<R: RandomSource + ?Sized>(
	store: &NodeStore,
	node: NodeId,
	rng: &mut R,
) -> Result<Option<NodeId>> {
	let list = store.get(node)?.frequency_list();
	let total = list.total();
	if total == 0 {
		return Ok(None);
	}

	let draw = rng.next_index(total);
	Ok(list.select(draw))
}
