use super::node::NodeId;
use crate::error::Result;

/// A directed, weighted edge: `target` followed the owning node `count` times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	target: NodeId,
	count: usize,
}

impl Edge {
	pub fn target(&self) -> NodeId {
		self.target
	}

	pub fn count(&self) -> usize {
		self.count
	}
}

/// Outgoing transitions of a single node.
///
/// Edges are kept in insertion order. The order carries no meaning beyond
/// making weighted selection deterministic for a given draw.
///
/// ## Invariants
/// - At most one edge per distinct target
/// - Each edge count is strictly positive
#[derive(Clone, Debug, Default)]
pub struct FrequencyList {
	edges: Vec<Edge>,
}

impl FrequencyList {
	pub fn new() -> Self {
		Self { edges: Vec::new() }
	}

	/// Records one occurrence of a transition toward `target`.
	///
	/// - If the transition already exists, its count is increased.
	/// - Otherwise, a new edge is appended with an initial count of 1.
	///
	/// # Errors
	/// Returns an allocation error if the edge list cannot grow. The list is
	/// left untouched in that case.
	pub fn record(&mut self, target: NodeId) -> Result<()> {
		if let Some(edge) = self.edges.iter_mut().find(|edge| edge.target == target) {
			edge.count += 1;
			return Ok(());
		}

		self.edges.try_reserve(1)?;
		self.edges.push(Edge { target, count: 1 });
		Ok(())
	}

	/// Returns the count of the edge toward `target`, if any.
	pub fn count_of(&self, target: NodeId) -> Option<usize> {
		self.edges.iter().find(|edge| edge.target == target).map(Edge::count)
	}

	/// Sum of every edge count.
	pub fn total(&self) -> usize {
		self.edges.iter().map(Edge::count).sum()
	}

	pub fn len(&self) -> usize {
		self.edges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Edge> {
		self.edges.iter()
	}

	/// Maps a draw in `[0, total)` to an edge target (inverse CDF over the
	/// integer weights).
	///
	/// Edges are walked in insertion order while accumulating their counts;
	/// the first edge whose running sum exceeds `draw` wins.
	///
	/// Returns `None` if the list is empty or `draw >= total`.
	pub fn select(&self, draw: usize) -> Option<NodeId> {
		let mut running = 0;
		for edge in &self.edges {
			running += edge.count;
			if draw < running {
				return Some(edge.target);
			}
		}
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn record_creates_then_increments() {
		let mut list = FrequencyList::new();
		list.record(NodeId(3)).unwrap();
		list.record(NodeId(5)).unwrap();
		list.record(NodeId(3)).unwrap();

		assert_eq!(list.len(), 2);
		assert_eq!(list.count_of(NodeId(3)), Some(2));
		assert_eq!(list.count_of(NodeId(5)), Some(1));
		assert_eq!(list.count_of(NodeId(7)), None);
		assert_eq!(list.total(), 3);
	}

	#[test]
	fn edges_keep_insertion_order() {
		let mut list = FrequencyList::new();
		for id in [4, 1, 4, 9] {
			list.record(NodeId(id)).unwrap();
		}
		let targets: Vec<_> = list.iter().map(|edge| edge.target().index()).collect();
		assert_eq!(targets, vec![4, 1, 9]);
	}

	#[test]
	fn select_walks_cumulative_counts() {
		let mut list = FrequencyList::new();
		// a:2, b:1, c:3 -> [0,2) a, [2,3) b, [3,6) c
		for id in [0, 0, 1, 2, 2, 2] {
			list.record(NodeId(id)).unwrap();
		}

		assert_eq!(list.select(0), Some(NodeId(0)));
		assert_eq!(list.select(1), Some(NodeId(0)));
		assert_eq!(list.select(2), Some(NodeId(1)));
		assert_eq!(list.select(3), Some(NodeId(2)));
		assert_eq!(list.select(5), Some(NodeId(2)));
		assert_eq!(list.select(6), None);
	}

	#[test]
	fn select_on_empty_list_is_none() {
		assert_eq!(FrequencyList::new().select(0), None);
	}

	proptest! {
		#[test]
		fn recording_k_times_yields_one_edge_with_count_k(k in 1usize..200) {
			let mut list = FrequencyList::new();
			for _ in 0..k {
				list.record(NodeId(1)).unwrap();
			}
			prop_assert_eq!(list.len(), 1);
			prop_assert_eq!(list.count_of(NodeId(1)), Some(k));
		}

		#[test]
		fn no_duplicate_targets(targets in prop::collection::vec(0usize..8, 0..100)) {
			let mut list = FrequencyList::new();
			for &t in &targets {
				list.record(NodeId(t)).unwrap();
			}

			let mut seen: Vec<NodeId> = list.iter().map(Edge::target).collect();
			let before = seen.len();
			seen.sort();
			seen.dedup();
			prop_assert_eq!(seen.len(), before);
			prop_assert_eq!(list.total(), targets.len());
			prop_assert!(list.iter().all(|edge| edge.count() >= 1));
		}
	}
}
