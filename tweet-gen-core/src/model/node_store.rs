use std::collections::HashMap;

use tracing::trace;

use super::node::{Node, NodeId};
use crate::error::{ChainError, Result};

/// Deduplicated arena of every word seen during ingestion.
///
/// The store exclusively owns its nodes; edges refer to them through
/// [`NodeId`]s. Nodes are never removed individually, the whole store is
/// dropped as a unit.
///
/// # Invariants
/// - For a given text, at most one node exists
/// - `nodes` is in insertion order, `index` maps every text to its position
/// - `non_terminal` is the number of nodes whose text does not end a sentence
#[derive(Clone, Debug, Default)]
pub struct NodeStore {
	nodes: Vec<Node>,
	index: HashMap<String, NodeId>,
	non_terminal: usize,
}

impl NodeStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the node whose text equals `word`, creating it if needed.
	///
	/// A new node is appended at the end of the store with an owned copy
	/// of `word`.
	///
	/// # Errors
	/// Returns [`ChainError::Allocation`] if the store cannot grow. The store
	/// is unchanged in that case.
	pub fn get_or_create(&mut self, word: &str) -> Result<NodeId> {
		if let Some(id) = self.find(word) {
			return Ok(id);
		}

		let node = Node::new(word)?;
		let mut key = String::new();
		key.try_reserve_exact(word.len())?;
		key.push_str(word);
		self.nodes.try_reserve(1)?;
		self.index.try_reserve(1)?;

		let id = NodeId(self.nodes.len());
		if !node.is_terminal() {
			self.non_terminal += 1;
		}
		self.nodes.push(node);
		self.index.insert(key, id);
		trace!(word, %id, "new node");
		Ok(id)
	}

	/// Looks up a word without modifying the store.
	pub fn find(&self, word: &str) -> Option<NodeId> {
		self.index.get(word).copied()
	}

	/// Returns the node behind `id`.
	///
	/// # Errors
	/// Returns [`ChainError::InvalidReference`] if `id` was not handed out by
	/// this store.
	pub fn get(&self, id: NodeId) -> Result<&Node> {
		self.nodes.get(id.0).ok_or(ChainError::InvalidReference(id))
	}

	fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
		self.nodes.get_mut(id.0).ok_or(ChainError::InvalidReference(id))
	}

	/// Text of the node behind `id`.
	pub fn text(&self, id: NodeId) -> Result<&str> {
		Ok(self.get(id)?.text())
	}

	/// Records that `to` immediately followed `from`.
	///
	/// Either increments the existing `from -> to` edge or appends a new one
	/// with a count of 1. Exactly one edge is touched per call.
	///
	/// # Errors
	/// - [`ChainError::InvalidReference`] if either id is foreign to this store
	/// - [`ChainError::Allocation`] if the edge list cannot grow
	pub fn record_transition(&mut self, from: NodeId, to: NodeId) -> Result<()> {
		self.get(to)?;
		self.get_mut(from)?.frequency_list_mut().record(to)
	}

	/// Iterates over every node, in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
		self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Number of nodes that may start a walk.
	pub fn non_terminal_len(&self) -> usize {
		self.non_terminal
	}

	/// Total number of distinct edges across all nodes.
	pub fn edge_count(&self) -> usize {
		self.nodes.iter().map(|node| node.frequency_list().len()).sum()
	}
}
