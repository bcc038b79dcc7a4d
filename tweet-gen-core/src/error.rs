use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::node::NodeId;

pub type Result<T> = std::result::Result<T, ChainError>;

/// Errors raised while building or walking a Markov chain.
///
/// Ingestion aborts on the first error; a failed build is dropped as a
/// whole instead of being continued with a partial model.
#[derive(Debug, Error)]
pub enum ChainError {
	#[error("allocation failure: failed to allocate new memory")]
	Allocation(#[from] TryReserveError),
	#[error("the chain has no words")]
	EmptyStore,
	#[error("every word in the chain ends a sentence, no start word available")]
	NoStartCandidate,
	#[error("node reference {0} is not part of this store")]
	InvalidReference(NodeId),
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}
