use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
  #[error("node not found: {0}")]
  NodeNotFound(String),

  #[error("edge references unknown node: from={from}, to={to}")]
  InvalidEdge { from: String, to: String },

  #[error("duplicate node id: {node_id}")]
  DuplicateNodeId { node_id: String },

  #[error("self-loop on node: {node_id}")]
  SelfLoop { node_id: String },

  #[error("duplicate edge: from={from}, to={to}")]
  DuplicateEdge { from: String, to: String },

  #[error("cycle detected in pipeline graph")]
  CycleDetected,
}
