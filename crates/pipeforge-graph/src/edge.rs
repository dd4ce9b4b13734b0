use serde::{Deserialize, Serialize};

use crate::node::NodeId;

/// A directed edge between two nodes, stored explicitly on the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
  pub from: NodeId,
  pub to: NodeId,
}

impl Edge {
  pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
    Self {
      from: from.into(),
      to: to.into(),
    }
  }
}
