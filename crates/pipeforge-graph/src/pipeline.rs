use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::error::GraphError;
use crate::node::GraphNode;

/// A pipeline graph: nodes in authoring order plus an explicit edge list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
  pub nodes: Vec<GraphNode>,
  #[serde(default)]
  pub edges: Vec<Edge>,
}

impl Pipeline {
  pub fn new(nodes: Vec<GraphNode>, edges: Vec<Edge>) -> Self {
    Self { nodes, edges }
  }

  /// Build a pipeline whose edges form a chain over the node sequence.
  ///
  /// This is the shape every domain's default graph has: N nodes produce
  /// max(N-1, 0) edges, edge k joining sequence index k to k+1.
  pub fn from_chain(nodes: Vec<GraphNode>) -> Self {
    let edges = chain_edges(&nodes);
    Self { nodes, edges }
  }

  pub fn get_node(&self, node_id: &str) -> Option<&GraphNode> {
    self.nodes.iter().find(|n| n.id == node_id)
  }

  pub fn get_node_mut(&mut self, node_id: &str) -> Option<&mut GraphNode> {
    self.nodes.iter_mut().find(|n| n.id == node_id)
  }

  pub fn contains_node(&self, node_id: &str) -> bool {
    self.nodes.iter().any(|n| n.id == node_id)
  }

  /// The last node in authoring order, used for default tail chaining.
  pub fn tail(&self) -> Option<&GraphNode> {
    self.nodes.last()
  }

  /// Append a node without wiring; callers decide edges.
  pub fn push_node(&mut self, node: GraphNode) {
    debug_assert!(
      !self.contains_node(&node.id),
      "duplicate node id: {}",
      node.id
    );
    self.nodes.push(node);
  }

  /// Remove a node and every edge incident to it. Returns the removed node.
  pub fn remove_node(&mut self, node_id: &str) -> Option<GraphNode> {
    let index = self.nodes.iter().position(|n| n.id == node_id)?;
    let node = self.nodes.remove(index);
    self.edges.retain(|e| e.from != node_id && e.to != node_id);
    Some(node)
  }

  /// Add an explicit edge, rejecting unknown endpoints, self-loops, and
  /// duplicates.
  pub fn connect(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
    if !self.contains_node(from) {
      return Err(GraphError::NodeNotFound(from.to_string()));
    }
    if !self.contains_node(to) {
      return Err(GraphError::NodeNotFound(to.to_string()));
    }
    if from == to {
      return Err(GraphError::SelfLoop {
        node_id: from.to_string(),
      });
    }
    if self.edges.iter().any(|e| e.from == from && e.to == to) {
      return Err(GraphError::DuplicateEdge {
        from: from.to_string(),
        to: to.to_string(),
      });
    }
    self.edges.push(Edge::new(from, to));
    Ok(())
  }

  /// Remove an edge if present; true when one was removed.
  pub fn disconnect(&mut self, from: &str, to: &str) -> bool {
    let before = self.edges.len();
    self.edges.retain(|e| !(e.from == from && e.to == to));
    self.edges.len() != before
  }

}

/// Derive chain edges from a node sequence (index i to i+1).
pub fn chain_edges(nodes: &[GraphNode]) -> Vec<Edge> {
  nodes
    .windows(2)
    .map(|pair| Edge::new(pair[0].id.clone(), pair[1].id.clone()))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_nodes(n: usize) -> Vec<GraphNode> {
    (1..=n)
      .map(|i| GraphNode::new(i.to_string(), "Step", 50.0 + 150.0 * i as f32, 80.0))
      .collect()
  }

  #[test]
  fn test_chain_edge_count() {
    for n in 0..6 {
      let pipeline = Pipeline::from_chain(make_nodes(n));
      assert_eq!(pipeline.edges.len(), n.saturating_sub(1));
    }
  }

  #[test]
  fn test_chain_edges_follow_sequence_order() {
    let pipeline = Pipeline::from_chain(make_nodes(4));
    for (k, edge) in pipeline.edges.iter().enumerate() {
      assert_eq!(edge.from, pipeline.nodes[k].id);
      assert_eq!(edge.to, pipeline.nodes[k + 1].id);
    }
  }

  #[test]
  fn test_connect_rejects_unknown_and_self_loop() {
    let mut pipeline = Pipeline::from_chain(make_nodes(2));
    assert!(matches!(
      pipeline.connect("1", "9"),
      Err(GraphError::NodeNotFound(_))
    ));
    assert!(matches!(
      pipeline.connect("1", "1"),
      Err(GraphError::SelfLoop { .. })
    ));
    assert!(matches!(
      pipeline.connect("1", "2"),
      Err(GraphError::DuplicateEdge { .. })
    ));
  }

  #[test]
  fn test_connect_allows_branching() {
    let mut pipeline = Pipeline::from_chain(make_nodes(3));
    pipeline.connect("1", "3").unwrap();
    assert_eq!(pipeline.edges.len(), 3);
  }

  #[test]
  fn test_remove_node_drops_incident_edges() {
    let mut pipeline = Pipeline::from_chain(make_nodes(3));
    let removed = pipeline.remove_node("2").unwrap();
    assert_eq!(removed.id, "2");
    assert!(pipeline.edges.is_empty());
    assert_eq!(pipeline.nodes.len(), 2);
  }

  #[test]
  fn test_disconnect() {
    let mut pipeline = Pipeline::from_chain(make_nodes(3));
    assert!(pipeline.disconnect("1", "2"));
    assert!(!pipeline.disconnect("1", "2"));
    assert_eq!(pipeline.edges.len(), 1);
  }

}
