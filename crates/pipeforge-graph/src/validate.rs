use std::collections::{HashMap, HashSet};

use crate::error::GraphError;
use crate::pipeline::Pipeline;

/// Structural validation run before a pipeline leaves the builder.
///
/// Checks, in order: unique node ids, edges referencing existing nodes,
/// no self-loops, no cycles.
pub fn validate(pipeline: &Pipeline) -> Result<(), GraphError> {
  let mut node_ids: HashSet<&str> = HashSet::new();
  for node in &pipeline.nodes {
    if !node_ids.insert(node.id.as_str()) {
      return Err(GraphError::DuplicateNodeId {
        node_id: node.id.clone(),
      });
    }
  }

  for edge in &pipeline.edges {
    if !node_ids.contains(edge.from.as_str()) || !node_ids.contains(edge.to.as_str()) {
      return Err(GraphError::InvalidEdge {
        from: edge.from.clone(),
        to: edge.to.clone(),
      });
    }
    if edge.from == edge.to {
      return Err(GraphError::SelfLoop {
        node_id: edge.from.clone(),
      });
    }
  }

  detect_cycle(&node_ids, pipeline)
}

/// DFS with coloring: 0 = unvisited, 1 = in progress, 2 = done.
fn detect_cycle(node_ids: &HashSet<&str>, pipeline: &Pipeline) -> Result<(), GraphError> {
  let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
  for node_id in node_ids {
    adjacency.insert(node_id, Vec::new());
  }
  for edge in &pipeline.edges {
    if let Some(neighbors) = adjacency.get_mut(edge.from.as_str()) {
      neighbors.push(edge.to.as_str());
    }
  }

  let mut color: HashMap<&str, u8> = node_ids.iter().map(|id| (*id, 0u8)).collect();

  fn dfs<'a>(
    node: &'a str,
    adjacency: &HashMap<&str, Vec<&'a str>>,
    color: &mut HashMap<&'a str, u8>,
  ) -> bool {
    color.insert(node, 1);

    if let Some(neighbors) = adjacency.get(node) {
      for &neighbor in neighbors {
        match color.get(neighbor) {
          Some(1) => return true, // Back edge = cycle
          Some(0) => {
            if dfs(neighbor, adjacency, color) {
              return true;
            }
          }
          _ => {}
        }
      }
    }

    color.insert(node, 2);
    false
  }

  for node_id in node_ids {
    if color.get(node_id) == Some(&0) && dfs(node_id, &adjacency, &mut color) {
      return Err(GraphError::CycleDetected);
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::edge::Edge;
  use crate::node::GraphNode;

  fn make_chain(n: usize) -> Pipeline {
    Pipeline::from_chain(
      (1..=n)
        .map(|i| GraphNode::new(i.to_string(), "Step", 0.0, 0.0))
        .collect(),
    )
  }

  #[test]
  fn test_valid_chain_passes() {
    assert!(validate(&make_chain(5)).is_ok());
    assert!(validate(&Pipeline::default()).is_ok());
  }

  #[test]
  fn test_duplicate_node_id_rejected() {
    let mut pipeline = make_chain(2);
    pipeline.nodes.push(GraphNode::new("1", "Step", 0.0, 0.0));
    assert!(matches!(
      validate(&pipeline),
      Err(GraphError::DuplicateNodeId { .. })
    ));
  }

  #[test]
  fn test_dangling_edge_rejected() {
    let mut pipeline = make_chain(2);
    pipeline.edges.push(Edge::new("2", "missing"));
    assert!(matches!(
      validate(&pipeline),
      Err(GraphError::InvalidEdge { .. })
    ));
  }

  #[test]
  fn test_self_loop_rejected() {
    let mut pipeline = make_chain(2);
    pipeline.edges.push(Edge::new("2", "2"));
    assert!(matches!(
      validate(&pipeline),
      Err(GraphError::SelfLoop { .. })
    ));
  }

  #[test]
  fn test_cycle_rejected() {
    let mut pipeline = make_chain(3);
    pipeline.edges.push(Edge::new("3", "1"));
    assert!(matches!(validate(&pipeline), Err(GraphError::CycleDetected)));
  }

  #[test]
  fn test_branching_dag_passes() {
    let mut pipeline = make_chain(4);
    pipeline.connect("1", "3").unwrap();
    pipeline.connect("2", "4").unwrap();
    assert!(validate(&pipeline).is_ok());
  }
}
