use std::collections::{HashMap, HashSet};

use crate::pipeline::Pipeline;

/// Adjacency view over a pipeline for traversal and analysis.
#[derive(Debug, Clone)]
pub struct Topology {
  /// node_id -> downstream node_ids.
  adjacency: HashMap<String, Vec<String>>,
  /// node_id -> upstream node_ids.
  reverse_adjacency: HashMap<String, Vec<String>>,
  /// Nodes with no incoming edges, in authoring order.
  entry_points: Vec<String>,
}

impl Topology {
  pub fn new(pipeline: &Pipeline) -> Self {
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
    let mut reverse_adjacency: HashMap<String, Vec<String>> = HashMap::new();

    for node in &pipeline.nodes {
      adjacency.entry(node.id.clone()).or_default();
      reverse_adjacency.entry(node.id.clone()).or_default();
    }

    for edge in &pipeline.edges {
      adjacency
        .entry(edge.from.clone())
        .or_default()
        .push(edge.to.clone());
      reverse_adjacency
        .entry(edge.to.clone())
        .or_default()
        .push(edge.from.clone());
    }

    let entry_points: Vec<String> = pipeline
      .nodes
      .iter()
      .filter(|n| reverse_adjacency.get(&n.id).is_none_or(|v| v.is_empty()))
      .map(|n| n.id.clone())
      .collect();

    Self {
      adjacency,
      reverse_adjacency,
      entry_points,
    }
  }

  pub fn entry_points(&self) -> &[String] {
    &self.entry_points
  }

  pub fn downstream(&self, node_id: &str) -> &[String] {
    self
      .adjacency
      .get(node_id)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  pub fn upstream(&self, node_id: &str) -> &[String] {
    self
      .reverse_adjacency
      .get(node_id)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// Kahn's algorithm over the pipeline.
  ///
  /// Returns node ids in a valid execution order. On a cyclic graph the
  /// result is truncated (cycle members never reach in-degree zero);
  /// callers validate before relying on completeness.
  pub fn execution_order(&self, pipeline: &Pipeline) -> Vec<String> {
    let mut in_degree: HashMap<&str, usize> = pipeline
      .nodes
      .iter()
      .map(|n| (n.id.as_str(), self.upstream(&n.id).len()))
      .collect();

    // Seed with entry points in authoring order for deterministic output.
    let mut ready: Vec<&str> = self.entry_points.iter().map(|s| s.as_str()).collect();
    let mut order: Vec<String> = Vec::with_capacity(pipeline.nodes.len());
    let mut seen: HashSet<&str> = HashSet::new();

    while let Some(node_id) = ready.first().copied() {
      ready.remove(0);
      if !seen.insert(node_id) {
        continue;
      }
      order.push(node_id.to_string());

      for next in self.downstream(node_id) {
        let degree = in_degree.entry(next.as_str()).or_insert(0);
        *degree = degree.saturating_sub(1);
        if *degree == 0 {
          ready.push(next.as_str());
        }
      }
    }

    order
  }
}
