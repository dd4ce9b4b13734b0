use pipeforge_graph::{Pipeline, Position};

/// Fixed visual node size in world units. The edge anchor math assumes
/// these; y + NODE_HEIGHT / 2 is the vertical center of a node box.
pub const NODE_WIDTH: f32 = 100.0;
pub const NODE_HEIGHT: f32 = 64.0;

/// One node box ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
  pub id: String,
  pub type_name: String,
  pub x: f32,
  pub y: f32,
  pub width: f32,
  pub height: f32,
  pub selected: bool,
}

/// One edge line: from the source node's right-center to the target
/// node's left-center.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLine {
  pub from: String,
  pub to: String,
  pub x1: f32,
  pub y1: f32,
  pub x2: f32,
  pub y2: f32,
}

/// The canvas contents in world coordinates; the host applies the
/// viewport transform when painting.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
  pub nodes: Vec<NodeBox>,
  pub edges: Vec<EdgeLine>,
}

impl Scene {
  pub fn build(pipeline: &Pipeline, selected: Option<&str>) -> Self {
    let nodes: Vec<NodeBox> = pipeline
      .nodes
      .iter()
      .map(|node| NodeBox {
        id: node.id.clone(),
        type_name: node.type_name.clone(),
        x: node.position.x,
        y: node.position.y,
        width: NODE_WIDTH,
        height: NODE_HEIGHT,
        selected: selected == Some(node.id.as_str()),
      })
      .collect();

    // Edges with a missing endpoint are skipped, not errors; the shell may
    // be mid-edit when the host repaints.
    let edges: Vec<EdgeLine> = pipeline
      .edges
      .iter()
      .filter_map(|edge| {
        let from = pipeline.get_node(&edge.from)?;
        let to = pipeline.get_node(&edge.to)?;
        Some(EdgeLine {
          from: edge.from.clone(),
          to: edge.to.clone(),
          x1: from.position.x + NODE_WIDTH,
          y1: from.position.y + NODE_HEIGHT / 2.0,
          x2: to.position.x,
          y2: to.position.y + NODE_HEIGHT / 2.0,
        })
      })
      .collect();

    Self { nodes, edges }
  }

  /// Hit test in reverse paint order so the topmost node wins.
  pub fn node_at(&self, point: Position) -> Option<&NodeBox> {
    self.nodes.iter().rev().find(|node| {
      point.x >= node.x
        && point.x <= node.x + node.width
        && point.y >= node.y
        && point.y <= node.y + node.height
    })
  }
}
