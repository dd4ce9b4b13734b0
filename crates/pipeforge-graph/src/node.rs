use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Node identifier, unique within a pipeline.
///
/// Ids are strings for serialization parity with the hosting platform
/// ("1", "2", ...); the builder allocates fresh ids numerically.
pub type NodeId = String;

/// Canvas position in world coordinates (not normalized).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
  pub x: f32,
  pub y: f32,
}

impl Position {
  pub fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }
}

/// Per-node execution settings, edited through the inspector's
/// Execution block and carried into the serialized pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionSettings {
  /// Resource profile label, e.g. "GPU-2x (A100)".
  #[serde(skip_serializing_if = "Option::is_none")]
  pub resource: Option<String>,
  /// Wall-clock budget, e.g. "2h".
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timeout: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub retries: Option<u32>,
}

/// One step in a pipeline graph.
///
/// `params` holds domain and universal field values as strings keyed by
/// field key; values are parsed against the domain's field schema when
/// edited. An absent key means "use the schema default".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
  pub id: NodeId,
  /// Node-type label from the palette, e.g. "Train Model". Not a strict
  /// enum: domains declare their vocabulary as data.
  pub type_name: String,
  pub position: Position,
  #[serde(default, skip_serializing_if = "HashMap::is_empty")]
  pub params: HashMap<String, String>,
  #[serde(default)]
  pub execution: ExecutionSettings,
}

impl GraphNode {
  pub fn new(id: impl Into<NodeId>, type_name: impl Into<String>, x: f32, y: f32) -> Self {
    Self {
      id: id.into(),
      type_name: type_name.into(),
      position: Position::new(x, y),
      params: HashMap::new(),
      execution: ExecutionSettings::default(),
    }
  }
}
