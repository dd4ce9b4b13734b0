use serde::{Deserialize, Serialize};

use crate::schema::FieldSchema;

/// Everything the builder needs to know about one ML domain.
///
/// Icon, color, and gradient are opaque strings interpreted by the host UI
/// (icon names and style tokens); the core never branches on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainDescriptor {
  /// Unique, stable key, e.g. "cv". Used in navigation state and as the
  /// lookup key for everything domain-parameterized.
  pub key: String,
  pub name: String,
  pub icon: String,
  pub color: String,
  pub gradient: String,
  /// Title shown above the canvas, e.g. "CV Training Pipeline".
  pub pipeline_label: String,
  /// Palette content, in display order.
  pub categories: Vec<Category>,
  /// Domain-specific inspector fields.
  pub fields: FieldSchema,
  /// Starter graph instantiated on domain switch. Templates are never
  /// mutated; switches deep-copy them into live nodes.
  pub default_nodes: Vec<NodeTemplate>,
}

impl DomainDescriptor {
  /// The category expanded by default when this domain becomes active.
  ///
  /// The third category when there are at least three, otherwise the first.
  /// Deterministic on category order so domain switches land on the same
  /// "working" section every time.
  pub fn primary_category(&self) -> Option<&str> {
    self
      .categories
      .get(2)
      .or_else(|| self.categories.first())
      .map(|c| c.name.as_str())
  }
}

/// A named grouping of node types shown in the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
  pub name: String,
  pub icon: String,
  pub node_types: Vec<String>,
}

impl Category {
  pub fn new(name: &str, icon: &str, node_types: &[&str]) -> Self {
    Self {
      name: name.to_string(),
      icon: icon.to_string(),
      node_types: node_types.iter().map(|n| n.to_string()).collect(),
    }
  }
}

/// One row of a domain's default starter graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTemplate {
  pub id: String,
  pub type_name: String,
  pub x: f32,
  pub y: f32,
}

impl NodeTemplate {
  pub fn new(id: &str, type_name: &str, x: f32, y: f32) -> Self {
    Self {
      id: id.to_string(),
      type_name: type_name.to_string(),
      x,
      y,
    }
  }
}
