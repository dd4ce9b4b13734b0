//! Inspector field schemas.
//!
//! Field values are stored on graph nodes as strings and parsed against the
//! field kind when edited, so a schema is purely descriptive: what to render,
//! what to offer, and what to fall back to when a node carries no value yet.

use serde::{Deserialize, Serialize};

/// The set of domain-specific inspector fields for one domain.
///
/// An empty schema is valid and means the inspector renders only the
/// universal and execution sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
  pub fields: Vec<Field>,
}

impl FieldSchema {
  pub fn new(fields: Vec<Field>) -> Self {
    Self { fields }
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  /// Look up a field by key.
  pub fn field(&self, key: &str) -> Option<&Field> {
    self.fields.iter().find(|f| f.key == key)
  }
}

/// A single typed inspector field with its default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
  /// Stable key the value is stored under on the node.
  pub key: String,
  /// Human-readable label.
  pub label: String,
  #[serde(flatten)]
  pub kind: FieldKind,
  pub default: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
  /// Free-form text input.
  Text,
  /// Numeric input; values must parse as a number.
  Number,
  /// One of a fixed set of options.
  Select { options: Vec<String> },
}

impl Field {
  pub fn text(key: &str, label: &str, default: &str) -> Self {
    Self {
      key: key.to_string(),
      label: label.to_string(),
      kind: FieldKind::Text,
      default: default.to_string(),
    }
  }

  pub fn number(key: &str, label: &str, default: &str) -> Self {
    Self {
      key: key.to_string(),
      label: label.to_string(),
      kind: FieldKind::Number,
      default: default.to_string(),
    }
  }

  /// Select field defaulting to the first option.
  pub fn select(key: &str, label: &str, options: &[&str]) -> Self {
    Self {
      key: key.to_string(),
      label: label.to_string(),
      default: options.first().map(|o| o.to_string()).unwrap_or_default(),
      kind: FieldKind::Select {
        options: options.iter().map(|o| o.to_string()).collect(),
      },
    }
  }

  /// Whether a candidate value is acceptable for this field's kind.
  pub fn accepts(&self, value: &str) -> bool {
    match &self.kind {
      FieldKind::Text => true,
      // Counts and sizes only: finite and non-negative, so "NaN", "inf",
      // and negatives are rejected here rather than downstream.
      FieldKind::Number => value
        .trim()
        .parse::<f64>()
        .is_ok_and(|n| n.is_finite() && n >= 0.0),
      FieldKind::Select { options } => options.iter().any(|o| o == value),
    }
  }
}

/// Fields present for every domain, rendered after the domain block.
pub fn universal_fields() -> Vec<Field> {
  vec![
    Field::text("learning_rate", "Learning Rate", "0.001"),
    Field::number("epochs", "Epochs", "100"),
  ]
}

/// The execution block: resource profile, timeout, retries.
pub fn execution_fields() -> Vec<Field> {
  vec![
    Field::select(
      "resource",
      "Resource",
      &["GPU-2x (A100)", "GPU-1x (V100)", "CPU (16 cores)"],
    ),
    Field::text("timeout", "Timeout", "2h"),
    Field::number("retries", "Retries", "3"),
  ]
}
