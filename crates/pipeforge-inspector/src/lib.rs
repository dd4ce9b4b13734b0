//! Pipeforge Inspector
//!
//! Schema-driven configuration panel for the selected node. Rendering is a
//! generic "render this schema" operation: the domain's [`FieldSchema`]
//! supplies the domain block, and every domain gets the universal training
//! fields plus the Execution block. A domain with no schema fails closed to
//! the universal sections only.
//!
//! Field edits write through to the node:
//! [`apply`] stores domain/universal values in the node's param map and
//! execution values in its typed [`ExecutionSettings`].

mod error;
mod view;

pub use error::InspectorError;
pub use view::{FieldView, InspectorView, NodeInspector, Section};

use pipeforge_domain::{execution_fields, universal_fields, DomainDescriptor, Field};
use pipeforge_graph::GraphNode;

/// Write one field edit onto the node.
///
/// The field key is looked up in the domain schema first, then the
/// universal fields, then the execution block. Values are validated against
/// the field kind before anything is stored.
pub fn apply(
  descriptor: &DomainDescriptor,
  node: &mut GraphNode,
  key: &str,
  value: &str,
) -> Result<(), InspectorError> {
  let field = lookup_field(descriptor, key).ok_or_else(|| InspectorError::UnknownField {
    key: key.to_string(),
  })?;

  if !field.accepts(value) {
    return Err(InspectorError::InvalidValue {
      key: key.to_string(),
      value: value.to_string(),
    });
  }

  match key {
    "resource" => node.execution.resource = Some(value.to_string()),
    "timeout" => node.execution.timeout = Some(value.to_string()),
    "retries" => {
      let retries = value
        .trim()
        .parse::<u32>()
        .map_err(|_| InspectorError::InvalidValue {
          key: key.to_string(),
          value: value.to_string(),
        })?;
      node.execution.retries = Some(retries);
    }
    _ => {
      node.params.insert(key.to_string(), value.to_string());
    }
  }

  Ok(())
}

fn lookup_field(descriptor: &DomainDescriptor, key: &str) -> Option<Field> {
  if let Some(field) = descriptor.fields.field(key) {
    return Some(field.clone());
  }
  universal_fields()
    .into_iter()
    .chain(execution_fields())
    .find(|f| f.key == key)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pipeforge_domain::DomainRegistry;

  fn cv() -> DomainDescriptor {
    DomainRegistry::builtin().get("cv").unwrap().clone()
  }

  fn make_node() -> GraphNode {
    GraphNode::new("3", "Train Model", 350.0, 80.0)
  }

  #[test]
  fn test_apply_domain_field_persists_on_node() {
    let descriptor = cv();
    let mut node = make_node();
    apply(&descriptor, &mut node, "model", "ResNet-50").unwrap();
    assert_eq!(node.params.get("model").map(String::as_str), Some("ResNet-50"));
  }

  #[test]
  fn test_apply_execution_fields_use_typed_settings() {
    let descriptor = cv();
    let mut node = make_node();
    apply(&descriptor, &mut node, "resource", "CPU (16 cores)").unwrap();
    apply(&descriptor, &mut node, "timeout", "45m").unwrap();
    apply(&descriptor, &mut node, "retries", "5").unwrap();
    assert_eq!(node.execution.resource.as_deref(), Some("CPU (16 cores)"));
    assert_eq!(node.execution.timeout.as_deref(), Some("45m"));
    assert_eq!(node.execution.retries, Some(5));
    assert!(node.params.is_empty());
  }

  #[test]
  fn test_apply_unknown_field_rejected() {
    let descriptor = cv();
    let mut node = make_node();
    assert!(matches!(
      apply(&descriptor, &mut node, "batch_size", "32"),
      Err(InspectorError::UnknownField { .. })
    ));
  }

  #[test]
  fn test_apply_validates_kind() {
    let descriptor = cv();
    let mut node = make_node();
    // Select option not in the schema.
    assert!(matches!(
      apply(&descriptor, &mut node, "model", "AlexNet"),
      Err(InspectorError::InvalidValue { .. })
    ));
    // Number fields must parse.
    assert!(matches!(
      apply(&descriptor, &mut node, "epochs", "lots"),
      Err(InspectorError::InvalidValue { .. })
    ));
    assert!(matches!(
      apply(&descriptor, &mut node, "retries", "-1"),
      Err(InspectorError::InvalidValue { .. })
    ));
    assert!(node.params.is_empty());
  }
}
