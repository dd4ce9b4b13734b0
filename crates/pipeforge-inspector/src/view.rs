use pipeforge_domain::{execution_fields, universal_fields, DomainDescriptor, Field, FieldKind};
use pipeforge_graph::GraphNode;

/// The inspector panel contents.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectorView {
  /// No node selected: the host renders the "Select a node to configure"
  /// prompt. Terminal display state, nothing further to do here.
  Empty,
  Node(NodeInspector),
}

/// The form for one selected node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeInspector {
  pub node_id: String,
  pub type_name: String,
  pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
  pub title: String,
  pub fields: Vec<FieldView>,
}

/// One field with its effective value: the node's stored value when
/// present, otherwise the schema default.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
  pub key: String,
  pub label: String,
  pub kind: FieldKind,
  pub value: String,
}

impl InspectorView {
  pub fn build(descriptor: &DomainDescriptor, node: Option<&GraphNode>) -> Self {
    let Some(node) = node else {
      return Self::Empty;
    };

    let mut sections = Vec::with_capacity(3);
    // Fail closed: a domain without fields simply has no domain section.
    if !descriptor.fields.is_empty() {
      sections.push(Section {
        title: "Configuration".to_string(),
        fields: field_views(&descriptor.fields.fields, node),
      });
    }
    sections.push(Section {
      title: "Training".to_string(),
      fields: field_views(&universal_fields(), node),
    });
    sections.push(Section {
      title: "Execution".to_string(),
      fields: field_views(&execution_fields(), node),
    });

    Self::Node(NodeInspector {
      node_id: node.id.clone(),
      type_name: node.type_name.clone(),
      sections,
    })
  }
}

fn field_views(fields: &[Field], node: &GraphNode) -> Vec<FieldView> {
  fields
    .iter()
    .map(|field| FieldView {
      key: field.key.clone(),
      label: field.label.clone(),
      kind: field.kind.clone(),
      value: effective_value(field, node),
    })
    .collect()
}

fn effective_value(field: &Field, node: &GraphNode) -> String {
  let stored = match field.key.as_str() {
    "resource" => node.execution.resource.clone(),
    "timeout" => node.execution.timeout.clone(),
    "retries" => node.execution.retries.map(|r| r.to_string()),
    key => node.params.get(key).cloned(),
  };
  stored.unwrap_or_else(|| field.default.clone())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::apply;
  use pipeforge_domain::DomainRegistry;

  fn cv() -> DomainDescriptor {
    DomainRegistry::builtin().get("cv").unwrap().clone()
  }

  #[test]
  fn test_no_selection_is_empty_prompt() {
    assert_eq!(InspectorView::build(&cv(), None), InspectorView::Empty);
  }

  #[test]
  fn test_cv_train_node_sections() {
    let descriptor = cv();
    let node = GraphNode::new("3", "Train Model", 350.0, 80.0);
    let InspectorView::Node(inspector) = InspectorView::build(&descriptor, Some(&node)) else {
      panic!("expected node inspector");
    };
    assert_eq!(inspector.node_id, "3");
    assert_eq!(inspector.type_name, "Train Model");

    let titles: Vec<&str> = inspector.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Configuration", "Training", "Execution"]);

    let keys: Vec<&str> = inspector.sections[0].fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["model", "image_size"]);
    let keys: Vec<&str> = inspector.sections[1].fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["learning_rate", "epochs"]);
    let keys: Vec<&str> = inspector.sections[2].fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["resource", "timeout", "retries"]);
  }

  #[test]
  fn test_defaults_shown_until_edited() {
    let descriptor = cv();
    let mut node = GraphNode::new("3", "Train Model", 350.0, 80.0);

    let InspectorView::Node(before) = InspectorView::build(&descriptor, Some(&node)) else {
      panic!("expected node inspector");
    };
    let model = before.sections[0].fields.iter().find(|f| f.key == "model").unwrap();
    assert_eq!(model.value, "YOLOv8n");

    apply(&descriptor, &mut node, "model", "EfficientNet-B4").unwrap();
    apply(&descriptor, &mut node, "retries", "7").unwrap();

    let InspectorView::Node(after) = InspectorView::build(&descriptor, Some(&node)) else {
      panic!("expected node inspector");
    };
    let model = after.sections[0].fields.iter().find(|f| f.key == "model").unwrap();
    assert_eq!(model.value, "EfficientNet-B4");
    let retries = after.sections[2].fields.iter().find(|f| f.key == "retries").unwrap();
    assert_eq!(retries.value, "7");
  }

  #[test]
  fn test_empty_schema_fails_closed() {
    let mut descriptor = cv();
    descriptor.fields = pipeforge_domain::FieldSchema::default();
    let node = GraphNode::new("1", "Data Source", 50.0, 80.0);
    let InspectorView::Node(inspector) = InspectorView::build(&descriptor, Some(&node)) else {
      panic!("expected node inspector");
    };
    let titles: Vec<&str> = inspector.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Training", "Execution"]);
  }
}
