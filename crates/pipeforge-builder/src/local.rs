use async_trait::async_trait;

use pipeforge_graph::{validate, GraphError, PipelineFile, Topology};

use crate::backend::{
  BackendError, DryRunReport, DryRunStep, PipelineBackend, RunHandle, ValidationIssue,
  ValidationReport,
};

/// In-process backend: structural validation and a simulated execution plan.
///
/// Nothing is persisted or executed; save-and-run mints a run handle so the
/// rest of the flow (pending state, success toast) behaves like the real
/// thing.
#[derive(Debug, Default)]
pub struct LocalBackend;

impl LocalBackend {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl PipelineBackend for LocalBackend {
  async fn validate(&self, file: &PipelineFile) -> Result<ValidationReport, BackendError> {
    let issues = match validate(&file.pipeline) {
      Ok(()) => Vec::new(),
      Err(error) => vec![to_issue(error)],
    };
    Ok(ValidationReport { issues })
  }

  async fn dry_run(&self, file: &PipelineFile) -> Result<DryRunReport, BackendError> {
    validate(&file.pipeline)?;

    let topology = Topology::new(&file.pipeline);
    let steps = topology
      .execution_order(&file.pipeline)
      .into_iter()
      .filter_map(|node_id| {
        let node = file.pipeline.get_node(&node_id)?;
        Some(DryRunStep {
          node_id,
          type_name: node.type_name.clone(),
          resource: node.execution.resource.clone(),
        })
      })
      .collect();

    Ok(DryRunReport { steps })
  }

  async fn save_and_run(&self, file: &PipelineFile) -> Result<RunHandle, BackendError> {
    validate(&file.pipeline)?;

    let handle = RunHandle::new(file.label.clone());
    tracing::info!(run_id = %handle.run_id, label = %handle.label, "pipeline submitted");
    Ok(handle)
  }
}

/// Attribute a structural error to its node where the failure is local.
fn to_issue(error: GraphError) -> ValidationIssue {
  let node_id = match &error {
    GraphError::NodeNotFound(id) => Some(id.clone()),
    GraphError::DuplicateNodeId { node_id } | GraphError::SelfLoop { node_id } => {
      Some(node_id.clone())
    }
    GraphError::InvalidEdge { from, .. } | GraphError::DuplicateEdge { from, .. } => {
      Some(from.clone())
    }
    GraphError::CycleDetected => None,
  };
  ValidationIssue {
    node_id,
    message: error.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pipeforge_graph::{Edge, GraphNode, Pipeline};

  fn make_file(pipeline: Pipeline) -> PipelineFile {
    PipelineFile::new("cv", "CV Training Pipeline", pipeline)
  }

  fn make_chain() -> Pipeline {
    Pipeline::from_chain(vec![
      GraphNode::new("1", "Data Source", 50.0, 80.0),
      GraphNode::new("2", "Train Model", 200.0, 80.0),
      GraphNode::new("3", "mAP Eval", 350.0, 80.0),
    ])
  }

  #[tokio::test]
  async fn test_validate_clean_pipeline() {
    let backend = LocalBackend::new();
    let report = backend.validate(&make_file(make_chain())).await.unwrap();
    assert!(report.is_ok());
  }

  #[tokio::test]
  async fn test_validate_reports_cycle() {
    let mut pipeline = make_chain();
    pipeline.edges.push(Edge::new("3", "1"));
    let backend = LocalBackend::new();
    let report = backend.validate(&make_file(pipeline)).await.unwrap();
    assert_eq!(report.issues.len(), 1);
    assert!(report.issues[0].message.contains("cycle"));
    assert_eq!(report.issues[0].node_id, None);
  }

  #[tokio::test]
  async fn test_dry_run_plans_in_execution_order() {
    let backend = LocalBackend::new();
    let report = backend.dry_run(&make_file(make_chain())).await.unwrap();
    let ids: Vec<&str> = report.steps.iter().map(|s| s.node_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(report.steps[0].type_name, "Data Source");
  }

  #[tokio::test]
  async fn test_dry_run_rejects_invalid_pipeline() {
    let mut pipeline = make_chain();
    pipeline.edges.push(Edge::new("2", "2"));
    let backend = LocalBackend::new();
    assert!(matches!(
      backend.dry_run(&make_file(pipeline)).await,
      Err(BackendError::Rejected(_))
    ));
  }

  #[tokio::test]
  async fn test_save_and_run_mints_distinct_handles() {
    let backend = LocalBackend::new();
    let file = make_file(make_chain());
    let first = backend.save_and_run(&file).await.unwrap();
    let second = backend.save_and_run(&file).await.unwrap();
    assert_ne!(first.run_id, second.run_id);
    assert_eq!(first.label, "CV Training Pipeline");
  }
}
