use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use pipeforge_graph::{GraphError, PipelineFile};

/// External collaborator the shell submits pipelines to.
///
/// The core's only obligation is handing over the serialized
/// [`PipelineFile`]; whether the implementation runs in-process or talks to
/// a control plane is the integrator's business.
#[async_trait]
pub trait PipelineBackend: Send + Sync {
  async fn validate(&self, file: &PipelineFile) -> Result<ValidationReport, BackendError>;

  async fn dry_run(&self, file: &PipelineFile) -> Result<DryRunReport, BackendError>;

  async fn save_and_run(&self, file: &PipelineFile) -> Result<RunHandle, BackendError>;
}

#[derive(Debug, Error)]
pub enum BackendError {
  #[error("pipeline rejected: {0}")]
  Rejected(#[from] GraphError),

  #[error("backend unavailable: {0}")]
  Unavailable(String),
}

/// Validation outcome; empty issues means the pipeline passed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
  pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
  pub fn is_ok(&self) -> bool {
    self.issues.is_empty()
  }
}

/// One problem, attributed to a node when the failure is local to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub node_id: Option<String>,
  pub message: String,
}

/// The simulated execution plan a dry run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DryRunReport {
  pub steps: Vec<DryRunStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DryRunStep {
  pub node_id: String,
  pub type_name: String,
  pub resource: Option<String>,
}

/// Handle for a submitted run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunHandle {
  pub run_id: Uuid,
  pub label: String,
}

impl RunHandle {
  pub fn new(label: impl Into<String>) -> Self {
    Self {
      run_id: Uuid::new_v4(),
      label: label.into(),
    }
  }
}
