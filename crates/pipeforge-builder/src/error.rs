use thiserror::Error;

use pipeforge_graph::GraphError;
use pipeforge_inspector::InspectorError;

#[derive(Debug, Error)]
pub enum BuilderError {
  #[error("no node selected")]
  NoNodeSelected,

  #[error("a submission is already in flight")]
  SubmissionInFlight,

  #[error(transparent)]
  Inspector(#[from] InspectorError),

  #[error(transparent)]
  Graph(#[from] GraphError),
}
