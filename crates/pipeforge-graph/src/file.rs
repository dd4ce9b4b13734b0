use serde::{Deserialize, Serialize};

use crate::pipeline::Pipeline;

/// The serialized save/load schema: a pipeline plus the context needed to
/// reopen it in the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineFile {
  /// Schema version for forward migration.
  pub version: u32,
  /// Domain key the pipeline was authored under.
  pub domain: String,
  /// Display label, e.g. "CV Training Pipeline".
  pub label: String,
  pub pipeline: Pipeline,
}

impl PipelineFile {
  pub const CURRENT_VERSION: u32 = 1;

  pub fn new(domain: impl Into<String>, label: impl Into<String>, pipeline: Pipeline) -> Self {
    Self {
      version: Self::CURRENT_VERSION,
      domain: domain.into(),
      label: label.into(),
      pipeline,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::node::GraphNode;

  #[test]
  fn test_pipeline_file_roundtrip() {
    let pipeline = Pipeline::from_chain(vec![
      GraphNode::new("1", "Data Source", 50.0, 80.0),
      GraphNode::new("2", "Train Model", 200.0, 80.0),
    ]);
    let file = PipelineFile::new("cv", "CV Training Pipeline", pipeline);
    let json = serde_json::to_string_pretty(&file).unwrap();
    let back: PipelineFile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, file);
    assert_eq!(back.version, PipelineFile::CURRENT_VERSION);
  }
}
