use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pipeforge_graph::PipelineFile;

use crate::error::StoreError;

/// Storage for named pipeline snapshots.
#[async_trait]
pub trait PipelineStore: Send + Sync {
  /// Save under `name`. Fails with [`StoreError::AlreadyExists`] when the
  /// name is taken and `overwrite` is false.
  async fn save(&self, name: &str, file: &PipelineFile, overwrite: bool)
    -> Result<(), StoreError>;

  async fn load(&self, name: &str) -> Result<PipelineFile, StoreError>;

  /// All saved pipelines, sorted by name.
  async fn list(&self) -> Result<Vec<SavedPipeline>, StoreError>;

  async fn delete(&self, name: &str) -> Result<(), StoreError>;
}

/// Listing entry: enough to render a load dialog without parsing every
/// graph in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPipeline {
  pub name: String,
  pub domain: String,
  pub label: String,
  pub node_count: usize,
}
