use std::path::{Path, PathBuf};

use async_trait::async_trait;

use pipeforge_graph::PipelineFile;

use crate::error::StoreError;
use crate::store::{PipelineStore, SavedPipeline};

/// Pipeline store backed by a directory of JSON files, one per saved
/// pipeline. File names are slugs derived from the save name.
#[derive(Debug, Clone)]
pub struct FsPipelineStore {
  root: PathBuf,
}

impl FsPipelineStore {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
    let slug = slugify(name);
    if slug.is_empty() {
      return Err(StoreError::InvalidName {
        name: name.to_string(),
      });
    }
    Ok(self.root.join(format!("{slug}.json")))
  }
}

#[async_trait]
impl PipelineStore for FsPipelineStore {
  async fn save(
    &self,
    name: &str,
    file: &PipelineFile,
    overwrite: bool,
  ) -> Result<(), StoreError> {
    let path = self.path_for(name)?;
    tokio::fs::create_dir_all(&self.root).await?;
    if !overwrite && tokio::fs::try_exists(&path).await? {
      return Err(StoreError::AlreadyExists {
        name: name.to_string(),
      });
    }
    let json = serde_json::to_vec_pretty(file)?;
    tokio::fs::write(&path, json).await?;
    tracing::info!(name, path = %path.display(), "saved pipeline");
    Ok(())
  }

  async fn load(&self, name: &str) -> Result<PipelineFile, StoreError> {
    let path = self.path_for(name)?;
    let bytes = match tokio::fs::read(&path).await {
      Ok(bytes) => bytes,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        return Err(StoreError::NotFound {
          name: name.to_string(),
        });
      }
      Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_slice(&bytes)?)
  }

  async fn list(&self) -> Result<Vec<SavedPipeline>, StoreError> {
    let mut entries = Vec::new();
    let mut dir = match tokio::fs::read_dir(&self.root).await {
      Ok(dir) => dir,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(entries),
      Err(e) => return Err(e.into()),
    };
    while let Some(entry) = dir.next_entry().await? {
      let path = entry.path();
      if path.extension().and_then(|e| e.to_str()) != Some("json") {
        continue;
      }
      let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        continue;
      };
      let bytes = tokio::fs::read(&path).await?;
      let file: PipelineFile = match serde_json::from_slice(&bytes) {
        Ok(file) => file,
        Err(e) => {
          tracing::warn!(path = %path.display(), error = %e, "skipping unreadable pipeline file");
          continue;
        }
      };
      entries.push(SavedPipeline {
        name: stem.to_string(),
        domain: file.domain,
        label: file.label,
        node_count: file.pipeline.nodes.len(),
      });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
  }

  async fn delete(&self, name: &str) -> Result<(), StoreError> {
    let path = self.path_for(name)?;
    match tokio::fs::remove_file(&path).await {
      Ok(()) => {
        tracing::info!(name, "deleted pipeline");
        Ok(())
      }
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StoreError::NotFound {
        name: name.to_string(),
      }),
      Err(e) => Err(e.into()),
    }
  }
}

/// Lowercase, keep alphanumerics, collapse everything else to single
/// hyphens. "My CV Pipeline" -> "my-cv-pipeline".
fn slugify(name: &str) -> String {
  let mut slug = String::with_capacity(name.len());
  let mut last_hyphen = true;
  for c in name.chars() {
    if c.is_ascii_alphanumeric() {
      slug.extend(c.to_lowercase());
      last_hyphen = false;
    } else if !last_hyphen {
      slug.push('-');
      last_hyphen = true;
    }
  }
  while slug.ends_with('-') {
    slug.pop();
  }
  slug
}

#[cfg(test)]
mod tests {
  use super::*;
  use pipeforge_graph::{Pipeline, PipelineFile};

  fn make_file(domain: &str, label: &str) -> PipelineFile {
    let mut pipeline = Pipeline::default();
    pipeline.push_node(pipeforge_graph::GraphNode::new(
      "1",
      "Data Loader",
      50.0,
      80.0,
    ));
    PipelineFile::new(domain, label, pipeline)
  }

  #[test]
  fn test_slugify() {
    assert_eq!(slugify("My CV Pipeline"), "my-cv-pipeline");
    assert_eq!(slugify("  weird -- name!  "), "weird-name");
    assert_eq!(slugify("!!!"), "");
  }

  #[tokio::test]
  async fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPipelineStore::new(dir.path());

    let file = make_file("cv", "CV Pipeline");
    store.save("My CV Pipeline", &file, false).await.unwrap();

    let loaded = store.load("My CV Pipeline").await.unwrap();
    assert_eq!(loaded, file);
  }

  #[tokio::test]
  async fn test_save_refuses_overwrite_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPipelineStore::new(dir.path());

    let file = make_file("cv", "CV Pipeline");
    store.save("run", &file, false).await.unwrap();

    let err = store.save("run", &file, false).await.unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists { .. }));

    store.save("run", &file, true).await.unwrap();
  }

  #[tokio::test]
  async fn test_load_missing_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPipelineStore::new(dir.path());

    let err = store.load("nope").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
  }

  #[tokio::test]
  async fn test_invalid_name_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPipelineStore::new(dir.path());

    let err = store.load("???").await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidName { .. }));
  }

  #[tokio::test]
  async fn test_list_sorted_with_summaries() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPipelineStore::new(dir.path());

    store
      .save("beta", &make_file("llm", "LLM Pipeline"), false)
      .await
      .unwrap();
    store
      .save("alpha", &make_file("cv", "CV Pipeline"), false)
      .await
      .unwrap();

    let entries = store.list().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "alpha");
    assert_eq!(entries[0].domain, "cv");
    assert_eq!(entries[0].node_count, 1);
    assert_eq!(entries[1].name, "beta");
    assert_eq!(entries[1].domain, "llm");
  }

  #[tokio::test]
  async fn test_list_empty_when_dir_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPipelineStore::new(dir.path().join("missing"));
    assert!(store.list().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_delete() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPipelineStore::new(dir.path());

    store
      .save("gone", &make_file("cv", "CV Pipeline"), false)
      .await
      .unwrap();
    store.delete("gone").await.unwrap();

    let err = store.delete("gone").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
  }
}
