use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("pipeline not found: {name}")]
  NotFound { name: String },

  #[error("pipeline already exists: {name}")]
  AlreadyExists { name: String },

  #[error("invalid pipeline name: {name:?}")]
  InvalidName { name: String },

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("serialization error: {0}")]
  Serde(#[from] serde_json::Error),
}
