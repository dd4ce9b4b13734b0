use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
  #[error("unknown domain: {key}")]
  UnknownDomain { key: String },

  #[error("duplicate domain key: {key}")]
  DuplicateDomainKey { key: String },

  #[error("registry must contain at least one domain")]
  EmptyRegistry,
}
