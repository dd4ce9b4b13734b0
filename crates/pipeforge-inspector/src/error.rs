use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectorError {
  #[error("unknown inspector field: {key}")]
  UnknownField { key: String },

  #[error("invalid value for field '{key}': {value}")]
  InvalidValue { key: String, value: String },
}
