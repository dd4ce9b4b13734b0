//! Pipeforge Domain
//!
//! This crate contains the domain registry for the pipeline builder. Each ML
//! domain (computer vision, LLM, audio, multimodal, time series) is described
//! by a [`DomainDescriptor`]: display metadata, the categorized node
//! vocabulary shown in the palette, the inspector field schema, and the
//! default starter graph instantiated on domain switch.
//!
//! Descriptors are plain serializable data. The registry performs lookups and
//! resolves untrusted keys (e.g. from navigation state) to a descriptor,
//! falling back to the default domain instead of failing.

mod catalog;
mod descriptor;
mod error;
mod registry;
mod schema;

pub use catalog::builtin_domains;
pub use descriptor::{Category, DomainDescriptor, NodeTemplate};
pub use error::DomainError;
pub use registry::DomainRegistry;
pub use schema::{execution_fields, universal_fields, Field, FieldKind, FieldSchema};
