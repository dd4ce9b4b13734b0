//! Pipeforge Store
//!
//! Named persistence for serialized pipelines. The builder core itself
//! never touches storage; the CLI (or a host application) saves and reopens
//! [`PipelineFile`](pipeforge_graph::PipelineFile) snapshots through the
//! [`PipelineStore`] trait. [`FsPipelineStore`] keeps them as JSON files
//! under a data directory.

mod error;
mod fs_store;
mod store;

pub use error::StoreError;
pub use fs_store::FsPipelineStore;
pub use store::{PipelineStore, SavedPipeline};
