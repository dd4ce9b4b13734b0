//! Pipeforge Graph
//!
//! The pipeline graph model. A [`Pipeline`] holds nodes and an explicit edge
//! list, so branching and merging topologies are representable. Chains are
//! still the default shape ([`Pipeline::from_chain`], tail chaining on
//! append) but edges are stored and rewirable.
//!
//! [`validate`] performs the structural checks a pipeline must pass before
//! submission: unique node ids, edges that reference existing nodes, no
//! self-loops, no cycles.

mod edge;
mod error;
mod file;
mod node;
mod pipeline;
mod topology;
mod validate;

pub use edge::Edge;
pub use error::GraphError;
pub use file::PipelineFile;
pub use node::{ExecutionSettings, GraphNode, NodeId, Position};
pub use pipeline::Pipeline;
pub use topology::Topology;
pub use validate::validate;
