//! Pipeforge Builder
//!
//! The builder shell: single owner of every piece of editing state (active
//! domain, pipeline, selection, palette expansion, search term, submission
//! state). Palette, canvas, and inspector view models are derived from it
//! on demand and receive the state read-only; all mutation goes through the
//! shell's methods. That single-owner discipline is the whole concurrency
//! model of the editor.
//!
//! Validate / dry-run / save-and-run leave the core through the async
//! [`PipelineBackend`] trait. [`LocalBackend`] is the in-process
//! implementation used by the CLI.

mod backend;
mod error;
mod local;
mod shell;

pub use backend::{
  BackendError, DryRunReport, DryRunStep, PipelineBackend, RunHandle, ValidationIssue,
  ValidationReport,
};
pub use error::BuilderError;
pub use local::LocalBackend;
pub use shell::{BuilderShell, SubmitKind, SubmitOutcome, SubmitState};
