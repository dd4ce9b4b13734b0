use pipeforge_canvas::{Scene, ViewPoint, Viewport};
use pipeforge_domain::{DomainDescriptor, DomainRegistry};
use pipeforge_graph::{GraphNode, NodeId, Pipeline, PipelineFile, Position};
use pipeforge_inspector::InspectorView;
use pipeforge_palette::PaletteView;

use crate::backend::{BackendError, DryRunReport, PipelineBackend, RunHandle, ValidationReport};
use crate::error::BuilderError;

/// Which backend action a submission performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
  Validate,
  DryRun,
  SaveAndRun,
}

/// What a completed submission produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
  Validated(ValidationReport),
  Planned(DryRunReport),
  Submitted(RunHandle),
}

/// Submission lifecycle. While `Pending` the submit buttons are disabled
/// and further submissions are rejected; the pipeline itself is never
/// provisionally mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
  #[default]
  Idle,
  Pending(SubmitKind),
  Succeeded(SubmitOutcome),
  Failed(String),
}

/// The builder shell: sole owner of the editing session's state.
///
/// Hosts render `palette()` / `scene()` / `inspector()` and translate user
/// events into the mutation methods below. Events are handled to completion
/// one at a time; nothing else may hold or mutate this state.
#[derive(Debug)]
pub struct BuilderShell {
  registry: DomainRegistry,
  domain_key: String,
  pipeline: Pipeline,
  selected_node: Option<NodeId>,
  expanded_category: Option<String>,
  search_term: String,
  viewport: Viewport,
  submit: SubmitState,
  /// Monotonic id source. Never rewinds within a domain session, so ids
  /// stay unique even across node removals.
  next_id: u64,
}

impl BuilderShell {
  /// Open an editing session. The initial key typically arrives from
  /// navigation state (`?domain=<key>`); unknown or empty keys resolve to
  /// the default domain rather than failing.
  pub fn new(registry: DomainRegistry, initial_key: &str) -> Self {
    let (domain_key, expanded_category, pipeline) = {
      let descriptor = registry.resolve(initial_key);
      (
        descriptor.key.clone(),
        descriptor.primary_category().map(str::to_string),
        instantiate(descriptor),
      )
    };

    let next_id = max_numeric_id(&pipeline);
    Self {
      registry,
      domain_key,
      pipeline,
      selected_node: None,
      expanded_category,
      search_term: String::new(),
      viewport: Viewport::default(),
      submit: SubmitState::Idle,
      next_id,
    }
  }

  pub fn domain(&self) -> &DomainDescriptor {
    self.registry.resolve(&self.domain_key)
  }

  pub fn domains(&self) -> impl Iterator<Item = &DomainDescriptor> {
    self.registry.iter()
  }

  pub fn pipeline(&self) -> &Pipeline {
    &self.pipeline
  }

  pub fn selected_node(&self) -> Option<&str> {
    self.selected_node.as_deref()
  }

  pub fn expanded_category(&self) -> Option<&str> {
    self.expanded_category.as_deref()
  }

  pub fn search_term(&self) -> &str {
    &self.search_term
  }

  /// Canvas-local transient state; reset on every domain switch.
  pub fn viewport(&self) -> &Viewport {
    &self.viewport
  }

  pub fn viewport_mut(&mut self) -> &mut Viewport {
    &mut self.viewport
  }

  pub fn submit_state(&self) -> &SubmitState {
    &self.submit
  }

  // ---- derived view models ------------------------------------------------

  pub fn palette(&self) -> PaletteView {
    PaletteView::build(self.domain(), self.expanded_category.as_deref(), &self.search_term)
  }

  pub fn scene(&self) -> Scene {
    Scene::build(&self.pipeline, self.selected_node.as_deref())
  }

  pub fn inspector(&self) -> InspectorView {
    let node = self
      .selected_node
      .as_deref()
      .and_then(|id| self.pipeline.get_node(id));
    InspectorView::build(self.domain(), node)
  }

  // ---- transitions --------------------------------------------------------

  /// Switch the active domain. The pipeline is replaced wholesale with a
  /// deep copy of the new domain's default graph: no merge, no history.
  /// Edits made on the previous domain are discarded.
  pub fn switch_domain(&mut self, key: &str) {
    let (domain_key, expanded_category, pipeline) = {
      let descriptor = self.registry.resolve(key);
      (
        descriptor.key.clone(),
        descriptor.primary_category().map(str::to_string),
        instantiate(descriptor),
      )
    };

    tracing::debug!(from = %self.domain_key, to = %domain_key, "switching domain");
    self.next_id = max_numeric_id(&pipeline);
    self.domain_key = domain_key;
    self.pipeline = pipeline;
    self.selected_node = None;
    self.expanded_category = expanded_category;
    self.search_term.clear();
    self.viewport.reset();
    self.submit = SubmitState::Idle;
  }

  /// Select a node, or clear the selection with `None`. An id that no
  /// longer exists clears the selection instead of erroring.
  pub fn select_node(&mut self, node_id: Option<&str>) {
    self.selected_node = match node_id {
      Some(id) if self.pipeline.contains_node(id) => Some(id.to_string()),
      Some(id) => {
        tracing::debug!(node_id = id, "ignoring selection of unknown node");
        None
      }
      None => None,
    };
  }

  /// Canvas click: select the topmost node under the point, or clear the
  /// selection when the click lands on empty canvas.
  pub fn click_at(&mut self, world: Position) {
    let hit = self.scene().node_at(world).map(|n| n.id.clone());
    self.selected_node = hit;
  }

  pub fn toggle_category(&mut self, name: &str) {
    self.expanded_category = pipeforge_palette::toggle(self.expanded_category.as_deref(), name);
  }

  pub fn set_search_term(&mut self, term: &str) {
    self.search_term = term.to_string();
  }

  /// Append a node of `type_name` at `position` with a fresh id, chain it
  /// onto the previous tail, and select it.
  pub fn add_node(&mut self, type_name: &str, position: Position) -> NodeId {
    let id = self.allocate_id();
    debug_assert!(!self.pipeline.contains_node(&id), "fresh id already taken");

    let tail = self.pipeline.tail().map(|n| n.id.clone());
    self
      .pipeline
      .push_node(GraphNode::new(id.clone(), type_name, position.x, position.y));

    // New nodes default onto the chain; rewiring goes through connect().
    if let Some(tail) = tail {
      if let Err(error) = self.pipeline.connect(&tail, &id) {
        tracing::warn!(%error, "could not chain new node onto tail");
      }
    }

    self.selected_node = Some(id.clone());
    id
  }

  /// Drop from the palette. A drop outside the canvas rectangle is a
  /// silent no-op; one inside appends at the drop's world coordinates.
  pub fn drop_from_palette(
    &mut self,
    type_name: &str,
    view: ViewPoint,
    view_width: f32,
    view_height: f32,
  ) -> Option<NodeId> {
    let world = self.viewport.resolve_drop(view, view_width, view_height)?;
    Some(self.add_node(type_name, world))
  }

  fn allocate_id(&mut self) -> NodeId {
    loop {
      self.next_id += 1;
      let id = self.next_id.to_string();
      if !self.pipeline.contains_node(&id) {
        return id;
      }
    }
  }

  pub fn connect(&mut self, from: &str, to: &str) -> Result<(), BuilderError> {
    self.pipeline.connect(from, to)?;
    Ok(())
  }

  pub fn disconnect(&mut self, from: &str, to: &str) -> bool {
    self.pipeline.disconnect(from, to)
  }

  /// Remove a node and its incident edges, clearing the selection if it
  /// pointed at the node.
  pub fn remove_node(&mut self, node_id: &str) -> Result<(), BuilderError> {
    self
      .pipeline
      .remove_node(node_id)
      .ok_or_else(|| pipeforge_graph::GraphError::NodeNotFound(node_id.to_string()))?;
    if self.selected_node.as_deref() == Some(node_id) {
      self.selected_node = None;
    }
    Ok(())
  }

  /// Inspector edit on the selected node; the value lands on the
  /// `GraphNode`, not in transient form state.
  pub fn set_node_field(&mut self, key: &str, value: &str) -> Result<(), BuilderError> {
    let node_id = self
      .selected_node
      .clone()
      .ok_or(BuilderError::NoNodeSelected)?;
    let descriptor = self.registry.resolve(&self.domain_key);
    let node = self
      .pipeline
      .get_node_mut(&node_id)
      .ok_or(BuilderError::NoNodeSelected)?;
    pipeforge_inspector::apply(descriptor, node, key, value)?;
    Ok(())
  }

  // ---- submission ---------------------------------------------------------

  /// Serialize the current pipeline for the backend.
  pub fn snapshot(&self) -> PipelineFile {
    let descriptor = self.domain();
    PipelineFile::new(
      descriptor.key.clone(),
      descriptor.pipeline_label.clone(),
      self.pipeline.clone(),
    )
  }

  /// Start a submission: rejected while another is pending. Returns the
  /// snapshot the backend should receive.
  pub fn begin_submit(&mut self, kind: SubmitKind) -> Result<PipelineFile, BuilderError> {
    if matches!(self.submit, SubmitState::Pending(_)) {
      return Err(BuilderError::SubmissionInFlight);
    }
    self.submit = SubmitState::Pending(kind);
    Ok(self.snapshot())
  }

  /// Record the backend's answer. Failures carry a message for the host to
  /// surface; the pipeline is untouched either way.
  pub fn finish_submit(&mut self, outcome: Result<SubmitOutcome, BackendError>) {
    self.submit = match outcome {
      Ok(outcome) => SubmitState::Succeeded(outcome),
      Err(error) => {
        tracing::warn!(%error, "submission failed");
        SubmitState::Failed(error.to_string())
      }
    };
  }

  /// Drive a full submission against a backend.
  pub async fn submit(
    &mut self,
    kind: SubmitKind,
    backend: &dyn PipelineBackend,
  ) -> Result<(), BuilderError> {
    let file = self.begin_submit(kind)?;
    let outcome = match kind {
      SubmitKind::Validate => backend.validate(&file).await.map(SubmitOutcome::Validated),
      SubmitKind::DryRun => backend.dry_run(&file).await.map(SubmitOutcome::Planned),
      SubmitKind::SaveAndRun => backend.save_and_run(&file).await.map(SubmitOutcome::Submitted),
    };
    self.finish_submit(outcome);
    Ok(())
  }
}

/// Highest numeric node id, seeding the shell's monotonic allocator.
fn max_numeric_id(pipeline: &Pipeline) -> u64 {
  pipeline
    .nodes
    .iter()
    .filter_map(|n| n.id.parse::<u64>().ok())
    .max()
    .unwrap_or(0)
}

/// Deep-copy a domain's default graph into a live chained pipeline.
fn instantiate(descriptor: &DomainDescriptor) -> Pipeline {
  Pipeline::from_chain(
    descriptor
      .default_nodes
      .iter()
      .map(|t| GraphNode::new(t.id.clone(), t.type_name.clone(), t.x, t.y))
      .collect(),
  )
}
