use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pipeforge_builder::{BuilderShell, LocalBackend, PipelineBackend};
use pipeforge_domain::DomainRegistry;
use pipeforge_graph::PipelineFile;
use pipeforge_store::{FsPipelineStore, PipelineStore};

/// Pipeforge - a domain-aware ML pipeline builder
#[derive(Parser)]
#[command(name = "pipeforge")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the data directory (default: ~/.pipeforge)
  #[arg(long, global = true)]
  data_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// List the available pipeline domains
  Domains,

  /// Show the node palette for a domain
  Palette {
    /// Domain key (e.g. "cv", "llm")
    domain: String,

    /// Filter node types by substring
    #[arg(long)]
    search: Option<String>,
  },

  /// Create a pipeline from a domain's default template and save it
  New {
    /// Domain key (e.g. "cv", "llm")
    domain: String,

    /// Name to save the pipeline under
    name: String,

    /// Overwrite an existing pipeline with the same name
    #[arg(long)]
    force: bool,
  },

  /// Print a saved pipeline or a pipeline file
  Show {
    /// Saved pipeline name, or a path to a .json pipeline file
    target: String,
  },

  /// Validate a pipeline's graph structure
  Validate {
    /// Saved pipeline name, or a path to a .json pipeline file
    target: String,
  },

  /// Plan a pipeline's execution order without running it
  DryRun {
    /// Saved pipeline name, or a path to a .json pipeline file
    target: String,
  },

  /// List saved pipelines
  List,

  /// Delete a saved pipeline
  Delete {
    /// Saved pipeline name
    name: String,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .init();

  let cli = Cli::parse();

  let data_dir = cli.data_dir.unwrap_or_else(|| {
    dirs::home_dir()
      .expect("could not determine home directory")
      .join(".pipeforge")
  });
  let store = FsPipelineStore::new(data_dir.join("pipelines"));

  let rt = tokio::runtime::Runtime::new()?;

  match cli.command {
    Some(Commands::Domains) => domains(),
    Some(Commands::Palette { domain, search }) => palette(&domain, search.as_deref()),
    Some(Commands::New {
      domain,
      name,
      force,
    }) => rt.block_on(new_pipeline(&store, &domain, &name, force)),
    Some(Commands::Show { target }) => rt.block_on(show(&store, &target)),
    Some(Commands::Validate { target }) => rt.block_on(validate(&store, &target)),
    Some(Commands::DryRun { target }) => rt.block_on(dry_run(&store, &target)),
    Some(Commands::List) => rt.block_on(list(&store)),
    Some(Commands::Delete { name }) => rt.block_on(delete(&store, &name)),
    None => {
      println!("pipeforge - use --help to see available commands");
      Ok(())
    }
  }
}

fn domains() -> Result<()> {
  let registry = DomainRegistry::builtin();
  for domain in registry.iter() {
    println!(
      "{:<12} {} ({}, {} categories, {} default nodes)",
      domain.key,
      domain.name,
      domain.pipeline_label,
      domain.categories.len(),
      domain.default_nodes.len()
    );
  }
  Ok(())
}

fn palette(domain_key: &str, search: Option<&str>) -> Result<()> {
  let registry = DomainRegistry::builtin();
  let domain = registry
    .get(domain_key)
    .with_context(|| format!("unknown domain '{}'", domain_key))?;

  let view = pipeforge_palette::PaletteView::build(domain, None, search.unwrap_or(""));
  for row in &view.rows {
    println!("{} {}", row.icon, row.name);
    for entry in &row.entries {
      println!("  - {}", entry);
    }
  }
  if view.filtered && view.rows.is_empty() {
    println!("(no matches)");
  }
  Ok(())
}

async fn new_pipeline(
  store: &FsPipelineStore,
  domain_key: &str,
  name: &str,
  force: bool,
) -> Result<()> {
  let registry = DomainRegistry::builtin();
  registry
    .get(domain_key)
    .with_context(|| format!("unknown domain '{}'", domain_key))?;

  let shell = BuilderShell::new(registry, domain_key);
  let file = shell.snapshot();
  store
    .save(name, &file, force)
    .await
    .with_context(|| format!("failed to save pipeline '{}'", name))?;

  println!(
    "created '{}' from {} template ({} nodes)",
    name,
    domain_key,
    file.pipeline.nodes.len()
  );
  Ok(())
}

async fn show(store: &FsPipelineStore, target: &str) -> Result<()> {
  let file = resolve_target(store, target).await?;
  println!("{}", serde_json::to_string_pretty(&file)?);
  Ok(())
}

async fn validate(store: &FsPipelineStore, target: &str) -> Result<()> {
  let file = resolve_target(store, target).await?;
  let backend = LocalBackend::new();
  let report = backend
    .validate(&file)
    .await
    .context("validation failed")?;

  if report.is_ok() {
    println!("ok: {} nodes, {} edges", file.pipeline.nodes.len(), file.pipeline.edges.len());
  } else {
    for issue in &report.issues {
      match &issue.node_id {
        Some(id) => println!("error [{}]: {}", id, issue.message),
        None => println!("error: {}", issue.message),
      }
    }
    anyhow::bail!("{} issue(s) found", report.issues.len());
  }
  Ok(())
}

async fn dry_run(store: &FsPipelineStore, target: &str) -> Result<()> {
  let file = resolve_target(store, target).await?;
  let backend = LocalBackend::new();
  let report = backend.dry_run(&file).await.context("dry run failed")?;

  for (i, step) in report.steps.iter().enumerate() {
    let resource = step.resource.as_deref().unwrap_or("default");
    println!("{}. {} ({}) on {}", i + 1, step.type_name, step.node_id, resource);
  }
  Ok(())
}

async fn list(store: &FsPipelineStore) -> Result<()> {
  let entries = store.list().await.context("failed to list pipelines")?;
  if entries.is_empty() {
    println!("no saved pipelines");
    return Ok(());
  }
  for entry in entries {
    println!(
      "{:<24} {:<12} {} ({} nodes)",
      entry.name, entry.domain, entry.label, entry.node_count
    );
  }
  Ok(())
}

async fn delete(store: &FsPipelineStore, name: &str) -> Result<()> {
  store
    .delete(name)
    .await
    .with_context(|| format!("failed to delete pipeline '{}'", name))?;
  println!("deleted '{}'", name);
  Ok(())
}

/// A target is a path when it looks like one, otherwise a saved name.
async fn resolve_target(store: &FsPipelineStore, target: &str) -> Result<PipelineFile> {
  let path = Path::new(target);
  if path.extension().and_then(|e| e.to_str()) == Some("json") || path.exists() {
    let content = tokio::fs::read_to_string(path)
      .await
      .with_context(|| format!("failed to read pipeline file: {}", path.display()))?;
    serde_json::from_str(&content)
      .with_context(|| format!("failed to parse pipeline file: {}", path.display()))
  } else {
    store
      .load(target)
      .await
      .with_context(|| format!("no saved pipeline named '{}'", target))
  }
}
