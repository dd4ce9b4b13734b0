//! Pipeforge Palette
//!
//! View model for the node palette. Two display modes:
//!
//! - Accordion (empty search): one row per category, at most one expanded at
//!   a time. Single-focus by design, not independent accordions.
//! - Filter (non-empty search): case-insensitive substring match across all
//!   categories' node types, matches grouped under their category, empty
//!   categories omitted. The filtered view bypasses the single-expand rule.
//!
//! Every listed entry is a drag source; drop semantics belong to the canvas.

use pipeforge_domain::DomainDescriptor;

/// The palette as the host UI should render it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteView {
  pub rows: Vec<CategoryRow>,
  /// True when a search term is active and rows are the flat filtered view.
  pub filtered: bool,
}

/// One category row with the node types currently visible under it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
  pub name: String,
  pub icon: String,
  pub expanded: bool,
  pub entries: Vec<String>,
}

impl PaletteView {
  /// Build the palette for the active domain.
  pub fn build(descriptor: &DomainDescriptor, expanded: Option<&str>, search: &str) -> Self {
    let term = search.trim().to_lowercase();
    if term.is_empty() {
      Self::accordion(descriptor, expanded)
    } else {
      Self::filter(descriptor, &term)
    }
  }

  fn accordion(descriptor: &DomainDescriptor, expanded: Option<&str>) -> Self {
    let rows = descriptor
      .categories
      .iter()
      .map(|category| {
        let is_expanded = expanded == Some(category.name.as_str());
        CategoryRow {
          name: category.name.clone(),
          icon: category.icon.clone(),
          expanded: is_expanded,
          entries: if is_expanded {
            category.node_types.clone()
          } else {
            Vec::new()
          },
        }
      })
      .collect();

    Self {
      rows,
      filtered: false,
    }
  }

  fn filter(descriptor: &DomainDescriptor, term: &str) -> Self {
    let rows = descriptor
      .categories
      .iter()
      .filter_map(|category| {
        let entries: Vec<String> = category
          .node_types
          .iter()
          .filter(|n| n.to_lowercase().contains(term))
          .cloned()
          .collect();
        if entries.is_empty() {
          return None;
        }
        Some(CategoryRow {
          name: category.name.clone(),
          icon: category.icon.clone(),
          expanded: true,
          entries,
        })
      })
      .collect();

    Self {
      rows,
      filtered: true,
    }
  }
}

/// Accordion toggle: expanding a category collapses the previous one;
/// toggling the expanded category collapses it.
pub fn toggle(current: Option<&str>, name: &str) -> Option<String> {
  if current == Some(name) {
    None
  } else {
    Some(name.to_string())
  }
}
