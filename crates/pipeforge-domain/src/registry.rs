use crate::catalog::builtin_domains;
use crate::descriptor::DomainDescriptor;
use crate::error::DomainError;

/// Ordered domain lookup.
///
/// Declaration order is preserved and used as the domain selector tab order;
/// the first declared domain is the default that unknown keys resolve to.
#[derive(Debug, Clone)]
pub struct DomainRegistry {
  domains: Vec<DomainDescriptor>,
}

impl DomainRegistry {
  /// Build a registry from descriptors, rejecting duplicate keys.
  pub fn new(domains: Vec<DomainDescriptor>) -> Result<Self, DomainError> {
    if domains.is_empty() {
      return Err(DomainError::EmptyRegistry);
    }
    for (i, domain) in domains.iter().enumerate() {
      if domains[..i].iter().any(|d| d.key == domain.key) {
        return Err(DomainError::DuplicateDomainKey {
          key: domain.key.clone(),
        });
      }
    }
    Ok(Self { domains })
  }

  /// The built-in catalog of ML domains.
  pub fn builtin() -> Self {
    Self::new(builtin_domains()).expect("built-in catalog is valid")
  }

  /// Strict lookup by key.
  pub fn get(&self, key: &str) -> Result<&DomainDescriptor, DomainError> {
    self
      .domains
      .iter()
      .find(|d| d.key == key)
      .ok_or_else(|| DomainError::UnknownDomain {
        key: key.to_string(),
      })
  }

  /// Lookup for keys arriving from navigation state.
  ///
  /// Unknown or empty keys resolve to the default domain; the fallback is
  /// logged but never surfaced as a failure.
  pub fn resolve(&self, key: &str) -> &DomainDescriptor {
    match self.get(key) {
      Ok(domain) => domain,
      Err(_) => {
        let fallback = self.default_domain();
        if !key.is_empty() {
          tracing::warn!(key, fallback = %fallback.key, "unknown domain key, using default");
        }
        fallback
      }
    }
  }

  /// The default domain (first declared).
  pub fn default_domain(&self) -> &DomainDescriptor {
    &self.domains[0]
  }

  /// Domains in declaration order.
  pub fn iter(&self) -> impl Iterator<Item = &DomainDescriptor> {
    self.domains.iter()
  }

  pub fn len(&self) -> usize {
    self.domains.len()
  }

  pub fn is_empty(&self) -> bool {
    self.domains.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_builtin_order_is_stable() {
    let registry = DomainRegistry::builtin();
    let keys: Vec<&str> = registry.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, vec!["cv", "llm", "audio", "multimodal", "timeseries"]);
  }

  #[test]
  fn test_get_unknown_key_fails() {
    let registry = DomainRegistry::builtin();
    assert!(matches!(
      registry.get("robotics"),
      Err(DomainError::UnknownDomain { .. })
    ));
  }

  #[test]
  fn test_resolve_falls_back_to_default() {
    let registry = DomainRegistry::builtin();
    assert_eq!(registry.resolve("robotics").key, "cv");
    assert_eq!(registry.resolve("").key, "cv");
    assert_eq!(registry.resolve("audio").key, "audio");
  }

  #[test]
  fn test_duplicate_key_rejected() {
    let domains = builtin_domains();
    let mut doubled = domains.clone();
    doubled.push(domains[0].clone());
    assert!(matches!(
      DomainRegistry::new(doubled),
      Err(DomainError::DuplicateDomainKey { .. })
    ));
  }

  #[test]
  fn test_empty_registry_rejected() {
    assert!(matches!(
      DomainRegistry::new(vec![]),
      Err(DomainError::EmptyRegistry)
    ));
  }
}
