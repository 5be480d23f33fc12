//! Service registry storage

use crate::{Error, Result, ServiceDescriptor};
use std::collections::HashMap;

/// Central registry for service descriptors.
///
/// Provides lookup by service-kind tag. Unknown tags surface as
/// [`Error::UnknownService`] so misconfigured service filters fail at
/// startup instead of deep inside a composition run.
pub struct ServiceRegistry {
    services: HashMap<String, ServiceDescriptor>,
}

impl ServiceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with all built-in services.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for desc in super::builtins::builtin_descriptors() {
            registry.register(desc);
        }
        registry
    }

    /// Register a descriptor under its service-kind tag.
    pub fn register(&mut self, desc: ServiceDescriptor) {
        self.services.insert(desc.name.clone(), desc);
    }

    /// Get a descriptor by tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownService`] when the tag is not registered.
    pub fn get(&self, name: &str) -> Result<&ServiceDescriptor> {
        self.services.get(name).ok_or_else(|| Error::UnknownService {
            name: name.to_string(),
        })
    }

    /// Check if a service is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Get the number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// List all registered service tags (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.services.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Iterate over all descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &ServiceDescriptor> {
        self.services.values()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
