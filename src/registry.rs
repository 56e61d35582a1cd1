//! Name-keyed icon registry.
//!
//! Mirrors the rendering engine's image-cache step: each badge style is
//! built once at style-initialization time and registered under an icon
//! name (the reference style registers its shield as `"shield"`).
//! Descriptors are immutable for the process lifetime, so re-registering a
//! name is an error rather than a replacement.

use std::collections::HashMap;

use thiserror::Error;

use crate::badge::IconDescriptor;

/// Errors raised by [`IconRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// An icon with this name is already registered.
    #[error("icon already registered: {0}")]
    DuplicateIcon(String),
}

/// An insert-once cache of built icons, keyed by icon name.
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: HashMap<String, IconDescriptor>,
}

impl IconRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an icon under a name.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        icon: IconDescriptor,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.icons.contains_key(&name) {
            return Err(RegistryError::DuplicateIcon(name));
        }
        self.icons.insert(name, icon);
        Ok(())
    }

    /// Looks up a registered icon.
    pub fn get(&self, name: &str) -> Option<&IconDescriptor> {
        self.icons.get(name)
    }

    /// Returns the registered icon names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// Returns the number of registered icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
