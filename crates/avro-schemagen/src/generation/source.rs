// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Class descriptor lookup.
//!
//! [`ClassSource`] is the seam that replaces the reflection reader of the
//! original design: the generator resolves `target_class` references
//! through it without caring where descriptors come from. The bundled
//! [`ClassRegistry`] keeps them in memory and can load a JSON descriptor
//! document from a string or file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use super::errors::GenerateError;
use super::model::ClassDescriptor;

// ---------------------------------------------------------------------------
// ClassSource
// ---------------------------------------------------------------------------

/// Resolves class identifiers to their declarative descriptors.
pub trait ClassSource {
    /// Look up the descriptor for `ident`.
    fn class(&self, ident: &str) -> Result<&ClassDescriptor, GenerateError>;
}

// ---------------------------------------------------------------------------
// ClassRegistry
// ---------------------------------------------------------------------------

/// In-memory descriptor store keyed by class name.
///
/// Lookups take `&self`, so a populated registry can serve concurrent
/// `generate` calls without synchronization.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: HashMap<String, ClassDescriptor>,
}

impl ClassRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        ClassRegistry::default()
    }

    /// Register a descriptor, replacing any previous one with the same name.
    pub fn insert(&mut self, descriptor: ClassDescriptor) {
        debug!(
            "registering class descriptor '{}' ({} fields)",
            descriptor.name,
            descriptor.fields.len()
        );
        self.classes.insert(descriptor.name.clone(), descriptor);
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Parse a JSON descriptor document: an array of class descriptors.
    pub fn from_json_str(document: &str) -> Result<Self, GenerateError> {
        let descriptors: Vec<ClassDescriptor> = serde_json::from_str(document)
            .map_err(|e| GenerateError::InvalidDescriptor(e.to_string()))?;

        let mut registry = ClassRegistry::new();
        for descriptor in descriptors {
            registry.insert(descriptor);
        }
        Ok(registry)
    }

    /// Load a JSON descriptor document from a file.
    pub fn load_json_file(path: &Path) -> Result<Self, GenerateError> {
        let document = fs::read_to_string(path).map_err(|e| {
            GenerateError::Io(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&document)
    }
}

impl ClassSource for ClassRegistry {
    fn class(&self, ident: &str) -> Result<&ClassDescriptor, GenerateError> {
        self.classes
            .get(ident)
            .ok_or_else(|| GenerateError::UnknownClass(ident.to_owned()))
    }
}
