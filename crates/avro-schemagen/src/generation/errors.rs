// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for schema generation.
//!
//! Every error aborts the whole `generate` call; there is no partial
//! schema and no retry. The core attaches no logging — callers add the
//! human-readable context of which class or field was being processed.

use std::fmt;

use crate::schema::SchemaError;

use super::model::AttributeName;

/// Generation failure modes.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// A declared type name is outside the closed Avro type enumeration.
    InvalidType(String),
    /// An attribute named a builder operation the schema kind under
    /// construction does not support.
    UnknownOperation(SchemaError),
    /// `get` was invoked for an attribute that is not present.
    MissingAttribute(AttributeName),
    /// An attribute value had the wrong shape for its operation.
    InvalidValue {
        /// The offending attribute.
        attribute: AttributeName,
        /// What the operation required.
        expected: &'static str,
    },
    /// A non-empty attribute set declared no type alternative.
    MissingType,
    /// The class source has no descriptor for the identifier.
    UnknownClass(String),
    /// A `target_class` chain revisited a class that is still being
    /// generated.
    CyclicReference {
        /// Identifier that closed the cycle.
        class: String,
    },
    /// A descriptor document could not be read.
    Io(String),
    /// A descriptor document could not be parsed.
    InvalidDescriptor(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidType(name) => {
                write!(f, "'{}' is not a valid avro type", name)
            }
            GenerateError::UnknownOperation(inner) => write!(f, "{}", inner),
            GenerateError::MissingAttribute(name) => {
                write!(f, "attribute '{}' is not present", name)
            }
            GenerateError::InvalidValue {
                attribute,
                expected,
            } => write!(f, "attribute '{}' expects {}", attribute, expected),
            GenerateError::MissingType => {
                write!(f, "declaration carries attributes but no type")
            }
            GenerateError::UnknownClass(ident) => {
                write!(f, "no class descriptor registered for '{}'", ident)
            }
            GenerateError::CyclicReference { class } => {
                write!(f, "cyclic class reference through '{}'", class)
            }
            GenerateError::Io(message) => write!(f, "I/O error: {}", message),
            GenerateError::InvalidDescriptor(message) => {
                write!(f, "invalid descriptor document: {}", message)
            }
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<SchemaError> for GenerateError {
    fn from(value: SchemaError) -> Self {
        GenerateError::UnknownOperation(value)
    }
}
