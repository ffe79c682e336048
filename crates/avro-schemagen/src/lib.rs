// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Avro-style schema generation from declarative class descriptors.
//!
//! A data model class is described once — its fields, their declared
//! types and the attributes attached to each declaration site — and this
//! crate derives the corresponding immutable schema graph, so the class
//! descriptor is the single source of truth for the wire schema instead
//! of hand-authored schema text.
//!
//! # Overview
//!
//! - **[`schema`]**: the immutable schema object model. Every builder
//!   operation consumes the current value and returns a new one.
//! - **[`generation`]**: descriptors, attribute sets and the recursive
//!   resolver, including union construction and `target_class`
//!   delegation between registered classes.
//!
//! # Architecture
//!
//! ```text
//! ClassDescriptor (attributes + fields)
//!        |
//!        v
//! SchemaGenerator ----> ClassSource (target_class lookups)
//!        |
//!        v
//! Schema (immutable value, renders to Avro JSON)
//! ```
//!
//! # Example
//!
//! ```
//! use avro_schemagen::generation::{
//!     generate, AttributeName, AttributeSet, ClassDescriptor, ClassRegistry,
//!     FieldDescriptor, TypeName,
//! };
//! use serde_json::json;
//!
//! let person = ClassDescriptor::new("Person").with_field(FieldDescriptor::new(
//!     "fullName",
//!     AttributeSet::new()
//!         .with_type(TypeName::String)
//!         .with_plain(AttributeName::Name, json!("full_name")),
//! ));
//!
//! let mut registry = ClassRegistry::new();
//! registry.insert(person);
//!
//! let schema = generate(&registry, "Person").expect("schema");
//! assert_eq!(
//!     schema.to_json(),
//!     json!({
//!         "type": "record",
//!         "name": "Person",
//!         "fields": [{"name": "full_name", "type": "string"}],
//!     })
//! );
//! ```
//!
//! Generation is purely synchronous and touches no shared mutable state;
//! concurrent calls over a shared registry are safe.

pub mod generation;
pub mod schema;

pub use generation::{
    generate, ClassDescriptor, ClassRegistry, ClassSource, FieldDescriptor, GenerateError,
    SchemaGenerator,
};
pub use schema::{FieldOrder, RecordField, Schema, SchemaError, SchemaKind};
