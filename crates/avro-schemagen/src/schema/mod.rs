// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Immutable Avro-style schema object model.
//!
//! `Schema` is a persistent value: every builder operation consumes the
//! current value and returns a new one, so a partially-built record can be
//! folded through field resolution without any synchronization. Operations
//! applied to a kind that does not support them fail with
//! [`SchemaError::UnsupportedOperation`].
//!
//! Field order and union-alternative order are positionally significant for
//! the binary encoding the schema ultimately governs; both exactly mirror
//! the order in which they were appended.

mod field;
mod json;

pub use field::{FieldOrder, RecordField};

use std::fmt;

// ---------------------------------------------------------------------------
// SchemaKind
// ---------------------------------------------------------------------------

/// Discriminant of a [`Schema`] value, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Record,
    Array,
    Map,
    Enum,
    Fixed,
    Union,
}

impl SchemaKind {
    /// Avro name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            SchemaKind::Null => "null",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Int => "int",
            SchemaKind::Long => "long",
            SchemaKind::Float => "float",
            SchemaKind::Double => "double",
            SchemaKind::Bytes => "bytes",
            SchemaKind::String => "string",
            SchemaKind::Record => "record",
            SchemaKind::Array => "array",
            SchemaKind::Map => "map",
            SchemaKind::Enum => "enum",
            SchemaKind::Fixed => "fixed",
            SchemaKind::Union => "union",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SchemaError
// ---------------------------------------------------------------------------

/// Errors raised by schema builder operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The operation is not defined for the schema kind under construction
    /// (e.g. `symbols` on anything but an enum).
    UnsupportedOperation {
        /// Builder operation name.
        operation: &'static str,
        /// Kind the operation was applied to.
        kind: SchemaKind,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::UnsupportedOperation { operation, kind } => {
                write!(f, "operation '{}' is not supported on a {} schema", operation, kind)
            }
        }
    }
}

impl std::error::Error for SchemaError {}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// An immutable Avro-style schema value.
///
/// Composite kinds start empty (no name, no items, no fields) and are
/// filled in through the builder operations below.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Record {
        name: Option<String>,
        namespace: Option<String>,
        doc: Option<String>,
        aliases: Vec<String>,
        /// Fields in declaration order.
        fields: Vec<RecordField>,
    },
    Array {
        items: Option<Box<Schema>>,
    },
    Map {
        values: Option<Box<Schema>>,
    },
    Enum {
        name: Option<String>,
        namespace: Option<String>,
        doc: Option<String>,
        aliases: Vec<String>,
        /// Symbols in declaration order.
        symbols: Vec<String>,
    },
    Fixed {
        name: Option<String>,
        namespace: Option<String>,
        aliases: Vec<String>,
        size: Option<u64>,
    },
    /// Alternatives in declaration order; the concrete alternative used
    /// during decoding is chosen by an external type tag.
    Union(Vec<Schema>),
}

impl Schema {
    /// Empty record with no name and no fields.
    pub fn record() -> Self {
        Schema::Record {
            name: None,
            namespace: None,
            doc: None,
            aliases: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Empty array with no item schema yet.
    pub fn array() -> Self {
        Schema::Array { items: None }
    }

    /// Empty map with no value schema yet.
    pub fn map() -> Self {
        Schema::Map { values: None }
    }

    /// Empty enum with no symbols yet.
    pub fn enumeration() -> Self {
        Schema::Enum {
            name: None,
            namespace: None,
            doc: None,
            aliases: Vec::new(),
            symbols: Vec::new(),
        }
    }

    /// Empty fixed with no size yet.
    pub fn fixed() -> Self {
        Schema::Fixed {
            name: None,
            namespace: None,
            aliases: Vec::new(),
            size: None,
        }
    }

    /// Union over the given alternatives, kept in the given order.
    pub fn union(alternatives: Vec<Schema>) -> Self {
        Schema::Union(alternatives)
    }

    /// Discriminant of this value.
    pub const fn kind(&self) -> SchemaKind {
        match self {
            Schema::Null => SchemaKind::Null,
            Schema::Boolean => SchemaKind::Boolean,
            Schema::Int => SchemaKind::Int,
            Schema::Long => SchemaKind::Long,
            Schema::Float => SchemaKind::Float,
            Schema::Double => SchemaKind::Double,
            Schema::Bytes => SchemaKind::Bytes,
            Schema::String => SchemaKind::String,
            Schema::Record { .. } => SchemaKind::Record,
            Schema::Array { .. } => SchemaKind::Array,
            Schema::Map { .. } => SchemaKind::Map,
            Schema::Enum { .. } => SchemaKind::Enum,
            Schema::Fixed { .. } => SchemaKind::Fixed,
            Schema::Union(_) => SchemaKind::Union,
        }
    }

    /// Whether this value is a record.
    pub fn is_record(&self) -> bool {
        matches!(self, Schema::Record { .. })
    }

    /// Set the name of a named schema (record, enum or fixed).
    pub fn name(mut self, name: impl Into<String>) -> Result<Schema, SchemaError> {
        match &mut self {
            Schema::Record { name: slot, .. }
            | Schema::Enum { name: slot, .. }
            | Schema::Fixed { name: slot, .. } => {
                *slot = Some(name.into());
                Ok(self)
            }
            other => Err(unsupported("name", other)),
        }
    }

    /// Set the namespace of a named schema.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Result<Schema, SchemaError> {
        match &mut self {
            Schema::Record { namespace: slot, .. }
            | Schema::Enum { namespace: slot, .. }
            | Schema::Fixed { namespace: slot, .. } => {
                *slot = Some(namespace.into());
                Ok(self)
            }
            other => Err(unsupported("namespace", other)),
        }
    }

    /// Set the documentation string of a record or enum.
    pub fn doc(mut self, doc: impl Into<String>) -> Result<Schema, SchemaError> {
        match &mut self {
            Schema::Record { doc: slot, .. } | Schema::Enum { doc: slot, .. } => {
                *slot = Some(doc.into());
                Ok(self)
            }
            other => Err(unsupported("doc", other)),
        }
    }

    /// Replace the alias list of a named schema.
    pub fn aliases(mut self, aliases: Vec<String>) -> Result<Schema, SchemaError> {
        match &mut self {
            Schema::Record { aliases: slot, .. }
            | Schema::Enum { aliases: slot, .. }
            | Schema::Fixed { aliases: slot, .. } => {
                *slot = aliases;
                Ok(self)
            }
            other => Err(unsupported("aliases", other)),
        }
    }

    /// Replace the symbol list of an enum.
    pub fn symbols(mut self, symbols: Vec<String>) -> Result<Schema, SchemaError> {
        match &mut self {
            Schema::Enum { symbols: slot, .. } => {
                *slot = symbols;
                Ok(self)
            }
            other => Err(unsupported("symbols", other)),
        }
    }

    /// Set the byte size of a fixed.
    pub fn size(mut self, size: u64) -> Result<Schema, SchemaError> {
        match &mut self {
            Schema::Fixed { size: slot, .. } => {
                *slot = Some(size);
                Ok(self)
            }
            other => Err(unsupported("size", other)),
        }
    }

    /// Set the item schema of an array.
    pub fn items(mut self, items: Schema) -> Result<Schema, SchemaError> {
        match &mut self {
            Schema::Array { items: slot } => {
                *slot = Some(Box::new(items));
                Ok(self)
            }
            other => Err(unsupported("items", other)),
        }
    }

    /// Set the value schema of a map.
    pub fn values(mut self, values: Schema) -> Result<Schema, SchemaError> {
        match &mut self {
            Schema::Map { values: slot } => {
                *slot = Some(Box::new(values));
                Ok(self)
            }
            other => Err(unsupported("values", other)),
        }
    }

    /// Append a field to a record, preserving declaration order.
    pub fn field(mut self, field: RecordField) -> Result<Schema, SchemaError> {
        match &mut self {
            Schema::Record { fields, .. } => {
                fields.push(field);
                Ok(self)
            }
            other => Err(unsupported("field", other)),
        }
    }
}

fn unsupported(operation: &'static str, schema: &Schema) -> SchemaError {
    SchemaError::UnsupportedOperation {
        operation,
        kind: schema.kind(),
    }
}
