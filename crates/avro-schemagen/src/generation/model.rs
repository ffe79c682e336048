// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Declarative descriptor model for schema generation.
//!
//! Replaces runtime reflection with caller-supplied data: a
//! [`ClassDescriptor`] carries the class-level [`AttributeSet`] and the
//! ordered [`FieldDescriptor`]s, and every attribute name is drawn from the
//! closed [`AttributeName`] enumeration so the applier can dispatch
//! exhaustively instead of by string-keyed method lookup.
//!
//! All types here are transient inputs; the generated [`Schema`] is the
//! only value that outlives a `generate` call.
//!
//! [`Schema`]: crate::schema::Schema

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::GenerateError;

// ---------------------------------------------------------------------------
// TypeName
// ---------------------------------------------------------------------------

/// Closed enumeration of declarable Avro type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
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
}

impl TypeName {
    /// Lowercase Avro spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeName::Null => "null",
            TypeName::Boolean => "boolean",
            TypeName::Int => "int",
            TypeName::Long => "long",
            TypeName::Float => "float",
            TypeName::Double => "double",
            TypeName::Bytes => "bytes",
            TypeName::String => "string",
            TypeName::Record => "record",
            TypeName::Array => "array",
            TypeName::Map => "map",
            TypeName::Enum => "enum",
            TypeName::Fixed => "fixed",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeName {
    type Err = GenerateError;

    /// Parse the lowercase Avro spelling; anything outside the closed set
    /// fails with [`GenerateError::InvalidType`].
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "null" => Ok(TypeName::Null),
            "boolean" => Ok(TypeName::Boolean),
            "int" => Ok(TypeName::Int),
            "long" => Ok(TypeName::Long),
            "float" => Ok(TypeName::Float),
            "double" => Ok(TypeName::Double),
            "bytes" => Ok(TypeName::Bytes),
            "string" => Ok(TypeName::String),
            "record" => Ok(TypeName::Record),
            "array" => Ok(TypeName::Array),
            "map" => Ok(TypeName::Map),
            "enum" => Ok(TypeName::Enum),
            "fixed" => Ok(TypeName::Fixed),
            other => Err(GenerateError::InvalidType(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// AttributeName
// ---------------------------------------------------------------------------

/// Closed enumeration of recognized attribute names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeName {
    Name,
    Namespace,
    Doc,
    Default,
    Order,
    Aliases,
    Symbols,
    Size,
    Items,
    Values,
    TargetClass,
}

/// Names that only shape a field definition and never map onto a schema
/// builder operation.
const FIELD_ONLY: [AttributeName; 5] = [
    AttributeName::Name,
    AttributeName::Doc,
    AttributeName::Default,
    AttributeName::Order,
    AttributeName::Aliases,
];

impl AttributeName {
    /// Snake-case spelling, which doubles as the builder operation name.
    pub const fn as_str(self) -> &'static str {
        match self {
            AttributeName::Name => "name",
            AttributeName::Namespace => "namespace",
            AttributeName::Doc => "doc",
            AttributeName::Default => "default",
            AttributeName::Order => "order",
            AttributeName::Aliases => "aliases",
            AttributeName::Symbols => "symbols",
            AttributeName::Size => "size",
            AttributeName::Items => "items",
            AttributeName::Values => "values",
            AttributeName::TargetClass => "target_class",
        }
    }

    /// Whether the attribute drives a schema builder operation.
    ///
    /// Field-definition-only names and the delegation marker do not.
    pub fn is_builder_directive(self) -> bool {
        self != AttributeName::TargetClass && !FIELD_ONLY.contains(&self)
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Attribute
// ---------------------------------------------------------------------------

/// One declarative metadata entry attached to a class or field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Scalar-valued entry.
    Plain { name: AttributeName, value: Value },
    /// List-valued entry, applied as a spread argument list.
    Variadic {
        name: AttributeName,
        values: Vec<Value>,
    },
    /// Entry whose payload is a nested attribute set that must itself be
    /// resolved into a sub-schema before use (array items, map values).
    TypeOnly {
        name: AttributeName,
        nested: AttributeSet,
    },
}

impl Attribute {
    /// Name of the entry regardless of variant.
    pub fn name(&self) -> AttributeName {
        match self {
            Attribute::Plain { name, .. }
            | Attribute::Variadic { name, .. }
            | Attribute::TypeOnly { name, .. } => *name,
        }
    }

    /// Scalar value of a plain entry.
    pub fn as_value(&self) -> Result<&Value, GenerateError> {
        match self {
            Attribute::Plain { value, .. } => Ok(value),
            other => Err(other.invalid("scalar value")),
        }
    }

    /// String value of a plain entry.
    pub fn as_str(&self) -> Result<&str, GenerateError> {
        match self {
            Attribute::Plain {
                value: Value::String(value),
                ..
            } => Ok(value),
            other => Err(other.invalid("string")),
        }
    }

    /// Unsigned integer value of a plain entry.
    pub fn as_u64(&self) -> Result<u64, GenerateError> {
        match self {
            Attribute::Plain { value, .. } => {
                value.as_u64().ok_or_else(|| self.invalid("unsigned integer"))
            }
            other => Err(other.invalid("unsigned integer")),
        }
    }

    /// String list of a variadic entry.
    pub fn as_string_list(&self) -> Result<Vec<String>, GenerateError> {
        match self {
            Attribute::Variadic { values, .. } => values
                .iter()
                .map(|value| {
                    value
                        .as_str()
                        .map(str::to_owned)
                        .ok_or_else(|| self.invalid("list of strings"))
                })
                .collect(),
            other => Err(other.invalid("list of strings")),
        }
    }

    fn invalid(&self, expected: &'static str) -> GenerateError {
        GenerateError::InvalidValue {
            attribute: self.name(),
            expected,
        }
    }
}

// ---------------------------------------------------------------------------
// AttributeSet
// ---------------------------------------------------------------------------

/// Ordered attribute collection for one declaration site.
///
/// Holds the declared type alternatives alongside the metadata entries;
/// both keep declaration order, which is positionally significant for the
/// generated schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    types: Vec<TypeDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    entries: Vec<Attribute>,
}

impl AttributeSet {
    /// Empty set.
    pub fn new() -> Self {
        AttributeSet::default()
    }

    /// Append a declared type alternative with no attributes of its own.
    pub fn with_type(self, type_name: TypeName) -> Self {
        self.with_descriptor(TypeDescriptor::of(type_name))
    }

    /// Append a declared type alternative.
    pub fn with_descriptor(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.push(descriptor);
        self
    }

    /// Append a metadata entry.
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.entries.push(attribute);
        self
    }

    /// Append a plain entry.
    pub fn with_plain(self, name: AttributeName, value: Value) -> Self {
        self.with(Attribute::Plain { name, value })
    }

    /// Append a variadic entry.
    pub fn with_variadic(self, name: AttributeName, values: Vec<Value>) -> Self {
        self.with(Attribute::Variadic { name, values })
    }

    /// Append a type-only entry.
    pub fn with_type_only(self, name: AttributeName, nested: AttributeSet) -> Self {
        self.with(Attribute::TypeOnly { name, nested })
    }

    /// Whether an entry with the given name is present.
    pub fn has(&self, name: AttributeName) -> bool {
        self.entries.iter().any(|entry| entry.name() == name)
    }

    /// Look up an entry by name.
    ///
    /// Calling this without a prior [`has`](Self::has) check on an absent
    /// name is a caller-contract violation and fails with
    /// [`GenerateError::MissingAttribute`].
    pub fn get(&self, name: AttributeName) -> Result<&Attribute, GenerateError> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name)
            .ok_or(GenerateError::MissingAttribute(name))
    }

    /// Entries that are builder directives, in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &Attribute> {
        self.entries
            .iter()
            .filter(|entry| entry.name().is_builder_directive())
    }

    /// Declared type alternatives, in declaration order.
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Total number of declared types plus metadata entries.
    pub fn len(&self) -> usize {
        self.types.len() + self.entries.len()
    }

    /// Whether the set carries nothing at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// TypeDescriptor
// ---------------------------------------------------------------------------

/// One declared type alternative together with the attributes that apply
/// to it. A declaration with multiple descriptors means a union of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub type_name: TypeName,
    #[serde(default, skip_serializing_if = "AttributeSet::is_empty")]
    pub attributes: AttributeSet,
}

impl TypeDescriptor {
    pub fn new(type_name: TypeName, attributes: AttributeSet) -> Self {
        TypeDescriptor {
            type_name,
            attributes,
        }
    }

    /// Descriptor with no attributes of its own.
    pub fn of(type_name: TypeName) -> Self {
        TypeDescriptor::new(type_name, AttributeSet::new())
    }
}

// ---------------------------------------------------------------------------
// FieldDescriptor / ClassDescriptor
// ---------------------------------------------------------------------------

/// Declared field: its source name and its attribute set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "AttributeSet::is_empty")]
    pub attributes: AttributeSet,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, attributes: AttributeSet) -> Self {
        FieldDescriptor {
            name: name.into(),
            attributes,
        }
    }
}

/// Declared class: identifier, class-level attributes and ordered fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "AttributeSet::is_empty")]
    pub attributes: AttributeSet,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
}

impl ClassDescriptor {
    /// Descriptor with no attributes and no fields.
    pub fn new(name: impl Into<String>) -> Self {
        ClassDescriptor {
            name: name.into(),
            attributes: AttributeSet::new(),
            fields: Vec::new(),
        }
    }

    /// Replace the class-level attribute set.
    pub fn with_attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = attributes;
        self
    }

    /// Append a field, preserving declaration order.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}
