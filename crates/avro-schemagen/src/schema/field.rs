// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record field values and their sort order.

use serde_json::Value;

use super::Schema;

// ---------------------------------------------------------------------------
// FieldOrder
// ---------------------------------------------------------------------------

/// Sort order of a record field, as defined by the Avro specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    Ascending,
    Descending,
    Ignore,
}

impl FieldOrder {
    /// Avro wire spelling of the order.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldOrder::Ascending => "ascending",
            FieldOrder::Descending => "descending",
            FieldOrder::Ignore => "ignore",
        }
    }

    /// Parse the Avro spelling; `None` for anything else.
    pub fn parse(value: &str) -> Option<FieldOrder> {
        match value {
            "ascending" => Some(FieldOrder::Ascending),
            "descending" => Some(FieldOrder::Descending),
            "ignore" => Some(FieldOrder::Ignore),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// RecordField
// ---------------------------------------------------------------------------

/// One field of a record schema.
///
/// A default of `Some(Value::Null)` is a declared null default and is
/// distinct from `None` (no default declared at all).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    pub name: String,
    pub schema: Schema,
    pub doc: Option<String>,
    pub default: Option<Value>,
    pub order: Option<FieldOrder>,
    /// Aliases in declaration order.
    pub aliases: Vec<String>,
}

impl RecordField {
    /// Field with the given name and schema and no optional metadata.
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        RecordField {
            name: name.into(),
            schema,
            doc: None,
            default: None,
            order: None,
            aliases: Vec::new(),
        }
    }

    /// Set the documentation string.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set the default value.
    pub fn default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Set the sort order.
    pub fn order(mut self, order: FieldOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Replace the alias list.
    pub fn aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }
}
