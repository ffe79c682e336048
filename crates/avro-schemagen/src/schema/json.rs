// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Avro schema JSON rendering.
//!
//! Primitives render as bare strings, unions as arrays, composites as
//! objects. Keys that were never set are omitted rather than emitted as
//! null, so a partially-built schema renders without error.

use std::fmt;

use serde_json::{Map, Value};

use super::{RecordField, Schema};

impl Schema {
    /// Render the schema as Avro schema JSON.
    pub fn to_json(&self) -> Value {
        match self {
            Schema::Null
            | Schema::Boolean
            | Schema::Int
            | Schema::Long
            | Schema::Float
            | Schema::Double
            | Schema::Bytes
            | Schema::String => Value::String(self.kind().as_str().to_owned()),
            Schema::Union(alternatives) => {
                Value::Array(alternatives.iter().map(Schema::to_json).collect())
            }
            Schema::Record {
                name,
                namespace,
                doc,
                aliases,
                fields,
            } => {
                let mut object = type_object("record");
                insert_string(&mut object, "name", name.as_deref());
                insert_string(&mut object, "namespace", namespace.as_deref());
                insert_string(&mut object, "doc", doc.as_deref());
                insert_strings(&mut object, "aliases", aliases);
                object.insert(
                    "fields".to_owned(),
                    Value::Array(fields.iter().map(field_json).collect()),
                );
                Value::Object(object)
            }
            Schema::Array { items } => {
                let mut object = type_object("array");
                if let Some(items) = items {
                    object.insert("items".to_owned(), items.to_json());
                }
                Value::Object(object)
            }
            Schema::Map { values } => {
                let mut object = type_object("map");
                if let Some(values) = values {
                    object.insert("values".to_owned(), values.to_json());
                }
                Value::Object(object)
            }
            Schema::Enum {
                name,
                namespace,
                doc,
                aliases,
                symbols,
            } => {
                let mut object = type_object("enum");
                insert_string(&mut object, "name", name.as_deref());
                insert_string(&mut object, "namespace", namespace.as_deref());
                insert_string(&mut object, "doc", doc.as_deref());
                insert_strings(&mut object, "aliases", aliases);
                object.insert(
                    "symbols".to_owned(),
                    Value::Array(symbols.iter().cloned().map(Value::String).collect()),
                );
                Value::Object(object)
            }
            Schema::Fixed {
                name,
                namespace,
                aliases,
                size,
            } => {
                let mut object = type_object("fixed");
                insert_string(&mut object, "name", name.as_deref());
                insert_string(&mut object, "namespace", namespace.as_deref());
                insert_strings(&mut object, "aliases", aliases);
                if let Some(size) = size {
                    object.insert("size".to_owned(), Value::from(*size));
                }
                Value::Object(object)
            }
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

fn field_json(field: &RecordField) -> Value {
    let mut object = Map::new();
    object.insert("name".to_owned(), Value::String(field.name.clone()));
    object.insert("type".to_owned(), field.schema.to_json());
    insert_string(&mut object, "doc", field.doc.as_deref());
    if let Some(default) = &field.default {
        object.insert("default".to_owned(), default.clone());
    }
    if let Some(order) = field.order {
        object.insert("order".to_owned(), Value::String(order.as_str().to_owned()));
    }
    insert_strings(&mut object, "aliases", &field.aliases);
    Value::Object(object)
}

fn type_object(kind: &str) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("type".to_owned(), Value::String(kind.to_owned()));
    object
}

fn insert_string(object: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        object.insert(key.to_owned(), Value::String(value.to_owned()));
    }
}

fn insert_strings(object: &mut Map<String, Value>, key: &str, values: &[String]) {
    if !values.is_empty() {
        object.insert(
            key.to_owned(),
            Value::Array(values.iter().cloned().map(Value::String).collect()),
        );
    }
}
