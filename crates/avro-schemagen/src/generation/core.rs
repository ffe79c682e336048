// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Core recursive resolution from type descriptors to schema values.

use serde_json::Value;

use crate::schema::{FieldOrder, RecordField, Schema};

use super::errors::GenerateError;
use super::model::{
    Attribute, AttributeName, AttributeSet, FieldDescriptor, TypeDescriptor, TypeName,
};
use super::source::ClassSource;

/// Generate the schema for one class resolved through `source`.
///
/// One-shot convenience around [`SchemaGenerator`].
pub fn generate(source: &dyn ClassSource, class: &str) -> Result<Schema, GenerateError> {
    SchemaGenerator::new(source).generate(class)
}

/// Stateful generator walking class descriptors into immutable schemas.
///
/// The generator itself is transient; the returned [`Schema`] is the only
/// value that outlives a call. No caching happens here — a class reached
/// from several fields is regenerated each time, and callers needing
/// sharing add it externally.
pub struct SchemaGenerator<'a> {
    source: &'a dyn ClassSource,
    visiting: Vec<String>,
}

impl<'a> SchemaGenerator<'a> {
    pub fn new(source: &'a dyn ClassSource) -> Self {
        SchemaGenerator {
            source,
            visiting: Vec::new(),
        }
    }

    /// Resolve `class` into a fully-built schema.
    ///
    /// Fails with [`GenerateError::CyclicReference`] when a `target_class`
    /// chain revisits a class that is still being generated.
    pub fn generate(&mut self, class: &str) -> Result<Schema, GenerateError> {
        if self.visiting.iter().any(|entry| entry == class) {
            return Err(GenerateError::CyclicReference {
                class: class.to_owned(),
            });
        }

        self.visiting.push(class.to_owned());
        let result = self.generate_class(class);
        self.visiting.pop();
        result
    }

    fn generate_class(&mut self, class: &str) -> Result<Schema, GenerateError> {
        let source = self.source;
        let descriptor = source.class(class)?;

        let root = TypeDescriptor::new(TypeName::Record, descriptor.attributes.clone());
        let mut schema = self.schema_from_types(std::slice::from_ref(&root))?;

        // Class attributes may have redirected resolution away from a
        // record; fields only exist on records.
        if !schema.is_record() {
            return Ok(schema);
        }

        for field in &descriptor.fields {
            schema = self.parse_field(field, schema)?;
        }

        // A record that arrived through delegation is already named after
        // its target class; an inline record is named after this one.
        if let Schema::Record { name: None, .. } = schema {
            let name = if descriptor.attributes.has(AttributeName::Name) {
                descriptor
                    .attributes
                    .get(AttributeName::Name)?
                    .as_str()?
                    .to_owned()
            } else {
                descriptor.name.clone()
            };
            schema = schema.name(name)?;
        }

        Ok(schema)
    }

    /// Resolve one or more type descriptors into a schema.
    ///
    /// More than one descriptor wraps the ordered results as a union; no
    /// de-duplication or legality checking happens here.
    fn schema_from_types(&mut self, types: &[TypeDescriptor]) -> Result<Schema, GenerateError> {
        if types.len() > 1 {
            let mut alternatives = Vec::with_capacity(types.len());
            for descriptor in types {
                alternatives.push(self.schema_from_types(std::slice::from_ref(descriptor))?);
            }
            return Ok(Schema::union(alternatives));
        }

        let descriptor = types.first().ok_or(GenerateError::MissingType)?;
        let attributes = &descriptor.attributes;

        let schema = match descriptor.type_name {
            TypeName::Record => {
                if attributes.has(AttributeName::TargetClass) {
                    // Delegation: drop the in-progress descriptor and
                    // generate the referenced class instead.
                    let target = attributes.get(AttributeName::TargetClass)?.as_str()?;
                    return self.generate(target);
                }
                Schema::record()
            }
            TypeName::Null => Schema::Null,
            TypeName::Boolean => Schema::Boolean,
            TypeName::Int => Schema::Int,
            TypeName::Long => Schema::Long,
            TypeName::Float => Schema::Float,
            TypeName::Double => Schema::Double,
            TypeName::Bytes => Schema::Bytes,
            TypeName::String => Schema::String,
            TypeName::Array => Schema::array(),
            TypeName::Map => Schema::map(),
            TypeName::Enum => Schema::enumeration(),
            TypeName::Fixed => Schema::fixed(),
        };

        self.apply_attributes(schema, attributes)
    }

    /// Resolve one field and fold it into the record under construction.
    ///
    /// A field with no attributes at all contributes nothing and the
    /// record is returned unchanged.
    fn parse_field(
        &mut self,
        field: &FieldDescriptor,
        record: Schema,
    ) -> Result<Schema, GenerateError> {
        let attributes = &field.attributes;
        if attributes.is_empty() {
            return Ok(record);
        }

        let field_schema = self.schema_from_types(attributes.types())?;

        let name = if attributes.has(AttributeName::Name) {
            attributes.get(AttributeName::Name)?.as_str()?.to_owned()
        } else {
            field.name.clone()
        };

        let mut parsed = RecordField::new(name, field_schema);

        if attributes.has(AttributeName::Doc) {
            parsed = parsed.doc(attributes.get(AttributeName::Doc)?.as_str()?);
        }
        if attributes.has(AttributeName::Default) {
            parsed = parsed.default(attributes.get(AttributeName::Default)?.as_value()?.clone());
        }
        if attributes.has(AttributeName::Order) {
            let raw = attributes.get(AttributeName::Order)?.as_str()?;
            let order = FieldOrder::parse(raw).ok_or(GenerateError::InvalidValue {
                attribute: AttributeName::Order,
                expected: "one of ascending, descending, ignore",
            })?;
            parsed = parsed.order(order);
        }
        if attributes.has(AttributeName::Aliases) {
            parsed = parsed.aliases(attributes.get(AttributeName::Aliases)?.as_string_list()?);
        }

        Ok(record.field(parsed)?)
    }

    /// Apply builder directives onto a schema under construction.
    ///
    /// Dispatch is closed: an attribute naming an operation the current
    /// schema kind does not support aborts generation, and the error
    /// propagates unrecovered.
    fn apply_attributes(
        &mut self,
        mut schema: Schema,
        attributes: &AttributeSet,
    ) -> Result<Schema, GenerateError> {
        for attribute in attributes.options() {
            schema = match attribute {
                Attribute::Variadic { name, values } => match name {
                    AttributeName::Symbols => schema.symbols(string_values(*name, values)?)?,
                    other => return Err(unsupported(*other, &schema)),
                },
                Attribute::TypeOnly { name, nested } => {
                    let nested_schema = self.schema_from_types(nested.types())?;
                    match name {
                        AttributeName::Items => schema.items(nested_schema)?,
                        AttributeName::Values => schema.values(nested_schema)?,
                        other => return Err(unsupported(*other, &schema)),
                    }
                }
                Attribute::Plain { name, .. } => match name {
                    AttributeName::Namespace => schema.namespace(attribute.as_str()?)?,
                    AttributeName::Size => schema.size(attribute.as_u64()?)?,
                    other => return Err(unsupported(*other, &schema)),
                },
            };
        }

        Ok(schema)
    }
}

fn unsupported(name: AttributeName, schema: &Schema) -> GenerateError {
    GenerateError::UnknownOperation(crate::schema::SchemaError::UnsupportedOperation {
        operation: name.as_str(),
        kind: schema.kind(),
    })
}

fn string_values(name: AttributeName, values: &[Value]) -> Result<Vec<String>, GenerateError> {
    values
        .iter()
        .map(|value| {
            value
                .as_str()
                .map(str::to_owned)
                .ok_or(GenerateError::InvalidValue {
                    attribute: name,
                    expected: "list of strings",
                })
        })
        .collect()
}
