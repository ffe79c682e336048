// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use std::io::Write;

use serde_json::{json, Value};

use crate::schema::{FieldOrder, Schema, SchemaError, SchemaKind};

use super::core::generate;
use super::errors::GenerateError;
use super::model::{
    AttributeName, AttributeSet, ClassDescriptor, FieldDescriptor, TypeDescriptor, TypeName,
};
use super::source::{ClassRegistry, ClassSource};

fn registry_with(descriptors: Vec<ClassDescriptor>) -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    for descriptor in descriptors {
        registry.insert(descriptor);
    }
    registry
}

fn person() -> ClassDescriptor {
    ClassDescriptor::new("Person").with_field(FieldDescriptor::new(
        "fullName",
        AttributeSet::new()
            .with_type(TypeName::String)
            .with_plain(AttributeName::Name, json!("full_name")),
    ))
}

#[test]
fn empty_class_yields_empty_record() {
    let registry = registry_with(vec![ClassDescriptor::new("Empty")]);

    let schema = generate(&registry, "Empty").expect("generate");

    assert_eq!(
        schema.to_json(),
        json!({"type": "record", "name": "Empty", "fields": []})
    );
}

#[test]
fn person_field_renamed_by_attribute() {
    let registry = registry_with(vec![person()]);

    let schema = generate(&registry, "Person").expect("generate");

    assert_eq!(
        schema.to_json(),
        json!({
            "type": "record",
            "name": "Person",
            "fields": [{"name": "full_name", "type": "string"}],
        })
    );
}

#[test]
fn field_without_name_attribute_uses_declared_name() {
    let descriptor = ClassDescriptor::new("Reading").with_field(FieldDescriptor::new(
        "celsius",
        AttributeSet::new().with_type(TypeName::Double),
    ));
    let registry = registry_with(vec![descriptor]);

    let schema = generate(&registry, "Reading").expect("generate");

    match &schema {
        Schema::Record { fields, .. } => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].name, "celsius");
            assert_eq!(fields[0].schema, Schema::Double);
        }
        other => panic!("expected record, got {}", other.kind()),
    }
}

#[test]
fn class_name_attribute_overrides_declared_name() {
    let descriptor = ClassDescriptor::new("Person")
        .with_attributes(AttributeSet::new().with_plain(AttributeName::Name, json!("Employee")));
    let registry = registry_with(vec![descriptor]);

    let schema = generate(&registry, "Person").expect("generate");

    assert!(matches!(
        &schema,
        Schema::Record { name: Some(n), .. } if n == "Employee"
    ));
}

#[test]
fn class_namespace_applied_to_record() {
    let descriptor = ClassDescriptor::new("Person").with_attributes(
        AttributeSet::new().with_plain(AttributeName::Namespace, json!("com.example")),
    );
    let registry = registry_with(vec![descriptor]);

    let schema = generate(&registry, "Person").expect("generate");

    assert!(matches!(
        &schema,
        Schema::Record { namespace: Some(ns), .. } if ns == "com.example"
    ));
}

#[test]
fn multi_type_field_builds_union_in_declaration_order() {
    let descriptor = ClassDescriptor::new("Holder").with_field(FieldDescriptor::new(
        "value",
        AttributeSet::new()
            .with_type(TypeName::Null)
            .with_type(TypeName::String)
            .with_type(TypeName::Long),
    ));
    let registry = registry_with(vec![descriptor]);

    let schema = generate(&registry, "Holder").expect("generate");

    match &schema {
        Schema::Record { fields, .. } => {
            assert_eq!(
                fields[0].schema,
                Schema::union(vec![Schema::Null, Schema::String, Schema::Long])
            );
        }
        other => panic!("expected record, got {}", other.kind()),
    }
}

#[test]
fn field_with_no_attributes_is_omitted() {
    let descriptor = person().with_field(FieldDescriptor::new("internal", AttributeSet::new()));
    let registry = registry_with(vec![descriptor]);

    let schema = generate(&registry, "Person").expect("generate");

    match &schema {
        Schema::Record { fields, .. } => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].name, "full_name");
        }
        other => panic!("expected record, got {}", other.kind()),
    }
}

#[test]
fn target_class_delegation_is_transparent() {
    let alias = ClassDescriptor::new("PersonAlias").with_attributes(
        AttributeSet::new().with_plain(AttributeName::TargetClass, json!("Person")),
    );
    let registry = registry_with(vec![alias, person()]);

    let delegated = generate(&registry, "PersonAlias").expect("generate alias");
    let direct = generate(&registry, "Person").expect("generate direct");

    assert_eq!(delegated, direct);
}

#[test]
fn record_field_delegates_to_referenced_class() {
    let address = ClassDescriptor::new("Address").with_field(FieldDescriptor::new(
        "street",
        AttributeSet::new().with_type(TypeName::String),
    ));
    let customer = ClassDescriptor::new("Customer").with_field(FieldDescriptor::new(
        "address",
        AttributeSet::new().with_descriptor(TypeDescriptor::new(
            TypeName::Record,
            AttributeSet::new().with_plain(AttributeName::TargetClass, json!("Address")),
        )),
    ));
    let registry = registry_with(vec![address, customer]);

    let schema = generate(&registry, "Customer").expect("generate");
    let address_schema = generate(&registry, "Address").expect("generate address");

    match &schema {
        Schema::Record { fields, .. } => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].schema, address_schema);
        }
        other => panic!("expected record, got {}", other.kind()),
    }
}

#[test]
fn same_target_reached_twice_is_regenerated_each_time() {
    let address = ClassDescriptor::new("Address").with_field(FieldDescriptor::new(
        "street",
        AttributeSet::new().with_type(TypeName::String),
    ));
    let nested = |field: &str| {
        FieldDescriptor::new(
            field,
            AttributeSet::new().with_descriptor(TypeDescriptor::new(
                TypeName::Record,
                AttributeSet::new().with_plain(AttributeName::TargetClass, json!("Address")),
            )),
        )
    };
    let order = ClassDescriptor::new("Order")
        .with_field(nested("billing"))
        .with_field(nested("shipping"));
    let registry = registry_with(vec![address, order]);

    let schema = generate(&registry, "Order").expect("generate");

    match &schema {
        Schema::Record { fields, .. } => {
            assert_eq!(fields.len(), 2);
            assert_eq!(fields[0].schema, fields[1].schema);
        }
        other => panic!("expected record, got {}", other.kind()),
    }
}

#[test]
fn cyclic_target_class_chain_is_rejected() {
    let a = ClassDescriptor::new("A")
        .with_attributes(AttributeSet::new().with_plain(AttributeName::TargetClass, json!("B")));
    let b = ClassDescriptor::new("B")
        .with_attributes(AttributeSet::new().with_plain(AttributeName::TargetClass, json!("A")));
    let registry = registry_with(vec![a, b]);

    let err = generate(&registry, "A").expect_err("must fail");

    assert_eq!(
        err,
        GenerateError::CyclicReference {
            class: "A".to_owned(),
        }
    );
}

#[test]
fn self_referencing_class_is_rejected() {
    let selfish = ClassDescriptor::new("Selfish").with_attributes(
        AttributeSet::new().with_plain(AttributeName::TargetClass, json!("Selfish")),
    );
    let registry = registry_with(vec![selfish]);

    let err = generate(&registry, "Selfish").expect_err("must fail");
    assert!(matches!(err, GenerateError::CyclicReference { .. }));
}

#[test]
fn missing_default_differs_from_null_default() {
    let descriptor = ClassDescriptor::new("Profile")
        .with_field(FieldDescriptor::new(
            "nickname",
            AttributeSet::new()
                .with_type(TypeName::Null)
                .with_type(TypeName::String)
                .with_plain(AttributeName::Default, json!(null)),
        ))
        .with_field(FieldDescriptor::new(
            "bio",
            AttributeSet::new().with_type(TypeName::String),
        ));
    let registry = registry_with(vec![descriptor]);

    let schema = generate(&registry, "Profile").expect("generate");

    match &schema {
        Schema::Record { fields, .. } => {
            assert_eq!(fields[0].default, Some(Value::Null));
            assert_eq!(fields[1].default, None);
        }
        other => panic!("expected record, got {}", other.kind()),
    }
}

#[test]
fn composite_default_is_kept_structurally() {
    let descriptor = ClassDescriptor::new("Widget").with_field(FieldDescriptor::new(
        "dimensions",
        AttributeSet::new()
            .with_descriptor(TypeDescriptor::new(
                TypeName::Map,
                AttributeSet::new().with_type_only(
                    AttributeName::Values,
                    AttributeSet::new().with_type(TypeName::Int),
                ),
            ))
            .with_plain(AttributeName::Default, json!({"width": 0, "height": 0})),
    ));
    let registry = registry_with(vec![descriptor]);

    let schema = generate(&registry, "Widget").expect("generate");

    match &schema {
        Schema::Record { fields, .. } => {
            assert_eq!(fields[0].default, Some(json!({"width": 0, "height": 0})));
        }
        other => panic!("expected record, got {}", other.kind()),
    }
}

#[test]
fn field_metadata_doc_order_aliases() {
    let descriptor = ClassDescriptor::new("Person").with_field(FieldDescriptor::new(
        "surname",
        AttributeSet::new()
            .with_type(TypeName::String)
            .with_plain(AttributeName::Doc, json!("family name"))
            .with_plain(AttributeName::Order, json!("descending"))
            .with_variadic(AttributeName::Aliases, vec![json!("a"), json!("b")]),
    ));
    let registry = registry_with(vec![descriptor]);

    let schema = generate(&registry, "Person").expect("generate");

    match &schema {
        Schema::Record { fields, .. } => {
            let field = &fields[0];
            assert_eq!(field.doc.as_deref(), Some("family name"));
            assert_eq!(field.order, Some(FieldOrder::Descending));
            assert_eq!(field.aliases, vec!["a".to_owned(), "b".to_owned()]);
        }
        other => panic!("expected record, got {}", other.kind()),
    }
}

#[test]
fn invalid_order_value_is_rejected() {
    let descriptor = ClassDescriptor::new("Person").with_field(FieldDescriptor::new(
        "surname",
        AttributeSet::new()
            .with_type(TypeName::String)
            .with_plain(AttributeName::Order, json!("sideways")),
    ));
    let registry = registry_with(vec![descriptor]);

    let err = generate(&registry, "Person").expect_err("must fail");
    assert!(matches!(
        err,
        GenerateError::InvalidValue {
            attribute: AttributeName::Order,
            ..
        }
    ));
}

#[test]
fn enum_symbols_applied_in_order() {
    let descriptor = ClassDescriptor::new("Card").with_field(FieldDescriptor::new(
        "suit",
        AttributeSet::new().with_descriptor(TypeDescriptor::new(
            TypeName::Enum,
            AttributeSet::new().with_variadic(
                AttributeName::Symbols,
                vec![json!("HEARTS"), json!("SPADES"), json!("CLUBS")],
            ),
        )),
    ));
    let registry = registry_with(vec![descriptor]);

    let schema = generate(&registry, "Card").expect("generate");

    match &schema {
        Schema::Record { fields, .. } => match &fields[0].schema {
            Schema::Enum { symbols, .. } => {
                assert_eq!(symbols, &["HEARTS", "SPADES", "CLUBS"]);
            }
            other => panic!("expected enum, got {}", other.kind()),
        },
        other => panic!("expected record, got {}", other.kind()),
    }
}

#[test]
fn array_items_and_map_values_resolve_nested_types() {
    let descriptor = ClassDescriptor::new("Inventory")
        .with_field(FieldDescriptor::new(
            "tags",
            AttributeSet::new().with_descriptor(TypeDescriptor::new(
                TypeName::Array,
                AttributeSet::new().with_type_only(
                    AttributeName::Items,
                    AttributeSet::new().with_type(TypeName::String),
                ),
            )),
        ))
        .with_field(FieldDescriptor::new(
            "counts",
            AttributeSet::new().with_descriptor(TypeDescriptor::new(
                TypeName::Map,
                AttributeSet::new().with_type_only(
                    AttributeName::Values,
                    AttributeSet::new().with_type(TypeName::Long),
                ),
            )),
        ));
    let registry = registry_with(vec![descriptor]);

    let schema = generate(&registry, "Inventory").expect("generate");

    match &schema {
        Schema::Record { fields, .. } => {
            assert_eq!(
                fields[0].schema,
                Schema::array().items(Schema::String).expect("items")
            );
            assert_eq!(
                fields[1].schema,
                Schema::map().values(Schema::Long).expect("values")
            );
        }
        other => panic!("expected record, got {}", other.kind()),
    }
}

#[test]
fn union_typed_array_items() {
    let descriptor = ClassDescriptor::new("Log").with_field(FieldDescriptor::new(
        "entries",
        AttributeSet::new().with_descriptor(TypeDescriptor::new(
            TypeName::Array,
            AttributeSet::new().with_type_only(
                AttributeName::Items,
                AttributeSet::new()
                    .with_type(TypeName::Null)
                    .with_type(TypeName::String),
            ),
        )),
    ));
    let registry = registry_with(vec![descriptor]);

    let schema = generate(&registry, "Log").expect("generate");

    match &schema {
        Schema::Record { fields, .. } => match &fields[0].schema {
            Schema::Array { items: Some(items) } => {
                assert_eq!(
                    items.as_ref(),
                    &Schema::union(vec![Schema::Null, Schema::String])
                );
            }
            other => panic!("expected array with items, got {}", other.kind()),
        },
        other => panic!("expected record, got {}", other.kind()),
    }
}

#[test]
fn fixed_size_applied() {
    let descriptor = ClassDescriptor::new("Digest").with_field(FieldDescriptor::new(
        "md5",
        AttributeSet::new().with_descriptor(TypeDescriptor::new(
            TypeName::Fixed,
            AttributeSet::new().with_plain(AttributeName::Size, json!(16)),
        )),
    ));
    let registry = registry_with(vec![descriptor]);

    let schema = generate(&registry, "Digest").expect("generate");

    match &schema {
        Schema::Record { fields, .. } => {
            assert_eq!(fields[0].schema, Schema::fixed().size(16).expect("size"));
        }
        other => panic!("expected record, got {}", other.kind()),
    }
}

#[test]
fn symbols_on_non_enum_type_is_unknown_operation() {
    let descriptor = ClassDescriptor::new("Broken").with_field(FieldDescriptor::new(
        "oops",
        AttributeSet::new().with_descriptor(TypeDescriptor::new(
            TypeName::String,
            AttributeSet::new().with_variadic(AttributeName::Symbols, vec![json!("A")]),
        )),
    ));
    let registry = registry_with(vec![descriptor]);

    let err = generate(&registry, "Broken").expect_err("must fail");
    assert_eq!(
        err,
        GenerateError::UnknownOperation(SchemaError::UnsupportedOperation {
            operation: "symbols",
            kind: SchemaKind::String,
        })
    );
}

#[test]
fn attributes_without_type_are_rejected() {
    let descriptor = ClassDescriptor::new("Untyped").with_field(FieldDescriptor::new(
        "ghost",
        AttributeSet::new().with_plain(AttributeName::Doc, json!("no type declared")),
    ));
    let registry = registry_with(vec![descriptor]);

    let err = generate(&registry, "Untyped").expect_err("must fail");
    assert_eq!(err, GenerateError::MissingType);
}

#[test]
fn unknown_class_is_rejected() {
    let registry = ClassRegistry::new();

    let err = generate(&registry, "Nowhere").expect_err("must fail");
    assert_eq!(err, GenerateError::UnknownClass("Nowhere".to_owned()));
}

#[test]
fn get_on_absent_attribute_is_missing_attribute() {
    let err = AttributeSet::new()
        .get(AttributeName::Name)
        .expect_err("must fail");
    assert_eq!(err, GenerateError::MissingAttribute(AttributeName::Name));
}

#[test]
fn type_name_outside_closed_set_is_invalid() {
    let err = "varchar".parse::<TypeName>().expect_err("must fail");
    assert_eq!(err, GenerateError::InvalidType("varchar".to_owned()));

    assert_eq!("string".parse::<TypeName>(), Ok(TypeName::String));
}

const PERSON_DOCUMENT: &str = r#"[
  {
    "name": "Person",
    "fields": [
      {
        "name": "fullName",
        "attributes": {
          "types": [ { "type_name": "string" } ],
          "entries": [ { "plain": { "name": "name", "value": "full_name" } } ]
        }
      }
    ]
  }
]"#;

#[test]
fn json_document_generates_same_schema_as_programmatic_registry() {
    let loaded = ClassRegistry::from_json_str(PERSON_DOCUMENT).expect("parse");
    let programmatic = registry_with(vec![person()]);

    let from_document = generate(&loaded, "Person").expect("generate");
    let from_code = generate(&programmatic, "Person").expect("generate");

    assert_eq!(from_document, from_code);
}

#[test]
fn json_document_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(PERSON_DOCUMENT.as_bytes()).expect("write");

    let registry = ClassRegistry::load_json_file(file.path()).expect("load");
    assert_eq!(registry.len(), 1);

    let schema = generate(&registry, "Person").expect("generate");
    assert!(matches!(
        &schema,
        Schema::Record { name: Some(n), .. } if n == "Person"
    ));
}

#[test]
fn malformed_document_is_invalid_descriptor() {
    let err = ClassRegistry::from_json_str("{not json").expect_err("must fail");
    assert!(matches!(err, GenerateError::InvalidDescriptor(_)));
}

#[test]
fn descriptors_round_trip_through_serde() {
    let descriptor = person();
    let encoded = serde_json::to_string(&descriptor).expect("serialize");
    let decoded: ClassDescriptor = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded, descriptor);
}

#[test]
fn registry_lookup_through_trait_object() {
    let registry = registry_with(vec![person()]);
    let source: &dyn ClassSource = &registry;

    let descriptor = source.class("Person").expect("lookup");
    assert_eq!(descriptor.name, "Person");
    assert_eq!(descriptor.fields.len(), 1);
}
