// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema generation from declarative class descriptors.
//!
//! A [`ClassDescriptor`] declares a class's shape through attribute sets on
//! the class and on each field; [`generate`] resolves it recursively into an
//! immutable [`Schema`](crate::schema::Schema), including union
//! construction and `target_class` delegation to other registered classes.

mod core;
mod errors;
mod model;
mod source;

pub use core::{generate, SchemaGenerator};
pub use errors::GenerateError;
pub use model::{
    Attribute, AttributeName, AttributeSet, ClassDescriptor, FieldDescriptor, TypeDescriptor,
    TypeName,
};
pub use source::{ClassRegistry, ClassSource};

#[cfg(test)]
mod tests;
