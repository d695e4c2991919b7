// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Which fields of an object type identify an entity.
//!
//! Identifier fields become the required keys of delete and update inputs and are left out of
//! create inputs.

use crud_model::document::FieldDefinition;

/// Identifier field name used for types configured through the `crudify` list
pub const CONVENTIONAL_IDENTIFIER: &str = "id";

/// Marker interface implemented by types following the `id` convention
pub const RESERVED_INTERFACE: &str = "Node";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierPolicy {
    /// The field named in the type's configuration
    Explicit { identifier: String },
    /// The field named `id`
    Conventional,
    /// No field identifies the entity
    None,
}

/// Shape of the synthesized `<Op><Type>Output` objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// A single field named after the type, referencing the type itself (`post: Post`)
    Wrapper,
    /// The fields of the type itself
    FullFields,
}

impl IdentifierPolicy {
    fn is_identifier(&self, field: &FieldDefinition) -> bool {
        match self {
            IdentifierPolicy::Explicit { identifier } => &field.name == identifier,
            IdentifierPolicy::Conventional => field.name == CONVENTIONAL_IDENTIFIER,
            IdentifierPolicy::None => false,
        }
    }

    /// Split fields into `(identifiers, non_identifiers)`, keeping the declaration order in each.
    pub fn partition<'a>(
        &self,
        fields: &'a [FieldDefinition],
    ) -> (Vec<&'a FieldDefinition>, Vec<&'a FieldDefinition>) {
        fields.iter().partition(|field| self.is_identifier(field))
    }

    /// Interfaces to carry over to a synthesized type.
    pub fn strip_reserved_interface(&self, interfaces: &[String]) -> Vec<String> {
        match self {
            IdentifierPolicy::Conventional => interfaces
                .iter()
                .filter(|interface| interface.as_str() != RESERVED_INTERFACE)
                .cloned()
                .collect(),
            IdentifierPolicy::Explicit { .. } | IdentifierPolicy::None => interfaces.to_vec(),
        }
    }

    pub fn output_style(&self) -> OutputStyle {
        match self {
            IdentifierPolicy::Conventional => OutputStyle::FullFields,
            IdentifierPolicy::Explicit { .. } | IdentifierPolicy::None => OutputStyle::Wrapper,
        }
    }
}
