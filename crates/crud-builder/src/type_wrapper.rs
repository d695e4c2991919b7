// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Adjust the nullability of a single field.
//!
//! Both functions take the field by value: callers pass a copy of the declaration found in the
//! document, so the document itself (and every other synthesized type that copied the same
//! declaration) keeps the original type.

use crud_model::document::FieldDefinition;

/// Make the field required (`ID` becomes `ID!`, `[ID]` becomes `[ID]!`)
pub fn add_non_null(mut field: FieldDefinition) -> FieldDefinition {
    field.typ = field.typ.non_null();
    field
}

/// Make the field optional (`ID!` becomes `ID`, `[ID!]!` becomes `[ID!]`)
pub fn strip_non_null(mut field: FieldDefinition) -> FieldDefinition {
    field.typ = field.typ.nullable();
    field
}
