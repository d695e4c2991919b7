// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crud_model::{
    document::{
        FieldDefinition, InputObjectTypeDefinition, InputValueDefinition, ObjectTypeDefinition,
    },
    types::TypeRef,
};

use crate::{
    config::TypePolicy, field_index::FieldIndex, field_set::compute_field_sets,
    naming::ToCrudNames, operation::CrudOperation,
};

/// Declarations synthesized for one operation on one object type
#[derive(Debug, Clone, PartialEq)]
pub struct CrudDefinitions {
    /// `<Op><Type>Input`
    pub input: InputObjectTypeDefinition,
    /// `<Op><Type>Output`
    pub output: ObjectTypeDefinition,
    /// `<Op><Type>(input: <Op><Type>Input!): <Op><Type>Output`, to be added to the mutation root
    pub mutation: FieldDefinition,
}

pub fn build_definitions(
    operation: CrudOperation,
    object: &ObjectTypeDefinition,
    type_policy: &TypePolicy<'_>,
    index: &FieldIndex<'_>,
) -> CrudDefinitions {
    let type_name = object.name.as_str();
    let field_sets = compute_field_sets(operation, object, type_policy, index);

    let input_type_name = type_name.input_type_name(operation);
    let output_type_name = type_name.output_type_name(operation);

    let input = InputObjectTypeDefinition::new(
        input_type_name.clone(),
        field_sets.input.into_iter().map(input_value).collect(),
    );

    let output = ObjectTypeDefinition {
        implements: field_sets.output_interfaces,
        ..ObjectTypeDefinition::new(output_type_name.clone(), field_sets.output)
    };

    let mutation = FieldDefinition {
        arguments: vec![InputValueDefinition::new(
            "input",
            TypeRef::named(input_type_name).non_null(),
        )],
        ..FieldDefinition::new(
            type_name.mutation_name(operation),
            TypeRef::named(output_type_name),
        )
    };

    CrudDefinitions {
        input,
        output,
        mutation,
    }
}

fn input_value(field: FieldDefinition) -> InputValueDefinition {
    InputValueDefinition {
        description: field.description,
        name: field.name,
        typ: field.typ,
        default_value: None,
        directives: field.directives,
    }
}
