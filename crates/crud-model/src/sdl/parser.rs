// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Build a [`Document`] from SDL text. Only used to construct fixtures for tests; the generator
//! itself always receives already parsed documents.

use async_graphql_parser::{
    Positioned,
    types::{
        BaseType, ConstDirective, FieldDefinition as AstFieldDefinition,
        InputValueDefinition as AstInputValueDefinition, Type, TypeDefinition, TypeKind,
        TypeSystemDefinition,
    },
};
use thiserror::Error;

use crate::{
    document::{
        Directive, DirectiveArgument, Document, EnumTypeDefinition, EnumValueDefinition,
        FieldDefinition, InputObjectTypeDefinition, InputValueDefinition,
        InterfaceTypeDefinition, ObjectTypeDefinition, ScalarTypeDefinition, SchemaDefinition,
        UnionTypeDefinition,
    },
    types::TypeRef,
};

#[derive(Error, Debug)]
pub enum SdlError {
    #[error("{0}")]
    Parse(#[from] async_graphql_parser::Error),

    #[error("Type extensions are not supported (extending '{0}')")]
    UnsupportedExtension(String),
}

pub fn parse_document(name: &str, sdl: &str) -> Result<Document, SdlError> {
    let service_document = async_graphql_parser::parse_schema(sdl)?;

    let mut document = Document::new(name, "Query");
    let mut schema_definition = None;

    for definition in service_document.definitions {
        match definition {
            TypeSystemDefinition::Schema(schema) => schema_definition = Some(schema.node),
            TypeSystemDefinition::Type(typ) => add_type_definition(&mut document, typ.node)?,
            // Directive definitions are not part of the model
            TypeSystemDefinition::Directive(_) => {}
        }
    }

    document.schema = match schema_definition {
        Some(schema) => SchemaDefinition {
            query: schema
                .query
                .map(|name| name.node.to_string())
                .unwrap_or_else(|| "Query".to_string()),
            mutation: schema.mutation.map(|name| name.node.to_string()),
            subscription: schema.subscription.map(|name| name.node.to_string()),
        },
        None => SchemaDefinition {
            query: "Query".to_string(),
            mutation: document.object("Mutation").map(|_| "Mutation".to_string()),
            subscription: document
                .object("Subscription")
                .map(|_| "Subscription".to_string()),
        },
    };

    Ok(document)
}

fn add_type_definition(document: &mut Document, typ: TypeDefinition) -> Result<(), SdlError> {
    let name = typ.name.node.to_string();

    if typ.extend {
        return Err(SdlError::UnsupportedExtension(name));
    }

    let description = typ.description.map(|description| description.node);
    let directives = convert_directives(&typ.directives);

    match typ.kind {
        TypeKind::Scalar => document.scalars.push(ScalarTypeDefinition {
            description,
            name,
            directives,
        }),
        TypeKind::Object(object) => document.objects.push(ObjectTypeDefinition {
            description,
            name,
            implements: object
                .implements
                .iter()
                .map(|name| name.node.to_string())
                .collect(),
            directives,
            fields: object.fields.iter().map(convert_field).collect(),
        }),
        TypeKind::Interface(interface) => document.interfaces.push(InterfaceTypeDefinition {
            description,
            name,
            implements: interface
                .implements
                .iter()
                .map(|name| name.node.to_string())
                .collect(),
            directives,
            fields: interface.fields.iter().map(convert_field).collect(),
        }),
        TypeKind::Union(union) => document.unions.push(UnionTypeDefinition {
            description,
            name,
            directives,
            members: union
                .members
                .iter()
                .map(|member| member.node.to_string())
                .collect(),
        }),
        TypeKind::Enum(enum_type) => document.enums.push(EnumTypeDefinition {
            description,
            name,
            directives,
            values: enum_type
                .values
                .iter()
                .map(|value| EnumValueDefinition {
                    description: value
                        .node
                        .description
                        .as_ref()
                        .map(|description| description.node.clone()),
                    name: value.node.value.node.to_string(),
                    directives: convert_directives(&value.node.directives),
                })
                .collect(),
        }),
        TypeKind::InputObject(input_object) => {
            document.input_objects.push(InputObjectTypeDefinition {
                description,
                name,
                directives,
                fields: input_object
                    .fields
                    .iter()
                    .map(convert_input_value)
                    .collect(),
            })
        }
    }

    Ok(())
}

fn convert_field(field: &Positioned<AstFieldDefinition>) -> FieldDefinition {
    let field = &field.node;

    FieldDefinition {
        description: field
            .description
            .as_ref()
            .map(|description| description.node.clone()),
        name: field.name.node.to_string(),
        arguments: field.arguments.iter().map(convert_input_value).collect(),
        typ: convert_type(&field.ty.node),
        directives: convert_directives(&field.directives),
    }
}

fn convert_input_value(value: &Positioned<AstInputValueDefinition>) -> InputValueDefinition {
    let value = &value.node;

    InputValueDefinition {
        description: value
            .description
            .as_ref()
            .map(|description| description.node.clone()),
        name: value.name.node.to_string(),
        typ: convert_type(&value.ty.node),
        default_value: value
            .default_value
            .as_ref()
            .map(|default_value| default_value.node.clone()),
        directives: convert_directives(&value.directives),
    }
}

fn convert_type(typ: &Type) -> TypeRef {
    let base = match &typ.base {
        BaseType::Named(name) => TypeRef::named(name.to_string()),
        BaseType::List(inner) => TypeRef::list(convert_type(inner)),
    };

    if typ.nullable { base } else { base.non_null() }
}

fn convert_directives(directives: &[Positioned<ConstDirective>]) -> Vec<Directive> {
    directives
        .iter()
        .map(|directive| Directive {
            name: directive.node.name.node.to_string(),
            arguments: directive
                .node
                .arguments
                .iter()
                .map(|(name, value)| DirectiveArgument {
                    name: name.node.to_string(),
                    value: value.node.clone(),
                })
                .collect(),
        })
        .collect()
}
