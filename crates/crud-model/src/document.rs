// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The declaration tree of one schema file.
//!
//! Root operation types are referenced by name from [`SchemaDefinition`]; the types themselves
//! live in [`Document::objects`] like any other object type.

use async_graphql_value::ConstValue;
use serde::{Deserialize, Serialize};

use crate::types::TypeRef;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Document {
    /// File name of the schema, as known to the host pipeline (such as `blog.graphql`)
    pub name: String,
    pub schema: SchemaDefinition,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scalars: Vec<ScalarTypeDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<InterfaceTypeDefinition>,
    #[serde(default)]
    pub objects: Vec<ObjectTypeDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unions: Vec<UnionTypeDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<EnumTypeDefinition>,
    #[serde(default)]
    pub input_objects: Vec<InputObjectTypeDefinition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SchemaDefinition {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ObjectTypeDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// A field such as `posts(first: Int): [Post!]!`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<InputValueDefinition>,
    #[serde(rename = "type")]
    pub typ: TypeRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

/// An argument of a field or a field of an input object
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InputValueDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub typ: TypeRef,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::value::optional_const_value"
    )]
    pub default_value: Option<ConstValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InputObjectTypeDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub fields: Vec<InputValueDefinition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScalarTypeDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InterfaceTypeDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UnionTypeDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnumTypeDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub values: Vec<EnumValueDefinition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnumValueDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

/// An applied directive such as `@deprecated(reason: "use title")`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<DirectiveArgument>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DirectiveArgument {
    pub name: String,
    #[serde(with = "crate::value::const_value")]
    pub value: ConstValue,
}

impl Document {
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: SchemaDefinition {
                query: query.into(),
                mutation: None,
                subscription: None,
            },
            scalars: vec![],
            interfaces: vec![],
            objects: vec![],
            unions: vec![],
            enums: vec![],
            input_objects: vec![],
        }
    }

    pub fn object(&self, name: &str) -> Option<&ObjectTypeDefinition> {
        self.objects.iter().find(|object| object.name == name)
    }

    pub fn input_object(&self, name: &str) -> Option<&InputObjectTypeDefinition> {
        self.input_objects.iter().find(|input| input.name == name)
    }

    pub fn mutation_root(&self) -> Option<&ObjectTypeDefinition> {
        self.schema
            .mutation
            .as_deref()
            .and_then(|name| self.object(name))
    }
}

impl ObjectTypeDefinition {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            description: None,
            name: name.into(),
            implements: vec![],
            directives: vec![],
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, typ: TypeRef) -> Self {
        Self {
            description: None,
            name: name.into(),
            arguments: vec![],
            typ,
            directives: vec![],
        }
    }
}

impl InputValueDefinition {
    pub fn new(name: impl Into<String>, typ: TypeRef) -> Self {
        Self {
            description: None,
            name: name.into(),
            typ,
            default_value: None,
            directives: vec![],
        }
    }
}

impl InputObjectTypeDefinition {
    pub fn new(name: impl Into<String>, fields: Vec<InputValueDefinition>) -> Self {
        Self {
            description: None,
            name: name.into(),
            directives: vec![],
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&InputValueDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[cfg(test)]
mod tests {
    use async_graphql_value::Name;

    use super::*;

    #[test]
    fn minimal_document_from_json() {
        let document: Document = serde_json::from_value(serde_json::json!({
            "name": "blog.graphql",
            "schema": { "query": "Query" },
            "objects": [
                {
                    "name": "Query",
                    "fields": [
                        { "name": "post", "type": { "named": "Post" } }
                    ]
                }
            ]
        }))
        .unwrap();

        assert_eq!(document.schema.mutation, None);
        assert!(document.input_objects.is_empty());
        assert!(document.mutation_root().is_none());

        let query = document.object("Query").unwrap();
        assert_eq!(query.field("post").unwrap().typ, TypeRef::named("Post"));
    }

    #[test]
    fn directive_arguments_keep_graphql_values() {
        let field: FieldDefinition = serde_json::from_value(serde_json::json!({
            "name": "title",
            "type": { "non_null": { "named": "String" } },
            "directives": [
                { "name": "length", "arguments": [ { "name": "max", "value": { "number": 12 } } ] }
            ]
        }))
        .unwrap();

        let argument = &field.directives[0].arguments[0];
        assert_eq!(argument.name, "max");
        assert_eq!(argument.value, ConstValue::Number(12.into()));
    }

    #[test]
    fn enum_values_survive_json() {
        let mut order = InputValueDefinition::new("order", TypeRef::named("Order"));
        order.default_value = Some(ConstValue::Enum(Name::new("ASC")));
        order.directives = vec![Directive {
            name: "auth".to_string(),
            arguments: vec![DirectiveArgument {
                name: "role".to_string(),
                value: ConstValue::Enum(Name::new("ADMIN")),
            }],
        }];

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["default_value"], serde_json::json!({ "enum": "ASC" }));

        let back: InputValueDefinition = serde_json::from_value(json).unwrap();
        assert!(matches!(back.default_value, Some(ConstValue::Enum(_))));
        assert!(matches!(
            back.directives[0].arguments[0].value,
            ConstValue::Enum(_)
        ));
    }
}
