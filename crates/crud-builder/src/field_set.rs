// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Choose the fields of the input and output types for one operation on one object type.

use crud_model::{
    document::{FieldDefinition, ObjectTypeDefinition},
    types::TypeRef,
};

use crate::{
    config::{OperationPolicy, TypePolicy},
    field_index::FieldIndex,
    identifier::OutputStyle,
    naming::ToCrudNames,
    operation::CrudOperation,
    type_wrapper::{add_non_null, strip_non_null},
};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSets {
    pub input: Vec<FieldDefinition>,
    pub output: Vec<FieldDefinition>,
    /// Interfaces of the output type
    pub output_interfaces: Vec<String>,
}

pub fn compute_field_sets(
    operation: CrudOperation,
    object: &ObjectTypeDefinition,
    type_policy: &TypePolicy<'_>,
    index: &FieldIndex<'_>,
) -> FieldSets {
    let identifier_policy = &type_policy.identifier;
    let operation_policy = type_policy.operation_policy(operation);
    let (identifiers, others) = identifier_policy.partition(&object.fields);

    let required_identifiers = || {
        identifiers
            .iter()
            .map(|field| add_non_null((*field).clone()))
    };

    let input = match operation {
        CrudOperation::Create => writable_fields(&others, operation_policy, index),
        CrudOperation::Delete => required_identifiers().collect(),
        CrudOperation::Update => required_identifiers()
            .chain(
                writable_fields(&others, operation_policy, index)
                    .into_iter()
                    .map(strip_non_null),
            )
            .collect(),
    };

    let (output, output_interfaces) = match identifier_policy.output_style() {
        OutputStyle::Wrapper => (
            vec![FieldDefinition::new(
                object.name.wrapper_field_name(),
                TypeRef::named(&object.name),
            )],
            vec![],
        ),
        OutputStyle::FullFields => {
            let fields = match operation {
                CrudOperation::Create => identifiers
                    .iter()
                    .chain(others.iter())
                    .map(|field| (*field).clone())
                    .collect(),
                CrudOperation::Update | CrudOperation::Delete => object.fields.clone(),
            };
            (
                fields,
                identifier_policy.strip_reserved_interface(&object.implements),
            )
        }
    };

    FieldSets {
        input,
        output,
        output_interfaces,
    }
}

/// Fields a client may set: the non-identifier fields minus skipped ones, with remaps applied.
fn writable_fields(
    fields: &[&FieldDefinition],
    policy: &OperationPolicy,
    index: &FieldIndex<'_>,
) -> Vec<FieldDefinition> {
    fields
        .iter()
        .filter(|field| !policy.skips(&field.name))
        .map(|field| match policy.remap(&field.name) {
            Some(remap) => match index.field(&remap.type_name, &remap.field) {
                Some(target) => FieldDefinition {
                    name: remap.name.clone(),
                    ..target.clone()
                },
                None => {
                    tracing::warn!(
                        field = %field.name,
                        target_type = %remap.type_name,
                        target_field = %remap.field,
                        "Remap target not found, keeping the original field"
                    );
                    (*field).clone()
                }
            },
            None => (*field).clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crud_model::{document::Document, sdl::parse_document};

    use super::*;
    use crate::config::{CrudConfig, FieldRemap, OperationPolicy, TypeSpec};

    fn document(sdl: &str) -> Document {
        parse_document("test.graphql", sdl).unwrap()
    }

    fn describe(fields: &[FieldDefinition]) -> Vec<String> {
        fields
            .iter()
            .map(|field| format!("{}: {}", field.name, field.typ))
            .collect()
    }

    fn user_config() -> CrudConfig {
        let mut config = CrudConfig::default();
        config.types.insert(
            "User".to_string(),
            TypeSpec {
                identifier: Some("id".to_string()),
                update: OperationPolicy {
                    skip: ["email".to_string()].into_iter().collect(),
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        config
    }

    const USER_SDL: &str = r#"
        type Query { user: User }
        type User { id: ID! name: String! email: String }
    "#;

    #[test]
    fn user_input_fields() {
        let document = document(USER_SDL);
        let index = FieldIndex::new(&document.objects);
        let config = user_config();
        let policy = config.type_policy("User").unwrap();
        let user = document.object("User").unwrap();

        let sets = |operation| compute_field_sets(operation, user, &policy, &index);

        assert_eq!(
            describe(&sets(CrudOperation::Create).input),
            vec!["name: String!", "email: String"]
        );
        assert_eq!(describe(&sets(CrudOperation::Delete).input), vec!["id: ID!"]);
        assert_eq!(
            describe(&sets(CrudOperation::Update).input),
            vec!["id: ID!", "name: String"]
        );
    }

    #[test]
    fn wrapper_output() {
        let document = document(USER_SDL);
        let index = FieldIndex::new(&document.objects);
        let config = user_config();
        let policy = config.type_policy("User").unwrap();

        let sets = compute_field_sets(
            CrudOperation::Delete,
            document.object("User").unwrap(),
            &policy,
            &index,
        );
        assert_eq!(describe(&sets.output), vec!["user: User"]);
        assert!(sets.output_interfaces.is_empty());
    }

    #[test]
    fn identifier_is_required_even_if_declared_nullable() {
        let document = document(
            r#"
            type Query { post: Post }
            type Post { slug: String title: String! }
            "#,
        );
        let index = FieldIndex::new(&document.objects);
        let mut config = CrudConfig::default();
        config.types.insert(
            "Post".to_string(),
            TypeSpec {
                identifier: Some("slug".to_string()),
                ..Default::default()
            },
        );
        let policy = config.type_policy("Post").unwrap();
        let post = document.object("Post").unwrap();

        let update = compute_field_sets(CrudOperation::Update, post, &policy, &index);
        assert_eq!(describe(&update.input), vec!["slug: String!", "title: String"]);

        // Source declarations are left alone
        assert_eq!(post.field("slug").unwrap().typ, TypeRef::named("String"));
        assert_eq!(
            post.field("title").unwrap().typ,
            TypeRef::named("String").non_null()
        );
    }

    #[test]
    fn conventional_full_field_output() {
        let document = document(
            r#"
            type Query { post: Post }
            interface Node { id: ID! }
            type Post implements Node { title: String! id: ID! }
            "#,
        );
        let index = FieldIndex::new(&document.objects);
        let config = CrudConfig {
            crudify: vec!["Post".to_string()],
            ..Default::default()
        };
        let policy = config.type_policy("Post").unwrap();
        let post = document.object("Post").unwrap();

        let create = compute_field_sets(CrudOperation::Create, post, &policy, &index);
        assert_eq!(describe(&create.input), vec!["title: String!"]);
        assert_eq!(describe(&create.output), vec!["id: ID!", "title: String!"]);
        assert!(create.output_interfaces.is_empty());

        let delete = compute_field_sets(CrudOperation::Delete, post, &policy, &index);
        assert_eq!(describe(&delete.output), vec!["title: String!", "id: ID!"]);
    }

    #[test]
    fn remapped_field() {
        let document = document(
            r#"
            type Query { post: Post }
            type Author { id: ID! name: String }
            type Post { id: ID! title: String! authorId: String author: Author }
            "#,
        );
        let index = FieldIndex::new(&document.objects);

        let remap = |name: &str| FieldRemap {
            name: name.to_string(),
            type_name: "Author".to_string(),
            field: "id".to_string(),
        };
        let mut config = CrudConfig::default();
        config.types.insert(
            "Post".to_string(),
            TypeSpec {
                identifier: Some("id".to_string()),
                create: OperationPolicy {
                    skip: ["author".to_string()].into_iter().collect(),
                    field_map: [("authorId".to_string(), remap("authorId"))]
                        .into_iter()
                        .collect(),
                },
                update: OperationPolicy {
                    field_map: [("author".to_string(), remap("authorId"))]
                        .into_iter()
                        .collect(),
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        let policy = config.type_policy("Post").unwrap();
        let post = document.object("Post").unwrap();

        let create = compute_field_sets(CrudOperation::Create, post, &policy, &index);
        assert_eq!(
            describe(&create.input),
            vec!["title: String!", "authorId: ID!"]
        );

        let update = compute_field_sets(CrudOperation::Update, post, &policy, &index);
        assert_eq!(
            describe(&update.input),
            vec!["id: ID!", "title: String", "authorId: String", "authorId: ID"]
        );
    }

    #[test]
    fn unresolved_remap_keeps_field() {
        let document = document(
            r#"
            type Query { post: Post }
            type Post { id: ID! authorId: String }
            "#,
        );
        let index = FieldIndex::new(&document.objects);
        let mut config = CrudConfig::default();
        config.types.insert(
            "Post".to_string(),
            TypeSpec {
                identifier: Some("id".to_string()),
                create: OperationPolicy {
                    field_map: [(
                        "authorId".to_string(),
                        FieldRemap {
                            name: "authorId".to_string(),
                            type_name: "Author".to_string(),
                            field: "id".to_string(),
                        },
                    )]
                    .into_iter()
                    .collect(),
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        let policy = config.type_policy("Post").unwrap();

        let create = compute_field_sets(
            CrudOperation::Create,
            document.object("Post").unwrap(),
            &policy,
            &index,
        );
        assert_eq!(describe(&create.input), vec!["authorId: String"]);
    }

    #[test]
    fn no_identifier() {
        let document = document(
            r#"
            type Query { events: [Event] }
            type Event { id: ID! kind: String! }
            "#,
        );
        let index = FieldIndex::new(&document.objects);
        let mut config = CrudConfig::default();
        config.types.insert("Event".to_string(), TypeSpec::default());
        let policy = config.type_policy("Event").unwrap();
        let event = document.object("Event").unwrap();

        let create = compute_field_sets(CrudOperation::Create, event, &policy, &index);
        assert_eq!(describe(&create.input), vec!["id: ID!", "kind: String!"]);

        let delete = compute_field_sets(CrudOperation::Delete, event, &policy, &index);
        assert!(delete.input.is_empty());

        let update = compute_field_sets(CrudOperation::Update, event, &policy, &index);
        assert_eq!(describe(&update.input), vec!["id: ID", "kind: String"]);
    }
}
