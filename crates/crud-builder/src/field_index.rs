// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

use crud_model::document::{FieldDefinition, ObjectTypeDefinition};

/// Field declarations of a document's object types, looked up by type name and field name.
///
/// Built once per document, before any declaration is synthesized, so remaps only resolve
/// against types declared in the source document.
#[derive(Debug, Default)]
pub struct FieldIndex<'a> {
    types: HashMap<&'a str, HashMap<&'a str, &'a FieldDefinition>>,
}

impl<'a> FieldIndex<'a> {
    pub fn new(objects: &'a [ObjectTypeDefinition]) -> Self {
        let mut types: HashMap<&'a str, HashMap<&'a str, &'a FieldDefinition>> = HashMap::new();

        for object in objects {
            // The first declaration of a type name wins
            types.entry(object.name.as_str()).or_insert_with(|| {
                let mut fields = HashMap::new();
                for field in &object.fields {
                    fields.entry(field.name.as_str()).or_insert(field);
                }
                fields
            });
        }

        Self { types }
    }

    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&'a FieldDefinition> {
        self.types
            .get(type_name)
            .and_then(|fields| fields.get(field_name))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use crud_model::types::TypeRef;

    use super::*;

    #[test]
    fn lookup() {
        let objects = vec![
            ObjectTypeDefinition::new(
                "Author",
                vec![
                    FieldDefinition::new("id", TypeRef::named("ID").non_null()),
                    FieldDefinition::new("name", TypeRef::named("String")),
                ],
            ),
            ObjectTypeDefinition::new(
                "Post",
                vec![FieldDefinition::new("title", TypeRef::named("String"))],
            ),
        ];
        let index = FieldIndex::new(&objects);

        assert_eq!(
            index.field("Author", "id").map(|field| field.typ.to_string()),
            Some("ID!".to_string())
        );
        assert!(index.field("Post", "title").is_some());
        assert!(index.field("Post", "id").is_none());
        assert!(index.field("Comment", "id").is_none());
    }

    #[test]
    fn first_declaration_wins() {
        let objects = vec![
            ObjectTypeDefinition::new(
                "Author",
                vec![FieldDefinition::new("id", TypeRef::named("ID").non_null())],
            ),
            ObjectTypeDefinition::new(
                "Author",
                vec![FieldDefinition::new("id", TypeRef::named("String"))],
            ),
        ];
        let index = FieldIndex::new(&objects);

        assert_eq!(
            index.field("Author", "id").unwrap().typ,
            TypeRef::named("ID").non_null()
        );
    }
}
