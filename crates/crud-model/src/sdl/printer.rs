// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Render a [`Document`] as GraphQL SDL.
//!
//! Definitions are emitted in a fixed order (schema, scalars, interfaces, objects, unions, enums,
//! input objects), each group keeping the document order, separated by a blank line.

use std::fmt::{self, Display};

use async_graphql_value::ConstValue;

use crate::document::{
    Directive, Document, EnumTypeDefinition, FieldDefinition, InputObjectTypeDefinition,
    InputValueDefinition, InterfaceTypeDefinition, ObjectTypeDefinition, ScalarTypeDefinition,
    SchemaDefinition, UnionTypeDefinition,
};

const FIELD_INDENT: &str = "  ";

pub struct DocumentSdl<'a>(&'a Document);

impl Document {
    pub fn sdl(&self) -> DocumentSdl<'_> {
        DocumentSdl(self)
    }
}

impl Display for DocumentSdl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Document {
            schema,
            scalars,
            interfaces,
            objects,
            unions,
            enums,
            input_objects,
            ..
        } = self.0;

        let definitions = std::iter::once(schema as &dyn Display)
            .chain(scalars.iter().map(|d| d as &dyn Display))
            .chain(interfaces.iter().map(|d| d as &dyn Display))
            .chain(objects.iter().map(|d| d as &dyn Display))
            .chain(unions.iter().map(|d| d as &dyn Display))
            .chain(enums.iter().map(|d| d as &dyn Display))
            .chain(input_objects.iter().map(|d| d as &dyn Display));

        for (index, definition) in definitions.enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{definition}")?;
        }

        Ok(())
    }
}

impl Display for SchemaDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "schema {{")?;
        writeln!(f, "{FIELD_INDENT}query: {}", self.query)?;
        if let Some(mutation) = &self.mutation {
            writeln!(f, "{FIELD_INDENT}mutation: {mutation}")?;
        }
        if let Some(subscription) = &self.subscription {
            writeln!(f, "{FIELD_INDENT}subscription: {subscription}")?;
        }
        write!(f, "}}")
    }
}

impl Display for ScalarTypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}scalar {}{}",
            BlockDescription::top_level(&self.description),
            self.name,
            Directives(&self.directives)
        )
    }
}

impl Display for InterfaceTypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}interface {}{}{}{}",
            BlockDescription::top_level(&self.description),
            self.name,
            Implements(&self.implements),
            Directives(&self.directives),
            Fields(&self.fields)
        )
    }
}

impl Display for ObjectTypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}type {}{}{}{}",
            BlockDescription::top_level(&self.description),
            self.name,
            Implements(&self.implements),
            Directives(&self.directives),
            Fields(&self.fields)
        )
    }
}

impl Display for UnionTypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}union {}{}",
            BlockDescription::top_level(&self.description),
            self.name,
            Directives(&self.directives)
        )?;
        if !self.members.is_empty() {
            write!(f, " = {}", self.members.join(" | "))?;
        }
        Ok(())
    }
}

impl Display for EnumTypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}enum {}{}",
            BlockDescription::top_level(&self.description),
            self.name,
            Directives(&self.directives)
        )?;
        if self.values.is_empty() {
            return Ok(());
        }
        writeln!(f, " {{")?;
        for value in &self.values {
            writeln!(
                f,
                "{}{FIELD_INDENT}{}{}",
                BlockDescription::member(&value.description),
                value.name,
                Directives(&value.directives)
            )?;
        }
        write!(f, "}}")
    }
}

impl Display for InputObjectTypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}input {}{}",
            BlockDescription::top_level(&self.description),
            self.name,
            Directives(&self.directives)
        )?;
        if self.fields.is_empty() {
            return Ok(());
        }
        writeln!(f, " {{")?;
        for field in &self.fields {
            writeln!(
                f,
                "{}{FIELD_INDENT}{field}",
                BlockDescription::member(&field.description)
            )?;
        }
        write!(f, "}}")
    }
}

impl Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "(")?;
            for (index, argument) in self.arguments.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                if let Some(description) = &argument.description {
                    write!(f, "{} ", ConstValue::String(description.clone()))?;
                }
                write!(f, "{argument}")?;
            }
            write!(f, ")")?;
        }
        write!(f, ": {}{}", self.typ, Directives(&self.directives))
    }
}

/// The description is left to the enclosing definition, since arguments and input fields place
/// it differently.
impl Display for InputValueDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.typ)?;
        if let Some(default_value) = &self.default_value {
            write!(f, " = {default_value}")?;
        }
        write!(f, "{}", Directives(&self.directives))
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.arguments.is_empty() {
            let arguments = self
                .arguments
                .iter()
                .map(|argument| format!("{}: {}", argument.name, argument.value))
                .collect::<Vec<_>>();
            write!(f, "({})", arguments.join(", "))?;
        }
        Ok(())
    }
}

struct Directives<'a>(&'a [Directive]);

impl Display for Directives<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for directive in self.0 {
            write!(f, " {directive}")?;
        }
        Ok(())
    }
}

struct Implements<'a>(&'a [String]);

impl Display for Implements<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_empty() {
            write!(f, " implements {}", self.0.join(" & "))?;
        }
        Ok(())
    }
}

struct Fields<'a>(&'a [FieldDefinition]);

impl Display for Fields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `type Mutation` without a body is valid SDL
        if self.0.is_empty() {
            return Ok(());
        }
        writeln!(f, " {{")?;
        for field in self.0 {
            writeln!(
                f,
                "{}{FIELD_INDENT}{field}",
                BlockDescription::member(&field.description)
            )?;
        }
        write!(f, "}}")
    }
}

/// A description placed on its own line(s) above the described element. Single-line descriptions
/// use a quoted string, others a block string.
struct BlockDescription<'a> {
    description: &'a Option<String>,
    indent: &'static str,
}

impl<'a> BlockDescription<'a> {
    fn top_level(description: &'a Option<String>) -> Self {
        Self {
            description,
            indent: "",
        }
    }

    fn member(description: &'a Option<String>) -> Self {
        Self {
            description,
            indent: FIELD_INDENT,
        }
    }
}

impl Display for BlockDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(description) = self.description else {
            return Ok(());
        };
        let indent = self.indent;

        if !description.contains('\n') {
            return writeln!(f, "{indent}{}", ConstValue::String(description.clone()));
        }

        writeln!(f, "{indent}\"\"\"")?;
        for line in description.replace("\"\"\"", "\\\"\"\"").lines() {
            if line.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, "{indent}{line}")?;
            }
        }
        writeln!(f, "{indent}\"\"\"")
    }
}

#[cfg(test)]
mod tests {
    use async_graphql_value::Name;

    use crate::{document::DirectiveArgument, types::TypeRef};

    use super::*;

    fn blog_document() -> Document {
        let mut document = Document::new("blog.graphql", "Query");
        document.schema.mutation = Some("Mutation".to_string());

        let mut post_query = FieldDefinition::new("post", TypeRef::named("Post"));
        post_query.arguments = vec![InputValueDefinition::new(
            "id",
            TypeRef::named("ID").non_null(),
        )];

        let mut title = FieldDefinition::new("title", TypeRef::named("String").non_null());
        title.description = Some("The title".to_string());
        title.directives = vec![Directive {
            name: "deprecated".to_string(),
            arguments: vec![DirectiveArgument {
                name: "reason".to_string(),
                value: ConstValue::String("old".to_string()),
            }],
        }];

        let mut post = ObjectTypeDefinition::new(
            "Post",
            vec![
                FieldDefinition::new("id", TypeRef::named("ID").non_null()),
                title,
            ],
        );
        post.implements = vec!["Node".to_string()];

        document.objects = vec![
            ObjectTypeDefinition::new("Query", vec![post_query]),
            post,
            ObjectTypeDefinition::new("Mutation", vec![]),
        ];
        document.input_objects = vec![InputObjectTypeDefinition::new(
            "CreatePostInput",
            vec![InputValueDefinition::new(
                "title",
                TypeRef::named("String").non_null(),
            )],
        )];

        document
    }

    #[test]
    fn document() {
        let expected = r#"schema {
  query: Query
  mutation: Mutation
}

type Query {
  post(id: ID!): Post
}

type Post implements Node {
  id: ID!
  "The title"
  title: String! @deprecated(reason: "old")
}

type Mutation

input CreatePostInput {
  title: String!
}
"#;
        assert_eq!(blog_document().sdl().to_string(), expected);
    }

    #[test]
    fn enums_unions_and_block_descriptions() {
        let mut document = Document::new("misc.graphql", "Query");
        document.objects = vec![ObjectTypeDefinition::new(
            "Query",
            vec![FieldDefinition::new("ping", TypeRef::named("String"))],
        )];
        document.enums = vec![EnumTypeDefinition {
            description: Some("Publication state\nof a post".to_string()),
            name: "Status".to_string(),
            directives: vec![],
            values: vec![
                crate::document::EnumValueDefinition {
                    description: None,
                    name: "DRAFT".to_string(),
                    directives: vec![],
                },
                crate::document::EnumValueDefinition {
                    description: None,
                    name: "PUBLISHED".to_string(),
                    directives: vec![],
                },
            ],
        }];
        document.unions = vec![UnionTypeDefinition {
            description: None,
            name: "SearchResult".to_string(),
            directives: vec![],
            members: vec!["Post".to_string(), "Author".to_string()],
        }];

        let expected = r#"schema {
  query: Query
}

type Query {
  ping: String
}

union SearchResult = Post | Author

"""
Publication state
of a post
"""
enum Status {
  DRAFT
  PUBLISHED
}
"#;
        assert_eq!(document.sdl().to_string(), expected);
    }

    #[test]
    fn default_values_and_argument_descriptions() {
        let mut limit = InputValueDefinition::new("limit", TypeRef::named("Int"));
        limit.description = Some("Page size".to_string());
        limit.default_value = Some(ConstValue::Number(10.into()));

        let mut order = InputValueDefinition::new("order", TypeRef::named("Order"));
        order.default_value = Some(ConstValue::Enum(Name::new("ASC")));

        let mut posts = FieldDefinition::new(
            "posts",
            TypeRef::list(TypeRef::named("Post").non_null()).non_null(),
        );
        posts.arguments = vec![limit, order];

        assert_eq!(
            posts.to_string(),
            r#"posts("Page size" limit: Int = 10, order: Order = ASC): [Post!]!"#
        );
    }
}
