// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::operation::CrudOperation;

/// A type that can generate the names of the declarations synthesized for an object type.
pub trait ToCrudNames {
    /// Mutation field name (e.g. `CreatePost`)
    fn mutation_name(&self, operation: CrudOperation) -> String;
    /// Input object name (e.g. `CreatePostInput`)
    fn input_type_name(&self, operation: CrudOperation) -> String;
    /// Output object name (e.g. `CreatePostOutput`)
    fn output_type_name(&self, operation: CrudOperation) -> String;
    /// Name of the single field of a wrapper output type: the lower-cased type name (e.g. `post`,
    /// `blogpost`)
    fn wrapper_field_name(&self) -> String;
}

impl ToCrudNames for str {
    fn mutation_name(&self, operation: CrudOperation) -> String {
        format!("{operation}{self}")
    }

    fn input_type_name(&self, operation: CrudOperation) -> String {
        format!("{operation}{self}Input")
    }

    fn output_type_name(&self, operation: CrudOperation) -> String {
        format!("{operation}{self}Output")
    }

    fn wrapper_field_name(&self) -> String {
        self.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!("Post".mutation_name(CrudOperation::Create), "CreatePost");
        assert_eq!("Post".input_type_name(CrudOperation::Update), "UpdatePostInput");
        assert_eq!(
            "Post".output_type_name(CrudOperation::Delete),
            "DeletePostOutput"
        );
        assert_eq!("Post".wrapper_field_name(), "post");
        assert_eq!("BlogPost".wrapper_field_name(), "blogpost");
        assert_eq!("User_Profile".wrapper_field_name(), "user_profile");
        assert_eq!("HTTPServer".wrapper_field_name(), "httpserver");
    }
}
