// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Type references as they appear on fields and input values (`ID`, `[String]`, `[Post!]!`).
//!
//! A non-null wrapper can only hold a named or a list type, so `T!!` cannot be expressed.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(NonNullType),
}

/// The payload of a non-null type: anything except another non-null type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NonNullType {
    Named(String),
    List(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// Wrap in one level of non-nullability. A type that is already non-null is returned as is.
    pub fn non_null(self) -> Self {
        match self {
            TypeRef::Named(name) => TypeRef::NonNull(NonNullType::Named(name)),
            TypeRef::List(inner) => TypeRef::NonNull(NonNullType::List(inner)),
            non_null @ TypeRef::NonNull(_) => non_null,
        }
    }

    /// Remove the outermost non-null wrapper, if any. The element type of a list is left alone,
    /// so `[String!]!` becomes `[String!]`.
    pub fn nullable(self) -> Self {
        match self {
            TypeRef::NonNull(NonNullType::Named(name)) => TypeRef::Named(name),
            TypeRef::NonNull(NonNullType::List(inner)) => TypeRef::List(inner),
            other => other,
        }
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{name}"),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(NonNullType::Named(name)) => write!(f, "{name}!"),
            TypeRef::NonNull(NonNullType::List(inner)) => write!(f, "[{inner}]!"),
        }
    }
}
