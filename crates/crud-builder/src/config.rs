// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Per-type generation policy, loaded from a JSON file.
//!
//! Two forms are accepted, and may be combined in one file:
//!
//! ```json
//! { "crudify": ["Post", "Comment"] }
//! ```
//!
//! ```json
//! {
//!   "types": {
//!     "Post": {
//!       "identifier": "id",
//!       "create": { "input": { "skip": ["createdAt"] } },
//!       "update": {
//!         "input": {
//!           "fieldMap": { "author": { "name": "authorId", "type": "Author", "field": "id" } }
//!         }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! A type with an entry under `types` uses that entry even if it is also listed in `crudify`.

use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use crate::{error::ConfigError, identifier::IdentifierPolicy, operation::CrudOperation};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrudConfig {
    /// Types with an explicit policy, in configuration order
    pub types: IndexMap<String, TypeSpec>,
    /// Types generated with the conventional `id` identifier and no skips or remaps
    pub crudify: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeSpec {
    pub identifier: Option<String>,
    pub create: OperationPolicy,
    pub update: OperationPolicy,
    pub delete: OperationPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationPolicy {
    /// Fields left out of the input type
    pub skip: IndexSet<String>,
    /// Fields replaced with a field of another type, keyed by the replaced field's name
    pub field_map: IndexMap<String, FieldRemap>,
}

/// Replace a field with `<type_name>.<field>`, renamed to `name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRemap {
    pub name: String,
    pub type_name: String,
    pub field: String,
}

/// The policy in effect for one eligible object type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePolicy<'a> {
    pub identifier: IdentifierPolicy,
    spec: Option<&'a TypeSpec>,
    /// Policy of every operation of a type without a `types` entry
    no_overrides: OperationPolicy,
}

impl CrudConfig {
    /// The policy for `type_name`, or `None` if no mutations should be generated for it.
    pub fn type_policy(&self, type_name: &str) -> Option<TypePolicy<'_>> {
        if let Some(spec) = self.types.get(type_name) {
            return Some(TypePolicy {
                identifier: spec.identifier_policy(),
                spec: Some(spec),
                no_overrides: OperationPolicy::default(),
            });
        }

        self.crudify
            .iter()
            .any(|name| name == type_name)
            .then(|| TypePolicy {
                identifier: IdentifierPolicy::Conventional,
                spec: None,
                no_overrides: OperationPolicy::default(),
            })
    }
}

impl TypeSpec {
    pub fn identifier_policy(&self) -> IdentifierPolicy {
        match &self.identifier {
            Some(identifier) => IdentifierPolicy::Explicit {
                identifier: identifier.clone(),
            },
            None => IdentifierPolicy::None,
        }
    }

    pub fn operation_policy(&self, operation: CrudOperation) -> &OperationPolicy {
        match operation {
            CrudOperation::Create => &self.create,
            CrudOperation::Update => &self.update,
            CrudOperation::Delete => &self.delete,
        }
    }
}

impl TypePolicy<'_> {
    pub fn operation_policy(&self, operation: CrudOperation) -> &OperationPolicy {
        match self.spec {
            Some(spec) => spec.operation_policy(operation),
            None => &self.no_overrides,
        }
    }
}

impl OperationPolicy {
    pub fn is_empty(&self) -> bool {
        self.skip.is_empty() && self.field_map.is_empty()
    }

    pub fn skips(&self, field_name: &str) -> bool {
        self.skip.contains(field_name)
    }

    pub fn remap(&self, field_name: &str) -> Option<&FieldRemap> {
        self.field_map.get(field_name)
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigSer {
    #[serde(default)]
    crudify: Vec<String>,
    #[serde(default)]
    types: IndexMap<String, TypeSpecSer>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TypeSpecSer {
    identifier: Option<String>,
    create: Option<OperationSer>,
    update: Option<OperationSer>,
    delete: Option<OperationSer>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct OperationSer {
    input: Option<InputSer>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct InputSer {
    #[serde(rename = "fieldMap", default)]
    field_map: IndexMap<String, FieldRemapSer>,
    #[serde(default)]
    skip: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct FieldRemapSer {
    name: Option<String>,
    #[serde(rename = "type")]
    type_name: String,
    field: String,
}

impl TryFrom<ConfigSer> for CrudConfig {
    type Error = ConfigError;

    fn try_from(config: ConfigSer) -> Result<Self, Self::Error> {
        if config.crudify.iter().any(|name| name.is_empty()) {
            return Err(ConfigError::Generic(
                "Type names under `crudify` must not be empty".to_string(),
            ));
        }

        let types = config
            .types
            .into_iter()
            .map(|(type_name, spec)| {
                if type_name.is_empty() {
                    return Err(ConfigError::Generic(
                        "Type names under `types` must not be empty".to_string(),
                    ));
                }
                let spec = type_spec(&type_name, spec)?;
                Ok((type_name, spec))
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;

        Ok(CrudConfig {
            types,
            crudify: config.crudify,
        })
    }
}

fn type_spec(type_name: &str, spec: TypeSpecSer) -> Result<TypeSpec, ConfigError> {
    if spec.identifier.as_deref() == Some("") {
        return Err(ConfigError::Generic(format!(
            "Type '{type_name}': `identifier` must not be empty"
        )));
    }

    let policy = |operation: Option<OperationSer>| {
        operation_policy(type_name, operation.and_then(|operation| operation.input))
    };

    let type_spec = TypeSpec {
        identifier: spec.identifier,
        create: policy(spec.create)?,
        update: policy(spec.update)?,
        delete: policy(spec.delete)?,
    };

    // Delete inputs are always the identifier fields
    if !type_spec.delete.is_empty() {
        tracing::warn!(
            type_name,
            "`delete.input` has no effect: delete inputs only contain the identifier fields"
        );
    }

    Ok(type_spec)
}

fn operation_policy(
    type_name: &str,
    input: Option<InputSer>,
) -> Result<OperationPolicy, ConfigError> {
    let Some(input) = input else {
        return Ok(OperationPolicy::default());
    };

    let field_map = input
        .field_map
        .into_iter()
        .map(|(source, remap)| {
            if remap.type_name.is_empty() || remap.field.is_empty() {
                return Err(ConfigError::Generic(format!(
                    "Type '{type_name}': `fieldMap` entry for '{source}' needs a non-empty `type` and `field`"
                )));
            }
            let remap = FieldRemap {
                name: remap
                    .name
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| source.clone()),
                type_name: remap.type_name,
                field: remap.field,
            };
            Ok((source, remap))
        })
        .collect::<Result<IndexMap<_, _>, _>>()?;

    Ok(OperationPolicy {
        skip: input.skip.into_iter().collect(),
        field_map,
    })
}

pub(crate) fn parse_config(json: &str, path: &Path) -> Result<CrudConfig, ConfigError> {
    let config: ConfigSer = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    config.try_into()
}

pub fn load_config(path: &Path) -> Result<CrudConfig, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&json, path)?;

    tracing::debug!(
        path = %path.display(),
        types = config.types.len(),
        crudify = config.crudify.len(),
        "Loaded configuration"
    );

    Ok(config)
}
