// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Add the synthesized mutations to the requested documents.
//!
//! For each requested document, every configured object type (other than the root operation
//! types) gets `Create`, `Delete`, and `Update` declarations, in that order. Synthesized
//! declarations are appended after the existing ones; nothing is removed or de-duplicated, so
//! augmenting an already augmented document adds a second copy of each declaration.

use std::collections::HashSet;

use crud_model::document::{
    Document, FieldDefinition, InputObjectTypeDefinition, ObjectTypeDefinition,
};

use crate::{
    config::CrudConfig,
    field_index::FieldIndex,
    operation::CrudOperation,
    type_builder::{CrudDefinitions, build_definitions},
};

/// Mutation root name used when the document doesn't name one
pub const DEFAULT_MUTATION_ROOT: &str = "Mutation";

/// Names of the documents to augment
#[derive(Debug, Clone, Default)]
pub struct FilesToGenerate(HashSet<String>);

impl FilesToGenerate {
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for FilesToGenerate {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

pub fn augment_documents(
    documents: &mut [Document],
    files_to_generate: &FilesToGenerate,
    config: &CrudConfig,
) {
    for document in documents {
        if files_to_generate.contains(&document.name) {
            augment_document(document, config);
        } else {
            tracing::debug!(document = %document.name, "Not requested, leaving unchanged");
        }
    }
}

pub fn augment_document(document: &mut Document, config: &CrudConfig) {
    let root_name = document
        .schema
        .mutation
        .clone()
        .unwrap_or_else(|| DEFAULT_MUTATION_ROOT.to_string());

    let Augmentation {
        mutation_root,
        input_objects,
        objects,
        mutations,
    } = collect_definitions(document, &root_name, config);

    let mutation_root = match mutation_root {
        Some(position) => position,
        None => {
            tracing::debug!(document = %document.name, root = %root_name, "Adding mutation root");
            document
                .objects
                .push(ObjectTypeDefinition::new(root_name.clone(), vec![]));
            document.objects.len() - 1
        }
    };
    document.schema.mutation = Some(root_name);

    tracing::info!(
        document = %document.name,
        mutations = mutations.len(),
        "Generated CRUD mutations"
    );

    document.input_objects.extend(input_objects);
    document.objects.extend(objects);
    document.objects[mutation_root].fields.extend(mutations);
}

/// Declarations accumulated over one document, in generation order
#[derive(Default)]
struct Augmentation {
    /// Position of the existing mutation root in the document's objects
    mutation_root: Option<usize>,
    input_objects: Vec<InputObjectTypeDefinition>,
    objects: Vec<ObjectTypeDefinition>,
    mutations: Vec<FieldDefinition>,
}

fn collect_definitions(document: &Document, root_name: &str, config: &CrudConfig) -> Augmentation {
    let index = FieldIndex::new(&document.objects);
    let schema = &document.schema;
    let mut augmentation = Augmentation::default();

    for (position, object) in document.objects.iter().enumerate() {
        if object.name == schema.query {
            continue;
        }

        if object.name == root_name {
            augmentation.mutation_root.get_or_insert(position);
            continue;
        }

        if schema.subscription.as_deref() == Some(object.name.as_str()) {
            continue;
        }

        let Some(type_policy) = config.type_policy(&object.name) else {
            tracing::debug!(object = %object.name, "Not configured, skipping");
            continue;
        };

        tracing::debug!(
            document = %document.name,
            object = %object.name,
            identifier = ?type_policy.identifier,
            "Generating CRUD mutations"
        );

        for operation in CrudOperation::GENERATION_ORDER {
            let CrudDefinitions {
                input,
                output,
                mutation,
            } = build_definitions(operation, object, &type_policy, &index);

            augmentation.input_objects.push(input);
            augmentation.objects.push(output);
            augmentation.mutations.push(mutation);
        }
    }

    augmentation
}
