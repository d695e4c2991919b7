// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crud_model::protocol::{CodeGeneratorRequest, CodeGeneratorResponse, GeneratedFile};

use crate::{
    config::CrudConfig,
    schema_builder::{FilesToGenerate, augment_documents},
};

const SOURCE_EXTENSION: &str = ".graphql";
const OUTPUT_EXTENSION: &str = ".crud.graphql";

pub struct CrudGenerator {
    config: CrudConfig,
}

impl CrudGenerator {
    pub fn new(config: CrudConfig) -> Self {
        Self { config }
    }

    /// Augment the requested documents and render each of them as a `.crud.graphql` file.
    ///
    /// Documents not listed in `file_to_generate` are passed through unchanged.
    pub fn generate(&self, request: CodeGeneratorRequest) -> CodeGeneratorResponse {
        let files_to_generate: FilesToGenerate = request.file_to_generate.iter().collect();
        let mut documents = request.graphql_file;

        augment_documents(&mut documents, &files_to_generate, &self.config);

        let file = documents
            .iter()
            .filter(|document| files_to_generate.contains(&document.name))
            .map(|document| GeneratedFile {
                name: crud_file_name(&document.name),
                content: document.sdl().to_string(),
            })
            .collect();

        CodeGeneratorResponse {
            graphql_file: documents,
            file,
        }
    }
}

/// `blog.graphql` becomes `blog.crud.graphql`; any other name gets `.crud.graphql` appended.
pub fn crud_file_name(name: &str) -> String {
    let stem = name.strip_suffix(SOURCE_EXTENSION).unwrap_or(name);
    format!("{stem}{OUTPUT_EXTENSION}")
}
