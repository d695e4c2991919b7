// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Values exchanged with the host code-generation pipeline.

use serde::{Deserialize, Serialize};

use crate::document::Document;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CodeGeneratorRequest {
    /// Names of the documents (matched against [`Document::name`]) the generator should process
    #[serde(default)]
    pub file_to_generate: Vec<String>,
    /// Comma-separated `key=value` pairs passed through from the host command line
    #[serde(default)]
    pub parameter: String,
    /// Every document known to the pipeline, including those not to be processed
    #[serde(default)]
    pub graphql_file: Vec<Document>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CodeGeneratorResponse {
    pub graphql_file: Vec<Document>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file: Vec<GeneratedFile>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub content: String,
}
