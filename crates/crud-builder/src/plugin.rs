// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::io::{Read, Write};

use crud_model::protocol::CodeGeneratorRequest;

use crate::{
    config::load_config, error::GeneratorError, generator::CrudGenerator,
    parameters::GeneratorParameters,
};

/// Read one request from `input`, generate, and write one response to `output`.
///
/// The response is fully encoded before anything is written, so `output` receives either a
/// complete response or nothing.
pub fn run_plugin(mut input: impl Read, mut output: impl Write) -> Result<(), GeneratorError> {
    let mut buffer = Vec::new();
    input
        .read_to_end(&mut buffer)
        .map_err(GeneratorError::ReadInput)?;

    let request: CodeGeneratorRequest =
        serde_json::from_slice(&buffer).map_err(GeneratorError::InputProtocol)?;

    if request.file_to_generate.is_empty() {
        return Err(GeneratorError::NoFilesToGenerate);
    }

    tracing::debug!(
        files = ?request.file_to_generate,
        documents = request.graphql_file.len(),
        "Received request"
    );

    let parameters = GeneratorParameters::parse(&request.parameter)?;
    let config = load_config(parameters.config_path()?)?;

    let response = CrudGenerator::new(config).generate(request);

    let encoded = serde_json::to_vec(&response).map_err(GeneratorError::OutputProtocol)?;
    output
        .write_all(&encoded)
        .and_then(|()| output.flush())
        .map_err(GeneratorError::WriteOutput)?;

    Ok(())
}
