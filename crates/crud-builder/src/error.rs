// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use thiserror::Error;

/// Every variant is fatal: the run stops and no response is written.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to read input request: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("Failed to parse input request: {0}")]
    InputProtocol(#[source] serde_json::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("No files to generate")]
    NoFilesToGenerate,

    #[error("Failed to serialize output response: {0}")]
    OutputProtocol(#[source] serde_json::Error),

    #[error("Failed to write output response: {0}")]
    WriteOutput(#[source] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required parameter `config`")]
    MissingConfigParameter,

    #[error("Invalid parameter '{0}': expected `key=value`")]
    MalformedParameter(String),

    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Generic(String),
}
