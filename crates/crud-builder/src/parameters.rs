// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const CONFIG_KEY: &str = "config";

/// Options passed through the request's `parameter` string (`config=crud.json,other=value`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorParameters {
    config: Option<PathBuf>,
}

impl GeneratorParameters {
    pub fn parse(parameter: &str) -> Result<Self, ConfigError> {
        let mut parameters = GeneratorParameters::default();

        for entry in parameter.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedParameter(entry.to_string()))?;

            match key.trim() {
                CONFIG_KEY => {
                    let value = value.trim();
                    parameters.config = (!value.is_empty()).then(|| PathBuf::from(value));
                }
                other => tracing::debug!(key = other, "Ignoring unknown parameter"),
            }
        }

        Ok(parameters)
    }

    pub fn config_path(&self) -> Result<&Path, ConfigError> {
        self.config
            .as_deref()
            .ok_or(ConfigError::MissingConfigParameter)
    }
}
