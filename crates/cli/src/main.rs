// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use anyhow::Result;
use clap::Command;
use common::logging_tracing;

fn main() -> Result<()> {
    logging_tracing::init()?;

    Command::new("graphqlc-gen-crud")
        .about(
            "Reads a code generation request on stdin and writes the schemas, \
             augmented with create, update, and delete mutations, to stdout",
        )
        .version(env!("CARGO_PKG_VERSION"))
        .get_matches();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    crud_builder::run_plugin(stdin.lock(), stdout.lock()).inspect_err(|err| {
        tracing::error!("{err}");
    })?;

    Ok(())
}
