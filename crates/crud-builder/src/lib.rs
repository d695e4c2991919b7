// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Generate create, update, and delete mutations for the object types of GraphQL documents.
//!
//! [`run_plugin`] is the entry point used by the `graphqlc-gen-crud` binary. The lower-level
//! pieces are public so the generator can also be driven directly, for example
//! [`schema_builder::augment_document`] with an in-memory [`CrudConfig`].

pub mod config;
pub mod error;
pub mod field_index;
pub mod field_set;
pub mod generator;
pub mod identifier;
pub mod naming;
pub mod operation;
pub mod parameters;
pub mod plugin;
pub mod schema_builder;
pub mod type_builder;
pub mod type_wrapper;

pub use config::{CrudConfig, load_config};
pub use error::{ConfigError, GeneratorError};
pub use generator::CrudGenerator;
pub use operation::CrudOperation;
pub use plugin::run_plugin;
