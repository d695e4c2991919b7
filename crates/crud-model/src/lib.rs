// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Typed representation of GraphQL schema documents as exchanged with the code-generation
//! pipeline.

pub mod document;
pub mod protocol;
pub mod sdl;
pub mod types;
pub mod value;
