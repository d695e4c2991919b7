// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrudOperation {
    Create,
    Update,
    Delete,
}

impl CrudOperation {
    /// The order in which the operations of each type are added to the schema
    pub const GENERATION_ORDER: [CrudOperation; 3] = [
        CrudOperation::Create,
        CrudOperation::Delete,
        CrudOperation::Update,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CrudOperation::Create => "Create",
            CrudOperation::Update => "Update",
            CrudOperation::Delete => "Delete",
        }
    }
}

impl Display for CrudOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
