// Copyright (c) The Repo Init Authors. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

use crate::StepId;

/// Rejections raised by the state store and the wizard.
///
/// The duplicate and incomplete entry variants display the exact message shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Please provide a name, namespace, and tag for the image.")]
    IncompleteBaseImage,

    #[error("That base image already exists")]
    DuplicateBaseImage,

    #[error("A substitution for that pullspec already exists")]
    DuplicateSubstitution,

    #[error("A test with that name already exists.")]
    DuplicateTest,

    #[error("You must, at a minimum, provide a name and the commands to run.")]
    IncompleteTest,

    #[error("The operator bundle build is not enabled.")]
    OperatorDisabled,

    #[error("No entry at index {0}")]
    NoSuchEntry(usize),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("The {0} step is not complete")]
    StepIncomplete(StepId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
