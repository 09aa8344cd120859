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

//! The wizard state: everything the user has entered so far, in the
//! camelCase shape the answers files use.

mod build;
mod operator;
mod repo;

pub use build::{BaseImage, BuildSettings, ReleaseConfig, ReleaseType};
pub use operator::{OperatorBuild, OperatorConfig, PullspecSubstitution, UpdateGraph};
pub use repo::RepoConfig;
pub use test::{CloudProvider, OperatorTestConfig, Test, TestType};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self { kind, value: value.to_string() }
    }
}
