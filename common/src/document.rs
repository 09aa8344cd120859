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

//! The document the configuration service validates and generates from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::BaseImage;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Document {
    pub org: String,
    pub repo: String,
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_go_repository: Option<String>,
    pub promotes: bool,
    pub promotes_with_openshift: bool,
    pub needs_base: bool,
    pub needs_os: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go_version: Option<String>,
    /// Base images keyed by image name.
    #[serde(default)]
    pub base_images: BTreeMap<String, BaseImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_commands: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_build_commands: Option<String>,
    /// Unit tests.
    #[serde(default)]
    pub tests: Vec<UnitTest>,
    /// End-to-end and operator tests.
    #[serde(default)]
    pub custom_e2e: Vec<CustomTest>,
    /// Always present, `null` unless an operator bundle is built.
    pub operator_bundle: Option<OperatorBundle>,
    pub release_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_version: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct UnitTest {
    #[serde(rename = "as")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CustomTest {
    #[serde(rename = "as")]
    pub name: String,
    pub command: String,
    /// The cluster profile slug, empty when no cloud provider was chosen.
    pub profile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<String>,
    pub cli: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct OperatorBundle {
    pub name: String,
    pub dockerfile_path: String,
    pub context_dir: String,
    pub base_index: String,
    pub update_graph: String,
    pub substitutions: Vec<Substitution>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Substitution {
    pub pullspec: String,
    pub with: String,
}
