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

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// Whether the repository builds an optional operator bundle.
///
/// Answers files carry this as an optional `operatorConfig` object with an
/// `isOperator` flag; an absent object and a cleared flag both read as
/// [`OperatorBuild::Disabled`].
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(from = "Option<OperatorConfigRepr>", into = "Option<OperatorConfigRepr>")]
pub enum OperatorBuild {
    #[default]
    Disabled,
    Enabled(OperatorConfig),
}

impl OperatorBuild {
    pub fn is_enabled(&self) -> bool {
        matches!(self, OperatorBuild::Enabled(_))
    }

    pub fn config(&self) -> Option<&OperatorConfig> {
        match self {
            OperatorBuild::Enabled(config) => Some(config),
            OperatorBuild::Disabled => None,
        }
    }

    pub fn config_mut(&mut self) -> Option<&mut OperatorConfig> {
        match self {
            OperatorBuild::Enabled(config) => Some(config),
            OperatorBuild::Disabled => None,
        }
    }
}

/// The answers-file shape of [`OperatorBuild`].
///
/// Not flattened: a flattened struct buffers its YAML scalars and then
/// refuses unquoted values like `baseIndex: 4.14` as strings.
#[derive(Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperatorConfigRepr {
    is_operator: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dockerfile_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    update_graph: Option<UpdateGraph>,
    substitutions: Vec<PullspecSubstitution>,
}

impl From<Option<OperatorConfigRepr>> for OperatorBuild {
    fn from(repr: Option<OperatorConfigRepr>) -> Self {
        match repr {
            Some(repr) if repr.is_operator => OperatorBuild::Enabled(OperatorConfig {
                name: repr.name,
                dockerfile_path: repr.dockerfile_path,
                context_dir: repr.context_dir,
                base_index: repr.base_index,
                update_graph: repr.update_graph,
                substitutions: repr.substitutions,
            }),
            _ => OperatorBuild::Disabled,
        }
    }
}

impl From<OperatorBuild> for Option<OperatorConfigRepr> {
    fn from(build: OperatorBuild) -> Self {
        match build {
            OperatorBuild::Enabled(config) => Some(OperatorConfigRepr {
                is_operator: true,
                name: config.name,
                dockerfile_path: config.dockerfile_path,
                context_dir: config.context_dir,
                base_index: config.base_index,
                update_graph: config.update_graph,
                substitutions: config.substitutions,
            }),
            OperatorBuild::Disabled => None,
        }
    }
}

/// The operator bundle build settings.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OperatorConfig {
    /// The image name for the built bundle, `ci-index` when left blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path to the Dockerfile that builds the bundle image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dockerfile_path: Option<String>,
    /// Base directory for the bundle image build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_dir: Option<String>,
    /// The index the bundle is added to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_graph: Option<UpdateGraph>,
    /// Pullspec replacements, pullspecs are unique ignoring case.
    pub substitutions: Vec<PullspecSubstitution>,
}

impl OperatorConfig {
    /// Finds a substitution for the same pullspec, ignoring case.
    pub fn find_substitution(&self, pullspec: &str) -> Option<usize> {
        self.substitutions
            .iter()
            .position(|substitution| substitution.pullspec.to_lowercase() == pullspec.to_lowercase())
    }
}

/// Strategy for linking a new bundle version into an existing upgrade graph.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum UpdateGraph {
    #[serde(rename = "semver")]
    Semver,
    #[serde(rename = "semver-skippatch", alias = "semverSkippatch", alias = "semver_skippatch")]
    SemverSkipPatch,
    #[serde(rename = "replaces")]
    Replaces,
}

impl UpdateGraph {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateGraph::Semver => "semver",
            UpdateGraph::SemverSkipPatch => "semver-skippatch",
            UpdateGraph::Replaces => "replaces",
        }
    }
}

impl Display for UpdateGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateGraph {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "semver" => Ok(UpdateGraph::Semver),
            "semver-skippatch" | "semverSkippatch" | "semver_skippatch" => Ok(UpdateGraph::SemverSkipPatch),
            "replaces" => Ok(UpdateGraph::Replaces),
            _ => Err(UnknownVariant::new("update graph", s)),
        }
    }
}

/// Replaces an image reference in the bundle manifests.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PullspecSubstitution {
    pub pullspec: String,
    pub with: String,
}

impl PullspecSubstitution {
    pub fn new(pullspec: &str, with: &str) -> Self {
        PullspecSubstitution { pullspec: pullspec.into(), with: with.into() }
    }
}
