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

use super::{OperatorBuild, UnknownVariant};

/// How the repository is built and which images it starts from.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildSettings {
    /// Does the repository build and promote container images?
    pub build_promotes: bool,
    /// Promotes images as part of the OpenShift release, only meaningful with `build_promotes`.
    #[serde(rename = "partOfOSRelease")]
    pub part_of_os_release: bool,
    /// Builds on top of the OpenShift base image, only meaningful with `build_promotes`.
    pub needs_base: bool,
    /// Builds on top of the CentOS base image, only meaningful with `build_promotes`.
    #[serde(rename = "needsOS")]
    pub needs_os: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_version: Option<String>,
    /// The Go import path when the repository uses a vanity URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_go_repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_commands: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_build_commands: Option<String>,
    pub base_images: Vec<BaseImage>,
    pub operator_config: OperatorBuild,
    pub release: ReleaseConfig,
}

impl BuildSettings {
    /// Returns true when the fields required to leave the build step are filled in.
    pub fn is_complete(&self) -> bool {
        [&self.go_version, &self.build_commands, &self.test_build_commands]
            .iter()
            .all(|value| value.as_deref().map_or(false, |v| !v.is_empty()))
    }

    /// Finds a base image with the same name, namespace and tag, ignoring case.
    pub fn find_base_image(&self, image: &BaseImage) -> Option<usize> {
        self.base_images.iter().position(|existing| existing.same_as(image))
    }
}

/// A named image stream tag made available to container image builds.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BaseImage {
    pub name: String,
    pub namespace: String,
    pub tag: String,
}

impl BaseImage {
    pub fn new(name: &str, namespace: &str, tag: &str) -> Self {
        BaseImage { name: name.into(), namespace: namespace.into(), tag: tag.into() }
    }

    /// Returns true when name, namespace and tag are all present.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.namespace.is_empty() && !self.tag.is_empty()
    }

    /// Compares the (name, namespace, tag) tuple ignoring case.
    pub fn same_as(&self, other: &BaseImage) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
            && self.namespace.to_lowercase() == other.namespace.to_lowercase()
            && self.tag.to_lowercase() == other.tag.to_lowercase()
    }
}

/// Whether tests run on top of an OpenShift release, and which one.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReleaseConfig {
    #[serde(rename = "type")]
    pub kind: ReleaseType,
    /// Required when `kind` is not [`ReleaseType::No`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ReleaseConfig {
    pub fn is_complete(&self) -> bool {
        self.kind == ReleaseType::No || self.version.as_deref().map_or(false, |v| !v.trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum ReleaseType {
    #[default]
    No,
    Published,
    Nightly,
}

impl ReleaseType {
    /// The lower-cased form the configuration service expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::No => "no",
            ReleaseType::Published => "published",
            ReleaseType::Nightly => "nightly",
        }
    }
}

impl Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no" => Ok(ReleaseType::No),
            "published" => Ok(ReleaseType::Published),
            "nightly" => Ok(ReleaseType::Nightly),
            _ => Err(UnknownVariant::new("release type", s)),
        }
    }
}
