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

use std::collections::BTreeMap;

use errors::{MarshalError, Result};
use rinit_common::document::Document;
use rinit_common::schema::{BaseImage, RepoConfig};

pub mod errors;
pub mod jobs;
pub mod operator;
pub mod utils;

/// Build the configuration service document from the wizard state.
///
/// This never fails and never looks anywhere but `config`: the same state
/// always yields the same document.
pub fn marshal(config: &RepoConfig) -> Document {
    let settings = &config.build_settings;

    // The nested promotion flags only mean something when images are promoted.
    let promotes = settings.build_promotes;

    Document {
        org: config.org.clone(),
        repo: config.repo.clone(),
        branch: config.branch.clone(),
        canonical_go_repository: settings.canonical_go_repository.clone(),
        promotes,
        promotes_with_openshift: promotes && settings.part_of_os_release,
        needs_base: promotes && settings.needs_base,
        needs_os: promotes && settings.needs_os,
        go_version: settings.go_version.clone(),
        base_images: base_images(&settings.base_images),
        build_commands: settings.build_commands.clone(),
        test_build_commands: settings.test_build_commands.clone(),
        tests: jobs::unit_tests(&config.tests),
        custom_e2e: jobs::custom_tests(&config.tests),
        operator_bundle: operator::bundle(&settings.operator_config),
        release_type: settings.release.kind.to_string(),
        release_version: settings.release.version.clone(),
    }
}

/// Base images keyed by name, a later image replaces an earlier one of the same name.
pub fn base_images(images: &[BaseImage]) -> BTreeMap<String, BaseImage> {
    images.iter().map(|image| (image.name.clone(), image.clone())).collect()
}

/// Checks what the service needs before a document can be generated.
pub fn ensure_submittable(config: &RepoConfig) -> Result<()> {
    if let Some(field) = config.missing_identity() {
        return Err(MarshalError::MissingField(field));
    }

    let release = &config.build_settings.release;
    if !release.is_complete() {
        return Err(MarshalError::MissingReleaseVersion(release.kind.to_string()));
    }

    Ok(())
}
