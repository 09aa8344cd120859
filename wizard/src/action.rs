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

//! Typed edits of the wizard state, one enum per group of fields.

use rinit_common::schema::{
    BaseImage, BuildSettings, OperatorBuild, OperatorConfig, PullspecSubstitution, ReleaseConfig, ReleaseType,
    RepoConfig, Test, UpdateGraph,
};

use crate::errors::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Repo(RepoEdit),
    Build(BuildEdit),
    Operator(OperatorEdit),
    Tests(TestEdit),
    Release(ReleaseEdit),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RepoEdit {
    Org(String),
    Repo(String),
    Branch(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildEdit {
    Promotes(bool),
    PartOfOsRelease(bool),
    NeedsBase(bool),
    NeedsOs(bool),
    GoVersion(String),
    CanonicalGoRepository(String),
    BuildCommands(String),
    TestBuildCommands(String),
    AddBaseImage(BaseImage),
    RemoveBaseImage(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperatorEdit {
    Enable,
    Disable,
    Name(String),
    DockerfilePath(String),
    ContextDir(String),
    BaseIndex(String),
    UpdateGraph(UpdateGraph),
    AddSubstitution(PullspecSubstitution),
    RemoveSubstitution(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub enum TestEdit {
    Add(Test),
    Replace(usize, Test),
    Remove(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReleaseEdit {
    Kind(ReleaseType),
    Version(String),
}

/// Applies the action to the state.
///
/// A rejected action leaves the state exactly as it was.
pub fn reduce(config: &mut RepoConfig, action: Action) -> Result<()> {
    match action {
        Action::Repo(edit) => {
            reduce_repo(config, edit);
            Ok(())
        }
        Action::Build(edit) => reduce_build(&mut config.build_settings, edit),
        Action::Operator(edit) => reduce_operator(&mut config.build_settings.operator_config, edit),
        Action::Tests(edit) => reduce_tests(&mut config.tests, edit),
        Action::Release(edit) => {
            reduce_release(&mut config.build_settings.release, edit);
            Ok(())
        }
    }
}

fn reduce_repo(config: &mut RepoConfig, edit: RepoEdit) {
    match edit {
        RepoEdit::Org(org) => config.org = org,
        RepoEdit::Repo(repo) => config.repo = repo,
        RepoEdit::Branch(branch) => config.branch = branch,
    }
}

fn reduce_build(settings: &mut BuildSettings, edit: BuildEdit) -> Result<()> {
    match edit {
        BuildEdit::Promotes(value) => settings.build_promotes = value,
        BuildEdit::PartOfOsRelease(value) => settings.part_of_os_release = value,
        BuildEdit::NeedsBase(value) => settings.needs_base = value,
        BuildEdit::NeedsOs(value) => settings.needs_os = value,
        BuildEdit::GoVersion(value) => settings.go_version = Some(value),
        BuildEdit::CanonicalGoRepository(value) => settings.canonical_go_repository = Some(value),
        BuildEdit::BuildCommands(value) => settings.build_commands = Some(value),
        BuildEdit::TestBuildCommands(value) => settings.test_build_commands = Some(value),
        BuildEdit::AddBaseImage(image) => {
            if !image.is_complete() {
                return Err(Error::IncompleteBaseImage);
            }
            if settings.find_base_image(&image).is_some() {
                return Err(Error::DuplicateBaseImage);
            }
            settings.base_images.push(image);
        }
        BuildEdit::RemoveBaseImage(index) => {
            remove(&mut settings.base_images, index)?;
        }
    }

    Ok(())
}

fn reduce_operator(build: &mut OperatorBuild, edit: OperatorEdit) -> Result<()> {
    match edit {
        OperatorEdit::Enable if !build.is_enabled() => {
            *build = OperatorBuild::Enabled(OperatorConfig::default());
            Ok(())
        }
        // Disabling discards whatever was entered.
        OperatorEdit::Disable => {
            *build = OperatorBuild::Disabled;
            Ok(())
        }
        edit => edit_operator(build.config_mut().ok_or(Error::OperatorDisabled)?, edit),
    }
}

fn edit_operator(config: &mut OperatorConfig, edit: OperatorEdit) -> Result<()> {
    match edit {
        OperatorEdit::Enable | OperatorEdit::Disable => {}
        OperatorEdit::Name(value) => config.name = Some(value),
        OperatorEdit::DockerfilePath(value) => config.dockerfile_path = Some(value),
        OperatorEdit::ContextDir(value) => config.context_dir = Some(value),
        OperatorEdit::BaseIndex(value) => config.base_index = Some(value),
        OperatorEdit::UpdateGraph(value) => config.update_graph = Some(value),
        OperatorEdit::AddSubstitution(substitution) => {
            if config.find_substitution(&substitution.pullspec).is_some() {
                return Err(Error::DuplicateSubstitution);
            }
            config.substitutions.push(substitution);
        }
        OperatorEdit::RemoveSubstitution(index) => {
            remove(&mut config.substitutions, index)?;
        }
    }

    Ok(())
}

fn reduce_tests(tests: &mut Vec<Test>, edit: TestEdit) -> Result<()> {
    match edit {
        TestEdit::Add(test) => {
            check_test(tests, &test, None)?;
            tests.push(test);
        }
        TestEdit::Replace(index, test) => {
            if index >= tests.len() {
                return Err(Error::NoSuchEntry(index));
            }
            check_test(tests, &test, Some(index))?;
            tests[index] = test;
        }
        TestEdit::Remove(index) => {
            remove(tests, index)?;
        }
    }

    Ok(())
}

fn check_test(tests: &[Test], test: &Test, replacing: Option<usize>) -> Result<()> {
    let name = test.name.to_lowercase();
    let duplicate = tests
        .iter()
        .enumerate()
        .any(|(index, existing)| Some(index) != replacing && existing.name.to_lowercase() == name);
    if duplicate {
        return Err(Error::DuplicateTest);
    }
    if !test.is_complete() {
        return Err(Error::IncompleteTest);
    }

    Ok(())
}

fn reduce_release(release: &mut ReleaseConfig, edit: ReleaseEdit) {
    match edit {
        ReleaseEdit::Kind(kind) => release.kind = kind,
        ReleaseEdit::Version(version) => release.version = Some(version),
    }
}

fn remove<T>(items: &mut Vec<T>, index: usize) -> Result<T> {
    if index < items.len() {
        Ok(items.remove(index))
    } else {
        Err(Error::NoSuchEntry(index))
    }
}
