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

use std::str::FromStr;

use rinit_common::schema::{ReleaseType, UpdateGraph};

use crate::action::{Action, BuildEdit, OperatorEdit, ReleaseEdit, RepoEdit};
use crate::errors::{Error, Result};

/// Parses a dotted field path and its value into an action.
///
/// Paths use the wire names of the state, e.g. `buildSettings.goVersion`.
/// An absent value is a no-op and yields `None`, an unknown path is an error.
pub fn parse(path: &str, value: Option<&str>) -> Result<Option<Action>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let text = || value.to_string();
    let action = match path {
        "org" => Action::Repo(RepoEdit::Org(text())),
        "repo" => Action::Repo(RepoEdit::Repo(text())),
        "branch" => Action::Repo(RepoEdit::Branch(text())),

        "buildSettings.buildPromotes" => Action::Build(BuildEdit::Promotes(flag(path, value)?)),
        "buildSettings.partOfOSRelease" => Action::Build(BuildEdit::PartOfOsRelease(flag(path, value)?)),
        "buildSettings.needsBase" => Action::Build(BuildEdit::NeedsBase(flag(path, value)?)),
        "buildSettings.needsOS" => Action::Build(BuildEdit::NeedsOs(flag(path, value)?)),
        "buildSettings.goVersion" => Action::Build(BuildEdit::GoVersion(text())),
        "buildSettings.canonicalGoRepository" => Action::Build(BuildEdit::CanonicalGoRepository(text())),
        "buildSettings.buildCommands" => Action::Build(BuildEdit::BuildCommands(text())),
        "buildSettings.testBuildCommands" => Action::Build(BuildEdit::TestBuildCommands(text())),

        "buildSettings.operatorConfig.isOperator" => match flag(path, value)? {
            true => Action::Operator(OperatorEdit::Enable),
            false => Action::Operator(OperatorEdit::Disable),
        },
        "buildSettings.operatorConfig.name" => Action::Operator(OperatorEdit::Name(text())),
        "buildSettings.operatorConfig.dockerfilePath" => Action::Operator(OperatorEdit::DockerfilePath(text())),
        "buildSettings.operatorConfig.contextDir" => Action::Operator(OperatorEdit::ContextDir(text())),
        "buildSettings.operatorConfig.baseIndex" => Action::Operator(OperatorEdit::BaseIndex(text())),
        "buildSettings.operatorConfig.updateGraph" => {
            Action::Operator(OperatorEdit::UpdateGraph(parsed::<UpdateGraph>(path, value)?))
        }

        "buildSettings.release.type" => Action::Release(ReleaseEdit::Kind(parsed::<ReleaseType>(path, value)?)),
        "buildSettings.release.version" => Action::Release(ReleaseEdit::Version(text())),

        _ => return Err(Error::UnknownField(path.to_string())),
    };

    Ok(Some(action))
}

fn flag(path: &str, value: &str) -> Result<bool> {
    parsed(path, value)
}

fn parsed<T: FromStr>(path: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidValue { field: path.to_string(), value: value.to_string() })
}
