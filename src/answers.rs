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

//! Loading wizard answers from a file and applying `--set` overrides.

use std::path::{Path, PathBuf};

use rinit_common::schema::RepoConfig;
use rinit_wizard::action::reduce;
use rinit_wizard::path;
use thiserror::Error;
use tracing::debug;

use crate::config::Answers;

#[derive(Debug, Error)]
pub enum AnswersError {
    #[error("Failed to read {}: {}", .0.display(), .1)]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse {} as JSON: {}", .0.display(), .1)]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("Failed to parse {} as YAML: {}", .0.display(), .1)]
    Yaml(PathBuf, #[source] serde_yaml::Error),

    #[error("Invalid assignment {0}, expected PATH=VALUE")]
    Assignment(String),

    #[error("Cannot apply {0}: {1}")]
    Edit(String, #[source] rinit_wizard::errors::Error),
}

pub type Result<T, E = AnswersError> = std::result::Result<T, E>;

/// Reads the answers file and applies the overrides in order.
pub fn load(answers: &Answers) -> Result<RepoConfig> {
    let mut config = read(&answers.file)?;
    apply(&mut config, &answers.assignments)?;
    Ok(config)
}

/// Files ending in `.json` are read as JSON, anything else as YAML.
pub fn read(file: &Path) -> Result<RepoConfig> {
    let text = std::fs::read_to_string(file).map_err(|e| AnswersError::Read(file.to_path_buf(), e))?;
    debug!("Read {} bytes of answers from {}", text.len(), file.display());

    if file.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        serde_json::from_str(&text).map_err(|e| AnswersError::Json(file.to_path_buf(), e))
    } else {
        serde_yaml::from_str(&text).map_err(|e| AnswersError::Yaml(file.to_path_buf(), e))
    }
}

pub fn apply(config: &mut RepoConfig, assignments: &[String]) -> Result<()> {
    for raw in assignments {
        let (field, value) = assignment(raw)?;
        let edit = path::parse(field, value).map_err(|e| AnswersError::Edit(raw.clone(), e))?;
        if let Some(action) = edit {
            reduce(config, action).map_err(|e| AnswersError::Edit(raw.clone(), e))?;
        }
    }

    Ok(())
}

/// Splits `path=value`; a bare `path` carries no value.
fn assignment(raw: &str) -> Result<(&str, Option<&str>)> {
    let (field, value) = match raw.split_once('=') {
        Some((field, value)) => (field.trim(), Some(value)),
        None => (raw.trim(), None),
    };
    if field.is_empty() {
        return Err(AnswersError::Assignment(raw.to_string()));
    }

    Ok((field, value))
}
