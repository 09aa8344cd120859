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

use serde::{Deserialize, Serialize};

use super::{BuildSettings, Test};

/// The root of the wizard state.
///
/// `org`, `repo` and `branch` together identify the configuration target and
/// must all be filled in before the document can be submitted.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RepoConfig {
    /// The GitHub organization of the repository.
    pub org: String,
    /// The repository name.
    pub repo: String,
    /// The development branch.
    pub branch: String,
    pub build_settings: BuildSettings,
    /// Ordered test definitions, names are unique ignoring case.
    pub tests: Vec<Test>,
}

impl RepoConfig {
    pub fn new(org: &str, repo: &str, branch: &str) -> Self {
        RepoConfig { org: org.into(), repo: repo.into(), branch: branch.into(), ..Default::default() }
    }

    /// Returns the first identity field left blank, if any.
    pub fn missing_identity(&self) -> Option<&'static str> {
        [("org", &self.org), ("repo", &self.repo), ("branch", &self.branch)]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
    }

    /// Returns true when org, repo and branch are all present.
    pub fn is_identified(&self) -> bool {
        self.missing_identity().is_none()
    }

    /// Finds a test by name, ignoring case.
    pub fn find_test(&self, name: &str) -> Option<usize> {
        self.tests.iter().position(|test| test.name.to_lowercase() == name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identity() {
        assert_eq!(RepoConfig::default().missing_identity(), Some("org"));
        assert_eq!(RepoConfig::new("openshift", " ", "main").missing_identity(), Some("repo"));
        assert_eq!(RepoConfig::new("openshift", "example", "").missing_identity(), Some("branch"));
        assert!(RepoConfig::new("openshift", "example", "main").is_identified());
    }

    #[test]
    fn test_find_test_ignores_case() {
        let mut config = RepoConfig::new("openshift", "example", "main");
        config.tests.push(Test::unit("Unit", "make test-unit"));

        assert_eq!(config.find_test("unit"), Some(0));
        assert_eq!(config.find_test("e2e"), None);
    }

    #[test]
    fn test_deserialize_answers() {
        let config: RepoConfig = serde_json::from_str(
            r#"{
                "org": "openshift",
                "repo": "example",
                "branch": "main",
                "buildSettings": {"goVersion": "1.20", "release": {"type": "Nightly", "version": "4.14"}},
                "tests": [{"name": "unit", "type": "Unit", "testCommands": "make test-unit"}]
            }"#,
        )
        .unwrap();

        assert_eq!(config.org, "openshift");
        assert_eq!(config.build_settings.go_version.as_deref(), Some("1.20"));
        assert_eq!(config.build_settings.release.version.as_deref(), Some("4.14"));
        assert_eq!(config.tests.len(), 1);
        assert!(!config.build_settings.operator_config.is_enabled());
    }
}
