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

use std::path::PathBuf;

use rinit_common::config::Credentials;
use rinit_common::http::ValidationType;

/// The configuration parameters for the application.
///
/// These can either be passed on the command line, or pulled from environment variables.
/// For development convenience, these can also be read from a `.env` file in the working
/// directory where the application is started.
#[derive(clap::Parser, Debug)]
#[clap(name = "repo-init", version, about = "Create the CI configuration for a new repository")]
pub struct Config {
    /// The base URL of the configuration service API.
    #[clap(long, env = "REPO_INIT_API_URL", default_value = "http://localhost:8080/api")]
    pub api_url: String,

    /// The GitHub access token forwarded when generating.
    #[clap(long, env = "REPO_INIT_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// The GitHub user the pull request is opened for.
    #[clap(long, env = "REPO_INIT_GITHUB_USER")]
    pub github_user: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

impl Config {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.access_token.clone(), self.github_user.clone())
    }
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the document the configuration service would receive.
    Marshal(Answers),

    /// Run a single validation against the configuration service.
    Validate {
        #[clap(flatten)]
        answers: Answers,

        /// ALL, BASE_IMAGES, TESTS, OPERATOR_BUNDLE or OPERATOR_SUBSTITUTION.
        #[clap(long = "type", default_value = "ALL")]
        validation_type: ValidationType,
    },

    /// Print the pipeline definition the configuration would produce.
    Preview(Answers),

    /// Generate the configuration.
    Generate {
        #[clap(flatten)]
        answers: Answers,

        /// Open a pull request with the generated configuration.
        #[clap(long)]
        pull_request: bool,
    },

    /// Walk the answers through every wizard step, then generate.
    Wizard {
        #[clap(flatten)]
        answers: Answers,

        #[clap(long)]
        pull_request: bool,

        /// Stop after the preview.
        #[clap(long)]
        dry_run: bool,
    },
}

/// Where the wizard answers come from.
#[derive(clap::Args, Debug, Clone)]
pub struct Answers {
    /// A YAML or JSON answers file.
    #[clap(long, short)]
    pub file: PathBuf,

    /// Override a field, e.g. `--set buildSettings.goVersion=1.20`.
    #[clap(long = "set", value_name = "PATH=VALUE")]
    pub assignments: Vec<String>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_parse_wizard_command() {
        let config = Config::parse_from([
            "repo-init",
            "--api-url",
            "http://service/api",
            "--github-user",
            "octocat",
            "wizard",
            "--file",
            "answers.yaml",
            "--set",
            "branch=main",
            "--dry-run",
        ]);

        assert_eq!(config.api_url, "http://service/api");
        assert_eq!(config.credentials().github_user.as_deref(), Some("octocat"));
        match config.command {
            Command::Wizard { answers, pull_request, dry_run } => {
                assert_eq!(answers.file, PathBuf::from("answers.yaml"));
                assert_eq!(answers.assignments, vec!["branch=main"]);
                assert!(!pull_request);
                assert!(dry_run);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_validation_type() {
        let config = Config::parse_from(["repo-init", "validate", "-f", "a.json", "--type", "base-images"]);

        match config.command {
            Command::Validate { validation_type, .. } => assert_eq!(validation_type, ValidationType::BaseImages),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
