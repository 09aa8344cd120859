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

/// The caller identity forwarded to the configuration service when generating.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Credentials {
    /// The GitHub access token obtained by the login flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// The GitHub user the pull request will be opened for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_user: Option<String>,
}

impl Credentials {
    pub fn new(access_token: Option<String>, github_user: Option<String>) -> Self {
        Self { access_token, github_user }
    }

    /// Returns true when the service could attribute a pull request to someone.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().map_or(false, |token| !token.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_authenticated() {
        assert!(!Credentials::default().is_authenticated());
        assert!(!Credentials::new(Some("  ".into()), None).is_authenticated());
        assert!(Credentials::new(Some("token".into()), Some("octocat".into())).is_authenticated());
    }
}
