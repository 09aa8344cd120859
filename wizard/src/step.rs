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

use std::fmt::{Display, Formatter};

use async_trait::async_trait;

use crate::Context;

/// The wizard steps, in the order they are visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepId {
    RepoInfo,
    BuildConfig,
    TestConfig,
    Verify,
}

impl StepId {
    pub const ALL: [StepId; 4] = [StepId::RepoInfo, StepId::BuildConfig, StepId::TestConfig, StepId::Verify];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::RepoInfo => "repository",
            StepId::BuildConfig => "build",
            StepId::TestConfig => "tests",
            StepId::Verify => "verify",
        }
    }

    pub fn next(&self) -> Option<StepId> {
        match self {
            StepId::RepoInfo => Some(StepId::BuildConfig),
            StepId::BuildConfig => Some(StepId::TestConfig),
            StepId::TestConfig => Some(StepId::Verify),
            StepId::Verify => None,
        }
    }

    pub fn previous(&self) -> Option<StepId> {
        match self {
            StepId::RepoInfo => None,
            StepId::BuildConfig => Some(StepId::RepoInfo),
            StepId::TestConfig => Some(StepId::BuildConfig),
            StepId::Verify => Some(StepId::TestConfig),
        }
    }
}

impl Display for StepId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the current step stands: whether it may be left, and why not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRecord {
    pub step: StepId,
    pub complete: bool,
    pub error_messages: Vec<String>,
}

impl StepRecord {
    pub fn new(step: StepId) -> Self {
        StepRecord { step, complete: false, error_messages: vec![] }
    }

    /// Marks the step complete and clears its messages.
    pub fn pass(&mut self) {
        self.complete = true;
        self.error_messages.clear();
    }

    /// Marks the step incomplete with the given messages.
    pub fn fail<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.complete = false;
        self.error_messages = messages.into_iter().map(Into::into).collect();
    }

    /// Records messages from a rejected edit without changing completion.
    pub fn reject<S: Into<String>>(&mut self, message: S) {
        self.error_messages = vec![message.into()];
    }
}

/// A page of the wizard.
#[async_trait]
pub trait Step: Send + Sync {
    fn id(&self) -> StepId;

    /// Re-evaluates the step against the current state and updates the record.
    async fn check(&self, ctx: &mut Context);
}
