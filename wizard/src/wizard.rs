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

use tracing::{debug, info};

use crate::action::{reduce, Action};
use crate::errors::{Error, Result};
use crate::steps::step;
use crate::{path, Context, Step, StepId, StepRecord};

/// Walks the steps in order, only moving forward from a complete step.
pub struct Wizard {
    pub step: Box<dyn Step>,
    pub context: Context,
}

impl Wizard {
    /// Opens the wizard on its first step.
    pub async fn start(context: Context) -> Self {
        let mut wizard = Wizard { step: step(StepId::RepoInfo), context };
        wizard.transition(StepId::RepoInfo).await;
        wizard
    }

    pub fn current(&self) -> StepId {
        self.step.id()
    }

    pub fn record(&self) -> &StepRecord {
        &self.context.record
    }

    /// Re-evaluates the current step.
    pub async fn check(&mut self) {
        self.step.check(&mut self.context).await;
    }

    /// Applies an edit to the state, then re-evaluates the current step.
    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!("Applying {:?}", action);
        reduce(&mut self.context.config, action)?;
        self.check().await;
        Ok(())
    }

    /// Applies a `path=value` edit, see [`path::parse`].
    pub async fn set(&mut self, path: &str, value: Option<&str>) -> Result<()> {
        match path::parse(path, value)? {
            Some(action) => self.dispatch(action).await,
            None => Ok(()),
        }
    }

    /// Moves to the next step, staying on the last one.
    pub async fn next(&mut self) -> Result<StepId> {
        let current = self.current();
        if !self.context.record.complete {
            return Err(Error::StepIncomplete(current));
        }

        if let Some(next) = current.next() {
            self.transition(next).await;
        }
        Ok(self.current())
    }

    /// Moves to the previous step, staying on the first one.
    pub async fn back(&mut self) -> StepId {
        if let Some(previous) = self.current().previous() {
            self.transition(previous).await;
        }
        self.current()
    }

    async fn transition(&mut self, id: StepId) {
        info!("Entering the {} step", id);
        self.step = step(id);
        self.context.record = StepRecord::new(id);
        self.check().await;
    }
}
