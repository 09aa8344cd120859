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

pub mod build_config;
pub mod repo_info;
pub mod test_config;
pub mod verify;

pub use build_config::BuildConfigStep;
pub use repo_info::RepoInfoStep;
pub use test_config::TestConfigStep;
pub use verify::VerifyStep;

use rinit_common::http::ValidationType;
use serde_json::{Map, Value};
use tracing::debug;

use crate::action::{reduce, Action};
use crate::{Context, Step, StepId};

pub fn step(id: StepId) -> Box<dyn Step> {
    match id {
        StepId::RepoInfo => Box::new(RepoInfoStep),
        StepId::BuildConfig => Box::new(BuildConfigStep),
        StepId::TestConfig => Box::new(TestConfigStep),
        StepId::Verify => Box::new(VerifyStep),
    }
}

/// Applies an edit to a copy of the state, has the service validate the copy
/// and keeps it only when valid.
///
/// Returns whether the edit was kept; a rejection is recorded on the step.
pub(crate) async fn commit(
    ctx: &mut Context,
    action: Action,
    validation_type: ValidationType,
    extra: Map<String, Value>,
) -> bool {
    let mut candidate = ctx.config.clone();
    if let Err(err) = reduce(&mut candidate, action) {
        debug!("Rejected locally: {}", err);
        ctx.record.reject(err.to_string());
        return false;
    }

    let state = ctx.validate(validation_type, &candidate, extra).await;
    if !state.valid {
        ctx.record.fail(state.messages());
        return false;
    }

    ctx.config = candidate;
    ctx.record.error_messages.clear();
    true
}
