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

use async_trait::async_trait;
use rinit_common::http::ValidationType;
use rinit_common::schema::Test;
use serde_json::Map;
use tracing::info;

use super::commit;
use crate::action::{Action, TestEdit};
use crate::messages::NO_TESTS;
use crate::{Context, Step, StepId};

pub struct TestConfigStep;

#[async_trait]
impl Step for TestConfigStep {
    fn id(&self) -> StepId {
        StepId::TestConfig
    }

    async fn check(&self, ctx: &mut Context) {
        if ctx.config.tests.is_empty() {
            ctx.record.fail([NO_TESTS]);
        } else {
            ctx.record.pass();
        }
    }
}

pub async fn add_test(ctx: &mut Context, test: Test) -> bool {
    let name = test.name.clone();
    save(ctx, &name, Action::Tests(TestEdit::Add(test))).await
}

/// Replaces the test currently named `name`, keeping its position.
pub async fn update_test(ctx: &mut Context, name: &str, test: Test) -> bool {
    let Some(index) = ctx.config.find_test(name) else {
        ctx.record.reject(format!("No test named {}", name));
        return false;
    };
    save(ctx, name, Action::Tests(TestEdit::Replace(index, test))).await
}

async fn save(ctx: &mut Context, name: &str, action: Action) -> bool {
    let saved = commit(ctx, action, ValidationType::Tests, Map::new()).await;
    if saved {
        info!("Saved test {}", name);
        TestConfigStep.check(ctx).await;
    }
    saved
}
