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
use rinit_common::schema::{BaseImage, PullspecSubstitution};
use serde_json::{json, Map};
use tracing::info;

use super::commit;
use crate::action::{Action, BuildEdit, OperatorEdit};
use crate::messages::BUILD_INCOMPLETE;
use crate::{Context, Step, StepId};

/// Build settings, base images and the operator bundle.
pub struct BuildConfigStep;

#[async_trait]
impl Step for BuildConfigStep {
    fn id(&self) -> StepId {
        StepId::BuildConfig
    }

    async fn check(&self, ctx: &mut Context) {
        if ctx.config.build_settings.is_complete() {
            ctx.record.pass();
        } else {
            ctx.record.fail([BUILD_INCOMPLETE]);
        }
    }
}

/// Adds a base image once the service accepts it.
pub async fn add_base_image(ctx: &mut Context, image: BaseImage) -> bool {
    let name = image.name.clone();
    let added = commit(ctx, Action::Build(BuildEdit::AddBaseImage(image)), ValidationType::BaseImages, Map::new()).await;
    if added {
        info!("Added base image {}", name);
        BuildConfigStep.check(ctx).await;
    }
    added
}

/// Adds a pullspec substitution to the operator bundle once the service accepts it.
pub async fn add_substitution(ctx: &mut Context, substitution: PullspecSubstitution) -> bool {
    let mut extra = Map::new();
    extra.insert(
        "substitution".to_string(),
        json!({ "pullspec": substitution.pullspec, "with": substitution.with }),
    );

    let pullspec = substitution.pullspec.clone();
    let action = Action::Operator(OperatorEdit::AddSubstitution(substitution));
    let added = commit(ctx, action, ValidationType::OperatorSubstitution, extra).await;
    if added {
        info!("Added substitution for {}", pullspec);
        BuildConfigStep.check(ctx).await;
    }
    added
}
