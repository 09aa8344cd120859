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
use rinit_marshal::ensure_submittable;
use serde_json::Map;
use tracing::{error, info};

use crate::messages::SERVICE_UNAVAILABLE;
use crate::{Context, Step, StepId};

/// Reviews the whole configuration before it is generated.
pub struct VerifyStep;

#[async_trait]
impl Step for VerifyStep {
    fn id(&self) -> StepId {
        StepId::Verify
    }

    async fn check(&self, ctx: &mut Context) {
        if let Err(err) = ensure_submittable(&ctx.config) {
            ctx.record.fail([err.to_string()]);
            return;
        }

        let state = ctx.validate(ValidationType::All, &ctx.config, Map::new()).await;
        if state.valid {
            ctx.record.pass();
        } else {
            ctx.record.fail(state.messages());
        }
    }
}

/// The pipeline definition the service would produce, `None` when it could not be rendered.
pub async fn preview(ctx: &mut Context) -> Option<String> {
    match ctx.backend.convert(&ctx.document()).await {
        Ok(rendered) => Some(rendered),
        Err(err) => {
            error!("Failed to render the configuration: {}", err);
            ctx.record.reject(SERVICE_UNAVAILABLE);
            None
        }
    }
}

/// Generates the configuration, optionally as a pull request.
///
/// Returns the identifier the service assigned, `None` on any failure.
pub async fn generate(ctx: &mut Context, pull_request: bool) -> Option<String> {
    if let Err(err) = ensure_submittable(&ctx.config) {
        ctx.record.fail([err.to_string()]);
        return None;
    }

    match ctx.backend.generate(&ctx.document(), &ctx.credentials, pull_request).await {
        Ok(id) => {
            info!("Generated the configuration for {}/{}: {}", ctx.config.org, ctx.config.repo, id);
            ctx.record.pass();
            Some(id)
        }
        Err(err) => {
            error!("Failed to generate the configuration: {}", err);
            ctx.record.fail([SERVICE_UNAVAILABLE]);
            None
        }
    }
}
