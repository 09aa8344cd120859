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
use tracing::{debug, error, info};

use crate::messages::{CONFIG_EXISTS, LOOKUP_FAILED};
use crate::{Context, Step, StepId};

pub const DEFAULT_BRANCH: &str = "master";

/// Names the repository, which must not have a configuration yet.
pub struct RepoInfoStep;

#[async_trait]
impl Step for RepoInfoStep {
    fn id(&self) -> StepId {
        StepId::RepoInfo
    }

    async fn check(&self, ctx: &mut Context) {
        let config = &mut ctx.config;
        if config.branch.trim().is_empty() && !config.org.trim().is_empty() && !config.repo.trim().is_empty() {
            debug!("No branch given, using {}", DEFAULT_BRANCH);
            config.branch = DEFAULT_BRANCH.to_string();
        }

        if !ctx.config.is_identified() {
            ctx.record.fail(Vec::<String>::new());
            return;
        }

        let (org, repo) = (ctx.config.org.trim(), ctx.config.repo.trim());
        match ctx.backend.exists(org, repo).await {
            Ok(false) => {
                info!("No configuration yet for {}/{}", org, repo);
                ctx.record.pass();
            }
            Ok(true) => ctx.record.fail([CONFIG_EXISTS]),
            Err(err) => {
                error!("Failed to look up {}/{}: {}", org, repo, err);
                ctx.record.fail([LOOKUP_FAILED]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rinit_common::schema::RepoConfig;

    use super::*;
    use crate::testing::{context, FakeBackend};

    async fn checked(backend: FakeBackend, config: RepoConfig) -> Context {
        let mut ctx = context(&Arc::new(backend), config);
        RepoInfoStep.check(&mut ctx).await;
        ctx
    }

    #[tokio::test]
    async fn test_new_repository() {
        let ctx = checked(FakeBackend::default(), RepoConfig::new("openshift", "example", "main")).await;

        assert!(ctx.record.complete);
        assert!(ctx.record.error_messages.is_empty());
    }

    #[tokio::test]
    async fn test_existing_configuration() {
        let backend = FakeBackend { existing: vec![("openshift".into(), "example".into())], ..Default::default() };
        let ctx = checked(backend, RepoConfig::new("openshift", "example", "main")).await;

        assert!(!ctx.record.complete);
        assert_eq!(ctx.record.error_messages, vec![CONFIG_EXISTS]);
    }

    #[tokio::test]
    async fn test_lookup_failure() {
        let backend = FakeBackend { offline: true, ..Default::default() };
        let ctx = checked(backend, RepoConfig::new("openshift", "example", "main")).await;

        assert!(!ctx.record.complete);
        assert_eq!(ctx.record.error_messages, vec![LOOKUP_FAILED]);
    }

    #[tokio::test]
    async fn test_branch_defaults_to_master() {
        let ctx = checked(FakeBackend::default(), RepoConfig::new("openshift", "example", " ")).await;

        assert_eq!(ctx.config.branch, DEFAULT_BRANCH);
        assert!(ctx.record.complete);
    }

    #[tokio::test]
    async fn test_missing_identity_skips_lookup() {
        let backend = FakeBackend { offline: true, ..Default::default() };
        let ctx = checked(backend, RepoConfig::new("openshift", "", "")).await;

        assert!(!ctx.record.complete);
        assert!(ctx.record.error_messages.is_empty());
        assert_eq!(ctx.config.branch, "");
    }
}
