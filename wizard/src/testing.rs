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

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rinit_common::config::Credentials;
use rinit_common::document::Document;
use rinit_common::http::{Backend, HTTPError, Result, ValidationState, ValidationType};
use rinit_common::schema::RepoConfig;
use serde_json::{Map, Value};

use crate::Context;

/// An in-memory configuration service recording what it was asked.
#[derive(Default)]
pub struct FakeBackend {
    pub existing: Vec<(String, String)>,
    pub offline: bool,
    pub rejection: Option<ValidationState>,
    pub validations: Mutex<Vec<(ValidationType, Document, Map<String, Value>)>>,
    pub generated: Mutex<Vec<(Document, Credentials, bool)>>,
}

impl FakeBackend {
    pub fn validated(&self) -> Vec<ValidationType> {
        self.validations.lock().unwrap().iter().map(|(kind, _, _)| *kind).collect()
    }

    fn reachable(&self) -> Result<()> {
        if self.offline {
            Err(HTTPError::UnexpectedStatus(503))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn validate(
        &self,
        validation_type: ValidationType,
        document: &Document,
        extra: Map<String, Value>,
    ) -> Result<ValidationState> {
        self.reachable()?;
        self.validations.lock().unwrap().push((validation_type, document.clone(), extra));
        Ok(self.rejection.clone().unwrap_or_else(ValidationState::valid))
    }

    async fn convert(&self, document: &Document) -> Result<String> {
        self.reachable()?;
        Ok(format!("zz_generated_metadata:\n  org: {}\n  repo: {}\n", document.org, document.repo))
    }

    async fn generate(&self, document: &Document, credentials: &Credentials, pull_request: bool) -> Result<String> {
        self.reachable()?;
        self.generated.lock().unwrap().push((document.clone(), credentials.clone(), pull_request));
        Ok(format!("{}-{}-{}", document.org, document.repo, document.branch))
    }

    async fn exists(&self, org: &str, repo: &str) -> Result<bool> {
        self.reachable()?;
        Ok(self.existing.iter().any(|(o, r)| o == org && r == repo))
    }
}

pub fn context(backend: &Arc<FakeBackend>, config: RepoConfig) -> Context {
    Context::new(backend.clone(), Credentials::default()).with_config(config)
}
