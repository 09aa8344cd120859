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

use std::sync::Arc;

use rinit_common::config::Credentials;
use rinit_common::document::Document;
use rinit_common::http::{Backend, ValidationState, ValidationType};
use rinit_common::schema::RepoConfig;
use serde_json::{Map, Value};
use tracing::warn;

use crate::messages::SERVICE_UNAVAILABLE;
use crate::{StepId, StepRecord};

/// Represents the state shared among the wizard steps.
pub struct Context {
    pub config: RepoConfig,
    pub record: StepRecord,
    pub backend: Arc<dyn Backend>,
    pub credentials: Credentials,
}

impl Context {
    pub fn new(backend: Arc<dyn Backend>, credentials: Credentials) -> Self {
        Context { config: RepoConfig::default(), record: StepRecord::new(StepId::RepoInfo), backend, credentials }
    }

    pub fn with_config(mut self, config: RepoConfig) -> Self {
        self.config = config;
        self
    }

    /// The service document for the current state.
    pub fn document(&self) -> Document {
        rinit_marshal::marshal(&self.config)
    }

    /// Validates a candidate state, a transport failure counts as invalid.
    pub async fn validate(
        &self,
        validation_type: ValidationType,
        candidate: &RepoConfig,
        extra: Map<String, Value>,
    ) -> ValidationState {
        let document = rinit_marshal::marshal(candidate);
        match self.backend.validate(validation_type, &document, extra).await {
            Ok(state) => state,
            Err(err) => {
                warn!("Failed to validate {}: {}", validation_type, err);
                ValidationState::failed(SERVICE_UNAVAILABLE)
            }
        }
    }
}
