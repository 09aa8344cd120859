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

mod client;
pub mod errors;
mod validation;

pub use client::Client;
pub use errors::{HTTPError, Result};
pub use validation::{ValidationError, ValidationRequest, ValidationState, ValidationType};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::Credentials;
use crate::document::Document;

/// The configuration service the wizard talks to.
///
/// Every call is a single request and response: no retries, no timeouts.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Validates the document, `extra` is merged next to it under `data`.
    async fn validate(
        &self,
        validation_type: ValidationType,
        document: &Document,
        extra: Map<String, Value>,
    ) -> Result<ValidationState>;

    /// Renders the document as the pipeline definition it would generate.
    async fn convert(&self, document: &Document) -> Result<String>;

    /// Generates the configuration and returns the identifier of what was created.
    async fn generate(&self, document: &Document, credentials: &Credentials, pull_request: bool) -> Result<String>;

    /// Returns true when a configuration already exists for the org and repo.
    async fn exists(&self, org: &str, repo: &str) -> Result<bool>;
}
