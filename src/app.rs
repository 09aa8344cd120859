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

use anyhow::anyhow;
use rinit_common::http::{Backend, Client};
use rinit_common::schema::RepoConfig;
use rinit_marshal::{ensure_submittable, marshal};
use rinit_wizard::steps::{build_config, test_config, verify};
use rinit_wizard::{Context as Session, Wizard};
use serde_json::Map;
use tracing::{info, warn};

use crate::answers;
use crate::config::{Command, Config};

/// The core type through which commands reach the configuration and the service.
pub struct Context {
    pub config: Config,
    pub backend: Arc<dyn Backend>,
}

impl Context {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::parse(&config.api_url)?;
        info!("Using the configuration service at {}", client.base());

        Ok(Context { config, backend: Arc::new(client) })
    }
}

/// Runs the selected command and returns what it prints.
pub async fn run(ctx: &Context) -> anyhow::Result<String> {
    match &ctx.config.command {
        Command::Marshal(args) => {
            let config = answers::load(args)?;
            Ok(serde_json::to_string_pretty(&marshal(&config))?)
        }
        Command::Validate { answers: args, validation_type } => {
            let document = marshal(&answers::load(args)?);
            let state = ctx.backend.validate(*validation_type, &document, Map::new()).await?;
            if !state.valid {
                warn!("The configuration service rejected the {} validation", validation_type);
            }
            Ok(serde_json::to_string_pretty(&state)?)
        }
        Command::Preview(args) => {
            let document = marshal(&answers::load(args)?);
            Ok(ctx.backend.convert(&document).await?)
        }
        Command::Generate { answers: args, pull_request } => {
            let config = answers::load(args)?;
            ensure_submittable(&config)?;

            let credentials = ctx.config.credentials();
            if !credentials.is_authenticated() {
                warn!("No access token given, the configuration service may refuse to generate");
            }
            Ok(ctx.backend.generate(&marshal(&config), &credentials, *pull_request).await?)
        }
        Command::Wizard { answers: args, pull_request, dry_run } => {
            replay(ctx, answers::load(args)?, *pull_request, *dry_run).await
        }
    }
}

/// Feeds the answers through the wizard one step at a time, adding every base
/// image, substitution and test the way the wizard would, then previews and
/// generates.
async fn replay(ctx: &Context, answers: RepoConfig, pull_request: bool, dry_run: bool) -> anyhow::Result<String> {
    let mut seed = answers;
    let images = std::mem::take(&mut seed.build_settings.base_images);
    let substitutions = seed
        .build_settings
        .operator_config
        .config_mut()
        .map(|operator| std::mem::take(&mut operator.substitutions))
        .unwrap_or_default();
    let tests = std::mem::take(&mut seed.tests);

    let session = Session::new(ctx.backend.clone(), ctx.config.credentials()).with_config(seed);
    let mut wizard = Wizard::start(session).await;
    advance(&mut wizard).await?;

    for image in images {
        if !build_config::add_base_image(&mut wizard.context, image).await {
            return Err(rejected(&wizard));
        }
    }
    for substitution in substitutions {
        if !build_config::add_substitution(&mut wizard.context, substitution).await {
            return Err(rejected(&wizard));
        }
    }
    wizard.check().await;
    advance(&mut wizard).await?;

    for test in tests {
        if !test_config::add_test(&mut wizard.context, test).await {
            return Err(rejected(&wizard));
        }
    }
    advance(&mut wizard).await?;
    if !wizard.record().complete {
        return Err(rejected(&wizard));
    }

    let mut output = verify::preview(&mut wizard.context).await.ok_or_else(|| rejected(&wizard))?;
    if !dry_run {
        let id = verify::generate(&mut wizard.context, pull_request).await.ok_or_else(|| rejected(&wizard))?;
        output.push_str(&format!("\nGenerated {}\n", id));
    }

    Ok(output)
}

async fn advance(wizard: &mut Wizard) -> anyhow::Result<()> {
    if !wizard.record().complete {
        return Err(rejected(wizard));
    }
    wizard.next().await?;
    Ok(())
}

fn rejected(wizard: &Wizard) -> anyhow::Error {
    let messages = &wizard.record().error_messages;
    if messages.is_empty() {
        anyhow!("The {} step is not complete", wizard.current())
    } else {
        anyhow!("The {} step is not complete: {}", wizard.current(), messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use clap::Parser;
    use rinit_common::config::Credentials;
    use rinit_common::document::Document;
    use rinit_common::http::{Result, ValidationState, ValidationType};
    use serde_json::Value;

    use super::*;

    const ANSWERS: &str = r#"
org: openshift
repo: example
branch: main
buildSettings:
  goVersion: "1.20"
  buildCommands: make
  testBuildCommands: make test-bin
  baseImages:
    - name: base
      namespace: ocp
      tag: "4.14"
tests:
  - name: unit
    type: Unit
    testCommands: make test-unit
"#;

    #[derive(Default)]
    struct Service {
        existing: bool,
        validated: Mutex<Vec<ValidationType>>,
        generated: Mutex<Vec<(Credentials, bool)>>,
    }

    #[async_trait]
    impl Backend for Service {
        async fn validate(&self, kind: ValidationType, _: &Document, _: Map<String, Value>) -> Result<ValidationState> {
            self.validated.lock().unwrap().push(kind);
            Ok(ValidationState::valid())
        }

        async fn convert(&self, document: &Document) -> Result<String> {
            Ok(format!("build_root: {}\n", document.go_version.clone().unwrap_or_default()))
        }

        async fn generate(&self, _: &Document, credentials: &Credentials, pull_request: bool) -> Result<String> {
            self.generated.lock().unwrap().push((credentials.clone(), pull_request));
            Ok("openshift/example#42".into())
        }

        async fn exists(&self, _: &str, _: &str) -> Result<bool> {
            Ok(self.existing)
        }
    }

    fn answers_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn context(service: &Arc<Service>, args: &[&str]) -> Context {
        let config = Config::parse_from(["repo-init", "--access-token", "token"].iter().chain(args));
        Context { config, backend: service.clone() }
    }

    #[tokio::test]
    async fn test_marshal_prints_document() {
        let file = answers_file(ANSWERS);
        let path = file.path().to_str().unwrap();
        let service = Arc::new(Service::default());

        let output = run(&context(&service, &["marshal", "-f", path, "--set", "buildSettings.buildPromotes=true"]))
            .await
            .unwrap();
        let document: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(document["promotes"], true);
        assert_eq!(document["base_images"]["base"]["tag"], "4.14");
        assert_eq!(document["tests"][0]["as"], "unit");
        assert!(service.validated.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_validate_prints_state() {
        let file = answers_file(ANSWERS);
        let service = Arc::new(Service::default());
        let args = ["validate", "-f", file.path().to_str().unwrap(), "--type", "TESTS"];

        let output = run(&context(&service, &args)).await.unwrap();

        assert!(output.contains("\"valid\": true"));
        assert_eq!(*service.validated.lock().unwrap(), vec![ValidationType::Tests]);
    }

    #[tokio::test]
    async fn test_wizard_dry_run_stops_at_preview() {
        let file = answers_file(ANSWERS);
        let service = Arc::new(Service::default());
        let args = ["wizard", "-f", file.path().to_str().unwrap(), "--dry-run"];

        let output = run(&context(&service, &args)).await.unwrap();

        assert_eq!(output, "build_root: 1.20\n");
        assert_eq!(
            *service.validated.lock().unwrap(),
            vec![ValidationType::BaseImages, ValidationType::Tests, ValidationType::All]
        );
        assert!(service.generated.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wizard_generates() {
        let file = answers_file(ANSWERS);
        let service = Arc::new(Service::default());
        let args = ["wizard", "-f", file.path().to_str().unwrap(), "--pull-request"];

        let output = run(&context(&service, &args)).await.unwrap();

        assert!(output.ends_with("Generated openshift/example#42\n"));
        let generated = service.generated.lock().unwrap();
        assert_eq!(generated[0].0.access_token.as_deref(), Some("token"));
        assert!(generated[0].1);
    }

    #[tokio::test]
    async fn test_wizard_stops_on_existing_configuration() {
        let file = answers_file(ANSWERS);
        let service = Arc::new(Service { existing: true, ..Default::default() });
        let args = ["wizard", "-f", file.path().to_str().unwrap()];

        let err = run(&context(&service, &args)).await.unwrap_err();

        assert!(err.to_string().contains("already a configuration for that org and repo"));
        assert!(service.generated.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wizard_rejects_duplicate_base_images() {
        let duplicated = ANSWERS.replace(
            "      tag: \"4.14\"\n",
            "      tag: \"4.14\"\n    - name: BASE\n      namespace: OCP\n      tag: \"4.14\"\n",
        );
        let file = answers_file(&duplicated);
        let service = Arc::new(Service::default());
        let args = ["wizard", "-f", file.path().to_str().unwrap()];

        let err = run(&context(&service, &args)).await.unwrap_err();

        assert!(err.to_string().contains("That base image already exists"));
    }

    #[tokio::test]
    async fn test_generate_requires_release_version() {
        let file = answers_file(ANSWERS);
        let service = Arc::new(Service::default());
        let args = ["generate", "-f", file.path().to_str().unwrap(), "--set", "buildSettings.release.type=published"];

        assert!(run(&context(&service, &args)).await.is_err());
        assert!(service.generated.lock().unwrap().is_empty());
    }
}
