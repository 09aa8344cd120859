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

use std::collections::BTreeMap;

use rinit_common::document::{CustomTest, UnitTest};
use rinit_common::schema::{CloudProvider, OperatorTestConfig, Test, TestType};

use crate::utils::{trimmed, yaml_string};

const DEFAULT_OPERATOR_WORKFLOW: &str = "optional-operators-ci-aws";

/// Unit tests, name and command passed through untouched.
pub fn unit_tests(tests: &[Test]) -> Vec<UnitTest> {
    tests
        .iter()
        .filter(|test| test.kind == TestType::Unit)
        .map(|test| UnitTest { name: test.name.clone(), command: test.test_commands.clone() })
        .collect()
}

/// End-to-end and operator tests, in their original order.
pub fn custom_tests(tests: &[Test]) -> Vec<CustomTest> {
    tests
        .iter()
        .filter_map(|test| match test.kind {
            TestType::Unit => None,
            TestType::E2e => Some(e2e(test)),
            TestType::Operator => Some(operator(test)),
        })
        .collect()
}

fn e2e(test: &Test) -> CustomTest {
    CustomTest {
        name: test.name.trim().to_string(),
        command: trimmed(test.test_commands.as_deref()),
        profile: profile(test.cloud_provider.as_ref()).to_string(),
        cli: test.requires_cli,
        ..Default::default()
    }
}

fn operator(test: &Test) -> CustomTest {
    let config = test.operator_config.as_ref();
    CustomTest {
        workflow: Some(workflow(test.cloud_provider.as_ref()).to_string()),
        environment: Some(config.map(environment).unwrap_or_default()),
        dependencies: Some(config.map(dependencies).unwrap_or_default()),
        ..e2e(test)
    }
}

/// The cluster profile slug for the provider, empty when unset or unrecognized.
pub fn profile(provider: Option<&CloudProvider>) -> &'static str {
    match provider {
        Some(CloudProvider::Aws) => "aws",
        Some(CloudProvider::Azure) => "azure",
        Some(CloudProvider::Gcp) => "gcp",
        Some(CloudProvider::Other(_)) | None => "",
    }
}

/// The optional-operators workflow for the provider, AWS when unset or unrecognized.
pub fn workflow(provider: Option<&CloudProvider>) -> &'static str {
    match provider {
        Some(CloudProvider::Azure) => "optional-operators-ci-azure",
        Some(CloudProvider::Gcp) => "optional-operators-ci-gcp",
        Some(CloudProvider::Aws) | Some(CloudProvider::Other(_)) | None => DEFAULT_OPERATOR_WORKFLOW,
    }
}

/// Workflow parameters; a field left unset is omitted, an empty one is kept.
pub fn environment(config: &OperatorTestConfig) -> BTreeMap<String, String> {
    [
        ("OO_CHANNEL", &config.channel),
        ("OO_PACKAGE", &config.package),
        ("OO_INSTALL_NAMESPACE", &config.install_namespace),
        ("OO_TARGET_NAMESPACES", &config.target_namespaces),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.as_deref().map(|v| (key.to_string(), yaml_string(v))))
    .collect()
}

pub fn dependencies(config: &OperatorTestConfig) -> BTreeMap<String, String> {
    config.bundle_name.as_deref().map(|name| ("OO_INDEX".to_string(), yaml_string(name))).into_iter().collect()
}
