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

use rinit_common::document::{OperatorBundle, Substitution};
use rinit_common::schema::{OperatorBuild, OperatorConfig, PullspecSubstitution};

use crate::utils::trimmed;

pub const DEFAULT_BUNDLE_NAME: &str = "ci-index";

/// The operator bundle section, `None` unless an operator bundle is built.
pub fn bundle(build: &OperatorBuild) -> Option<OperatorBundle> {
    match build {
        OperatorBuild::Enabled(config) => Some(enabled(config)),
        OperatorBuild::Disabled => None,
    }
}

fn enabled(config: &OperatorConfig) -> OperatorBundle {
    let name = trimmed(config.name.as_deref());
    OperatorBundle {
        name: if name.is_empty() { DEFAULT_BUNDLE_NAME.to_string() } else { name },
        dockerfile_path: trimmed(config.dockerfile_path.as_deref()),
        context_dir: trimmed(config.context_dir.as_deref()),
        base_index: trimmed(config.base_index.as_deref()),
        update_graph: config.update_graph.map(|graph| graph.to_string()).unwrap_or_default(),
        substitutions: substitutions(&config.substitutions),
    }
}

pub fn substitutions(substitutions: &[PullspecSubstitution]) -> Vec<Substitution> {
    substitutions
        .iter()
        .map(|s| Substitution { pullspec: s.pullspec.trim().to_string(), with: s.with.trim().to_string() })
        .collect()
}

#[cfg(test)]
mod tests {
    use rinit_common::schema::UpdateGraph;

    use super::*;

    fn named(name: Option<&str>) -> OperatorBuild {
        OperatorBuild::Enabled(OperatorConfig { name: name.map(String::from), ..Default::default() })
    }

    #[test]
    fn test_disabled_is_none() {
        assert_eq!(bundle(&OperatorBuild::Disabled), None);
    }

    #[test]
    fn test_default_name() {
        assert_eq!(bundle(&named(None)).unwrap().name, "ci-index");
        assert_eq!(bundle(&named(Some(""))).unwrap().name, "ci-index");
        assert_eq!(bundle(&named(Some("   "))).unwrap().name, "ci-index");
        assert_eq!(bundle(&named(Some("  my-bundle  "))).unwrap().name, "my-bundle");
    }

    #[test]
    fn test_enabled_fields() {
        let build = OperatorBuild::Enabled(OperatorConfig {
            name: None,
            dockerfile_path: Some(" bundle.Dockerfile ".into()),
            context_dir: None,
            base_index: Some("ocp-index".into()),
            update_graph: Some(UpdateGraph::SemverSkipPatch),
            substitutions: vec![
                PullspecSubstitution::new(" quay.io/org/operator:latest ", " pipeline:operator "),
                PullspecSubstitution::new("quay.io/org/other:1", "my-image:latest"),
            ],
        });

        let bundle = bundle(&build).unwrap();
        assert_eq!(bundle.dockerfile_path, "bundle.Dockerfile");
        assert_eq!(bundle.context_dir, "");
        assert_eq!(bundle.base_index, "ocp-index");
        assert_eq!(bundle.update_graph, "semver-skippatch");
        assert_eq!(
            bundle.substitutions,
            vec![
                Substitution { pullspec: "quay.io/org/operator:latest".into(), with: "pipeline:operator".into() },
                Substitution { pullspec: "quay.io/org/other:1".into(), with: "my-image:latest".into() },
            ]
        );
    }

    #[test]
    fn test_substitutions_are_trimmed_not_quoted() {
        let converted = substitutions(&[PullspecSubstitution::new("quay.io/org/op:1", "  my image ")]);

        assert_eq!(converted[0].with, "my image");
    }

    #[test]
    fn test_unset_update_graph_is_empty() {
        assert_eq!(bundle(&named(None)).unwrap().update_graph, "");
    }
}
