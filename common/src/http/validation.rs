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

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::Document;
use crate::schema::UnknownVariant;

/// Which part of the configuration the service should validate.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationType {
    All,
    BaseImages,
    Tests,
    OperatorBundle,
    OperatorSubstitution,
}

impl ValidationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationType::All => "ALL",
            ValidationType::BaseImages => "BASE_IMAGES",
            ValidationType::Tests => "TESTS",
            ValidationType::OperatorBundle => "OPERATOR_BUNDLE",
            ValidationType::OperatorSubstitution => "OPERATOR_SUBSTITUTION",
        }
    }
}

impl Display for ValidationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "ALL" => Ok(ValidationType::All),
            "BASE_IMAGES" => Ok(ValidationType::BaseImages),
            "TESTS" => Ok(ValidationType::Tests),
            "OPERATOR_BUNDLE" => Ok(ValidationType::OperatorBundle),
            "OPERATOR_SUBSTITUTION" => Ok(ValidationType::OperatorSubstitution),
            _ => Err(UnknownVariant::new("validation type", s)),
        }
    }
}

/// The body of a `config-validations` call.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ValidationRequest {
    pub validation_type: ValidationType,
    /// The document under `config`, next to any per-validation fields.
    pub data: Map<String, Value>,
}

impl ValidationRequest {
    pub fn new(
        validation_type: ValidationType,
        document: &Document,
        extra: Map<String, Value>,
    ) -> serde_json::Result<Self> {
        let mut data = extra;
        data.insert("config".into(), serde_json::to_value(document)?);

        Ok(ValidationRequest { validation_type, data })
    }
}

/// The verdict of a validation call.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ValidationState {
    #[serde(default)]
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
    #[serde(default, rename = "errorMessage", alias = "message", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ValidationState {
    pub fn valid() -> Self {
        ValidationState { valid: true, ..Default::default() }
    }

    pub fn failed(message: &str) -> Self {
        ValidationState { valid: false, errors: None, error_message: Some(message.to_string()) }
    }

    pub fn error_message(&self) -> String {
        self.error_message.clone().unwrap_or_default()
    }

    /// The messages to show the user: every field-level error when the service
    /// reported any, otherwise the summary message.
    pub fn messages(&self) -> Vec<String> {
        match &self.errors {
            Some(errors) if !errors.is_empty() => errors.iter().map(|e| e.message.clone()).collect(),
            _ => vec![self.error_message()],
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_nests_config_under_data() {
        let mut extra = Map::new();
        extra.insert("substitution".into(), json!({"pullspec": "a", "with": "b"}));

        let request = ValidationRequest::new(ValidationType::OperatorSubstitution, &Document::default(), extra).unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["validation_type"], "OPERATOR_SUBSTITUTION");
        assert_eq!(value["data"]["substitution"]["pullspec"], "a");
        assert_eq!(value["data"]["config"]["release_type"], "");
    }

    #[test]
    fn test_state_accepts_message_alias() {
        let state: ValidationState = serde_json::from_str(r#"{"valid": false, "message": "bad", "errors": null}"#).unwrap();

        assert!(!state.valid);
        assert_eq!(state.messages(), vec!["bad".to_string()]);
    }

    #[test]
    fn test_state_prefers_field_errors() {
        let state: ValidationState = serde_json::from_str(
            r#"{"valid": false, "errors": [{"key": "tests", "field": "as", "message": "name is taken"}]}"#,
        )
        .unwrap();

        assert_eq!(state.messages(), vec!["name is taken".to_string()]);
    }

    #[test]
    fn test_validation_type_from_str() {
        assert_eq!("base-images".parse::<ValidationType>(), Ok(ValidationType::BaseImages));
        assert_eq!("TESTS".parse::<ValidationType>(), Ok(ValidationType::Tests));
        assert_eq!("images".parse::<ValidationType>(), Err(UnknownVariant::new("validation type", "images")));
    }
}
