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

/// Characters that make a scalar unsafe to emit unquoted in YAML.
const YAML_SPECIAL: &str = " `!@#$%^&*()_+-=[]{};':\"\\|,.<>/?~";

/// Returns the trimmed value, or an empty string when unset.
#[inline]
pub fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// Returns true when the value contains any YAML special character.
pub fn needs_quoting(value: &str) -> bool {
    value.chars().any(|c| YAML_SPECIAL.contains(c))
}

/// Trims the value and wraps it in single quotes when it needs quoting.
pub fn yaml_string(value: &str) -> String {
    let value = value.trim();
    if needs_quoting(value) {
        format!("'{}'", value)
    } else {
        value.to_string()
    }
}
