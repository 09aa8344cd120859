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

//! User-facing messages recorded on a step.

pub const SERVICE_UNAVAILABLE: &str = "An error occurred while contacting the configuration service.";

pub const CONFIG_EXISTS: &str = "It looks like there's already a configuration for that org and repo combination.";

pub const LOOKUP_FAILED: &str = "An error occurred while validating if this configuration already exists.";

pub const BUILD_INCOMPLETE: &str = "Please provide the Go version, the build commands and the test build commands.";

pub const NO_TESTS: &str = "Please add at least one test.";
