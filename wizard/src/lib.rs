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

pub mod action;
mod context;
pub mod errors;
pub mod messages;
pub mod path;
mod step;
pub mod steps;
mod wizard;

#[cfg(test)]
mod testing;

pub use context::Context;
pub use step::{Step, StepId, StepRecord};
pub use wizard::Wizard;
