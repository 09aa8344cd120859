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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HTTPError {
    #[error("InvalidEndpoint: {0}")]
    InvalidEndpoint(#[source] url::ParseError),

    #[error("EncodeFailed: {0}")]
    EncodeFailed(#[source] serde_json::Error),

    #[error("RequestFailed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("UnexpectedStatus: {0}")]
    UnexpectedStatus(u16),

    #[error("DecodeFailed: {0}")]
    DecodeFailed(#[source] reqwest::Error),
}

pub type Result<T, E = HTTPError> = std::result::Result<T, E>;
