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

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use super::errors::{HTTPError, Result};
use super::validation::{ValidationRequest, ValidationState, ValidationType};
use super::Backend;
use crate::config::Credentials;
use crate::document::Document;

const ACCESS_TOKEN_HEADER: &str = "access_token";
const GITHUB_USER_HEADER: &str = "github_user";

/// HTTP client for the configuration service rooted at `base`, e.g. `http://localhost:8080/api`.
#[derive(Clone, Debug)]
pub struct Client {
    base: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base: Url) -> Self {
        Client { base, http: reqwest::Client::new() }
    }

    pub fn parse(base: &str) -> Result<Self> {
        Ok(Client::new(Url::parse(base).map_err(HTTPError::InvalidEndpoint)?))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}/{}", self.base.as_str().trim_end_matches('/'), path);
        let mut url = Url::parse(&raw).map_err(HTTPError::InvalidEndpoint)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }
}

#[async_trait]
impl Backend for Client {
    async fn validate(
        &self,
        validation_type: ValidationType,
        document: &Document,
        extra: Map<String, Value>,
    ) -> Result<ValidationState> {
        let url = self.endpoint("config-validations", &[])?;
        let request = ValidationRequest::new(validation_type, document, extra).map_err(HTTPError::EncodeFailed)?;
        debug!("Validating {} against {}", validation_type, url);

        // The verdict is in the body whatever the status is.
        let response = self.http.post(url).json(&request).send().await.map_err(HTTPError::RequestFailed)?;
        response.json::<ValidationState>().await.map_err(HTTPError::DecodeFailed)
    }

    async fn convert(&self, document: &Document) -> Result<String> {
        let url = self.endpoint("configs", &[("conversionOnly", "true")])?;
        debug!("Converting {}/{} via {}", document.org, document.repo, url);

        let response = self.http.post(url).json(document).send().await.map_err(HTTPError::RequestFailed)?;
        if !response.status().is_success() {
            return Err(HTTPError::UnexpectedStatus(response.status().as_u16()));
        }

        response.text().await.map_err(HTTPError::DecodeFailed)
    }

    async fn generate(&self, document: &Document, credentials: &Credentials, pull_request: bool) -> Result<String> {
        let generate_pr = pull_request.to_string();
        let url = self.endpoint("configs", &[("generatePR", generate_pr.as_str())])?;
        debug!("Generating {}/{} via {}", document.org, document.repo, url);

        let mut request = self.http.post(url).header(ACCEPT, "application/json").json(document);
        if let Some(token) = &credentials.access_token {
            request = request.header(ACCESS_TOKEN_HEADER, token);
        }
        if let Some(user) = &credentials.github_user {
            request = request.header(GITHUB_USER_HEADER, user);
        }

        let response = request.send().await.map_err(HTTPError::RequestFailed)?;
        if response.status() != StatusCode::OK {
            return Err(HTTPError::UnexpectedStatus(response.status().as_u16()));
        }

        response.text().await.map_err(HTTPError::DecodeFailed)
    }

    async fn exists(&self, org: &str, repo: &str) -> Result<bool> {
        let url = self.endpoint("configs", &[("org", org), ("repo", repo)])?;
        debug!("Looking up existing configuration via {}", url);

        let response = self.http.get(url).send().await.map_err(HTTPError::RequestFailed)?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            StatusCode::OK => Ok(true),
            status => Err(HTTPError::UnexpectedStatus(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::TcpListener;

    use axum::extract::Query;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;

    async fn validations(Json(body): Json<Value>) -> Response {
        match body["data"]["config"]["org"].as_str() {
            Some("openshift") => Json(json!({"valid": true})).into_response(),
            Some("garbled") => (StatusCode::INTERNAL_SERVER_ERROR, "oops").into_response(),
            _ => Json(json!({
                "valid": false,
                "message": "",
                "errors": [{"key": "org", "field": "org", "message": "unknown organization"}]
            }))
            .into_response(),
        }
    }

    async fn lookup(Query(params): Query<HashMap<String, String>>) -> StatusCode {
        match params.get("repo").map(String::as_str) {
            Some("existing") => StatusCode::OK,
            Some("broken") => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::NOT_FOUND,
        }
    }

    async fn configs(
        Query(params): Query<HashMap<String, String>>,
        headers: HeaderMap,
        Json(document): Json<Document>,
    ) -> Response {
        if params.get("conversionOnly").map(String::as_str) == Some("true") {
            if document.org == "broken" {
                return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
            }
            return format!("zz_generated_metadata:\n  org: {}\n", document.org).into_response();
        }

        let token = headers.get(ACCESS_TOKEN_HEADER).and_then(|v| v.to_str().ok());
        let user = headers.get(GITHUB_USER_HEADER).and_then(|v| v.to_str().ok());
        match (token, user) {
            (Some("secret"), Some("octocat")) => {
                let pr = params.get("generatePR").cloned().unwrap_or_default();
                format!("{}/{} pr={}", document.org, document.repo, pr).into_response()
            }
            _ => StatusCode::UNAUTHORIZED.into_response(),
        }
    }

    fn serve() -> Client {
        let router = Router::new()
            .route("/api/config-validations", post(validations))
            .route("/api/configs", get(lookup).post(configs));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::Server::from_tcp(listener).unwrap().serve(router.into_make_service()).await.unwrap();
        });

        Client::parse(&format!("http://{}/api/", addr)).unwrap()
    }

    fn document(org: &str) -> Document {
        Document { org: org.into(), repo: "example".into(), branch: "main".into(), ..Default::default() }
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = Client::parse("http://localhost:8080/api").unwrap();
        let url = client.endpoint("configs", &[("org", "openshift"), ("repo", "my repo")]).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/api/configs?org=openshift&repo=my+repo");
    }

    #[tokio::test]
    async fn test_validate() {
        let client = serve();

        let state = client.validate(ValidationType::All, &document("openshift"), Map::new()).await.unwrap();
        assert!(state.valid);

        let state = client.validate(ValidationType::All, &document("nobody"), Map::new()).await.unwrap();
        assert!(!state.valid);
        assert_eq!(state.messages(), vec!["unknown organization".to_string()]);
    }

    #[tokio::test]
    async fn test_convert() {
        let client = serve();
        let rendered = client.convert(&document("openshift")).await.unwrap();

        assert_eq!(rendered, "zz_generated_metadata:\n  org: openshift\n");

        let err = client.convert(&document("broken")).await.unwrap_err();
        assert!(matches!(err, HTTPError::UnexpectedStatus(500)));
    }

    #[tokio::test]
    async fn test_validate_malformed_verdict() {
        let client = serve();

        let err = client.validate(ValidationType::All, &document("garbled"), Map::new()).await.unwrap_err();
        assert!(matches!(err, HTTPError::DecodeFailed(_)));
    }

    #[tokio::test]
    async fn test_generate_forwards_identity() {
        let client = serve();
        let credentials = Credentials::new(Some("secret".into()), Some("octocat".into()));

        let id = client.generate(&document("openshift"), &credentials, true).await.unwrap();
        assert_eq!(id, "openshift/example pr=true");

        let err = client.generate(&document("openshift"), &Credentials::default(), false).await.unwrap_err();
        assert!(matches!(err, HTTPError::UnexpectedStatus(401)));
    }

    #[tokio::test]
    async fn test_exists() {
        let client = serve();

        assert!(client.exists("openshift", "existing").await.unwrap());
        assert!(!client.exists("openshift", "example").await.unwrap());
        assert!(matches!(client.exists("openshift", "broken").await, Err(HTTPError::UnexpectedStatus(500))));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let client = Client::parse(&format!("http://{}/api", addr)).unwrap();

        let err = client.convert(&document("openshift")).await.unwrap_err();
        assert!(matches!(err, HTTPError::RequestFailed(_)));
    }
}
