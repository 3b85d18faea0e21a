//! Blocking GitHub API client.
//!
//! All upstream calls go through this module so error mapping and request
//! headers live in one place. The client is built from an explicit `Config`
//! value; there is no process-global base URL or token.

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::config::Config;
use crate::error::{RepolensError, Result};

/// REST media type the compare and passthrough routes request.
const ACCEPT_REST: &str = "application/vnd.github.v3+json";

/// Media type for GraphQL requests.
const ACCEPT_GRAPHQL: &str = "application/vnd.github.v4+json";

/// Client for the GitHub REST and GraphQL APIs.
pub struct GithubClient {
    http: Client,
    api_base: String,
    token: Option<String>,
}

impl GithubClient {
    /// Build a client from resolved configuration.
    ///
    /// Every request carries the GitHub media type and a repolens
    /// User-Agent; the token, when configured, is attached per request
    /// because REST and GraphQL use different authorization schemes.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_REST));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("repolens/", env!("CARGO_PKG_VERSION"))),
        );

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| RepolensError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// GET an API path and return the body as untyped JSON.
    pub fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self.url(path);
        debug!("GET {url}");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }

        let response = request.send().map_err(transport_error)?;
        read_json(response)
    }

    /// GET an API path and deserialize the body into a typed shape.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        decode_body(self.get(path, query)?)
    }

    /// POST a GraphQL query to `/graphql` and return its `data` value.
    ///
    /// The API reports query-level failures in an `errors` array alongside
    /// HTTP 200; those surface as upstream failures too.
    pub fn graphql(&self, query: &str, variables: Value) -> Result<Value> {
        let url = self.url("/graphql");
        debug!("POST {url}");

        let mut request = self
            .http
            .post(&url)
            .header(ACCEPT, ACCEPT_GRAPHQL)
            .json(&json!({ "query": query, "variables": variables }));
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("bearer {token}"));
        }

        let response = request.send().map_err(transport_error)?;
        let body = read_json(response)?;

        if let Some(errors) = body.get("errors").filter(|e| !e.is_null()) {
            return Err(RepolensError::Upstream {
                status: 200,
                message: format!("GraphQL error: {errors}"),
            });
        }

        Ok(body.get("data").cloned().unwrap_or(Value::Null))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

/// Deserialize an upstream JSON body, reporting shape mismatches as
/// upstream failures (the request itself succeeded).
pub(crate) fn decode_body<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| RepolensError::Upstream {
        status: 200,
        message: format!("unexpected response shape: {e}"),
    })
}

fn transport_error(err: reqwest::Error) -> RepolensError {
    RepolensError::Network(err.to_string())
}

/// Read a response body as JSON, mapping non-success statuses onto the
/// repolens failure kinds.
fn read_json(response: Response) -> Result<Value> {
    let status = response.status();
    let quota_exhausted = rate_limit_exhausted(response.headers());
    debug!("-> HTTP {status}");

    let text = response.text().map_err(transport_error)?;

    if status.is_success() {
        return serde_json::from_str(&text).map_err(|e| RepolensError::Upstream {
            status: status.as_u16(),
            message: format!("invalid JSON in response body: {e}"),
        });
    }

    Err(classify_failure(
        status,
        quota_exhausted,
        error_message(&text),
    ))
}

/// True when the response advertises an exhausted rate-limit quota.
fn rate_limit_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

/// Map a non-success status onto the matching error variant.
///
/// 404 means the resource does not exist. GitHub signals rate limiting as
/// 429, or as 403 with the remaining-quota header at zero; other 403s are
/// ordinary upstream rejections (missing scopes, forbidden resources).
fn classify_failure(status: StatusCode, quota_exhausted: bool, message: String) -> RepolensError {
    if status == StatusCode::NOT_FOUND {
        RepolensError::NotFound(message)
    } else if status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && quota_exhausted)
    {
        RepolensError::RateLimited(message)
    } else {
        RepolensError::Upstream {
            status: status.as_u16(),
            message,
        }
    }
}

/// Pull the human-readable `message` field out of an error body, falling
/// back to a generic label when the body is not the usual shape.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| "GitHub API error".to_string())
}
