/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! HTTP transport layer for Garmin Connect requests

use crate::auth::{Session, USER_AGENT};
use crate::query::QueryParams;
use async_trait::async_trait;
use gc_core::{Config, Error, Result};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Longest body excerpt carried in errors and logs
const BODY_EXCERPT_LEN: usize = 500;

/// GET request relative to the service base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
  path: String,
  query: QueryParams,
}

impl ApiRequest {
  /// Request for `path` with the given query parameters
  pub fn new(path: impl Into<String>, query: QueryParams) -> Self {
    Self { path: path.into(), query }
  }

  /// Path component, starting with `/`
  pub fn path(&self) -> &str {
    &self.path
  }

  /// Query parameters in wire order
  pub fn query(&self) -> &QueryParams {
    &self.query
  }

  /// Path plus encoded query string, as it appears on the wire
  pub fn path_and_query(&self) -> String {
    if self.query.is_empty() {
      self.path.clone()
    } else {
      format!("{}?{}", self.path, self.query.encode())
    }
  }

  /// Absolute URL of this request under `base_url`
  pub fn url(&self, base_url: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), self.path))?;
    if !self.query.is_empty() {
      url.set_query(Some(&self.query.encode()));
    }
    Ok(url)
  }
}

impl std::fmt::Display for ApiRequest {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.path_and_query())
  }
}

/// Status, headers and body of a completed request
#[derive(Debug, Clone)]
pub struct RawResponse {
  /// HTTP status
  pub status: StatusCode,
  /// Response headers
  pub headers: HeaderMap,
  /// Body, unmodified
  pub body: Vec<u8>,
}

impl RawResponse {
  /// Response with no headers
  pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
    Self { status, headers: HeaderMap::new(), body: body.into() }
  }

  /// True when the service rejected the session
  pub fn is_auth_failure(&self) -> bool {
    self.status == StatusCode::UNAUTHORIZED
  }

  /// Turn any non-success status into [`Error::Http`]
  pub fn error_for_status(self) -> Result<Self> {
    if self.status.is_success() {
      Ok(self)
    } else {
      error!("Request failed with status: {}", self.status);
      Err(Error::Http { status: self.status.as_u16(), body: self.excerpt() })
    }
  }

  /// Deserialize the body into `T`
  pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
    serde_json::from_slice(&self.body).map_err(|e| {
      error!("Failed to parse JSON response: {}", e);
      error!("Response text (first {} chars): {}", BODY_EXCERPT_LEN, self.excerpt());
      Error::Deserialization(format!("{}. Response: {}", e, self.excerpt()))
    })
  }

  fn excerpt(&self) -> String {
    let text = String::from_utf8_lossy(&self.body);
    text.chars().take(BODY_EXCERPT_LEN).collect()
  }
}

/// Raw HTTP collaborator used by the session context
///
/// Implementations attach the session's auth context and report whatever
/// status the service answered with; interpreting it is the caller's job.
/// Only failures that produce no status at all are errors here.
#[async_trait]
pub trait Transport: Send + Sync {
  /// Issue `request` as a GET under `session`
  async fn get(&self, session: &Session, request: &ApiRequest) -> Result<RawResponse>;
}

/// [`Transport`] backed by a shared reqwest client
pub struct ReqwestTransport {
  client: Client,
  base_url: String,
  timeout: Duration,
}

impl ReqwestTransport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(USER_AGENT)
      .build()
      .map_err(|e| Error::Transport(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, base_url: config.base_url.clone(), timeout })
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

#[async_trait]
impl Transport for ReqwestTransport {
  async fn get(&self, session: &Session, request: &ApiRequest) -> Result<RawResponse> {
    let url = request.url(&self.base_url)?;
    debug!("Making request to: {}", url);

    let builder = self.client.get(url.clone()).header("NK", "NT");
    let response = session
      .authorize(builder, &url)
      .send()
      .await
      .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
      .bytes()
      .await
      .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e)))?;

    debug!("Response status {} with {} bytes", status, body.len());
    Ok(RawResponse { status, headers, body: body.to_vec() })
  }
}

impl std::fmt::Debug for ReqwestTransport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ReqwestTransport")
      .field("base_url", &self.base_url)
      .field("timeout", &self.timeout)
      .finish()
  }
}
