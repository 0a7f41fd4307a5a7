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

//! Scripted collaborators shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Duration as ChronoDuration;
use gc_client::{
  ApiRequest, Authenticator, Credentials, Error, GarminConnectClient, Paginator, RawResponse,
  Result, Session, SessionContext, Transport,
};
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

pub const PROFILE_PATH: &str = "/proxy/userprofile-service/socialProfile";
pub const PREFERENCES_PATH: &str = "/proxy/userprofile-service/userprofile/preferences";
pub const ACTIVITIES_PATH: &str = "/proxy/activitylist-service/activities/search/activities";

pub fn json_response(body: Value) -> RawResponse {
  RawResponse::new(StatusCode::OK, body.to_string())
}

pub fn status_response(status: u16) -> RawResponse {
  let status = StatusCode::from_u16(status).expect("valid status code");
  RawResponse::new(status, Vec::new())
}

pub fn profile_json(display_name: &str) -> Value {
  serde_json::json!({ "id": 7, "profileId": 70, "displayName": display_name })
}

/// `count` activities with ids starting at `first_id`
pub fn activity_page(first_id: u64, count: usize) -> Value {
  let items: Vec<Value> = (0..count as u64)
    .map(|i| serde_json::json!({ "activityId": first_id + i, "activityName": "Morning Run" }))
    .collect();
  Value::Array(items)
}

/// Transport answering from scripted routes and recording every request
///
/// Routes are keyed by the full path and query first, then by bare path.
/// Each route is a queue; the last response in a queue is repeated.
/// Unrouted requests get a 404.
#[derive(Default)]
pub struct StubTransport {
  routes: Mutex<HashMap<String, VecDeque<RawResponse>>>,
  requests: Mutex<Vec<ApiRequest>>,
  delay: Option<Duration>,
}

impl StubTransport {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_delay(delay: Duration) -> Self {
    Self { delay: Some(delay), ..Self::default() }
  }

  pub fn route(&self, key: &str, response: RawResponse) -> &Self {
    self.routes.lock().unwrap().entry(key.to_string()).or_default().push_back(response);
    self
  }

  pub fn requests(&self) -> Vec<ApiRequest> {
    self.requests.lock().unwrap().clone()
  }

  pub fn request_count(&self) -> usize {
    self.requests.lock().unwrap().len()
  }

  pub fn count_for(&self, path: &str) -> usize {
    self.requests.lock().unwrap().iter().filter(|r| r.path() == path).count()
  }

  fn respond(&self, request: &ApiRequest) -> RawResponse {
    let mut routes = self.routes.lock().unwrap();
    let full = request.path_and_query();
    let key = if routes.contains_key(&full) { full } else { request.path().to_string() };
    match routes.get_mut(&key) {
      Some(queue) if queue.len() > 1 => queue.pop_front().expect("non-empty queue"),
      Some(queue) => queue.front().cloned().unwrap_or_else(|| status_response(404)),
      None => status_response(404),
    }
  }
}

#[async_trait]
impl Transport for StubTransport {
  async fn get(&self, _session: &Session, request: &ApiRequest) -> Result<RawResponse> {
    self.requests.lock().unwrap().push(request.clone());
    if let Some(delay) = self.delay {
      tokio::time::sleep(delay).await;
    }
    Ok(self.respond(request))
  }
}

/// Authenticator counting logins, optionally failing or waiting on a gate
#[derive(Default)]
pub struct StubAuthenticator {
  logins: AtomicUsize,
  failing: AtomicBool,
  gate: Option<Arc<Semaphore>>,
  ttl: Option<ChronoDuration>,
}

impl StubAuthenticator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Every login waits for a permit on the returned semaphore
  pub fn gated() -> (Self, Arc<Semaphore>) {
    let gate = Arc::new(Semaphore::new(0));
    (Self { gate: Some(gate.clone()), ..Self::default() }, gate)
  }

  pub fn with_ttl(ttl: ChronoDuration) -> Self {
    Self { ttl: Some(ttl), ..Self::default() }
  }

  pub fn set_failing(&self, failing: bool) {
    self.failing.store(failing, Ordering::SeqCst);
  }

  pub fn logins(&self) -> usize {
    self.logins.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl Authenticator for StubAuthenticator {
  async fn login(&self, credentials: &Credentials) -> Result<Session> {
    let attempt = self.logins.fetch_add(1, Ordering::SeqCst) + 1;
    if let Some(gate) = &self.gate {
      gate.acquire().await.expect("gate open").forget();
    }
    if self.failing.load(Ordering::SeqCst) {
      return Err(Error::Authentication(format!("{} rejected", credentials.username)));
    }
    let session = Session::from_bearer(format!("token-{}", attempt));
    Ok(match self.ttl {
      Some(ttl) => session.with_ttl(ttl),
      None => session,
    })
  }
}

pub fn credentials() -> Credentials {
  Credentials::new("runner@example.com", "hunter2")
}

pub fn context(
  authenticator: &Arc<StubAuthenticator>,
  transport: &Arc<StubTransport>,
) -> Arc<SessionContext> {
  Arc::new(SessionContext::new(credentials(), authenticator.clone(), transport.clone()))
}

pub fn client(
  authenticator: &Arc<StubAuthenticator>,
  transport: &Arc<StubTransport>,
) -> GarminConnectClient {
  GarminConnectClient::with_context(context(authenticator, transport), Paginator::new(20))
}
