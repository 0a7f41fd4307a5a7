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

mod common;

use chrono::Duration as ChronoDuration;
use common::*;
use gc_client::{CacheState, Error, QueryParams, SessionState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const DEVICES_PATH: &str = "/proxy/device-service/deviceregistration/devices";

#[tokio::test]
async fn test_first_request_logs_in_once() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport.route(DEVICES_PATH, json_response(serde_json::json!([])));
  let ctx = context(&auth, &transport);

  assert_eq!(ctx.state().await, SessionState::Unset);
  for _ in 0..3 {
    let devices: Value = ctx.request_json(DEVICES_PATH, QueryParams::new()).await.unwrap();
    assert_eq!(devices, serde_json::json!([]));
  }

  assert_eq!(auth.logins(), 1);
  assert_eq!(ctx.state().await, SessionState::Valid);
  assert_eq!(ctx.generation().await, 1);
  assert_eq!(transport.count_for(DEVICES_PATH), 3);
}

#[tokio::test]
async fn test_concurrent_callers_share_one_login() {
  let (auth, gate) = StubAuthenticator::gated();
  let auth = Arc::new(auth);
  let transport = Arc::new(StubTransport::new());
  let ctx = context(&auth, &transport);

  let release = async {
    for _ in 0..3 {
      tokio::task::yield_now().await;
    }
    gate.add_permits(2);
  };
  let (a, b, _) = tokio::join!(ctx.ensure_valid_session(), ctx.ensure_valid_session(), release);

  a.unwrap();
  b.unwrap();
  assert_eq!(auth.logins(), 1);
  assert_eq!(ctx.generation().await, 1);
}

#[tokio::test]
async fn test_many_concurrent_profile_reads_log_in_once() {
  let (auth, gate) = StubAuthenticator::gated();
  let auth = Arc::new(auth);
  let transport = Arc::new(StubTransport::new());
  transport.route(PROFILE_PATH, json_response(profile_json("alice")));
  let ctx = context(&auth, &transport);

  let readers = futures::future::join_all((0..8).map(|_| ctx.get_profile()));
  let release = async {
    for _ in 0..3 {
      tokio::task::yield_now().await;
    }
    gate.add_permits(8);
  };
  let (profiles, _) = tokio::join!(readers, release);

  assert!(profiles.into_iter().all(|p| p.unwrap().display_name == "alice"));
  assert_eq!(auth.logins(), 1);
  assert_eq!(transport.count_for(PROFILE_PATH), 1);
}

#[tokio::test]
async fn test_concurrent_requests_after_expiry_renew_once() {
  let (auth, gate) = StubAuthenticator::gated();
  let auth = Arc::new(auth);
  let transport = Arc::new(StubTransport::new());
  transport.route(DEVICES_PATH, json_response(serde_json::json!([])));
  let ctx = context(&auth, &transport);

  gate.add_permits(1);
  ctx.ensure_valid_session().await.unwrap();
  ctx.expire().await;
  assert_eq!(ctx.state().await, SessionState::Expired);

  let release = async {
    for _ in 0..3 {
      tokio::task::yield_now().await;
    }
    gate.add_permits(2);
  };
  let (a, b, _) = tokio::join!(
    ctx.request_json::<Value>(DEVICES_PATH, QueryParams::new()),
    ctx.request_json::<Value>(DEVICES_PATH, QueryParams::new()),
    release
  );

  a.unwrap();
  b.unwrap();
  assert_eq!(auth.logins(), 2);
  assert_eq!(ctx.state().await, SessionState::Valid);
}

#[tokio::test]
async fn test_rejected_session_is_renewed_and_retried() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport
    .route(DEVICES_PATH, status_response(401))
    .route(DEVICES_PATH, json_response(serde_json::json!([{ "deviceId": 1 }])));
  let ctx = context(&auth, &transport);

  let devices: Value = ctx.request_json(DEVICES_PATH, QueryParams::new()).await.unwrap();

  assert_eq!(devices[0]["deviceId"], 1);
  assert_eq!(auth.logins(), 2);
  assert_eq!(transport.count_for(DEVICES_PATH), 2);
  assert_eq!(ctx.state().await, SessionState::Valid);
  assert_eq!(ctx.generation().await, 2);
}

#[tokio::test]
async fn test_second_rejection_is_an_authentication_error() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport.route(DEVICES_PATH, status_response(401));
  let ctx = context(&auth, &transport);

  let err = ctx.request_json::<Value>(DEVICES_PATH, QueryParams::new()).await.unwrap_err();

  assert!(matches!(err, Error::Authentication(_)), "unexpected error: {:?}", err);
  assert_eq!(auth.logins(), 2);
  assert_eq!(transport.count_for(DEVICES_PATH), 2);
  assert_eq!(ctx.state().await, SessionState::Expired);
}

#[tokio::test]
async fn test_other_error_statuses_do_not_renew() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport.route(DEVICES_PATH, status_response(403));
  let ctx = context(&auth, &transport);

  let err = ctx.request_json::<Value>(DEVICES_PATH, QueryParams::new()).await.unwrap_err();

  assert_eq!(err.status(), Some(403));
  assert_eq!(auth.logins(), 1);
  assert_eq!(transport.count_for(DEVICES_PATH), 1);
  assert_eq!(ctx.state().await, SessionState::Valid);
}

#[tokio::test]
async fn test_failed_first_login_stays_unset() {
  let auth = Arc::new(StubAuthenticator::new());
  auth.set_failing(true);
  let transport = Arc::new(StubTransport::new());
  let ctx = context(&auth, &transport);

  let err = ctx.request_json::<Value>(DEVICES_PATH, QueryParams::new()).await.unwrap_err();

  assert!(err.is_authentication());
  assert_eq!(ctx.state().await, SessionState::Unset);
  assert_eq!(ctx.generation().await, 0);
  assert_eq!(transport.request_count(), 0);

  auth.set_failing(false);
  ctx.ensure_valid_session().await.unwrap();
  assert_eq!(ctx.state().await, SessionState::Valid);
}

#[tokio::test]
async fn test_failed_renewal_leaves_session_expired() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  let ctx = context(&auth, &transport);

  ctx.ensure_valid_session().await.unwrap();
  ctx.expire().await;
  auth.set_failing(true);

  let err = ctx.ensure_valid_session().await.unwrap_err();
  assert!(err.is_authentication());
  assert_eq!(ctx.state().await, SessionState::Expired);
  assert_eq!(ctx.generation().await, 1);
}

#[tokio::test]
async fn test_waiters_share_a_failed_login() {
  let (auth, gate) = StubAuthenticator::gated();
  auth.set_failing(true);
  let auth = Arc::new(auth);
  let transport = Arc::new(StubTransport::new());
  let ctx = context(&auth, &transport);

  let release = async {
    for _ in 0..3 {
      tokio::task::yield_now().await;
    }
    gate.add_permits(2);
  };
  let (a, b, _) = tokio::join!(ctx.ensure_valid_session(), ctx.ensure_valid_session(), release);

  assert!(a.unwrap_err().is_authentication());
  assert!(b.unwrap_err().is_authentication());
  assert_eq!(auth.logins(), 1);
  assert_eq!(ctx.state().await, SessionState::Unset);
}

#[tokio::test]
async fn test_cancelled_login_leaves_state_untouched() {
  let (auth, gate) = StubAuthenticator::gated();
  let auth = Arc::new(auth);
  let transport = Arc::new(StubTransport::new());
  let ctx = context(&auth, &transport);

  let pending = {
    let ctx = ctx.clone();
    tokio::spawn(async move { ctx.ensure_valid_session().await })
  };
  while auth.logins() == 0 {
    tokio::task::yield_now().await;
  }
  pending.abort();
  assert!(pending.await.unwrap_err().is_cancelled());

  assert_eq!(ctx.state().await, SessionState::Unset);
  assert_eq!(ctx.generation().await, 0);

  gate.add_permits(1);
  ctx.ensure_valid_session().await.unwrap();
  assert_eq!(auth.logins(), 2);
  assert_eq!(ctx.state().await, SessionState::Valid);
}

#[tokio::test]
async fn test_locally_expired_session_is_renewed() {
  let auth = Arc::new(StubAuthenticator::with_ttl(ChronoDuration::milliseconds(50)));
  let transport = Arc::new(StubTransport::new());
  let ctx = context(&auth, &transport);

  ctx.ensure_valid_session().await.unwrap();
  assert_eq!(ctx.state().await, SessionState::Valid);

  tokio::time::sleep(Duration::from_millis(80)).await;
  assert_eq!(ctx.state().await, SessionState::Expired);

  ctx.ensure_valid_session().await.unwrap();
  assert_eq!(auth.logins(), 2);
}

#[tokio::test]
async fn test_profile_is_cached_per_session() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport
    .route(PROFILE_PATH, json_response(profile_json("alice")))
    .route(PROFILE_PATH, json_response(profile_json("bob")));
  let ctx = context(&auth, &transport);

  assert_eq!(ctx.get_profile().await.unwrap().display_name, "alice");
  assert_eq!(ctx.get_profile().await.unwrap().display_name, "alice");
  assert_eq!(transport.count_for(PROFILE_PATH), 1);
  assert_eq!(ctx.profile_cache_state().await, CacheState::Populated);

  ctx.expire().await;
  let renewed = ctx.get_profile().await.unwrap();

  assert_eq!(renewed.display_name, "bob");
  assert_eq!(transport.count_for(PROFILE_PATH), 2);
  assert_eq!(auth.logins(), 2);
}

#[tokio::test]
async fn test_concurrent_profile_reads_share_one_fetch() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::with_delay(Duration::from_millis(20)));
  transport.route(PROFILE_PATH, json_response(profile_json("alice")));
  let ctx = context(&auth, &transport);

  let observe = async {
    tokio::task::yield_now().await;
    ctx.profile_cache_state().await
  };
  let (a, b, c, observed) = tokio::join!(ctx.get_profile(), ctx.get_profile(), ctx.get_profile(), observe);

  assert_eq!(observed, CacheState::Populating);
  for profile in [a, b, c] {
    assert_eq!(profile.unwrap().display_name, "alice");
  }
  assert_eq!(transport.count_for(PROFILE_PATH), 1);
  assert_eq!(auth.logins(), 1);
}

#[tokio::test]
async fn test_failed_profile_fetch_is_retried() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport
    .route(PROFILE_PATH, status_response(500))
    .route(PROFILE_PATH, json_response(profile_json("alice")));
  let ctx = context(&auth, &transport);

  let err = ctx.get_profile().await.unwrap_err();
  assert_eq!(err.status(), Some(500));
  assert_eq!(ctx.profile_cache_state().await, CacheState::Empty);

  assert_eq!(ctx.get_profile().await.unwrap().display_name, "alice");
  assert_eq!(transport.count_for(PROFILE_PATH), 2);
}

#[tokio::test]
async fn test_preferences_cache_is_independent() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport.route(PREFERENCES_PATH, json_response(serde_json::json!({ "displayName": "alice" })));
  let ctx = context(&auth, &transport);

  ctx.get_preferences().await.unwrap();
  ctx.get_preferences().await.unwrap();

  assert_eq!(transport.count_for(PREFERENCES_PATH), 1);
  assert_eq!(ctx.preferences_cache_state().await, CacheState::Populated);
  assert_eq!(ctx.profile_cache_state().await, CacheState::Empty);
  assert_eq!(transport.count_for(PROFILE_PATH), 0);
}

#[tokio::test]
async fn test_preferences_refetched_after_renewal() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport
    .route(PREFERENCES_PATH, json_response(serde_json::json!({ "displayName": "alice" })))
    .route(PREFERENCES_PATH, json_response(serde_json::json!({ "displayName": "bob" })));
  let ctx = context(&auth, &transport);

  let first = ctx.get_preferences().await.unwrap();
  let again = ctx.get_preferences().await.unwrap();
  assert_eq!(first.display_name.as_deref(), Some("alice"));
  assert!(Arc::ptr_eq(&first, &again));
  assert_eq!(transport.count_for(PREFERENCES_PATH), 1);

  ctx.expire().await;
  assert_eq!(ctx.preferences_cache_state().await, CacheState::Populated);

  let renewed = ctx.get_preferences().await.unwrap();
  assert_eq!(renewed.display_name.as_deref(), Some("bob"));
  assert_eq!(transport.count_for(PREFERENCES_PATH), 2);
  assert_eq!(auth.logins(), 2);
  assert_eq!(ctx.preferences_cache_state().await, CacheState::Populated);
}
