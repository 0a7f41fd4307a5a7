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

//! Session context: renewal, identity caching and authenticated requests
//!
//! Every endpoint call goes through [`SessionContext`]. It makes sure a valid
//! session exists before a request leaves, renews it once when the service
//! rejects it, and keeps the profile and preferences of the signed-in user
//! cached for the lifetime of that session.
//!
//! Renewal is single-flight: requests that find the session missing or
//! expired queue behind one login attempt and share its outcome. Cache
//! population follows the same rule per slot. A login that is cancelled
//! midway leaves the context exactly as it was, so the next call simply
//! tries again.

use crate::auth::{Authenticator, Session, SsoAuthenticator};
use crate::cache::{CacheSlot, CacheState};
use crate::query::QueryParams;
use crate::transport::{ApiRequest, RawResponse, ReqwestTransport, Transport};
use gc_core::{Config, Credentials, Error, Result};
use gc_models::{SocialProfile, UserPreferences};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

pub(crate) const SOCIAL_PROFILE_URL: &str = "/proxy/userprofile-service/socialProfile";
pub(crate) const USER_PREFERENCES_URL: &str = "/proxy/userprofile-service/userprofile/preferences";

/// Validity of the session held by a [`SessionContext`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
  /// No login has succeeded yet
  Unset,
  /// A session is available for requests
  Valid,
  /// The session was rejected, expired locally, or was expired explicitly
  Expired,
}

enum Slot {
  Unset,
  Valid(Arc<Session>),
  Expired,
}

struct Current {
  /// Bumped by every successful login
  generation: u64,
  /// Bumped by every completed login attempt, successful or not
  attempt: u64,
  last_failure: Option<String>,
  slot: Slot,
}

#[derive(Debug, Clone, Copy)]
struct Snapshot {
  generation: u64,
  attempt: u64,
}

#[derive(Debug)]
struct Lease {
  snapshot: Snapshot,
  session: Arc<Session>,
}

/// Shared, session-aware request layer
///
/// One instance is meant to be shared (behind an `Arc`) by every endpoint
/// group and by concurrent callers.
pub struct SessionContext {
  credentials: Credentials,
  authenticator: Arc<dyn Authenticator>,
  transport: Arc<dyn Transport>,
  current: RwLock<Current>,
  renewal: Mutex<()>,
  profile: CacheSlot<SocialProfile>,
  preferences: CacheSlot<UserPreferences>,
}

impl SessionContext {
  /// Create a context around explicit collaborators
  pub fn new(
    credentials: Credentials,
    authenticator: Arc<dyn Authenticator>,
    transport: Arc<dyn Transport>,
  ) -> Self {
    Self {
      credentials,
      authenticator,
      transport,
      current: RwLock::new(Current {
        generation: 0,
        attempt: 0,
        last_failure: None,
        slot: Slot::Unset,
      }),
      renewal: Mutex::new(()),
      profile: CacheSlot::new(),
      preferences: CacheSlot::new(),
    }
  }

  /// Create a context using the reqwest transport and SSO login
  pub fn from_config(config: &Config) -> Result<Self> {
    let transport = Arc::new(ReqwestTransport::new(config)?);
    let authenticator = Arc::new(SsoAuthenticator::new(config));
    Ok(Self::new(config.credentials.clone(), authenticator, transport))
  }

  /// Current position in the `Unset -> Valid <-> Expired` state machine
  pub async fn state(&self) -> SessionState {
    match &self.current.read().await.slot {
      Slot::Unset => SessionState::Unset,
      Slot::Valid(session) if session.is_expired() => SessionState::Expired,
      Slot::Valid(_) => SessionState::Valid,
      Slot::Expired => SessionState::Expired,
    }
  }

  /// Number of successful logins so far
  pub async fn generation(&self) -> u64 {
    self.current.read().await.generation
  }

  /// Make sure a valid session exists, logging in if needed
  ///
  /// Fails with [`Error::Authentication`] when the login collaborator fails.
  pub async fn ensure_valid_session(&self) -> Result<()> {
    self.active_session().await.map(|_| ())
  }

  /// Mark the current session expired; the next request renews it
  pub async fn expire(&self) {
    let mut current = self.current.write().await;
    if let Slot::Valid(_) = current.slot {
      debug!(generation = current.generation, "Session expired explicitly");
      current.slot = Slot::Expired;
    }
  }

  /// Profile of the signed-in user, fetched at most once per session
  pub async fn get_profile(&self) -> Result<Arc<SocialProfile>> {
    let lease = self.active_session().await?;
    self
      .profile
      .get_or_populate(lease.snapshot.generation, || async {
        debug!("Fetching social profile");
        self.request_json(SOCIAL_PROFILE_URL, QueryParams::new()).await
      })
      .await
  }

  /// Preferences of the signed-in user, fetched at most once per session
  pub async fn get_preferences(&self) -> Result<Arc<UserPreferences>> {
    let lease = self.active_session().await?;
    self
      .preferences
      .get_or_populate(lease.snapshot.generation, || async {
        debug!("Fetching user preferences");
        self.request_json(USER_PREFERENCES_URL, QueryParams::new()).await
      })
      .await
  }

  /// Cached profile for the current session, without fetching
  pub async fn cached_profile(&self) -> Option<Arc<SocialProfile>> {
    let generation = self.generation().await;
    self.profile.peek(generation)
  }

  /// Pre-populate the profile cache for the current session
  ///
  /// The seed follows the usual lifecycle: the next login, including the
  /// very first one, discards it.
  pub async fn seed_profile(&self, profile: SocialProfile) {
    let generation = self.generation().await;
    self.profile.seed(generation, profile);
  }

  /// Pre-populate the preferences cache for the current session
  pub async fn seed_preferences(&self, preferences: UserPreferences) {
    let generation = self.generation().await;
    self.preferences.seed(generation, preferences);
  }

  /// State of the profile cache for the current session
  pub async fn profile_cache_state(&self) -> CacheState {
    let generation = self.generation().await;
    self.profile.state(generation)
  }

  /// State of the preferences cache for the current session
  pub async fn preferences_cache_state(&self) -> CacheState {
    let generation = self.generation().await;
    self.preferences.state(generation)
  }

  /// GET `path` and deserialize the body into `T`
  ///
  /// Non-success statuses become [`Error::Http`]; a body of the wrong shape
  /// becomes [`Error::Deserialization`].
  #[instrument(skip(self, query))]
  pub async fn request_json<T: DeserializeOwned>(&self, path: &str, query: QueryParams) -> Result<T> {
    let request = ApiRequest::new(path, query);
    let response = self.execute(&request).await?.error_for_status()?;
    response.json()
  }

  /// GET `path` and return the body bytes untouched
  #[instrument(skip(self))]
  pub async fn request_binary(&self, path: &str) -> Result<Vec<u8>> {
    let request = ApiRequest::new(path, QueryParams::new());
    let response = self.execute(&request).await?.error_for_status()?;
    debug!("Received {} bytes", response.body.len());
    Ok(response.body)
  }

  async fn execute(&self, request: &ApiRequest) -> Result<RawResponse> {
    let lease = self.active_session().await?;
    let response = self.transport.get(&lease.session, request).await?;
    if !response.is_auth_failure() {
      return Ok(response);
    }

    warn!(request = %request, generation = lease.snapshot.generation, "Session rejected, renewing");
    self.mark_expired(lease.snapshot.generation).await;
    let lease = self.renew(lease.snapshot).await?;

    let response = self.transport.get(&lease.session, request).await?;
    if response.is_auth_failure() {
      self.mark_expired(lease.snapshot.generation).await;
      return Err(Error::Authentication(format!(
        "{} rejected after session renewal",
        request.path()
      )));
    }
    Ok(response)
  }

  async fn active_session(&self) -> Result<Lease> {
    let snapshot = {
      let current = self.current.read().await;
      let snapshot = Snapshot { generation: current.generation, attempt: current.attempt };
      match &current.slot {
        Slot::Valid(session) if !session.is_expired() => {
          return Ok(Lease { snapshot, session: session.clone() });
        }
        _ => snapshot,
      }
    };
    self.renew(snapshot).await
  }

  async fn mark_expired(&self, generation: u64) {
    let mut current = self.current.write().await;
    if current.generation == generation {
      if let Slot::Valid(_) = current.slot {
        current.slot = Slot::Expired;
      }
    }
  }

  /// Log in again unless another caller already did so since `observed`
  async fn renew(&self, observed: Snapshot) -> Result<Lease> {
    let _renewal = self.renewal.lock().await;

    {
      let current = self.current.read().await;
      if current.attempt != observed.attempt {
        let snapshot = Snapshot { generation: current.generation, attempt: current.attempt };
        match (&current.slot, &current.last_failure) {
          (Slot::Valid(session), _) if !session.is_expired() => {
            debug!(generation = current.generation, "Session renewed by a concurrent request");
            return Ok(Lease { snapshot, session: session.clone() });
          }
          (_, Some(reason)) => {
            return Err(Error::Authentication(format!("Session renewal failed: {}", reason)));
          }
          _ => {}
        }
      }
    }

    info!(generation = observed.generation, "Renewing session");
    let outcome = self.authenticator.login(&self.credentials).await;

    // Last await of a renewal; everything below commits without yielding
    let mut current = self.current.write().await;
    current.attempt += 1;
    match outcome {
      Ok(session) => {
        let session = Arc::new(session);
        let generation = current.generation + 1;
        self.profile.reset(generation);
        self.preferences.reset(generation);
        current.generation = generation;
        current.last_failure = None;
        current.slot = Slot::Valid(session.clone());
        info!(generation, "Session established");
        Ok(Lease { snapshot: Snapshot { generation, attempt: current.attempt }, session })
      }
      Err(err) => {
        let reason = match err {
          Error::Authentication(reason) => reason,
          other => other.to_string(),
        };
        warn!(%reason, "Login failed");
        current.last_failure = Some(reason.clone());
        Err(Error::Authentication(reason))
      }
    }
  }
}

impl std::fmt::Debug for SessionContext {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SessionContext").field("credentials", &self.credentials).finish_non_exhaustive()
  }
}
