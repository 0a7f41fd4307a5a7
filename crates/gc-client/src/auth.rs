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

//! Sessions and the login collaborator that produces them

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use gc_core::{Config, Credentials, Error, Result};
use regex::Regex;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{AUTHORIZATION, COOKIE, REFERER};
use reqwest::{Client, RequestBuilder, StatusCode};
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

static CSRF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"name="_csrf"\s+value="([^"]+)""#).expect("CSRF pattern must compile")
});

static TICKET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"ticket=(ST-[A-Za-z0-9\-]+)"#).expect("ticket pattern must compile")
});

pub(crate) const USER_AGENT: &str = "gc-client/0.1.0";

#[derive(Clone)]
enum SessionCredential {
  Cookies(Arc<Jar>),
  Bearer(String),
}

/// Authenticated handle attached to every outbound request
///
/// Sessions are opaque to callers of the client; they are produced by an
/// [`Authenticator`] and owned by the session context.
#[derive(Clone)]
pub struct Session {
  credential: SessionCredential,
  issued_at: DateTime<Utc>,
  expires_at: Option<DateTime<Utc>>,
}

impl Session {
  /// Session authorized by cookies collected during sign-in
  pub fn from_cookies(jar: Arc<Jar>) -> Self {
    Self { credential: SessionCredential::Cookies(jar), issued_at: Utc::now(), expires_at: None }
  }

  /// Session authorized by a bearer token
  pub fn from_bearer(token: impl Into<String>) -> Self {
    Self {
      credential: SessionCredential::Bearer(token.into()),
      issued_at: Utc::now(),
      expires_at: None,
    }
  }

  /// Expire the session locally `ttl` after it was issued
  pub fn with_ttl(mut self, ttl: ChronoDuration) -> Self {
    self.expires_at = Some(self.issued_at + ttl);
    self
  }

  /// Expire the session locally at `at`
  pub fn with_expiry(mut self, at: DateTime<Utc>) -> Self {
    self.expires_at = Some(at);
    self
  }

  /// When the login collaborator produced this session
  pub fn issued_at(&self) -> DateTime<Utc> {
    self.issued_at
  }

  /// Local expiry, if one is tracked
  pub fn expires_at(&self) -> Option<DateTime<Utc>> {
    self.expires_at
  }

  /// True once the local expiry has elapsed
  pub fn is_expired(&self) -> bool {
    self.expires_at.is_some_and(|at| Utc::now() >= at)
  }

  /// Attach this session's auth context to an outgoing request
  pub(crate) fn authorize(&self, builder: RequestBuilder, url: &Url) -> RequestBuilder {
    match &self.credential {
      SessionCredential::Cookies(jar) => match jar.cookies(url) {
        Some(cookies) => builder.header(COOKIE, cookies),
        None => builder,
      },
      SessionCredential::Bearer(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
    }
  }
}

impl std::fmt::Debug for Session {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let kind = match self.credential {
      SessionCredential::Cookies(_) => "cookies",
      SessionCredential::Bearer(_) => "bearer",
    };
    f.debug_struct("Session")
      .field("credential", &kind)
      .field("issued_at", &self.issued_at)
      .field("expires_at", &self.expires_at)
      .finish()
  }
}

/// Login collaborator: exchanges credentials for a fresh session
///
/// Implementations must report every failure (rejected credentials,
/// unreachable service, unexpected response) as [`Error::Authentication`].
#[async_trait]
pub trait Authenticator: Send + Sync {
  /// Obtain a new session for `credentials`
  async fn login(&self, credentials: &Credentials) -> Result<Session>;
}

/// Form based single sign-on against the SSO service
///
/// Fetches the sign-in page for its CSRF token, posts the credentials,
/// pulls the service ticket out of the response and redeems it at the
/// Connect service, which answers with the session cookies.
pub struct SsoAuthenticator {
  sso_url: String,
  service_url: String,
  timeout: Duration,
  session_ttl: Option<ChronoDuration>,
}

impl SsoAuthenticator {
  /// Build an authenticator from client configuration
  pub fn new(config: &Config) -> Self {
    Self {
      sso_url: config.sso_url.trim_end_matches('/').to_string(),
      service_url: format!("{}/modern/", config.base_url.trim_end_matches('/')),
      timeout: Duration::from_secs(config.timeout_secs),
      session_ttl: config.session_ttl(),
    }
  }

  fn signin_params(&self) -> [(&'static str, &str); 5] {
    [
      ("service", self.service_url.as_str()),
      ("gauthHost", self.sso_url.as_str()),
      ("clientId", "GarminConnect"),
      ("consumeServiceTicket", "false"),
      ("embed", "false"),
    ]
  }
}

fn auth_error(stage: &str) -> impl Fn(reqwest::Error) -> Error + '_ {
  move |e| Error::Authentication(format!("{} failed: {}", stage, e))
}

#[async_trait]
impl Authenticator for SsoAuthenticator {
  #[instrument(skip(self, credentials), fields(username = %credentials.username))]
  async fn login(&self, credentials: &Credentials) -> Result<Session> {
    let jar = Arc::new(Jar::default());
    let client = Client::builder()
      .cookie_provider(jar.clone())
      .timeout(self.timeout)
      .user_agent(USER_AGENT)
      .build()
      .map_err(|e| Error::Authentication(format!("Failed to create HTTP client: {}", e)))?;

    let signin_url = format!("{}/signin", self.sso_url);
    let params = self.signin_params();

    let page = client
      .get(&signin_url)
      .query(&params)
      .send()
      .await
      .map_err(auth_error("Loading sign-in page"))?;
    if !page.status().is_success() {
      return Err(Error::Authentication(format!("Sign-in page returned {}", page.status())));
    }
    let page = page.text().await.map_err(auth_error("Reading sign-in page"))?;
    let csrf = CSRF_PATTERN.captures(&page).and_then(|c| c.get(1)).map(|m| m.as_str().to_string());
    debug!(has_csrf = csrf.is_some(), "Loaded sign-in page");

    let mut form = vec![
      ("username", credentials.username.as_str()),
      ("password", credentials.password.as_str()),
      ("embed", "false"),
    ];
    if let Some(token) = csrf.as_deref() {
      form.push(("_csrf", token));
    }

    let response = client
      .post(&signin_url)
      .query(&params)
      .header(REFERER, signin_url.as_str())
      .form(&form)
      .send()
      .await
      .map_err(auth_error("Posting credentials"))?;

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
      warn!(%status, "Credentials rejected");
      return Err(Error::Authentication("Credentials rejected".to_string()));
    }
    if !status.is_success() {
      return Err(Error::Authentication(format!("Sign-in returned {}", status)));
    }

    let body = response.text().await.map_err(auth_error("Reading sign-in response"))?;
    let ticket = TICKET_PATTERN
      .captures(&body)
      .and_then(|c| c.get(1))
      .map(|m| m.as_str().to_string())
      .ok_or_else(|| {
        Error::Authentication("Sign-in response did not contain a service ticket".to_string())
      })?;

    let exchange = client
      .get(&self.service_url)
      .query(&[("ticket", ticket.as_str())])
      .send()
      .await
      .map_err(auth_error("Redeeming service ticket"))?;
    if !exchange.status().is_success() {
      return Err(Error::Authentication(format!(
        "Service ticket exchange returned {}",
        exchange.status()
      )));
    }

    info!("Signed in");
    let session = Session::from_cookies(jar);
    Ok(match self.session_ttl {
      Some(ttl) => session.with_ttl(ttl),
      None => session,
    })
  }
}
