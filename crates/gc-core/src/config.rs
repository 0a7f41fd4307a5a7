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

//! Configuration management for the Garmin Connect client

use crate::error::{Error, Result};
use chrono::Duration;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Account credentials handed to the login collaborator
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Credentials {
  /// Account e-mail or user name
  pub username: String,

  /// Account password
  pub password: String,
}

impl Credentials {
  pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
    Self { username: username.into(), password: password.into() }
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Main configuration struct for the Garmin Connect client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Login credentials
  pub credentials: Credentials,

  /// Base URL of the Connect web service
  pub base_url: String,

  /// Base URL of the single sign-on service
  pub sso_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Items requested per page by paged listings
  pub page_size: u32,

  /// Optional cap on pages fetched by a single paged listing
  pub max_pages: Option<u32>,

  /// Optional local session lifetime; unset means the server decides
  pub session_ttl_secs: Option<u64>,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Load configuration from an arbitrary key lookup
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let username = lookup("GARMIN_USERNAME")
      .ok_or_else(|| Error::Config("GARMIN_USERNAME not set".to_string()))?;

    let password = lookup("GARMIN_PASSWORD")
      .ok_or_else(|| Error::Config("GARMIN_PASSWORD not set".to_string()))?;

    let base_url = lookup("GC_BASE_URL").unwrap_or_else(|| crate::CONNECT_BASE_URL.to_string());
    let sso_url = lookup("GC_SSO_URL").unwrap_or_else(|| crate::SSO_BASE_URL.to_string());

    let timeout_secs = parse_or(&lookup, "GC_TIMEOUT_SECS", crate::DEFAULT_TIMEOUT_SECS)?;
    let page_size = parse_or(&lookup, "GC_PAGE_SIZE", crate::DEFAULT_PAGE_SIZE)?;
    if page_size == 0 {
      return Err(Error::Config("GC_PAGE_SIZE must be greater than zero".to_string()));
    }

    let max_pages = parse_opt(&lookup, "GC_MAX_PAGES")?;
    let session_ttl_secs: Option<u64> = parse_opt(&lookup, "GC_SESSION_TTL_SECS")?;
    if let Some(ttl) = session_ttl_secs {
      if ttl == 0 || ttl > crate::MAX_SESSION_TTL_SECS {
        return Err(Error::Config(format!(
          "GC_SESSION_TTL_SECS must be between 1 and {}",
          crate::MAX_SESSION_TTL_SECS
        )));
      }
    }

    url::Url::parse(&base_url).map_err(|e| Error::Config(format!("Invalid GC_BASE_URL: {}", e)))?;
    url::Url::parse(&sso_url).map_err(|e| Error::Config(format!("Invalid GC_SSO_URL: {}", e)))?;

    Ok(Config {
      credentials: Credentials::new(username, password),
      base_url,
      sso_url,
      timeout_secs,
      page_size,
      max_pages,
      session_ttl_secs,
    })
  }

  /// Create a config with default values for the given account
  pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
    Config {
      credentials: Credentials::new(username, password),
      base_url: crate::CONNECT_BASE_URL.to_string(),
      sso_url: crate::SSO_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      page_size: crate::DEFAULT_PAGE_SIZE,
      max_pages: None,
      session_ttl_secs: None,
    }
  }

  /// Local session lifetime, capped at [`crate::MAX_SESSION_TTL_SECS`]
  pub fn session_ttl(&self) -> Option<Duration> {
    self
      .session_ttl_secs
      .and_then(|secs| Duration::try_seconds(secs.min(crate::MAX_SESSION_TTL_SECS) as i64))
  }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
{
  Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

fn parse_opt<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
{
  match lookup(key) {
    Some(raw) => {
      raw.trim().parse().map(Some).map_err(|_| Error::Config(format!("Invalid {}: {:?}", key, raw)))
    }
    None => Ok(None),
  }
}
