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

use thiserror::Error;

/// The main error type for gc-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Login or session renewal failed
  #[error("Authentication failed: {0}")]
  Authentication(String),

  /// Non-success status returned by the service
  #[error("HTTP error {status}: {body}")]
  Http { status: u16, body: String },

  /// Response body did not match the expected shape
  #[error("Deserialization error: {0}")]
  Deserialization(String),

  /// Caller supplied an unrecognized or malformed argument
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  /// Request never produced a status (connection, TLS, timeout)
  #[error("Transport error: {0}")]
  Transport(String),

  /// Paged listing kept returning data past the configured page cap
  #[error("Pagination stopped after {pages} pages without an empty page")]
  PaginationLimit { pages: u32 },

  /// URL construction error
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),
}

impl Error {
  /// True when the failure came from logging in or renewing the session
  pub fn is_authentication(&self) -> bool {
    matches!(self, Error::Authentication(_))
  }

  /// HTTP status carried by the error, if the service answered at all
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Http { status, .. } => Some(*status),
      _ => None,
    }
  }
}

impl From<serde_json::Error> for Error {
  fn from(err: serde_json::Error) -> Self {
    Error::Deserialization(err.to_string())
  }
}

/// Result type alias for gc-* crates
pub type Result<T> = std::result::Result<T, Error>;
